//! Tag playback directions and the load-time transforms they imply.
//!
//! The animation engine never looks at a direction. Instead each tag's frame
//! run is reordered once, when the sheet is loaded, and the engine just plays
//! the resulting sequence front to back:
//!
//! ```text
//! forward           A B C D       ->  A B C D
//! reverse           A B C D       ->  D C B A
//! pingpong          A B C D       ->  A B C D C B
//! pingpong_reverse  A B C D       ->  B C D C B A
//! ```
//!
//! `pingpong` appends the interior frames in reverse so neither endpoint is
//! shown twice in a row when the sequence wraps. `pingpong_reverse` is the
//! reverse of the `pingpong` sequence.

use serde::{Deserialize, Serialize};

/// Playback direction of a tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
	/// Original order
	#[default]
	Forward,
	/// Reversed order
	Reverse,
	/// Forward, then back through the interior frames
	PingPong,
	/// Reverse of [`Direction::PingPong`]
	PingPongReverse,
}

impl Direction {
	/// Returns the name used in sheet metadata.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Forward => "forward",
			Self::Reverse => "reverse",
			Self::PingPong => "pingpong",
			Self::PingPongReverse => "pingpong_reverse",
		}
	}

	/// Reorders a tag's frame run according to this direction.
	///
	/// Elements are moved or cloned, never rebuilt, so a run of frame indices
	/// or shared handles keeps pointing at the same frames.
	///
	/// # Examples
	///
	/// ```
	/// use asesheet_types::sheet::Direction;
	///
	/// assert_eq!(Direction::PingPong.apply(vec!['A', 'B', 'C', 'D']), vec!['A', 'B', 'C', 'D', 'C', 'B']);
	/// assert_eq!(Direction::Reverse.apply(vec!['A', 'B', 'C']), vec!['C', 'B', 'A']);
	/// ```
	pub fn apply<T: Clone>(self, frames: Vec<T>) -> Vec<T> {
		match self {
			Self::Forward => frames,
			Self::Reverse => reverse(frames),
			Self::PingPong => pingpong(frames),
			Self::PingPongReverse => reverse(pingpong(frames)),
		}
	}
}

impl From<&str> for Direction {
	/// Unknown names play forward.
	fn from(value: &str) -> Self {
		match value {
			"forward" => Self::Forward,
			"reverse" => Self::Reverse,
			"pingpong" => Self::PingPong,
			"pingpong_reverse" => Self::PingPongReverse,
			other => {
				log::warn!("Unknown tag direction {other:?}, playing forward");
				Self::Forward
			}
		}
	}
}

impl From<String> for Direction {
	fn from(value: String) -> Self {
		Self::from(value.as_str())
	}
}

impl From<Direction> for String {
	fn from(value: Direction) -> Self {
		value.as_str().to_string()
	}
}

impl std::fmt::Display for Direction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

fn reverse<T>(mut frames: Vec<T>) -> Vec<T> {
	frames.reverse();
	frames
}

fn pingpong<T: Clone>(mut frames: Vec<T>) -> Vec<T> {
	if frames.len() > 2 {
		let interior: Vec<T> = frames[1..frames.len() - 1].iter().rev().cloned().collect();
		frames.extend(interior);
	}
	frames
}
