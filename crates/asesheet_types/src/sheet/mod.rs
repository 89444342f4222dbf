//! Aseprite sprite-sheet metadata support for `asesheet`.
//!
//! This module models the JSON document Aseprite writes next to an exported
//! sprite-sheet image. The document describes every frame's rectangle inside
//! the sheet image, its display duration, and the named tag ranges that group
//! frames into logical animations.
//!
//! # Document Structure
//!
//! ```text
//! {
//!   "frames": [ { "frame": {x,y,w,h}, "duration": 100, ... }, ... ],
//!   "meta": {
//!     "app": "https://www.aseprite.org/",
//!     "version": "1.3.x",
//!     "image": "sheet.png",
//!     "size": { "w": 128, "h": 32 },
//!     "frameTags": [ { "name": "walk", "from": 0, "to": 3, "direction": "pingpong" } ],
//!     "layers": [ ... ],
//!     "slices": [ ... ]
//!   }
//! }
//! ```
//!
//! `frames` may be exported either as an array (in frame order) or as an
//! object keyed by file name; both layouts are accepted and object order is
//! preserved.
//!
//! # Usage Examples
//!
//! ```
//! use asesheet_types::sheet::{Direction, SpriteSheet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = r#"{
//!     "frames": [
//!         { "frame": { "x": 0, "y": 0, "w": 16, "h": 16 }, "duration": 100 },
//!         { "frame": { "x": 16, "y": 0, "w": 16, "h": 16 }, "duration": 100 }
//!     ],
//!     "meta": {
//!         "version": "1.3.7",
//!         "image": "hero.png",
//!         "size": { "w": 32, "h": 16 },
//!         "frameTags": [ { "name": "idle", "from": 0, "to": 1, "direction": "reverse" } ]
//!     }
//! }"#;
//!
//! let sheet = SpriteSheet::from_json_str(json)?;
//! assert_eq!(sheet.frame_count(), 2);
//! assert_eq!(sheet.meta.frame_tags[0].direction, Direction::Reverse);
//! # Ok(())
//! # }
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::SheetError;

pub mod direction;
mod frames;

pub use direction::Direction;

/// Sheet metadata constants.
pub mod constants {
	/// Version prefix of the Aseprite exports this crate understands by default
	pub const SUPPORTED_VERSION_PREFIX: &str = "1.3";
}

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
	/// Left edge
	pub x: u32,
	/// Top edge
	pub y: u32,
	/// Width
	pub w: u32,
	/// Height
	pub h: u32,
}

impl Rect {
	/// Creates a new rectangle.
	pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
		Self {
			x,
			y,
			w,
			h,
		}
	}

	/// Creates a rectangle at the origin with the given size.
	pub fn from_size(size: Size) -> Self {
		Self::new(0, 0, size.w, size.h)
	}

	/// Returns the size of this rectangle.
	pub fn size(&self) -> Size {
		Size {
			w: self.w,
			h: self.h,
		}
	}

	/// Exclusive right edge.
	pub fn right(&self) -> u64 {
		u64::from(self.x) + u64::from(self.w)
	}

	/// Exclusive bottom edge.
	pub fn bottom(&self) -> u64 {
		u64::from(self.y) + u64::from(self.h)
	}

	/// Returns true if this rectangle lies completely inside `width` x `height`.
	pub fn fits_within(&self, width: u32, height: u32) -> bool {
		self.right() <= u64::from(width) && self.bottom() <= u64::from(height)
	}
}

impl std::fmt::Display for Rect {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {}) {}x{}", self.x, self.y, self.w, self.h)
	}
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
	/// Width
	pub w: u32,
	/// Height
	pub h: u32,
}

/// One frame entry of the `frames` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetFrame {
	/// File name key, only present for hash exports
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub filename: Option<String>,
	/// Region of the sheet image holding this frame
	pub frame: Rect,
	/// Whether the packer rotated the region
	#[serde(default)]
	pub rotated: bool,
	/// Whether transparent borders were trimmed
	#[serde(default)]
	pub trimmed: bool,
	/// Placement of the trimmed region inside the untrimmed frame
	#[serde(default)]
	pub sprite_source_size: Rect,
	/// Untrimmed frame size
	#[serde(default)]
	pub source_size: Size,
	/// Display duration in milliseconds
	pub duration: u32,
}

/// Named frame range from `meta.frameTags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTag {
	/// Tag name
	pub name: String,
	/// First frame (inclusive)
	pub from: usize,
	/// Last frame (inclusive)
	pub to: usize,
	/// Playback direction
	#[serde(default)]
	pub direction: Direction,
	/// Tag colour as written by the editor, e.g. `#000000ff`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub color: Option<String>,
}

impl FrameTag {
	/// Number of frames covered before any direction transform.
	pub fn span(&self) -> usize {
		self.to.saturating_sub(self.from) + 1
	}
}

/// Layer description from `meta.layers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
	/// Layer name
	pub name: String,
	/// Opacity, 0-255
	#[serde(default)]
	pub opacity: u8,
	/// Blend mode name
	#[serde(default)]
	pub blend_mode: String,
}

/// Slice description from `meta.slices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
	/// Slice name
	pub name: String,
	/// Slice colour
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub color: Option<String>,
	/// Keyframes, ordered by frame
	#[serde(default)]
	pub keys: Vec<SliceKey>,
}

impl Slice {
	/// Returns the bounds in effect at `frame`.
	///
	/// A key stays in effect until the next key's frame, so this is the last key
	/// whose frame is not after `frame`.
	pub fn bounds_at(&self, frame: usize) -> Option<Rect> {
		self.keys.iter().take_while(|key| key.frame <= frame).last().map(|key| key.bounds)
	}
}

/// Slice keyframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceKey {
	/// Frame this key starts at
	pub frame: usize,
	/// Slice bounds from this frame on
	pub bounds: Rect,
}

/// The `meta` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
	/// Exporting application
	#[serde(default)]
	pub app: String,
	/// Exporting application version
	#[serde(default)]
	pub version: String,
	/// Sheet image path, relative to the JSON document
	#[serde(default)]
	pub image: String,
	/// Pixel format
	#[serde(default)]
	pub format: String,
	/// Sheet image size
	#[serde(default)]
	pub size: Size,
	/// Export scale
	#[serde(default)]
	pub scale: String,
	/// Named frame ranges
	#[serde(default)]
	pub frame_tags: Vec<FrameTag>,
	/// Layers
	#[serde(default)]
	pub layers: Vec<Layer>,
	/// Slices
	#[serde(default)]
	pub slices: Vec<Slice>,
}

/// A parsed sprite-sheet metadata document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSheet {
	/// All frames in sheet order
	#[serde(deserialize_with = "frames::deserialize")]
	pub frames: Vec<SheetFrame>,
	/// Document metadata
	#[serde(default)]
	pub meta: Meta,
}

impl SpriteSheet {
	/// Parses a metadata document from a string.
	///
	/// No version check is performed here; see [`SpriteSheet::check_version`].
	pub fn from_json_str(json: &str) -> Result<Self, SheetError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Parses a metadata document from raw bytes.
	pub fn from_json_slice(data: &[u8]) -> Result<Self, SheetError> {
		Ok(serde_json::from_slice(data)?)
	}

	/// Parses a metadata document from a reader.
	pub fn from_reader<R: Read>(reader: R) -> Result<Self, SheetError> {
		Ok(serde_json::from_reader(reader)?)
	}

	/// Serializes this document back to JSON.
	pub fn to_json_string(&self) -> Result<String, SheetError> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	/// Fails with [`SheetError::UnsupportedVersion`] unless `meta.version`
	/// starts with `prefix`.
	pub fn check_version(&self, prefix: &str) -> Result<(), SheetError> {
		if self.meta.version.starts_with(prefix) {
			Ok(())
		} else {
			Err(SheetError::UnsupportedVersion {
				expected: prefix.to_string(),
				found: self.meta.version.clone(),
			})
		}
	}

	/// Number of frames in the sheet.
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// Returns the tag with the given name, if any.
	pub fn tag(&self, name: &str) -> Option<&FrameTag> {
		self.meta.frame_tags.iter().find(|tag| tag.name == name)
	}

	/// Returns the slice with the given name, if any.
	pub fn slice(&self, name: &str) -> Option<&Slice> {
		self.meta.slices.iter().find(|slice| slice.name == name)
	}

	/// Returns true if the sheet declares any tags.
	pub fn has_tags(&self) -> bool {
		!self.meta.frame_tags.is_empty()
	}
}

impl std::fmt::Display for SpriteSheet {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"SpriteSheet({} frames, {} tags, image: {})",
			self.frames.len(),
			self.meta.frame_tags.len(),
			self.meta.image
		)
	}
}
