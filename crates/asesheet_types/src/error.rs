//! Error types for sheet loading and animation playback.

use thiserror::Error;

use crate::{animation::Tag, sheet::Rect};

/// Errors raised by the animation engine and by frame-index construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationError {
	/// Explicit frame request outside the current sequence
	#[error("Frame index {index} out of bounds (sequence length: {len})")]
	FrameOutOfBounds {
		/// Requested position
		index: usize,
		/// Length of the current sequence
		len: usize,
	},

	/// Tag without a registered sequence
	#[error("Unknown tag: {0}")]
	UnknownTag(Tag),

	/// Sequence registered with no frames
	#[error("Sequence for tag {0} is empty")]
	EmptySequence(Tag),

	/// Named sequences registered without the default sequence
	#[error("Animation data has named sequences but no default sequence")]
	MissingDefaultSequence,

	/// Sequence entry pointing past the frame index
	#[error("Sequence for tag {tag} references frame {index}, but only {frame_count} frames exist")]
	FrameIndexOutOfRange {
		/// Tag of the offending sequence
		tag: Tag,
		/// Offending frame index
		index: usize,
		/// Number of frames in the frame index
		frame_count: usize,
	},

	/// Frame that would never advance
	#[error("Frame {ordinal} has a zero duration")]
	ZeroDuration {
		/// Ordinal of the offending frame
		ordinal: usize,
	},
}

/// Errors that can occur when loading a sprite sheet
#[derive(Debug, Error)]
pub enum SheetError {
	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// Malformed metadata document
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// Sheet image could not be decoded
	#[error(transparent)]
	Image(#[from] image::ImageError),

	/// Invalid loader configuration
	#[error(transparent)]
	Config(#[from] config::ConfigError),

	/// Metadata written by an unsupported exporter version
	#[error("Version mismatch: expected {expected}, got {found}")]
	UnsupportedVersion {
		/// Accepted version prefix
		expected: String,
		/// Version found in the metadata
		found: String,
	},

	/// Tag range reaching past the last frame
	#[error("Tag {tag:?} covers frames {from}..={to}, but the sheet only has {frame_count} frames")]
	TagRangeOutOfBounds {
		/// Tag name
		tag: String,
		/// First frame
		from: usize,
		/// Last frame
		to: usize,
		/// Number of frames in the sheet
		frame_count: usize,
	},

	/// Tag range whose end precedes its start
	#[error("Tag {tag:?} has an inverted range {from}..={to}")]
	InvertedTagRange {
		/// Tag name
		tag: String,
		/// First frame
		from: usize,
		/// Last frame
		to: usize,
	},

	/// Frame region outside the sheet image
	#[error("Frame {ordinal} region {region} lies outside the {width}x{height} sheet image")]
	RegionOutOfBounds {
		/// Frame ordinal
		ordinal: usize,
		/// Offending region
		region: Rect,
		/// Sheet image width
		width: u32,
		/// Sheet image height
		height: u32,
	},

	/// Tag name declared more than once
	#[error("Duplicate tag: {0:?}")]
	DuplicateTag(String),

	/// Sheet without any frames
	#[error("Sprite sheet has no frames")]
	EmptySheet,

	/// Frame index or sequence validation failure
	#[error(transparent)]
	Animation(#[from] AnimationError),
}
