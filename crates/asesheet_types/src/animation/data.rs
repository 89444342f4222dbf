//! Shared, read-only frame index and tag table.

use std::collections::HashMap;

use crate::{error::AnimationError, sheet::SpriteSheet};

use super::{Frame, Tag};

/// Frame index plus tag table shared by every playback cursor of a sheet.
///
/// Sequences are lists of positions into the frame index, so a frame that
/// appears in several tags, or several times in one pingpong sequence, is
/// stored once. The data is immutable once wrapped in an `Arc` and handed to
/// [`Animation`](super::Animation) instances.
///
/// # Invariants
///
/// - every frame has a positive duration
/// - every registered sequence is non-empty and only references existing frames
/// - if any sequence is registered, the [`Tag::Default`] sequence is
///
/// # Examples
///
/// ```
/// use asesheet_types::animation::{AnimationData, Frame, Tag};
/// use image::RgbaImage;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let frames = (0..4).map(|i| Frame::new(i, RgbaImage::new(8, 8), 100)).collect();
/// let mut data = AnimationData::new(frames)?;
/// data.insert_sequence(Tag::from("tail"), vec![2, 3])?;
///
/// assert_eq!(data.sequence(&Tag::Default), Some(&[0, 1, 2, 3][..]));
/// assert_eq!(data.sequence_len(&Tag::from("tail")), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnimationData {
	frames: Vec<Frame>,
	sequences: HashMap<Tag, Vec<usize>>,
	source: Option<SpriteSheet>,
}

impl AnimationData {
	/// Creates animation data with no frames and no sequences.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Creates animation data from a frame index.
	///
	/// The default sequence covers every frame in the given order. An empty
	/// frame list yields empty data.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::ZeroDuration`] if a frame has a non-positive
	/// duration.
	pub fn new(frames: Vec<Frame>) -> Result<Self, AnimationError> {
		if let Some(frame) = frames.iter().find(|frame| frame.duration_ms() <= 0) {
			return Err(AnimationError::ZeroDuration {
				ordinal: frame.ordinal(),
			});
		}

		let mut sequences = HashMap::new();
		if !frames.is_empty() {
			sequences.insert(Tag::Default, (0..frames.len()).collect());
		}

		Ok(Self {
			frames,
			sequences,
			source: None,
		})
	}

	/// Creates animation data from a frame index and a complete tag table.
	///
	/// Unlike [`AnimationData::new`] no default sequence is generated; the table
	/// must contain one unless it is empty.
	pub fn from_sequences(
		frames: Vec<Frame>,
		sequences: HashMap<Tag, Vec<usize>>,
	) -> Result<Self, AnimationError> {
		let mut data = Self::new(frames)?;
		data.sequences.clear();
		for (tag, indices) in sequences {
			data.insert_sequence(tag, indices)?;
		}
		if !data.sequences.is_empty() && !data.sequences.contains_key(&Tag::Default) {
			return Err(AnimationError::MissingDefaultSequence);
		}
		Ok(data)
	}

	/// Registers or replaces the sequence for `tag`.
	///
	/// Returns the previous sequence, if any.
	///
	/// # Errors
	///
	/// - [`AnimationError::EmptySequence`] if `indices` is empty
	/// - [`AnimationError::FrameIndexOutOfRange`] if an index has no frame
	pub fn insert_sequence(
		&mut self,
		tag: Tag,
		indices: Vec<usize>,
	) -> Result<Option<Vec<usize>>, AnimationError> {
		if indices.is_empty() {
			return Err(AnimationError::EmptySequence(tag));
		}
		if let Some(&index) = indices.iter().find(|&&index| index >= self.frames.len()) {
			return Err(AnimationError::FrameIndexOutOfRange {
				tag,
				index,
				frame_count: self.frames.len(),
			});
		}
		Ok(self.sequences.insert(tag, indices))
	}

	/// Attaches the metadata document the data was built from.
	pub fn with_source(mut self, sheet: SpriteSheet) -> Self {
		self.source = Some(sheet);
		self
	}

	/// Metadata document the data was built from, if loaded from a sheet.
	pub fn source(&self) -> Option<&SpriteSheet> {
		self.source.as_ref()
	}

	/// Returns true if no sequence is registered.
	pub fn is_empty(&self) -> bool {
		self.sequences.is_empty()
	}

	/// The frame index.
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Returns the frame at `index` in the frame index.
	pub fn frame(&self, index: usize) -> Option<&Frame> {
		self.frames.get(index)
	}

	/// Returns the frame-index positions making up `tag`'s sequence.
	pub fn sequence(&self, tag: &Tag) -> Option<&[usize]> {
		self.sequences.get(tag).map(Vec::as_slice)
	}

	/// Length of `tag`'s sequence, zero if unregistered.
	pub fn sequence_len(&self, tag: &Tag) -> usize {
		self.sequences.get(tag).map_or(0, Vec::len)
	}

	/// Iterates over the frames of `tag`'s sequence in playback order.
	pub fn sequence_frames<'a>(&'a self, tag: &Tag) -> impl Iterator<Item = &'a Frame> + use<'a> {
		self.sequences
			.get(tag)
			.into_iter()
			.flatten()
			.map(move |&index| &self.frames[index])
	}

	/// Returns the frame at `position` within `tag`'s sequence.
	pub fn frame_at(&self, tag: &Tag, position: usize) -> Option<&Frame> {
		let index = *self.sequences.get(tag)?.get(position)?;
		self.frames.get(index)
	}

	/// Returns true if a sequence is registered for `tag`.
	pub fn contains_tag(&self, tag: &Tag) -> bool {
		self.sequences.contains_key(tag)
	}

	/// Registered tags, sorted with the default sequence first.
	pub fn tags(&self) -> Vec<&Tag> {
		let mut tags: Vec<_> = self.sequences.keys().collect();
		tags.sort();
		tags
	}

	/// Total playback time of one pass through `tag`'s sequence.
	pub fn loop_duration_ms(&self, tag: &Tag) -> i64 {
		self.sequence_frames(tag).map(Frame::duration_ms).sum()
	}
}
