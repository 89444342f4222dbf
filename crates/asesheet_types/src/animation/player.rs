//! Playback cursor over shared animation data.

use std::{collections::HashMap, sync::Arc};

use crate::{error::AnimationError, sheet::Rect};

use super::{AnimationData, Clock, Frame, Tag};

/// End-of-loop handler.
///
/// Handlers run synchronously inside [`Animation::update`], on the caller's
/// thread, and receive the animation whose sequence just wrapped.
pub type Callback = Arc<dyn Fn(&mut Animation) + Send + Sync>;

/// A playable animation: one cursor over a shared [`AnimationData`].
///
/// The cursor tracks the current tag, the position inside that tag's
/// sequence, whether playback is paused, and how much time has accumulated
/// towards the next frame. Frames advance only when [`Animation::update`] is
/// called with a ticked [`Clock`].
///
/// Several animations can play the same data at once: [`Clone::clone`] and
/// [`Animation::flyweight`] share the frame index and tag table and only copy
/// the small cursor state.
///
/// # State Machine
///
/// Each update adds the clock's delta to the accumulator, then, while the
/// accumulator holds at least the current frame's duration:
/// - subtracts that duration
/// - moves to the next position, wrapping to 0 after the last one
/// - on a wrap, runs the current tag's end-of-loop handler
///
/// The loop catches up completely, so a long stall can skip many frames and
/// run a handler once per completed loop.
///
/// # Examples
///
/// ```
/// use asesheet_types::animation::{Animation, AnimationData, Clock, Frame, Tag};
/// use image::RgbaImage;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let frames = (0..3).map(|i| Frame::new(i, RgbaImage::new(8, 8), 100)).collect();
/// let mut data = AnimationData::new(frames)?;
/// data.insert_sequence(Tag::from("blink"), vec![2, 1])?;
///
/// let mut anim = Animation::new(data).expect("data has frames");
/// anim.set_tag("blink")?;
///
/// let mut clock = Clock::new();
/// clock.advance(Duration::from_millis(150));
/// anim.update(&clock);
///
/// assert_eq!(anim.current_frame_index(), 1);
/// assert_eq!(anim.current_frame().ordinal(), 1);
/// assert_eq!(anim.accumulated_ms(), 50);
/// # Ok(())
/// # }
/// ```
pub struct Animation {
	data: Arc<AnimationData>,
	tag: Tag,
	position: usize,
	paused: bool,
	accum_ms: i64,
	callbacks: HashMap<Tag, Callback>,
}

impl Animation {
	/// Creates an animation playing the default sequence from its first frame.
	///
	/// Returns `None` if `data` has no sequences, since there would be nothing
	/// to play.
	pub fn new(data: impl Into<Arc<AnimationData>>) -> Option<Self> {
		let data = data.into();
		if data.is_empty() {
			return None;
		}
		Some(Self::with_data(data))
	}

	fn with_data(data: Arc<AnimationData>) -> Self {
		Self {
			data,
			tag: Tag::Default,
			position: 0,
			paused: false,
			accum_ms: 0,
			callbacks: HashMap::new(),
		}
	}

	/// Creates a fresh cursor over the same data.
	///
	/// Nothing but the data is inherited: the new animation plays the default
	/// sequence from its first frame, unpaused, with no handlers.
	pub fn flyweight(&self) -> Self {
		Self::with_data(Arc::clone(&self.data))
	}

	/// Pauses playback. Paused animations ignore [`Animation::update`].
	pub fn pause(&mut self) {
		self.paused = true;
	}

	/// Resumes playback.
	pub fn resume(&mut self) {
		self.paused = false;
	}

	/// Pauses a running animation or resumes a paused one.
	pub fn toggle(&mut self) {
		self.paused = !self.paused;
	}

	/// Returns true if playback is paused.
	pub fn is_paused(&self) -> bool {
		self.paused
	}

	/// Switches to the sequence registered for `tag`.
	///
	/// Switching to a different tag moves the cursor to that sequence's first
	/// frame; the time accumulated towards the next frame is kept. Selecting
	/// the current tag changes nothing.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::UnknownTag`] if no sequence is registered for
	/// `tag`. The animation is left unchanged.
	pub fn set_tag(&mut self, tag: impl Into<Tag>) -> Result<(), AnimationError> {
		let tag = tag.into();
		if tag == self.tag {
			return Ok(());
		}
		if !self.data.contains_tag(&tag) {
			return Err(AnimationError::UnknownTag(tag));
		}
		log::debug!("Switching animation from {} to {}", self.tag, tag);
		self.tag = tag;
		self.position = 0;
		Ok(())
	}

	/// Moves the cursor back to the first frame of the current sequence.
	pub fn restart(&mut self) {
		self.position = 0;
	}

	/// Moves the cursor to `index` within the current sequence.
	///
	/// # Errors
	///
	/// Returns [`AnimationError::FrameOutOfBounds`] if `index` is not a valid
	/// position. The animation is left unchanged.
	pub fn set_frame(&mut self, index: usize) -> Result<(), AnimationError> {
		let len = self.sequence_len();
		if index >= len {
			return Err(AnimationError::FrameOutOfBounds {
				index,
				len,
			});
		}
		self.position = index;
		Ok(())
	}

	/// Registers the handler run each time `tag`'s sequence wraps.
	///
	/// Replaces and returns any handler previously registered for `tag`.
	pub fn on_end<F>(&mut self, tag: impl Into<Tag>, handler: F) -> Option<Callback>
	where
		F: Fn(&mut Animation) + Send + Sync + 'static,
	{
		self.set_on_end(tag, Some(Arc::new(handler)))
	}

	/// Registers, replaces or, with `None`, removes the handler for `tag`.
	///
	/// Returns the previously registered handler.
	pub fn set_on_end(&mut self, tag: impl Into<Tag>, handler: Option<Callback>) -> Option<Callback> {
		let tag = tag.into();
		match handler {
			Some(handler) => self.callbacks.insert(tag, handler),
			None => self.callbacks.remove(&tag),
		}
	}

	/// Returns true if a handler is registered for `tag`.
	pub fn has_on_end(&self, tag: &Tag) -> bool {
		self.callbacks.contains_key(tag)
	}

	/// Advances playback by the clock's current delta.
	///
	/// Call once per frame on every running animation, after ticking the
	/// clock. Returns immediately if paused.
	pub fn update(&mut self, clock: &Clock) {
		self.advance(clock.delta_ms());
	}

	/// Advances playback by `delta_ms` milliseconds.
	///
	/// Negative deltas are ignored. Handlers fire once per wrap, in order, and
	/// any tag or frame change they make is seen by the remaining iterations.
	pub fn advance(&mut self, delta_ms: i64) {
		if self.paused {
			return;
		}
		self.accum_ms = self.accum_ms.saturating_add(delta_ms.max(0));

		loop {
			let duration = self.current_frame().duration_ms();
			if self.accum_ms < duration {
				break;
			}
			self.accum_ms -= duration;
			self.position = (self.position + 1) % self.sequence_len();

			if self.position != 0 {
				continue;
			}
			log::trace!("Sequence {} wrapped", self.tag);
			if let Some(handler) = self.callbacks.get(&self.tag).cloned() {
				handler(self);
			}
		}
	}

	/// Current tag.
	pub fn tag(&self) -> &Tag {
		&self.tag
	}

	/// Frame under the cursor.
	pub fn current_frame(&self) -> &Frame {
		let index = self.sequence()[self.position];
		&self.data.frames()[index]
	}

	/// Position of the cursor within the current sequence.
	pub fn current_frame_index(&self) -> usize {
		self.position
	}

	/// Bounds of the frame under the cursor.
	pub fn current_bounds(&self) -> Rect {
		self.current_frame().bounds()
	}

	/// Offset at which to draw the frame under the cursor so trimmed frames
	/// line up with their untrimmed neighbours.
	pub fn current_packed_offset(&self) -> (u32, u32) {
		self.current_frame().packed_offset()
	}

	/// Time accumulated towards the next frame, in milliseconds.
	pub fn accumulated_ms(&self) -> i64 {
		self.accum_ms
	}

	/// Length of the current sequence.
	pub fn sequence_len(&self) -> usize {
		self.sequence().len()
	}

	/// The shared frame index and tag table.
	pub fn data(&self) -> &Arc<AnimationData> {
		&self.data
	}

	fn sequence(&self) -> &[usize] {
		// set_tag only accepts registered tags and construction requires the default one
		self.data.sequence(&self.tag).unwrap_or(&[])
	}
}

impl Clone for Animation {
	/// Creates a new cursor over the same data.
	///
	/// The tag, position, pause state and handlers are copied; the handler table
	/// itself is independent afterwards. Accumulated time starts from zero.
	fn clone(&self) -> Self {
		Self {
			data: Arc::clone(&self.data),
			tag: self.tag.clone(),
			position: self.position,
			paused: self.paused,
			accum_ms: 0,
			callbacks: self.callbacks.clone(),
		}
	}
}

impl std::fmt::Debug for Animation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut handlers: Vec<_> = self.callbacks.keys().collect();
		handlers.sort();
		f.debug_struct("Animation")
			.field("tag", &self.tag)
			.field("position", &self.position)
			.field("paused", &self.paused)
			.field("accum_ms", &self.accum_ms)
			.field("handlers", &handlers)
			.field("frames", &self.data.frames().len())
			.finish()
	}
}
