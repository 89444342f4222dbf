//! Frame-based sprite animation playback.
//!
//! This module holds the runtime side of `asesheet`: the frame index and tag
//! table built from a sprite sheet, the per-tick clock, and the playback
//! cursor that advances through a tag's frames over wall-clock time.
//!
//! # Data Flow
//!
//! ```text
//! host tick ──> Clock::tick() ──> Animation::update(&clock) ──> current_frame()
//!                                        │
//!                                        └─ end-of-loop handlers
//! ```
//!
//! - [`AnimationData`]: immutable frame index plus tag table, shared through an `Arc`
//! - [`Animation`]: cheap cursor (tag, position, pause flag, accumulated time, handlers)
//! - [`Clock`]: elapsed time, ticked once per frame by the host and read by every animation
//!
//! # Ordering
//!
//! Playback is single-threaded and tick driven. Within one frame the host must
//! tick the clock before updating any animation; animations may then be
//! updated in any order since each owns its own cursor. Nothing here locks, so
//! a host driving animations from several threads has to synchronize access
//! itself.
//!
//! # Usage Examples
//!
//! ```
//! use asesheet_types::animation::{Animation, AnimationData, Clock, Frame, Tag};
//! use image::RgbaImage;
//! use std::{
//!     sync::{
//!         Arc,
//!         atomic::{AtomicUsize, Ordering},
//!     },
//!     time::Duration,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frames = (0..2).map(|i| Frame::new(i, RgbaImage::new(8, 8), 50)).collect();
//! let data = Arc::new(AnimationData::new(frames)?);
//!
//! let mut anim = Animation::new(Arc::clone(&data)).expect("data has frames");
//! let loops = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&loops);
//! anim.on_end(Tag::Default, move |_| {
//!     counter.fetch_add(1, Ordering::Relaxed);
//! });
//!
//! let mut clock = Clock::new();
//! clock.advance(Duration::from_millis(250));
//! anim.update(&clock);
//!
//! assert_eq!(loops.load(Ordering::Relaxed), 2);
//! assert_eq!(anim.current_frame_index(), 1);
//! # Ok(())
//! # }
//! ```

mod clock;
mod data;
mod frame;
mod player;
mod tag;


pub use self::clock::Clock;
pub use self::data::AnimationData;
pub use self::frame::Frame;
pub use self::player::{Animation, Callback};
pub use self::tag::Tag;
