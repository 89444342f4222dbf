//! Prelude module for `asesheet_types`.
//!
//! This module provides a convenient way to import commonly used types and functions.
//!
//! # Examples
//!
//! ```no_run
//! use asesheet_types::prelude::*;
//!
//! let clock = Clock::new();
//! let options = LoadOptions::default();
//! ```

// Animation types
#[doc(inline)]
pub use crate::animation::{Animation, AnimationData, Callback, Clock, Frame, Tag};

// Errors
#[doc(inline)]
pub use crate::error::{AnimationError, SheetError};

// Loader
#[doc(inline)]
pub use crate::loader::{
	DefaultSequence, LoadOptions, SheetAsset, build_animation_data, load_animation, load_animation_data,
	load_sprite_sheet,
};

// Sheet metadata
#[doc(inline)]
pub use crate::sheet::{Direction, FrameTag, Layer, Meta, Rect, SheetFrame, Size, Slice, SliceKey, SpriteSheet};

// Re-export the modules for advanced usage
#[doc(inline)]
pub use crate::{animation, loader, sheet};
