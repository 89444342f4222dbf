//! Prelude module for `asesheet_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use asesheet_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let fs = MemFs::new();
//! let options = LoadOptions::default();
//! let mut clock = Clock::new();
//! clock.tick();
//! assert!(load_animation(&fs, "missing.json", &options).is_err());
//! ```

// Re-export everything from asesheet_types::prelude
#[doc(inline)]
pub use asesheet_types::prelude::*;

// File systems
#[doc(inline)]
pub use asesheet_vfs::{DirFs, MemFs, Vfs};

// Re-export the member crates for advanced usage
#[doc(inline)]
pub use asesheet_types;
#[doc(inline)]
pub use asesheet_vfs;
