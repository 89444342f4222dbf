//! This module is separated into its own crate to keep the public facade of `asesheet` thin, and should not be used directly.

/// `use asesheet::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use asesheet_types;
pub use asesheet_vfs;

// Re-export commonly used types at crate root
pub use asesheet_types::animation::{Animation, AnimationData, Clock, Frame, Tag};
pub use asesheet_types::error::{AnimationError, SheetError};
pub use asesheet_types::loader::{LoadOptions, load_animation};
pub use asesheet_types::sheet::SpriteSheet;
pub use asesheet_vfs::{DirFs, MemFs, Vfs};
