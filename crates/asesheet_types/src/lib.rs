//! This crate provides the sprite-sheet data types and the animation engine for the `asesheet` project.
//!
//! # Modules
//!
//! - **sheet**: Aseprite JSON metadata (frames, tags, layers, slices) and tag direction transforms
//! - **animation**: Frame index, tag table, tick clock and the playback cursor
//! - **loader**: Builds animation data from a metadata document and its sheet image
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use asesheet_types::prelude::*;
//! use asesheet_vfs::DirFs;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fs = DirFs::new("assets");
//! let mut anim = load_animation(&fs, "terminal.json", &LoadOptions::default())?;
//! anim.set_tag("ON")?;
//!
//! let mut clock = Clock::new();
//! loop {
//!     clock.tick();
//!     anim.update(&clock);
//!     let frame = anim.current_frame();
//!     // draw frame.image() at anim.current_packed_offset()
//! #   break;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use asesheet_types::sheet::SpriteSheet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sheet = SpriteSheet::from_json_str(&std::fs::read_to_string("terminal.json")?)?;
//! for tag in &sheet.meta.frame_tags {
//!     println!("{}: {}..={} {}", tag.name, tag.from, tag.to, tag.direction);
//! }
//! # Ok(())
//! # }
//! ```

pub mod animation;
pub mod error;
pub mod loader;
pub mod sheet;

/// `use asesheet_types::prelude::*;` to import commonly used items.
pub mod prelude;
