#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `asesheet` loads Aseprite sprite sheets and plays their frame-based animations.
//!
//! A sheet's JSON metadata and image become a shared, read-only frame index
//! and tag table. Any number of cheap [`Animation`] cursors play it, each
//! advanced once per frame from a [`Clock`] the host ticks.
//!
//! ```no_run
//! use asesheet::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fs = DirFs::new("assets");
//! let mut anim = load_animation(&fs, "hero.json", &LoadOptions::default())?;
//! anim.set_tag("walk")?;
//! anim.on_end("walk", |anim| anim.pause());
//!
//! let mut clock = Clock::new();
//! clock.tick();
//! anim.update(&clock);
//! println!("showing frame {}", anim.current_frame().ordinal());
//! # Ok(())
//! # }
//! ```
pub use asesheet_internal::*;
