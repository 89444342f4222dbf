//! Benchmark helper utilities for asesheet
//!
//! Generates synthetic sprite sheets so the suites do not depend on asset files:
//! a horizontal strip image, the matching metadata document and the animation
//! data built from both.

use asesheet_types::{
	animation::AnimationData,
	loader::{LoadOptions, build_animation_data},
	sheet::SpriteSheet,
};
use image::{Rgba, RgbaImage};

/// Width and height of every synthetic frame.
pub const FRAME_SIZE: u32 = 32;

/// Builds a strip image holding `frame_count` frames side by side.
pub fn strip_image(frame_count: usize) -> RgbaImage {
	let width = FRAME_SIZE * frame_count as u32;
	RgbaImage::from_fn(width.max(1), FRAME_SIZE, |x, y| {
		let frame = (x / FRAME_SIZE) as u8;
		Rgba([frame.wrapping_mul(7), (y as u8).wrapping_mul(3), 0x80, 0xFF])
	})
}

/// Builds the metadata document for a strip of `frame_count` frames.
///
/// Frame durations cycle through 50, 100 and 150 ms. One tag per direction is
/// declared, each covering the whole strip, plus a short `idle` tag.
pub fn sheet_json(frame_count: usize) -> String {
	let frames: Vec<String> = (0..frame_count)
		.map(|i| {
			let x = i as u32 * FRAME_SIZE;
			format!(
				r#"{{"frame":{{"x":{x},"y":0,"w":{FRAME_SIZE},"h":{FRAME_SIZE}}},"rotated":false,"trimmed":false,"spriteSourceSize":{{"x":0,"y":0,"w":{FRAME_SIZE},"h":{FRAME_SIZE}}},"sourceSize":{{"w":{FRAME_SIZE},"h":{FRAME_SIZE}}},"duration":{}}}"#,
				50 * (i % 3 + 1)
			)
		})
		.collect();

	let last = frame_count.saturating_sub(1);
	let tags = [
		("run", "forward", 0, last),
		("rewind", "reverse", 0, last),
		("bounce", "pingpong", 0, last),
		("idle", "forward", 0, last.min(1)),
	]
	.iter()
	.map(|(name, direction, from, to)| {
		format!(r#"{{"name":"{name}","from":{from},"to":{to},"direction":"{direction}"}}"#)
	})
	.collect::<Vec<_>>()
	.join(",");

	format!(
		r#"{{"frames":[{}],"meta":{{"app":"https://www.aseprite.org/","version":"1.3.7-x64","image":"bench.png","format":"RGBA8888","size":{{"w":{},"h":{FRAME_SIZE}}},"scale":"1","frameTags":[{tags}]}}}}"#,
		frames.join(","),
		FRAME_SIZE * frame_count as u32
	)
}

/// Parses a synthetic sheet and builds its animation data.
pub fn animation_data(frame_count: usize) -> AnimationData {
	let sheet = SpriteSheet::from_json_str(&sheet_json(frame_count)).expect("synthetic sheet parses");
	build_animation_data(&sheet, &strip_image(frame_count), &LoadOptions::default())
		.expect("synthetic sheet builds")
}

/// Common sheet sizes for the benchmarks
pub mod sizes {
	/// A short effect
	pub const SMALL: usize = 4;
	/// A typical character sheet
	pub const MEDIUM: usize = 32;
	/// A long cutscene strip
	pub const LARGE: usize = 256;
}

#[cfg(test)]
mod tests {
	use asesheet_types::animation::Tag;

	use super::*;

	#[test]
	fn test_synthetic_sheet_builds() {
		let data = animation_data(sizes::SMALL);

		assert_eq!(data.frames().len(), 4);
		assert_eq!(data.sequence(&Tag::named("rewind")), Some(&[3, 2, 1, 0][..]));
		assert_eq!(data.sequence_len(&Tag::named("bounce")), 6);
		assert_eq!(data.sequence_len(&Tag::named("idle")), 2);
		// 50 + 100 + 150 + 50
		assert_eq!(data.loop_duration_ms(&Tag::Default), 350);
	}

	#[test]
	fn test_strip_image_dimensions() {
		let image = strip_image(sizes::MEDIUM);
		assert_eq!(image.dimensions(), (FRAME_SIZE * 32, FRAME_SIZE));
	}
}
