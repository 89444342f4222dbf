//! End-to-end tests: sheets built in memory, loaded through a virtual file system and played back.

mod loading;
mod playback;

use std::io::Cursor;

use asesheet::prelude::*;
use image::{ImageFormat, Rgba, RgbaImage};
use serde_json::{Value, json};

/// Frame width of the test strip
pub(crate) const FRAME_W: u32 = 16;
/// Frame height of the test strip
pub(crate) const FRAME_H: u32 = 8;
/// Number of frames in the test strip
pub(crate) const FRAME_COUNT: u32 = 6;

/// A horizontal strip of frames; frame `i` is filled with red value `i * 10`.
pub(crate) fn strip_image() -> RgbaImage {
	RgbaImage::from_fn(FRAME_W * FRAME_COUNT, FRAME_H, |x, _| Rgba([(x / FRAME_W * 10) as u8, 0, 0, 255]))
}

pub(crate) fn png_bytes(image: &RgbaImage) -> Vec<u8> {
	let mut bytes = Vec::new();
	image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
	bytes
}

/// Metadata for [`strip_image`] with the tags of a small terminal animation.
pub(crate) fn terminal_json(image: &str) -> Value {
	let frames: Vec<Value> = (0..FRAME_COUNT)
		.map(|i| {
			json!({
				"frame": { "x": i * FRAME_W, "y": 0, "w": FRAME_W, "h": FRAME_H },
				"rotated": false,
				"trimmed": false,
				"spriteSourceSize": { "x": 0, "y": 0, "w": FRAME_W, "h": FRAME_H },
				"sourceSize": { "w": FRAME_W, "h": FRAME_H },
				"duration": 100
			})
		})
		.collect();

	json!({
		"frames": frames,
		"meta": {
			"app": "https://www.aseprite.org/",
			"version": "1.3-rc1-x64",
			"image": image,
			"format": "RGBA8888",
			"size": { "w": FRAME_W * FRAME_COUNT, "h": FRAME_H },
			"scale": "1",
			"frameTags": [
				{ "name": "ON", "from": 0, "to": 2, "direction": "forward", "color": "#000000ff" },
				{ "name": "OFF", "from": 3, "to": 5, "direction": "reverse", "color": "#000000ff" },
				{ "name": "CRASH", "from": 1, "to": 4, "direction": "pingpong", "color": "#000000ff" }
			],
			"layers": [ { "name": "Layer 1", "opacity": 255, "blendMode": "normal" } ],
			"slices": []
		}
	})
}

/// A memory file system holding `sprites/terminal.json` and `sprites/terminal.png`.
pub(crate) fn terminal_fs() -> MemFs {
	MemFs::new()
		.with_file("sprites/terminal.json", terminal_json("terminal.png").to_string().into_bytes())
		.with_file("sprites/terminal.png", png_bytes(&strip_image()))
}

/// Red channel of the current frame, which identifies the sheet frame shown.
pub(crate) fn shown_frame(anim: &Animation) -> u8 {
	anim.current_frame().image().get_pixel(0, 0)[0] / 10
}
