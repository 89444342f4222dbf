//! Loader tests

use std::{io, path::Path, sync::Arc};

use asesheet::prelude::*;
use serde_json::json;

use crate::{FRAME_COUNT, FRAME_H, FRAME_W, png_bytes, strip_image, terminal_fs, terminal_json};

#[test_log::test]
fn test_load_tagged_sheet() {
	let fs = terminal_fs();
	let data = load_animation_data(&fs, "sprites/terminal.json", &LoadOptions::default()).unwrap();

	assert_eq!(data.frames().len(), FRAME_COUNT as usize);
	assert_eq!(
		data.tags(),
		vec![&Tag::Default, &Tag::from("CRASH"), &Tag::from("OFF"), &Tag::from("ON")]
	);
	assert_eq!(data.sequence(&Tag::Default), Some(&[0, 1, 2, 3, 4, 5][..]));
	assert_eq!(data.sequence(&Tag::from("ON")), Some(&[0, 1, 2][..]));
	assert_eq!(data.sequence(&Tag::from("OFF")), Some(&[5, 4, 3][..]));
	assert_eq!(data.sequence(&Tag::from("CRASH")), Some(&[1, 2, 3, 4, 3, 2][..]));

	for frame in data.frames() {
		assert_eq!(frame.image().dimensions(), (FRAME_W, FRAME_H));
		assert_eq!(frame.image().get_pixel(FRAME_W - 1, FRAME_H - 1)[0], frame.ordinal() as u8 * 10);
	}

	let source = data.source().unwrap();
	assert_eq!(source.meta.layers.len(), 1);
	assert_eq!(source.tag("OFF").unwrap().direction, Direction::Reverse);
}

#[test]
fn test_load_animation_starts_on_default() {
	let fs = terminal_fs();
	let anim = load_animation(&fs, "sprites/terminal.json", &LoadOptions::default()).unwrap();

	assert_eq!(anim.tag(), &Tag::Default);
	assert_eq!(anim.sequence_len(), FRAME_COUNT as usize);
	assert_eq!(anim.current_bounds(), Rect::new(0, 0, FRAME_W, FRAME_H));
}

#[test]
fn test_load_with_first_tag_default() {
	let fs = terminal_fs();
	let options = LoadOptions::from_toml_str("default_sequence = \"first_tag\"").unwrap();
	let anim = load_animation(&fs, "sprites/terminal.json", &options).unwrap();

	assert_eq!(anim.sequence_len(), 3);
	assert_eq!(anim.data().sequence(&Tag::Default), anim.data().sequence(&Tag::from("ON")));
}

#[test]
fn test_load_hash_export() {
	let image = strip_image();
	let json = json!({
		"frames": {
			"hero 0.aseprite": { "frame": { "x": 0, "y": 0, "w": 16, "h": 8 }, "duration": 80 },
			"hero 1.aseprite": { "frame": { "x": 16, "y": 0, "w": 16, "h": 8 }, "duration": 120 }
		},
		"meta": { "version": "1.3.8", "image": "hero.png" }
	});
	let fs = MemFs::new()
		.with_file("hero.json", json.to_string().into_bytes())
		.with_file("hero.png", png_bytes(&image));

	let data = load_animation_data(&fs, "hero.json", &LoadOptions::default()).unwrap();
	let durations: Vec<_> = data.frames().iter().map(Frame::duration_ms).collect();
	assert_eq!(durations, vec![80, 120]);
	assert_eq!(data.source().unwrap().frames[1].filename.as_deref(), Some("hero 1.aseprite"));
}

#[test]
fn test_version_mismatch() {
	let mut json = terminal_json("terminal.png");
	json["meta"]["version"] = json!("1.2.40");
	let fs = MemFs::new().with_file("terminal.json", json.to_string().into_bytes());

	let err = load_animation(&fs, "terminal.json", &LoadOptions::default()).unwrap_err();
	match err {
		SheetError::UnsupportedVersion {
			expected,
			found,
		} => {
			assert_eq!(expected, "1.3");
			assert_eq!(found, "1.2.40");
		}
		other => panic!("Unexpected error: {other:?}"),
	}

	let options = LoadOptions {
		version_prefix: "1.2".to_string(),
		..LoadOptions::default()
	};
	let fs = MemFs::new()
		.with_file("terminal.json", json.to_string().into_bytes())
		.with_file("terminal.png", png_bytes(&strip_image()));
	assert!(load_animation(&fs, "terminal.json", &options).is_ok());
}

#[test]
fn test_missing_files() {
	let fs = MemFs::new().with_file("terminal.json", terminal_json("terminal.png").to_string().into_bytes());

	let err = load_sprite_sheet(&fs, "missing.json", &LoadOptions::default()).unwrap_err();
	assert!(matches!(err, SheetError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));

	let err = load_sprite_sheet(&fs, "terminal.json", &LoadOptions::default()).unwrap_err();
	assert!(matches!(err, SheetError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
}

#[test]
fn test_corrupt_image() {
	let fs = MemFs::new()
		.with_file("terminal.json", terminal_json("terminal.png").to_string().into_bytes())
		.with_file("terminal.png", b"not a png".to_vec());

	let err = load_sprite_sheet(&fs, "terminal.json", &LoadOptions::default()).unwrap_err();
	assert!(matches!(err, SheetError::Image(_)));
}

#[test]
fn test_malformed_metadata() {
	let fs = MemFs::new().with_file("terminal.json", b"{ \"frames\": [".to_vec());

	let err = load_sprite_sheet(&fs, "terminal.json", &LoadOptions::default()).unwrap_err();
	assert!(matches!(err, SheetError::Json(_)));
}

#[test]
fn test_load_from_directory() {
	let root = std::env::temp_dir().join(format!("asesheet_sheet_loading_{}", std::process::id()));
	let dir = root.join("sprites");
	std::fs::create_dir_all(&dir).unwrap();
	std::fs::write(dir.join("terminal.json"), terminal_json("terminal.png").to_string()).unwrap();
	std::fs::write(dir.join("terminal.png"), png_bytes(&strip_image())).unwrap();

	let fs = DirFs::new(&root);
	let result = load_animation(&fs, Path::new("sprites/terminal.json"), &LoadOptions::default());
	std::fs::remove_dir_all(&root).unwrap();

	let anim = result.unwrap();
	assert!(anim.data().contains_tag(&Tag::from("CRASH")));
}

#[test]
fn test_flyweights_share_frames() {
	let fs = terminal_fs();
	let anim = load_animation(&fs, "sprites/terminal.json", &LoadOptions::default()).unwrap();

	let crowd: Vec<_> = (0..16).map(|_| anim.flyweight()).collect();
	assert_eq!(Arc::strong_count(anim.data()), 17);
	assert!(crowd.iter().all(|other| Arc::ptr_eq(other.data(), anim.data())));

	drop(crowd);
	assert_eq!(Arc::strong_count(anim.data()), 1);
}
