//! Playback tests over a loaded sheet

use std::{
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
	time::{Duration, Instant},
};

use asesheet::prelude::*;

use crate::{shown_frame, terminal_fs};

fn terminal() -> Animation {
	load_animation(&terminal_fs(), "sprites/terminal.json", &LoadOptions::default()).unwrap()
}

#[test_log::test]
fn test_pingpong_playback_order() {
	let mut anim = terminal();
	anim.set_tag("CRASH").unwrap();

	let start = Instant::now();
	let mut clock = Clock::starting_at(start);
	let mut shown = vec![shown_frame(&anim)];
	for step in 1..=8 {
		clock.tick_at(start + Duration::from_millis(step * 100));
		anim.update(&clock);
		shown.push(shown_frame(&anim));
	}

	assert_eq!(shown, vec![1, 2, 3, 4, 3, 2, 1, 2, 3]);
}

#[test]
fn test_reverse_playback_and_loop_handler() {
	let mut anim = terminal();
	anim.set_tag("OFF").unwrap();
	let loops = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&loops);
	anim.on_end("OFF", move |_| {
		counter.fetch_add(1, Ordering::SeqCst);
	});

	assert_eq!(shown_frame(&anim), 5);

	let mut clock = Clock::new();
	clock.advance(Duration::from_millis(250));
	anim.update(&clock);
	assert_eq!(shown_frame(&anim), 3);
	assert_eq!(loops.load(Ordering::SeqCst), 0);

	// A long stall finishes this loop and catches up through two more.
	clock.advance(Duration::from_millis(650));
	anim.update(&clock);
	assert_eq!(loops.load(Ordering::SeqCst), 3);
	assert_eq!(shown_frame(&anim), 5);
	assert_eq!(anim.accumulated_ms(), 0);
}

#[test]
fn test_handler_chains_into_next_tag() {
	let mut anim = terminal();
	anim.set_tag("ON").unwrap();
	anim.on_end("ON", |anim| {
		anim.set_tag("OFF").unwrap();
	});

	let mut clock = Clock::new();
	clock.advance(Duration::from_millis(350));
	anim.update(&clock);

	assert_eq!(anim.tag(), &Tag::from("OFF"));
	assert_eq!(anim.current_frame_index(), 0);
	assert_eq!(shown_frame(&anim), 5);
	assert_eq!(anim.accumulated_ms(), 50);
}

#[test]
fn test_indicator_style_manual_frames() {
	let mut indicator = terminal();
	indicator.pause();
	indicator.set_frame(1).unwrap();

	let mut clock = Clock::new();
	let mut frame = 1;
	for _ in 0..10 {
		clock.advance(Duration::from_millis(16));
		indicator.update(&clock);

		frame += 1;
		if indicator.set_frame(frame).is_err() {
			frame = 1;
			indicator.set_frame(frame).unwrap();
		}
	}

	// Paused: only the explicit positioning moved the cursor.
	assert_eq!(indicator.accumulated_ms(), 0);
	assert_eq!(indicator.current_frame_index(), frame);
	assert_eq!(frame, 1);
}
