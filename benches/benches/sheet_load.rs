//! Benchmark suite for sheet loading
//!
//! Separates metadata parsing from frame extraction, which crops every frame
//! out of the sheet image.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml --bench sheet_load

use std::hint::black_box;

use asesheet_benches::{FRAME_SIZE, sheet_json, sizes, strip_image};
use asesheet_types::{
	loader::{LoadOptions, build_animation_data},
	sheet::SpriteSheet,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Parsing the metadata document
fn bench_parse_json(c: &mut Criterion) {
	let mut group = c.benchmark_group("sheet_parse");

	for frame_count in [sizes::SMALL, sizes::MEDIUM, sizes::LARGE] {
		let json = sheet_json(frame_count);
		group.throughput(Throughput::Bytes(json.len() as u64));
		group.bench_with_input(BenchmarkId::new("from_json_str", frame_count), &json, |b, json| {
			b.iter(|| black_box(SpriteSheet::from_json_str(black_box(json))));
		});
	}

	group.finish();
}

/// Building the frame index and tag table
fn bench_build_animation_data(c: &mut Criterion) {
	let mut group = c.benchmark_group("sheet_build");
	let options = LoadOptions::default();

	for frame_count in [sizes::SMALL, sizes::MEDIUM, sizes::LARGE] {
		let sheet = SpriteSheet::from_json_str(&sheet_json(frame_count)).expect("synthetic sheet parses");
		let image = strip_image(frame_count);
		let pixels = u64::from(FRAME_SIZE * FRAME_SIZE) * frame_count as u64;

		group.throughput(Throughput::Elements(pixels));
		group.bench_with_input(BenchmarkId::new("build", frame_count), &(sheet, image), |b, (sheet, image)| {
			b.iter(|| black_box(build_animation_data(sheet, image, &options)));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_parse_json, bench_build_animation_data);
criterion_main!(benches);
