//! Sprite sheet utility.
//!
//! Provides three subcommands:
//! - `inspect`: print the frames, tags, resolved sequences and slices of a sheet.
//! - `simulate`: play a tag with a fixed time step and report every frame change
//!   and loop, which is handy for checking frame durations without a game loop.
//! - `export`: write the frames of one sequence as individual PNG files.

use std::{
	path::{Path, PathBuf},
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
	time::Duration,
};

use anyhow::{Context, Result, bail};
use asesheet::prelude::*;
use clap::{Args, Parser, Subcommand};

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Inspect(opts) => run_inspect(opts),
		Command::Simulate(opts) => run_simulate(opts),
		Command::Export(opts) => run_export(opts),
	}
}

#[derive(Parser)]
#[command(name = "sheet_utils")]
#[command(author = "asesheet project")]
#[command(version)]
#[command(about = "Inspect and simulate Aseprite sprite-sheet animations", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Print frames, tags and slices of a sheet
	Inspect(InspectArgs),
	/// Play a tag with a fixed time step and report frame changes
	Simulate(SimulateArgs),
	/// Write the frames of a sequence as PNG files
	Export(ExportArgs),
}

#[derive(Args)]
struct SheetArgs {
	/// Path to the sheet's JSON metadata
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// TOML file with loader options
	#[arg(short, long, value_name = "TOML")]
	options: Option<PathBuf>,
}

#[derive(Args)]
struct InspectArgs {
	#[command(flatten)]
	sheet: SheetArgs,

	/// Also list every frame
	#[arg(short, long, default_value_t = false)]
	verbose: bool,
}

#[derive(Args)]
struct SimulateArgs {
	#[command(flatten)]
	sheet: SheetArgs,

	/// Tag to play; the default sequence when omitted
	#[arg(short, long, value_name = "TAG")]
	tag: Option<String>,

	/// Milliseconds per simulated tick
	#[arg(short, long, value_name = "MS", default_value_t = 16)]
	step: u64,

	/// Number of ticks to simulate
	#[arg(short = 'n', long, value_name = "COUNT", default_value_t = 120)]
	ticks: usize,
}

#[derive(Args)]
struct ExportArgs {
	#[command(flatten)]
	sheet: SheetArgs,

	/// Tag to export; the default sequence when omitted
	#[arg(short, long, value_name = "TAG")]
	tag: Option<String>,

	/// Output directory
	#[arg(short = 'd', long, value_name = "DIR", default_value = "frames")]
	out_dir: PathBuf,
}

impl SheetArgs {
	fn load_options(&self) -> Result<LoadOptions> {
		match &self.options {
			Some(path) => LoadOptions::from_file(path)
				.with_context(|| format!("Failed to read loader options from {}", path.display())),
			None => Ok(LoadOptions::default()),
		}
	}

	/// Splits the metadata path into a file system rooted at its directory and the file name.
	fn file_system(&self) -> Result<(DirFs, PathBuf)> {
		let Some(name) = self.file.file_name() else {
			bail!("{} is not a file", self.file.display());
		};
		let dir = self.file.parent().filter(|dir| !dir.as_os_str().is_empty()).unwrap_or(Path::new("."));
		Ok((DirFs::new(dir), PathBuf::from(name)))
	}

	fn load(&self) -> Result<(SheetAsset, AnimationData)> {
		let options = self.load_options()?;
		let (fs, name) = self.file_system()?;
		let asset = load_sprite_sheet(&fs, &name, &options)
			.with_context(|| format!("Failed to load {}", self.file.display()))?;
		let data = asset
			.to_animation_data(&options)
			.with_context(|| format!("Failed to build animation data for {}", self.file.display()))?;
		Ok((asset, data))
	}
}

fn tag_arg(tag: Option<&str>) -> Tag {
	tag.map_or(Tag::Default, Tag::named)
}

fn run_inspect(args: InspectArgs) -> Result<()> {
	let (asset, data) = args.sheet.load()?;
	let sheet = &asset.sheet;

	println!("File: {}", args.sheet.file.display());
	println!("Exporter: {} {}", sheet.meta.app, sheet.meta.version);
	println!(
		"Image: {} ({}x{}, {})",
		sheet.meta.image,
		asset.image.width(),
		asset.image.height(),
		sheet.meta.format
	);
	println!("Frames: {} | tags: {} | slices: {}", sheet.frame_count(), sheet.meta.frame_tags.len(), sheet.meta.slices.len());

	if args.verbose {
		println!();
		println!("Frames:");
		for frame in data.frames() {
			println!(
				"  #{:<4} region {:<24} offset {:?} {:>6} ms",
				frame.ordinal(),
				frame.region().to_string(),
				frame.packed_offset(),
				frame.duration_ms()
			);
		}
	}

	println!();
	println!("Sequences:");
	for tag in data.tags() {
		let ordinals: Vec<String> = data.sequence_frames(tag).map(|frame| frame.ordinal().to_string()).collect();
		let direction = tag
			.name()
			.and_then(|name| sheet.tag(name))
			.map_or_else(|| Direction::Forward.to_string(), |frame_tag| frame_tag.direction.to_string());
		println!(
			"  {:<20} {:<16} {:>6} ms | {}",
			tag.label(),
			direction,
			data.loop_duration_ms(tag),
			ordinals.join(" ")
		);
	}

	if !sheet.meta.slices.is_empty() {
		println!();
		println!("Slices:");
		for slice in &sheet.meta.slices {
			let keys: Vec<String> = slice.keys.iter().map(|key| format!("@{} {}", key.frame, key.bounds)).collect();
			println!("  {:<20} {}", slice.name, keys.join(", "));
		}
	}

	Ok(())
}

fn run_simulate(args: SimulateArgs) -> Result<()> {
	if args.step == 0 {
		bail!("step must be greater than zero");
	}

	let (_, data) = args.sheet.load()?;
	let Some(mut anim) = Animation::new(data) else {
		bail!("{} has no frames", args.sheet.file.display());
	};

	let tag = tag_arg(args.tag.as_deref());
	anim.set_tag(tag.clone()).with_context(|| format!("Cannot play {}", tag.label()))?;

	let loops = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&loops);
	anim.on_end(tag.clone(), move |_| {
		counter.fetch_add(1, Ordering::Relaxed);
	});

	let mut clock = Clock::new();
	let mut last = (anim.current_frame_index(), 0);
	println!("{:>8}  {:>4}  {:>7}  {:>5}", "time", "pos", "frame", "loop");
	println!("{:>6}ms  {:>4}  {:>7}  {:>5}", 0, last.0, anim.current_frame().ordinal(), 0);

	for _ in 0..args.ticks {
		clock.advance(Duration::from_millis(args.step));
		anim.update(&clock);

		let now = (anim.current_frame_index(), loops.load(Ordering::Relaxed));
		if now != last {
			println!(
				"{:>6}ms  {:>4}  {:>7}  {:>5}",
				clock.total_ms(),
				now.0,
				anim.current_frame().ordinal(),
				now.1
			);
			last = now;
		}
	}

	println!(
		"Simulated {} ms on {}: {} loops, {} ms towards the next frame",
		clock.total_ms(),
		tag.label(),
		loops.load(Ordering::Relaxed),
		anim.accumulated_ms()
	);
	Ok(())
}

fn run_export(args: ExportArgs) -> Result<()> {
	let (_, data) = args.sheet.load()?;
	let tag = tag_arg(args.tag.as_deref());
	if !data.contains_tag(&tag) {
		bail!("Sheet has no sequence named {}", tag.label());
	}

	std::fs::create_dir_all(&args.out_dir)
		.with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

	let stem = args.sheet.file.file_stem().map_or_else(|| "frame".into(), |stem| stem.to_string_lossy());
	for (position, frame) in data.sequence_frames(&tag).enumerate() {
		let path = args.out_dir.join(format!("{stem}_{}_{position:03}.png", tag.name().unwrap_or("all")));
		frame.image().save(&path).with_context(|| format!("Failed to write {}", path.display()))?;
		log::info!("Wrote {} (frame #{}, {} ms)", path.display(), frame.ordinal(), frame.duration_ms());
	}

	Ok(())
}
