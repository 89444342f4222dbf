//! Sprite sheet loading.
//!
//! Turns an Aseprite JSON document and its sheet image into
//! [`AnimationData`]: one [`Frame`] per sheet frame, cut out of the sheet image
//! once, plus one sequence per tag with the tag's direction already applied.
//!
//! # Loading Pipeline
//!
//! 1. Read and parse the JSON document, check `meta.version`
//! 2. Read the image named by `meta.image`, relative to the document
//! 3. Cut every frame region out of the image
//! 4. Build the default sequence and one sequence per tag
//!
//! # Usage Examples
//!
//! ```no_run
//! use asesheet_types::loader::{self, LoadOptions};
//! use asesheet_vfs::DirFs;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fs = DirFs::new("assets");
//! let mut hero = loader::load_animation(&fs, "sprites/hero.json", &LoadOptions::default())?;
//! hero.set_tag("walk")?;
//!
//! // Many independent cursors over the same frames
//! let crowd: Vec<_> = (0..32).map(|_| hero.flyweight()).collect();
//! # Ok(())
//! # }
//! ```

use std::{
	collections::HashSet,
	path::{Path, PathBuf},
};

use asesheet_vfs::Vfs;
use image::{RgbaImage, imageops};

use crate::{
	animation::{Animation, AnimationData, Frame, Tag},
	error::SheetError,
	sheet::{Rect, SheetFrame, Size, SpriteSheet},
};

mod options;

pub use self::options::{DefaultSequence, LoadOptions};

/// A parsed metadata document together with its decoded sheet image.
#[derive(Debug, Clone)]
pub struct SheetAsset {
	/// Parsed metadata
	pub sheet: SpriteSheet,
	/// Decoded sheet image
	pub image: RgbaImage,
}

impl SheetAsset {
	/// Builds animation data from this asset.
	pub fn to_animation_data(&self, options: &LoadOptions) -> Result<AnimationData, SheetError> {
		build_animation_data(&self.sheet, &self.image, options)
	}
}

/// Reads a metadata document and the sheet image it names.
///
/// # Errors
///
/// - [`SheetError::Io`] if either file cannot be read
/// - [`SheetError::Json`] if the document is malformed
/// - [`SheetError::UnsupportedVersion`] if `meta.version` does not match
/// - [`SheetError::Image`] if the image cannot be decoded
pub fn load_sprite_sheet(
	fs: &dyn Vfs,
	json_path: impl AsRef<Path>,
	options: &LoadOptions,
) -> Result<SheetAsset, SheetError> {
	let json_path = json_path.as_ref();
	let sheet = SpriteSheet::from_json_slice(&fs.read(json_path)?)?;
	sheet.check_version(&options.version_prefix)?;

	let image_path = image_path(json_path, &sheet);
	log::debug!("Loading sheet image {}", image_path.display());
	let image = image::load_from_memory(&fs.read(&image_path)?)?.to_rgba8();

	let expected = sheet.meta.size;
	if expected != Size::default() && (expected.w, expected.h) != image.dimensions() {
		log::warn!(
			"Sheet image {} is {}x{}, metadata says {}x{}",
			image_path.display(),
			image.width(),
			image.height(),
			expected.w,
			expected.h
		);
	}

	Ok(SheetAsset {
		sheet,
		image,
	})
}

/// Loads a sprite sheet straight into animation data.
pub fn load_animation_data(
	fs: &dyn Vfs,
	json_path: impl AsRef<Path>,
	options: &LoadOptions,
) -> Result<AnimationData, SheetError> {
	load_sprite_sheet(fs, json_path, options)?.to_animation_data(options)
}

/// Loads a sprite sheet into a ready-to-play animation.
pub fn load_animation(
	fs: &dyn Vfs,
	json_path: impl AsRef<Path>,
	options: &LoadOptions,
) -> Result<Animation, SheetError> {
	let data = load_animation_data(fs, json_path, options)?;
	Animation::new(data).ok_or(SheetError::EmptySheet)
}

/// Resolves `meta.image` relative to the directory of the JSON document.
pub fn image_path(json_path: &Path, sheet: &SpriteSheet) -> PathBuf {
	json_path.parent().unwrap_or_else(|| Path::new("")).join(&sheet.meta.image)
}

/// Builds the frame index and tag table for a parsed sheet.
///
/// # Errors
///
/// - [`SheetError::EmptySheet`] if the sheet has no frames
/// - [`SheetError::RegionOutOfBounds`] if a frame lies outside `image`
/// - [`SheetError::InvertedTagRange`] / [`SheetError::TagRangeOutOfBounds`] for bad tags
/// - [`SheetError::DuplicateTag`] unless duplicates are allowed
/// - [`SheetError::Animation`] for zero-duration frames
pub fn build_animation_data(
	sheet: &SpriteSheet,
	image: &RgbaImage,
	options: &LoadOptions,
) -> Result<AnimationData, SheetError> {
	if sheet.frames.is_empty() {
		return Err(SheetError::EmptySheet);
	}

	let frames = sheet
		.frames
		.iter()
		.enumerate()
		.map(|(ordinal, frame)| extract_frame(ordinal, frame, image))
		.collect::<Result<Vec<_>, _>>()?;
	let mut data = AnimationData::new(frames)?;

	let frame_count = sheet.frame_count();
	let mut seen = HashSet::new();
	let mut first_tag = None;
	for tag in &sheet.meta.frame_tags {
		if tag.from > tag.to {
			return Err(SheetError::InvertedTagRange {
				tag: tag.name.clone(),
				from: tag.from,
				to: tag.to,
			});
		}
		if tag.to >= frame_count {
			return Err(SheetError::TagRangeOutOfBounds {
				tag: tag.name.clone(),
				from: tag.from,
				to: tag.to,
				frame_count,
			});
		}
		if !seen.insert(tag.name.as_str()) {
			if !options.allow_duplicate_tags {
				return Err(SheetError::DuplicateTag(tag.name.clone()));
			}
			log::warn!("Tag {:?} declared more than once, keeping the last definition", tag.name);
		}

		let sequence = tag.direction.apply((tag.from..=tag.to).collect());
		log::debug!(
			"Loaded tag {:?}: frames {}..={} {} ({} steps)",
			tag.name,
			tag.from,
			tag.to,
			tag.direction,
			sequence.len()
		);
		if first_tag.is_none() {
			first_tag = Some(sequence.clone());
		}
		data.insert_sequence(Tag::named(tag.name.as_str()), sequence)?;
	}

	if options.default_sequence == DefaultSequence::FirstTag
		&& let Some(sequence) = first_tag
	{
		data.insert_sequence(Tag::Default, sequence)?;
	}

	Ok(data.with_source(sheet.clone()))
}

fn extract_frame(ordinal: usize, frame: &SheetFrame, image: &RgbaImage) -> Result<Frame, SheetError> {
	let region = frame.frame;
	if !region.fits_within(image.width(), image.height()) {
		return Err(SheetError::RegionOutOfBounds {
			ordinal,
			region,
			width: image.width(),
			height: image.height(),
		});
	}
	if frame.rotated {
		log::warn!("Frame {ordinal} is rotated in the sheet; it is used as packed");
	}

	let sub_image = imageops::crop_imm(image, region.x, region.y, region.w, region.h).to_image();
	let source_rect = if frame.sprite_source_size == Rect::default() {
		Rect::from_size(region.size())
	} else {
		frame.sprite_source_size
	};
	let source_size = if frame.source_size == Size::default() {
		region.size()
	} else {
		frame.source_size
	};

	Ok(Frame::new(ordinal, sub_image, i64::from(frame.duration))
		.with_region(region)
		.with_source(source_rect, source_size))
}
