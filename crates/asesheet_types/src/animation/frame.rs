//! Frame type for the animation frame index.

use image::RgbaImage;

use crate::sheet::{Rect, Size};

/// One still image region plus its display duration.
///
/// Frames live in the frame index of an [`AnimationData`]; sequences refer to
/// them by position, so a frame used by several tags exists only once.
///
/// # Examples
///
/// ```
/// use asesheet_types::animation::Frame;
/// use image::RgbaImage;
///
/// let frame = Frame::new(0, RgbaImage::new(16, 8), 100);
/// assert_eq!(frame.duration_ms(), 100);
/// assert_eq!(frame.bounds().w, 16);
/// assert_eq!(frame.packed_offset(), (0, 0));
/// ```
///
/// [`AnimationData`]: super::AnimationData
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
	ordinal: usize,
	image: RgbaImage,
	duration_ms: i64,
	region: Rect,
	source_rect: Rect,
	source_size: Size,
}

impl Frame {
	/// Creates a frame from an extracted image.
	///
	/// The sheet region, trimmed placement and untrimmed size all default to
	/// the image's own dimensions at the origin.
	///
	/// # Arguments
	///
	/// * `ordinal` - Original position of the frame in the sheet
	/// * `image` - Extracted sub-image
	/// * `duration_ms` - Display time in milliseconds
	pub fn new(ordinal: usize, image: RgbaImage, duration_ms: i64) -> Self {
		let bounds = Rect::new(0, 0, image.width(), image.height());
		Self {
			ordinal,
			image,
			duration_ms,
			region: bounds,
			source_rect: bounds,
			source_size: bounds.size(),
		}
	}

	/// Sets the region of the sheet image this frame was cut from.
	pub fn with_region(mut self, region: Rect) -> Self {
		self.region = region;
		self
	}

	/// Sets where the trimmed image sits inside the untrimmed frame.
	pub fn with_source(mut self, source_rect: Rect, source_size: Size) -> Self {
		self.source_rect = source_rect;
		self.source_size = source_size;
		self
	}

	/// Original position of this frame in the sheet.
	pub fn ordinal(&self) -> usize {
		self.ordinal
	}

	/// The frame's pixels.
	pub fn image(&self) -> &RgbaImage {
		&self.image
	}

	/// Display time in milliseconds.
	pub fn duration_ms(&self) -> i64 {
		self.duration_ms
	}

	/// Bounds of the frame image, anchored at the origin.
	pub fn bounds(&self) -> Rect {
		Rect::new(0, 0, self.image.width(), self.image.height())
	}

	/// Region of the sheet image this frame was cut from.
	pub fn region(&self) -> Rect {
		self.region
	}

	/// Placement of the trimmed image inside the untrimmed frame.
	pub fn source_rect(&self) -> Rect {
		self.source_rect
	}

	/// Size of the untrimmed frame.
	pub fn source_size(&self) -> Size {
		self.source_size
	}

	/// Offset to draw the trimmed image at so it lines up with untrimmed frames.
	pub fn packed_offset(&self) -> (u32, u32) {
		(self.source_rect.x, self.source_rect.y)
	}
}

impl std::fmt::Display for Frame {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Frame #{} ({}x{}, {} ms)",
			self.ordinal,
			self.image.width(),
			self.image.height(),
			self.duration_ms
		)
	}
}
