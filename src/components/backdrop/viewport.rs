//! Canvas dimensions and device pixel scaling.
//!
//! # Coordinate Spaces
//!
//! - **Logical**: CSS pixels. Particles, the pointer and every drawing command
//!   live here.
//! - **Backing store**: physical pixels of the canvas bitmap, `floor(logical * ratio)`.
//!
//! The surface transform is set to `scale(ratio)` so drawing code never has to
//! think about physical pixels.

/// Logical canvas size plus the device pixel ratio it is rendered at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasDimensions {
	/// Logical width in CSS pixels.
	pub width: f64,
	/// Logical height in CSS pixels.
	pub height: f64,
	/// Physical pixels per logical pixel, never below 1.
	pub pixel_ratio: f64,
}

impl CanvasDimensions {
	pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
		let pixel_ratio = if pixel_ratio.is_finite() {
			pixel_ratio.max(1.0)
		} else {
			1.0
		};
		Self {
			width,
			height,
			pixel_ratio,
		}
	}

	/// Backing store width in physical pixels.
	pub fn backing_width(&self) -> u32 {
		(self.width * self.pixel_ratio).floor().max(0.0) as u32
	}

	/// Backing store height in physical pixels.
	pub fn backing_height(&self) -> u32 {
		(self.height * self.pixel_ratio).floor().max(0.0) as u32
	}

	/// Whether the canvas has a positive area that particles can be sampled over.
	pub fn is_drawable(&self) -> bool {
		self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
	}

	/// Whether a point lies within `[0, width] x [0, height]`.
	pub fn contains(&self, x: f64, y: f64) -> bool {
		(0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
	}
}
