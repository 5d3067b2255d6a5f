//! The drawing surface the renderer paints on.
//!
//! [`Surface`] is the narrow set of 2D primitives the backdrop needs. The browser
//! implementation forwards to `CanvasRenderingContext2d`; tests substitute a
//! recorder.

use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::viewport::CanvasDimensions;

/// Soft shadow drawn around a filled shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Glow {
	pub blur: f64,
	/// CSS color of the halo.
	pub color: String,
}

/// 2D drawing primitives, all in logical pixel coordinates.
pub trait Surface {
	/// Size the backing store for `dims` and make drawing use logical coordinates.
	fn configure(&mut self, dims: &CanvasDimensions);

	/// Clear the rectangle to transparent.
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

	/// Fill a rectangle with a linear gradient running from `from` to `to`.
	/// `stops` are `(offset, css color)` pairs.
	fn fill_linear_gradient(
		&mut self,
		rect: (f64, f64, f64, f64),
		from: (f64, f64),
		to: (f64, f64),
		stops: &[(f64, String)],
	);

	/// Fill a disk, optionally with a glow halo.
	fn fill_circle(&mut self, center: (f64, f64), radius: f64, fill: &str, glow: Option<&Glow>);

	/// Stroke a straight line segment.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &str, width: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn configure(&mut self, dims: &CanvasDimensions) {
		if let Some(canvas) = self.canvas() {
			resize_canvas(&canvas, dims);
		}
		let ratio = dims.pixel_ratio;
		let _ = self.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
	}

	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
	}

	fn fill_linear_gradient(
		&mut self,
		rect: (f64, f64, f64, f64),
		from: (f64, f64),
		to: (f64, f64),
		stops: &[(f64, String)],
	) {
		let gradient = self.create_linear_gradient(from.0, from.1, to.0, to.1);
		for (offset, color) in stops {
			let _ = gradient.add_color_stop(*offset as f32, color);
		}

		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.fill_rect(rect.0, rect.1, rect.2, rect.3);
	}

	fn fill_circle(&mut self, center: (f64, f64), radius: f64, fill: &str, glow: Option<&Glow>) {
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(fill);
		if let Some(glow) = glow {
			self.set_shadow_blur(glow.blur);
			self.set_shadow_color(&glow.color);
		}
		self.fill();
		self.set_shadow_blur(0.0);
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &str, width: f64) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(stroke);
		self.set_line_width(width);
		self.stroke();
	}
}

/// Give the canvas a backing store of `floor(logical * ratio)` pixels while
/// keeping its CSS box at the logical size.
fn resize_canvas(canvas: &HtmlCanvasElement, dims: &CanvasDimensions) {
	canvas.set_width(dims.backing_width());
	canvas.set_height(dims.backing_height());

	let style = canvas.style();
	let _ = style.set_property("width", &format!("{}px", dims.width));
	let _ = style.set_property("height", &format!("{}px", dims.height));
}

#[cfg(test)]
pub(crate) mod recording {
	//! A [`Surface`] that records every call, for renderer tests.

	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawOp {
		Configure(CanvasDimensions),
		Clear {
			width: f64,
			height: f64,
		},
		Gradient {
			from: (f64, f64),
			to: (f64, f64),
			stops: Vec<(f64, String)>,
		},
		Circle {
			center: (f64, f64),
			radius: f64,
			fill: String,
			glow: Option<Glow>,
		},
		Line {
			from: (f64, f64),
			to: (f64, f64),
			stroke: String,
			width: f64,
		},
	}

	#[derive(Debug, Default)]
	pub struct RecordingSurface {
		pub ops: Vec<DrawOp>,
	}

	impl RecordingSurface {
		pub fn lines(&self) -> Vec<&DrawOp> {
			self.ops
				.iter()
				.filter(|op| matches!(op, DrawOp::Line { .. }))
				.collect()
		}

		pub fn circles(&self) -> Vec<&DrawOp> {
			self.ops
				.iter()
				.filter(|op| matches!(op, DrawOp::Circle { .. }))
				.collect()
		}
	}

	impl Surface for RecordingSurface {
		fn configure(&mut self, dims: &CanvasDimensions) {
			self.ops.push(DrawOp::Configure(*dims));
		}

		fn clear_rect(&mut self, _x: f64, _y: f64, width: f64, height: f64) {
			self.ops.push(DrawOp::Clear { width, height });
		}

		fn fill_linear_gradient(
			&mut self,
			_rect: (f64, f64, f64, f64),
			from: (f64, f64),
			to: (f64, f64),
			stops: &[(f64, String)],
		) {
			self.ops.push(DrawOp::Gradient {
				from,
				to,
				stops: stops.to_vec(),
			});
		}

		fn fill_circle(&mut self, center: (f64, f64), radius: f64, fill: &str, glow: Option<&Glow>) {
			self.ops.push(DrawOp::Circle {
				center,
				radius,
				fill: fill.to_string(),
				glow: glow.cloned(),
			});
		}

		fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &str, width: f64) {
			self.ops.push(DrawOp::Line {
				from,
				to,
				stroke: stroke.to_string(),
				width,
			});
		}
	}
}
