//! Visual theming for the backdrop.
//!
//! Colors, the two-hue particle palette, and the glow/line styling used by the renderer.

use log::warn;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// HSLA color, the native color space for particles since they are picked by hue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
	/// Hue in degrees.
	pub h: f64,
	/// Saturation in percent.
	pub s: f64,
	/// Lightness in percent.
	pub l: f64,
	pub a: f64,
}

impl Hsla {
	pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
		Self { h, s, l, a }
	}

	pub fn to_css(self) -> String {
		format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
	}
}

/// Ambient diagonal wash painted under everything else.
#[derive(Clone, Debug)]
pub struct WashStyle {
	/// Color at the top-left corner.
	pub start: Color,
	/// Color at the bottom-right corner.
	pub end: Color,
}

/// Particle disk styling.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// The two hues a particle may be assigned, with equal probability.
	pub hues: [f64; 2],
	pub saturation: f64,
	pub lightness: f64,
	/// Shadow blur radius of the halo.
	pub glow_blur: f64,
	/// Opacity of the halo color.
	pub glow_alpha: f64,
}

/// Styling for a family of straight lines (particle links or pointer beams).
#[derive(Clone, Debug)]
pub struct LineStyle {
	pub lightness: f64,
	/// Opacity at zero distance; fades linearly to 0 at the reach.
	pub max_alpha: f64,
	pub width: f64,
}

/// The glowing marker drawn at the pointer location.
#[derive(Clone, Debug)]
pub struct MarkerStyle {
	pub radius: f64,
	pub fill: Color,
	pub glow: Color,
	pub glow_blur: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub wash: WashStyle,
	pub particle: ParticleStyle,
	pub link: LineStyle,
	pub beam: LineStyle,
	pub marker: MarkerStyle,
}

impl Theme {
	/// Cyan and violet on a faint diagonal wash (default)
	pub fn aurora() -> Self {
		Self {
			name: "aurora",
			wash: WashStyle {
				start: Color::rgba(0, 229, 255, 0.04),
				end: Color::rgba(168, 85, 247, 0.04),
			},
			particle: ParticleStyle {
				hues: [186.0, 276.0],
				saturation: 100.0,
				lightness: 60.0,
				glow_blur: 12.0,
				glow_alpha: 0.7,
			},
			link: LineStyle {
				lightness: 65.0,
				max_alpha: 0.45,
				width: 1.0,
			},
			beam: LineStyle {
				lightness: 65.0,
				max_alpha: 0.55,
				width: 1.2,
			},
			marker: MarkerStyle {
				radius: 2.2,
				fill: Color::rgba(255, 255, 255, 0.6),
				glow: Color::rgba(255, 255, 255, 0.9),
				glow_blur: 12.0,
			},
		}
	}

	/// Warm amber and gold
	pub fn ember() -> Self {
		Self {
			name: "ember",
			wash: WashStyle {
				start: Color::rgba(255, 120, 40, 0.04),
				end: Color::rgba(250, 204, 21, 0.04),
			},
			particle: ParticleStyle {
				hues: [12.0, 42.0],
				saturation: 95.0,
				lightness: 58.0,
				glow_blur: 12.0,
				glow_alpha: 0.7,
			},
			link: LineStyle {
				lightness: 62.0,
				max_alpha: 0.4,
				width: 1.0,
			},
			beam: LineStyle {
				lightness: 65.0,
				max_alpha: 0.55,
				width: 1.2,
			},
			marker: MarkerStyle {
				radius: 2.2,
				fill: Color::rgb(255, 236, 200).with_alpha(0.6),
				glow: Color::rgb(255, 236, 200).with_alpha(0.9),
				glow_blur: 12.0,
			},
		}
	}

	/// Look up a preset by name, falling back to [`Theme::aurora`].
	pub fn by_name(name: &str) -> Self {
		match name {
			"aurora" => Self::aurora(),
			"ember" => Self::ember(),
			other => {
				warn!("particle-backdrop: unknown theme {:?}, using aurora", other);
				Self::aurora()
			}
		}
	}

	/// Fill color of a particle disk.
	pub fn particle_fill(&self, hue: f64, alpha: f64) -> Hsla {
		Hsla::new(hue, self.particle.saturation, self.particle.lightness, alpha)
	}

	/// Halo color of a particle disk.
	pub fn particle_glow(&self, hue: f64) -> Hsla {
		Hsla::new(
			hue,
			self.particle.saturation,
			self.particle.lightness,
			self.particle.glow_alpha,
		)
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::aurora()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hsla_css() {
		assert_eq!(
			Hsla::new(186.0, 100.0, 60.0, 0.5).to_css(),
			"hsla(186, 100%, 60%, 0.5)"
		);
	}

	#[test]
	fn color_css() {
		assert_eq!(
			Color::rgba(0, 229, 255, 0.04).to_css(),
			"rgba(0, 229, 255, 0.04)"
		);
		assert_eq!(Color::rgb(1, 2, 3).with_alpha(0.5).a, 0.5);
	}

	#[test]
	fn unknown_theme_falls_back() {
		assert_eq!(Theme::by_name("ember").name, "ember");
		assert_eq!(Theme::by_name("neon").name, "aurora");
	}

	#[test]
	fn palette_has_two_distinct_hues() {
		for theme in [Theme::aurora(), Theme::ember()] {
			assert_ne!(theme.particle.hues[0], theme.particle.hues[1]);
		}
	}
}
