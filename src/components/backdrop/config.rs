//! Startup configuration for the backdrop.

use log::warn;
use serde::Deserialize;

/// Upper bound on the particle count. Link drawing visits every pair each frame.
pub const MAX_PARTICLE_CAP: usize = 600;

/// Upper bound on the initial speed, in px per tick.
pub const MAX_SPEED_CAP: f64 = 20.0;

/// Tunable parameters, fixed for the lifetime of a backdrop.
///
/// Every field has a default, so a partial JSON object such as
/// `{ "max_particles": 60 }` is a valid configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackdropConfig {
	/// Number of particles seeded on startup and after every resize.
	pub max_particles: usize,
	/// Distance (logical px) below which two particles are linked.
	pub link_distance: f64,
	/// Distance (logical px) within which the pointer pushes particles around.
	pub pointer_radius: f64,
	/// Initial velocity components are sampled from `[-max_speed, max_speed]` px/tick.
	pub max_speed: f64,
	/// Particle radius range `[min, max]`.
	pub size_range: (f64, f64),
	/// Particle base opacity range `[min, max]`.
	pub alpha_range: (f64, f64),
	/// Coefficient of the angular pull term of the pointer force.
	pub pull_strength: f64,
	/// Coefficient of the linear repulsion term of the pointer force.
	pub repulsion: f64,
	/// Pointer beam reach, as a fraction of `link_distance`.
	pub beam_reach: f64,
	/// Theme preset name.
	pub theme: String,
}

impl Default for BackdropConfig {
	fn default() -> Self {
		Self {
			max_particles: 110,
			link_distance: 120.0,
			pointer_radius: 140.0,
			max_speed: 0.6,
			size_range: (1.0, 2.2),
			alpha_range: (0.35, 0.75),
			pull_strength: 0.02,
			repulsion: 0.000_04,
			beam_reach: 0.9,
			theme: "aurora".into(),
		}
	}
}

impl BackdropConfig {
	/// Parse a JSON configuration object.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str::<Self>(text).map(Self::sanitized)
	}

	/// Normalize out-of-range values so every downstream computation stays total.
	pub fn sanitized(mut self) -> Self {
		let defaults = Self::default();

		if self.max_particles > MAX_PARTICLE_CAP {
			warn!(
				"particle-backdrop: max_particles {} capped at {}",
				self.max_particles, MAX_PARTICLE_CAP
			);
			self.max_particles = MAX_PARTICLE_CAP;
		}
		self.link_distance = positive_or(self.link_distance, defaults.link_distance);
		self.pointer_radius = positive_or(self.pointer_radius, defaults.pointer_radius);
		self.beam_reach = positive_or(self.beam_reach, defaults.beam_reach);
		self.max_speed = positive_or(self.max_speed, defaults.max_speed).min(MAX_SPEED_CAP);
		self.pull_strength = finite_or(self.pull_strength, defaults.pull_strength);
		self.repulsion = finite_or(self.repulsion, defaults.repulsion);

		self.size_range = ordered(self.size_range, defaults.size_range);
		if self.size_range.0 <= 0.0 {
			self.size_range = defaults.size_range;
		}

		let (lo, hi) = ordered(self.alpha_range, defaults.alpha_range);
		self.alpha_range = (lo.clamp(0.01, 1.0), hi.clamp(0.01, 1.0));

		self
	}
}

fn positive_or(value: f64, fallback: f64) -> f64 {
	if value.is_finite() && value > 0.0 {
		value
	} else {
		fallback
	}
}

fn finite_or(value: f64, fallback: f64) -> f64 {
	if value.is_finite() { value } else { fallback }
}

fn ordered((a, b): (f64, f64), fallback: (f64, f64)) -> (f64, f64) {
	if !a.is_finite() || !b.is_finite() {
		return fallback;
	}
	if a <= b { (a, b) } else { (b, a) }
}
