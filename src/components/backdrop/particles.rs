//! Particle records and the store that owns them.

use rand::Rng;

use super::config::BackdropConfig;
use super::geometry::random_in;
use super::theme::ParticleStyle;
use super::viewport::CanvasDimensions;

/// A single floating particle.
///
/// Position and velocity change every tick; size, hue and alpha are fixed at
/// creation and only readable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position, logical px.
	pub x: f64,
	/// Vertical position, logical px.
	pub y: f64,
	/// Horizontal velocity, px per tick.
	pub vx: f64,
	/// Vertical velocity, px per tick.
	pub vy: f64,
	size: f64,
	hue: f64,
	alpha: f64,
}

impl Particle {
	/// Particle with explicit position, velocity and fixed visual attributes.
	pub fn new(x: f64, y: f64, vx: f64, vy: f64, size: f64, hue: f64, alpha: f64) -> Self {
		Self {
			x,
			y,
			vx,
			vy,
			size,
			hue,
			alpha,
		}
	}

	/// Sample a particle anywhere on the canvas.
	pub fn random<R: Rng + ?Sized>(
		rng: &mut R,
		bounds: &CanvasDimensions,
		config: &BackdropConfig,
		style: &ParticleStyle,
	) -> Self {
		let (size_min, size_max) = config.size_range;
		let (alpha_min, alpha_max) = config.alpha_range;
		let hue = if rng.gen_bool(0.5) {
			style.hues[0]
		} else {
			style.hues[1]
		};

		Self {
			x: random_in(rng, 0.0, bounds.width),
			y: random_in(rng, 0.0, bounds.height),
			vx: random_in(rng, -config.max_speed, config.max_speed),
			vy: random_in(rng, -config.max_speed, config.max_speed),
			size: random_in(rng, size_min, size_max),
			hue,
			alpha: random_in(rng, alpha_min, alpha_max),
		}
	}

	/// Current `(x, y)` in logical px.
	pub fn position(&self) -> (f64, f64) {
		(self.x, self.y)
	}

	/// Disk radius.
	pub fn size(&self) -> f64 {
		self.size
	}

	/// Hue in degrees, one of the theme's two palette hues.
	pub fn hue(&self) -> f64 {
		self.hue
	}

	/// Base opacity.
	pub fn alpha(&self) -> f64 {
		self.alpha
	}
}

/// Owns the live particle set. Particles are only ever replaced wholesale.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
	particles: Vec<Particle>,
}

impl ParticleStore {
	/// An empty store; call [`ParticleStore::seed`] to populate it.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the whole collection with `count` freshly sampled particles.
	pub fn seed<R: Rng + ?Sized>(
		&mut self,
		count: usize,
		bounds: &CanvasDimensions,
		config: &BackdropConfig,
		style: &ParticleStyle,
		rng: &mut R,
	) {
		self.particles = (0..count)
			.map(|_| Particle::random(rng, bounds, config, style))
			.collect();
	}

	/// Replace the whole collection with an explicit set of particles.
	pub fn replace(&mut self, particles: Vec<Particle>) {
		self.particles = particles;
	}

	/// Particles in insertion (draw) order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Mutable view for the physics step. The slice cannot grow or shrink.
	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	/// Number of live particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the store holds no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::backdrop::theme::Theme;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn seeded(count: usize, width: f64, height: f64) -> ParticleStore {
		let mut store = ParticleStore::new();
		let config = BackdropConfig::default();
		let theme = Theme::default();
		let mut rng = StdRng::seed_from_u64(42);
		store.seed(
			count,
			&CanvasDimensions::new(width, height, 1.0),
			&config,
			&theme.particle,
			&mut rng,
		);
		store
	}

	#[test]
	fn seed_produces_requested_count() {
		assert_eq!(seeded(110, 800.0, 600.0).len(), 110);
		assert!(seeded(0, 800.0, 600.0).is_empty());
	}

	#[test]
	fn seeded_particles_respect_configured_ranges() {
		let config = BackdropConfig::default();
		let hues = Theme::default().particle.hues;
		let bounds = CanvasDimensions::new(800.0, 600.0, 1.0);

		for p in seeded(500, 800.0, 600.0).particles() {
			assert!(bounds.contains(p.x, p.y), "{:?} out of bounds", p.position());
			assert!(hues.contains(&p.hue()));
			assert!(p.size() >= config.size_range.0 && p.size() <= config.size_range.1);
			assert!(p.alpha() >= config.alpha_range.0 && p.alpha() <= config.alpha_range.1);
			assert!(p.vx.abs() <= config.max_speed && p.vy.abs() <= config.max_speed);
		}
	}

	#[test]
	fn both_hues_are_used() {
		let hues = Theme::default().particle.hues;
		let store = seeded(200, 800.0, 600.0);
		for hue in hues {
			assert!(store.particles().iter().any(|p| p.hue() == hue));
		}
	}

	#[test]
	fn reseed_replaces_everything() {
		let mut store = seeded(20, 800.0, 600.0);
		let before = store.particles().to_vec();
		let mut rng = StdRng::seed_from_u64(7);
		store.seed(
			5,
			&CanvasDimensions::new(100.0, 100.0, 1.0),
			&BackdropConfig::default(),
			&Theme::default().particle,
			&mut rng,
		);
		assert_eq!(store.len(), 5);
		assert!(store.particles().iter().all(|p| !before.contains(p)));
		assert!(store.particles().iter().all(|p| p.x <= 100.0 && p.y <= 100.0));
	}
}
