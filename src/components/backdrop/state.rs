//! Backdrop state: the context object every frame reads and every event writes.
//!
//! Owns the particle store, the pointer, the canvas dimensions, and the random
//! source used for seeding. Event handlers and the frame loop share it through a
//! single `Rc<RefCell<_>>` on the one UI thread, so they never interleave.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::config::BackdropConfig;
use super::particles::{Particle, ParticleStore};
use super::physics;
use super::pointer::{PointerInput, PointerState};
use super::render;
use super::surface::Surface;
use super::theme::Theme;
use super::viewport::CanvasDimensions;

/// Complete backdrop state, mutated once per frame and on input events.
pub struct BackdropState {
	config: BackdropConfig,
	theme: Theme,
	dimensions: CanvasDimensions,
	pointer: PointerState,
	store: ParticleStore,
	rng: StdRng,
	/// Set while the store still has to be seeded for the current dimensions.
	reseed_pending: bool,
}

impl BackdropState {
	/// Build the state and seed particles over `dimensions` from an entropy-seeded RNG.
	pub fn new(config: BackdropConfig, dimensions: CanvasDimensions) -> Self {
		Self::with_rng(config, dimensions, StdRng::from_entropy())
	}

	/// Deterministic construction, for reproducible layouts.
	pub fn with_seed(config: BackdropConfig, dimensions: CanvasDimensions, seed: u64) -> Self {
		Self::with_rng(config, dimensions, StdRng::seed_from_u64(seed))
	}

	fn with_rng(config: BackdropConfig, dimensions: CanvasDimensions, rng: StdRng) -> Self {
		let config = config.sanitized();
		let mut state = Self {
			theme: Theme::by_name(&config.theme),
			pointer: PointerState::new(config.pointer_radius),
			store: ParticleStore::new(),
			reseed_pending: true,
			config,
			dimensions,
			rng,
		};
		state.reseed_or_defer();
		state
	}

	/// Startup configuration, already sanitized.
	pub fn config(&self) -> &BackdropConfig {
		&self.config
	}

	/// Theme resolved from the config's theme name.
	pub fn theme(&self) -> &Theme {
		&self.theme
	}

	/// Current canvas dimensions.
	pub fn dimensions(&self) -> &CanvasDimensions {
		&self.dimensions
	}

	/// Current pointer state.
	pub fn pointer(&self) -> &PointerState {
		&self.pointer
	}

	/// Live particles, in draw order.
	pub fn particles(&self) -> &[Particle] {
		self.store.particles()
	}

	/// Whether seeding is waiting for the canvas to get a positive area.
	pub fn reseed_pending(&self) -> bool {
		self.reseed_pending
	}

	/// Record a pointer or touch sample.
	pub fn apply_pointer(&mut self, input: PointerInput) {
		self.pointer.apply(input);
	}

	/// Swap in an explicit particle set in place of the random one.
	pub fn replace_particles(&mut self, particles: Vec<Particle>) {
		self.store.replace(particles);
		self.reseed_pending = false;
	}

	/// Viewport resize: adopt the new dimensions, reconfigure the surface, and
	/// replace the whole particle set.
	pub fn resize<S: Surface + ?Sized>(&mut self, dimensions: CanvasDimensions, surface: &mut S) {
		debug!(
			"particle-backdrop: resize to {}x{} @{}",
			dimensions.width, dimensions.height, dimensions.pixel_ratio
		);
		self.dimensions = dimensions;
		surface.configure(&self.dimensions);
		self.reseed_pending = true;
		self.reseed_or_defer();
	}

	/// Advance the simulation by one tick.
	pub fn tick(&mut self) {
		if self.reseed_pending {
			self.try_reseed();
		}
		physics::step(
			self.store.particles_mut(),
			&self.dimensions,
			&self.pointer,
			&self.config,
		);
	}

	/// One scheduled frame: tick, then draw.
	pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		self.tick();
		render::render(self, surface);
	}

	/// Seed now, or log once that seeding waits for a drawable canvas.
	fn reseed_or_defer(&mut self) {
		if !self.try_reseed() {
			debug!(
				"particle-backdrop: canvas is {}x{}, deferring reseed",
				self.dimensions.width, self.dimensions.height
			);
		}
	}

	/// Seed the store if the canvas is drawable. Silent, since ticks retry it.
	fn try_reseed(&mut self) -> bool {
		if !self.dimensions.is_drawable() {
			if !self.store.is_empty() {
				self.store.replace(Vec::new());
			}
			return false;
		}
		self.store.seed(
			self.config.max_particles,
			&self.dimensions,
			&self.config,
			&self.theme.particle,
			&mut self.rng,
		);
		self.reseed_pending = false;
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::backdrop::config::MAX_SPEED_CAP;
	use crate::components::backdrop::surface::recording::{DrawOp, RecordingSurface};

	fn dims(w: f64, h: f64) -> CanvasDimensions {
		CanvasDimensions::new(w, h, 2.0)
	}

	#[test]
	fn startup_seeds_max_particles() {
		let state = BackdropState::with_seed(BackdropConfig::default(), dims(800.0, 600.0), 9);
		assert_eq!(state.particles().len(), 110);
		assert!(!state.reseed_pending());
		assert_eq!(state.pointer().radius(), 140.0);
	}

	#[test]
	fn resize_reconfigures_and_reseeds_within_new_bounds() {
		let mut state = BackdropState::with_seed(BackdropConfig::default(), dims(800.0, 600.0), 9);
		let mut surface = RecordingSurface::default();

		state.resize(dims(400.0, 300.0), &mut surface);

		assert_eq!(state.dimensions().width, 400.0);
		assert_eq!(state.dimensions().height, 300.0);
		assert_eq!(surface.ops, vec![DrawOp::Configure(dims(400.0, 300.0))]);
		assert_eq!(state.particles().len(), state.config().max_particles);
		assert!(
			state
				.particles()
				.iter()
				.all(|p| state.dimensions().contains(p.x, p.y))
		);
	}

	#[test]
	fn degenerate_canvas_defers_reseed_until_drawable() {
		let mut state = BackdropState::with_seed(BackdropConfig::default(), dims(0.0, 600.0), 9);
		assert!(state.particles().is_empty());
		assert!(state.reseed_pending());

		state.tick();
		assert!(state.particles().is_empty());

		let mut surface = RecordingSurface::default();
		state.resize(dims(0.0, 0.0), &mut surface);
		state.frame(&mut surface);
		assert!(state.reseed_pending());

		state.resize(dims(320.0, 240.0), &mut surface);
		assert_eq!(state.particles().len(), 110);
		assert!(!state.reseed_pending());
	}

	#[test]
	fn degenerate_resize_keeps_retrying_quietly() {
		let mut state = BackdropState::with_seed(BackdropConfig::default(), dims(800.0, 600.0), 9);
		let mut surface = RecordingSurface::default();
		state.resize(dims(800.0, 0.0), &mut surface);
		assert!(state.particles().is_empty());

		for _ in 0..120 {
			state.frame(&mut surface);
			assert!(state.reseed_pending());
			assert!(!state.try_reseed());
		}
		assert!(state.particles().is_empty());
		assert_eq!(surface.circles().len(), 0);

		state.dimensions = dims(800.0, 600.0);
		state.tick();
		assert!(!state.reseed_pending());
		assert_eq!(state.particles().len(), 110);
	}

	#[test]
	fn huge_configured_speed_seeds_without_panicking() {
		let config = BackdropConfig::from_json(r#"{ "max_speed": 1e308 }"#).unwrap();
		let state = BackdropState::with_seed(config, dims(800.0, 600.0), 9);
		assert_eq!(state.particles().len(), 110);
		assert!(
			state
				.particles()
				.iter()
				.all(|p| p.vx.abs() <= MAX_SPEED_CAP && p.vy.abs() <= MAX_SPEED_CAP)
		);
	}

	#[test]
	fn pending_reseed_happens_on_tick() {
		let mut state = BackdropState::with_seed(BackdropConfig::default(), dims(0.0, 0.0), 9);
		state.dimensions = dims(100.0, 100.0);
		state.tick();
		assert_eq!(state.particles().len(), 110);
	}

	#[test]
	fn tick_keeps_visual_attributes() {
		let mut state = BackdropState::with_seed(BackdropConfig::default(), dims(800.0, 600.0), 9);
		state.apply_pointer(PointerInput::Move(400.0, 300.0));
		let before: Vec<(f64, f64, f64)> = state
			.particles()
			.iter()
			.map(|p| (p.size(), p.hue(), p.alpha()))
			.collect();
		for _ in 0..30 {
			state.tick();
		}
		let after: Vec<(f64, f64, f64)> = state
			.particles()
			.iter()
			.map(|p| (p.size(), p.hue(), p.alpha()))
			.collect();
		assert_eq!(before, after);
	}

	#[test]
	fn frame_ticks_then_renders() {
		let mut state = BackdropState::with_seed(BackdropConfig::default(), dims(800.0, 600.0), 9);
		state.replace_particles(vec![Particle::new(10.0, 10.0, 1.0, 0.0, 2.0, 186.0, 0.5)]);
		let mut surface = RecordingSurface::default();
		state.frame(&mut surface);

		assert_eq!(state.particles()[0].x, 11.0);
		assert!(matches!(
			surface.circles()[0],
			DrawOp::Circle {
				center: (11.0, 10.0),
				..
			}
		));
	}

	#[test]
	fn same_seed_same_layout() {
		let a = BackdropState::with_seed(BackdropConfig::default(), dims(800.0, 600.0), 5);
		let b = BackdropState::with_seed(BackdropConfig::default(), dims(800.0, 600.0), 5);
		assert_eq!(a.particles(), b.particles());
	}
}
