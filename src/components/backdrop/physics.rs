//! Per-tick particle motion.
//!
//! Each tick, for every particle in order:
//! 1. Euler step: `position += velocity`.
//! 2. Soft bounce: a velocity component flips sign once its coordinate is at or
//!    past an edge. Positions are never clamped.
//! 3. Pointer swirl: inside the pointer radius, a pull along the pointer→particle
//!    angle (stronger when closer) blended with a weak linear push away.
//!
//! Velocity is never damped. Speed is measured in px per tick, so the visual
//! speed follows the display refresh rate.

use super::config::BackdropConfig;
use super::geometry::{angle, distance};
use super::particles::Particle;
use super::pointer::PointerState;
use super::viewport::CanvasDimensions;

/// Advance every particle by one tick.
pub fn step(
	particles: &mut [Particle],
	bounds: &CanvasDimensions,
	pointer: &PointerState,
	config: &BackdropConfig,
) {
	for p in particles.iter_mut() {
		integrate(p);
		reflect(p, bounds);
		if let Some(origin) = pointer.position() {
			apply_pointer_force(p, origin, pointer.radius(), config);
		}
	}
}

fn integrate(p: &mut Particle) {
	p.x += p.vx;
	p.y += p.vy;
}

fn reflect(p: &mut Particle, bounds: &CanvasDimensions) {
	if p.x <= 0.0 || p.x >= bounds.width {
		p.vx = -p.vx;
	}
	if p.y <= 0.0 || p.y >= bounds.height {
		p.vy = -p.vy;
	}
}

fn apply_pointer_force(p: &mut Particle, origin: (f64, f64), radius: f64, config: &BackdropConfig) {
	let (dx, dy) = (p.x - origin.0, p.y - origin.1);
	let dist = distance(p.position(), origin);
	if dist >= radius {
		return;
	}

	let force = (radius - dist) / radius;
	let theta = angle(origin, p.position());
	p.vx += theta.cos() * config.pull_strength * force - dx * config.repulsion;
	p.vy += theta.sin() * config.pull_strength * force - dy * config.repulsion;
}
