//! Frame rendering for the backdrop.
//!
//! Draw order matters for layering:
//! 1. Clear, then the ambient gradient wash
//! 2. Particle disks with their glow, in store order
//! 3. Links between every close pair
//! 4. Pointer beams and the pointer marker, when a pointer is present
//!
//! Links visit every unordered pair, O(n²) per frame. The particle count cap in
//! the config keeps that bounded; a spatial grid is the way out if it ever is not.

use super::geometry::{closeness, distance};
use super::particles::Particle;
use super::state::BackdropState;
use super::surface::{Glow, Surface};
use super::theme::{Hsla, Theme};

/// A line between particles `a` and `b` (`a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub a: usize,
	pub b: usize,
	/// `1 - distance / link_distance`, in `(0, 1]`.
	pub closeness: f64,
}

/// Every unordered pair closer than `link_distance`, each visited once.
pub fn links(particles: &[Particle], link_distance: f64) -> impl Iterator<Item = Link> + '_ {
	particles.iter().enumerate().flat_map(move |(i, a)| {
		particles[i + 1..]
			.iter()
			.enumerate()
			.filter_map(move |(offset, b)| {
				let dist = distance(a.position(), b.position());
				(dist < link_distance).then(|| Link {
					a: i,
					b: i + 1 + offset,
					closeness: closeness(dist, link_distance),
				})
			})
	})
}

/// Particles within `reach` of the pointer, as `(index, closeness)`.
pub fn pointer_beams(
	particles: &[Particle],
	origin: (f64, f64),
	reach: f64,
) -> impl Iterator<Item = (usize, f64)> + '_ {
	particles.iter().enumerate().filter_map(move |(i, p)| {
		let dist = distance(p.position(), origin);
		(dist < reach).then(|| (i, closeness(dist, reach)))
	})
}

/// Renders one complete frame.
pub fn render<S: Surface + ?Sized>(state: &BackdropState, surface: &mut S) {
	let dims = state.dimensions();
	surface.clear_rect(0.0, 0.0, dims.width, dims.height);

	draw_wash(state, surface);
	draw_particles(state.particles(), surface, state.theme());
	draw_links(state, surface);

	if let Some(origin) = state.pointer().position() {
		draw_pointer(state, surface, origin);
	}
}

fn draw_wash<S: Surface + ?Sized>(state: &BackdropState, surface: &mut S) {
	let dims = state.dimensions();
	let wash = &state.theme().wash;
	surface.fill_linear_gradient(
		(0.0, 0.0, dims.width, dims.height),
		(0.0, 0.0),
		(dims.width, dims.height),
		&[(0.0, wash.start.to_css()), (1.0, wash.end.to_css())],
	);
}

fn draw_particles<S: Surface + ?Sized>(particles: &[Particle], surface: &mut S, theme: &Theme) {
	for p in particles {
		let glow = Glow {
			blur: theme.particle.glow_blur,
			color: theme.particle_glow(p.hue()).to_css(),
		};
		surface.fill_circle(
			p.position(),
			p.size(),
			&theme.particle_fill(p.hue(), p.alpha()).to_css(),
			Some(&glow),
		);
	}
}

fn draw_links<S: Surface + ?Sized>(state: &BackdropState, surface: &mut S) {
	let particles = state.particles();
	let style = &state.theme().link;
	let saturation = state.theme().particle.saturation;

	for link in links(particles, state.config().link_distance) {
		let (a, b) = (&particles[link.a], &particles[link.b]);
		let hue = (a.hue() + b.hue()) / 2.0;
		let color = Hsla::new(hue, saturation, style.lightness, link.closeness * style.max_alpha);
		surface.stroke_line(a.position(), b.position(), &color.to_css(), style.width);
	}
}

fn draw_pointer<S: Surface + ?Sized>(state: &BackdropState, surface: &mut S, origin: (f64, f64)) {
	let particles = state.particles();
	let theme = state.theme();
	let reach = state.config().link_distance * state.config().beam_reach;

	for (i, t) in pointer_beams(particles, origin, reach) {
		let p = &particles[i];
		let color = Hsla::new(
			p.hue(),
			theme.particle.saturation,
			theme.beam.lightness,
			t * theme.beam.max_alpha,
		);
		surface.stroke_line(origin, p.position(), &color.to_css(), theme.beam.width);
	}

	let marker = &theme.marker;
	let glow = Glow {
		blur: marker.glow_blur,
		color: marker.glow.to_css(),
	};
	surface.fill_circle(origin, marker.radius, &marker.fill.to_css(), Some(&glow));
}
