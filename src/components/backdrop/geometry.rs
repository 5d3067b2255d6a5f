//! Sampling and planar geometry helpers shared by the store, physics and renderer.

use rand::Rng;

/// Uniform sample in `[min, max)`. Returns `min` when the range is empty or
/// too wide to sample.
pub fn random_in<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
	if !(max > min) || !(max - min).is_finite() {
		return min;
	}
	rng.gen_range(min..max)
}

/// Euclidean distance between two points.
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
	(a.0 - b.0).hypot(a.1 - b.1)
}

/// Angle of the vector pointing from `from` to `to`, in radians.
pub fn angle(from: (f64, f64), to: (f64, f64)) -> f64 {
	(to.1 - from.1).atan2(to.0 - from.0)
}

/// Linear closeness factor: 1.0 at distance zero, 0.0 at `reach`.
///
/// Callers only draw when `distance < reach`, so the result stays in `(0, 1]`
/// for anything that ends up on screen.
pub fn closeness(distance: f64, reach: f64) -> f64 {
	1.0 - distance / reach
}
