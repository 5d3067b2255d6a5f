//! Last known pointer position.

/// An input sample, already reduced to logical canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
	/// Mouse or pen moved to `(x, y)`.
	Move(f64, f64),
	/// Touch start/move, carrying the first touch point if there is one.
	Touch(Option<(f64, f64)>),
	/// Mouse left the window or the last touch ended.
	Leave,
}

/// Pointer location (or absence) plus its fixed interaction radius.
///
/// Only the latest sample matters; every input overwrites the previous one.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerState {
	position: Option<(f64, f64)>,
	radius: f64,
}

impl PointerState {
	/// Absent pointer with the given interaction radius.
	pub fn new(radius: f64) -> Self {
		Self {
			position: None,
			radius,
		}
	}

	/// Overwrite the state with the latest input sample.
	pub fn apply(&mut self, input: PointerInput) {
		self.position = match input {
			PointerInput::Move(x, y) => Some((x, y)),
			PointerInput::Touch(point) => point,
			PointerInput::Leave => None,
		};
		// Non-finite coordinates are treated as no pointer at all.
		if let Some((x, y)) = self.position {
			if !x.is_finite() || !y.is_finite() {
				self.position = None;
			}
		}
	}

	/// Last known location, or `None` when the pointer is absent.
	pub fn position(&self) -> Option<(f64, f64)> {
		self.position
	}

	/// Interaction radius in logical px.
	pub fn radius(&self) -> f64 {
		self.radius
	}
}
