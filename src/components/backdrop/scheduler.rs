//! Display-refresh driven frame loop.
//!
//! Each frame runs the callback once and then re-arms itself with
//! `requestAnimationFrame`, so control returns to the browser between frames.
//! Elapsed time is not measured; one callback is one tick.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running `requestAnimationFrame` chain.
///
/// The loop runs for the lifetime of the page. Dropping the handle does not stop it,
/// since the scheduled closure keeps itself alive.
pub struct FrameLoop {
	_callback: FrameCallback,
}

impl FrameLoop {
	/// Start calling `on_frame` once per display refresh.
	///
	/// Fails if the browser rejects the first `requestAnimationFrame`.
	pub fn start(window: &Window, mut on_frame: impl FnMut() + 'static) -> Result<Self, JsValue> {
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let rearm = callback.clone();

		*callback.borrow_mut() = Some(Closure::new(move || {
			on_frame();
			if let Some(ref cb) = *rearm.borrow() {
				request_frame(cb);
			}
		}));

		if let Some(ref cb) = *callback.borrow() {
			window.request_animation_frame(cb.as_ref().unchecked_ref())?;
		}

		Ok(Self {
			_callback: callback,
		})
	}
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
	if let Some(window) = web_sys::window() {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}
