//! Leptos component mounting the backdrop canvas.
//!
//! The component creates a fixed, full-viewport canvas behind page content and
//! wires window listeners for resize, mouse and touch input. A
//! [`FrameLoop`] then ticks and renders the shared [`BackdropState`] once per
//! display refresh.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent,
	Window,
};

use super::config::BackdropConfig;
use super::pointer::PointerInput;
use super::scheduler::FrameLoop;
use super::state::BackdropState;
use super::surface::Surface;
use super::viewport::CanvasDimensions;

/// The browser pieces the frame loop and listeners share with the state.
struct BackdropContext {
	state: BackdropState,
	ctx: CanvasRenderingContext2d,
}

type SharedContext = Rc<RefCell<Option<BackdropContext>>>;

/// Window listeners, kept alive for as long as the component is mounted.
#[derive(Default)]
struct Listeners {
	resize: Option<Closure<dyn FnMut()>>,
	mouse: Vec<Closure<dyn FnMut(MouseEvent)>>,
	touch: Vec<Closure<dyn FnMut(TouchEvent)>>,
}

/// Renders the animated particle backdrop.
///
/// The canvas fills the viewport, ignores pointer hit-testing so page content
/// stays interactive, and reseeds whenever the window is resized. Pass a
/// `config` to override the defaults.
#[component]
pub fn ParticleBackdrop(#[prop(optional)] config: Option<BackdropConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: SharedContext = Rc::new(RefCell::new(None));
	let listeners: Rc<RefCell<Listeners>> = Rc::new(RefCell::new(Listeners::default()));
	let frame_loop: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));
	let config = config.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("particle-backdrop: no window, backdrop disabled");
			return;
		};
		let Some(mut ctx) = context_2d(&canvas) else {
			warn!("particle-backdrop: 2d context unavailable, backdrop disabled");
			return;
		};

		let dims = viewport_dimensions(&window);
		ctx.configure(&dims);
		let state = BackdropState::new(config.clone(), dims);
		info!(
			"particle-backdrop: {} particles on {}x{} @{}",
			state.particles().len(),
			dims.width,
			dims.height,
			dims.pixel_ratio
		);
		*context.borrow_mut() = Some(BackdropContext { state, ctx });

		register_listeners(&window, &context, &mut listeners.borrow_mut());

		let context_frame = context.clone();
		let started = FrameLoop::start(&window, move || {
			if let Some(ref mut c) = *context_frame.borrow_mut() {
				c.state.frame(&mut c.ctx);
			}
		});
		match started {
			Ok(handle) => *frame_loop.borrow_mut() = Some(handle),
			Err(e) => warn!("particle-backdrop: animation not started: {:?}", e),
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-backdrop"
			aria-hidden="true"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: 0;"
		/>
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Current logical viewport size and pixel ratio.
fn viewport_dimensions(window: &Window) -> CanvasDimensions {
	let width = window
		.inner_width()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0);
	let height = window
		.inner_height()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0);
	CanvasDimensions::new(width, height, window.device_pixel_ratio())
}

fn register_listeners(window: &Window, context: &SharedContext, listeners: &mut Listeners) {
	let context_resize = context.clone();
	let resize = Closure::<dyn FnMut()>::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		let dims = viewport_dimensions(&win);
		if let Some(ref mut c) = *context_resize.borrow_mut() {
			c.state.resize(dims, &mut c.ctx);
		}
	});
	let _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
	listeners.resize = Some(resize);

	let mouse_events: [(&str, fn(&MouseEvent) -> PointerInput); 2] = [
		("mousemove", |ev| {
			PointerInput::Move(ev.client_x() as f64, ev.client_y() as f64)
		}),
		("mouseleave", |_| PointerInput::Leave),
	];
	for (name, to_input) in mouse_events {
		let context_mouse = context.clone();
		let cb = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			if let Some(ref mut c) = *context_mouse.borrow_mut() {
				c.state.apply_pointer(to_input(&ev));
			}
		});
		let _ = window.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
		listeners.mouse.push(cb);
	}

	// Touch listeners are passive so scrolling is never blocked.
	let options = AddEventListenerOptions::new();
	options.set_passive(true);
	let touch_events: [(&str, fn(&TouchEvent) -> PointerInput); 3] = [
		("touchstart", first_touch),
		("touchmove", first_touch),
		("touchend", |_| PointerInput::Leave),
	];
	for (name, to_input) in touch_events {
		let context_touch = context.clone();
		let cb = Closure::<dyn FnMut(TouchEvent)>::new(move |ev: TouchEvent| {
			if let Some(ref mut c) = *context_touch.borrow_mut() {
				c.state.apply_pointer(to_input(&ev));
			}
		});
		let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
			name,
			cb.as_ref().unchecked_ref(),
			&options,
		);
		listeners.touch.push(cb);
	}
}

fn first_touch(ev: &TouchEvent) -> PointerInput {
	PointerInput::Touch(
		ev.touches()
			.get(0)
			.map(|t| (t.client_x() as f64, t.client_y() as f64)),
	)
}
