//! particle-backdrop: an animated particle-network background for web pages.
//!
//! This crate provides a WASM canvas component that draws drifting, linked
//! particles behind page content and reacts to the mouse and touch input.

use getrandom as _;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::backdrop::{BackdropConfig, BackdropState, CanvasDimensions, ParticleBackdrop};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-backdrop: logging initialized");
}

/// Load startup configuration from a script element with id="backdrop-config".
/// Expected format: a JSON object with any subset of [`BackdropConfig`] fields.
fn load_config() -> Option<BackdropConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("backdrop-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match BackdropConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"particle-backdrop: loaded config ({} particles, link {}px, pointer {}px)",
				config.max_particles, config.link_distance, config.pointer_radius
			);
			Some(config)
		}
		Err(e) => {
			warn!("particle-backdrop: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads the backdrop configuration from the DOM and mounts the canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackdrop config=config />
	}
}
