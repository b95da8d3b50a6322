//! homepage-sky: animated constellation background for a personal homepage.
//!
//! This crate provides a WASM canvas component that renders drifting,
//! pulsing particles linked by fading lines, a pointer that joins the
//! constellation, and shooting stars crossing the sky.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::constellation::{ConstellationCanvas, SkyConfig, SkyState};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("homepage-sky: logging initialized");
}

/// Parse sky settings, falling back to defaults on malformed input.
pub fn parse_sky_config(json_text: &str) -> SkyConfig {
	match serde_json::from_str::<SkyConfig>(json_text) {
		Ok(config) => config,
		Err(e) => {
			warn!("homepage-sky: failed to parse sky config: {}", e);
			SkyConfig::default()
		}
	}
}

/// Load sky settings from a script element with id="sky-config".
/// Expected format: JSON object with any subset of [`SkyConfig`] fields.
fn load_sky_config() -> Option<SkyConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("sky-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	let config = parse_sky_config(&json_text);
	info!(
		"homepage-sky: loaded config ({} particles, {} shooting stars max)",
		config.particle_count, config.max_shooting_stars
	);
	Some(config)
}

/// Main application component.
/// Loads sky settings from the DOM and renders the background behind the page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_sky_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Homepage" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="sky-background">
			<ConstellationCanvas config=config fullscreen=true />
		</div>
	}
}
