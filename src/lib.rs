//! aurora-sky: animated night-sky background for the web.
//!
//! This crate provides a WASM-based background that paints a twinkling
//! starfield, drifting aurora ribbons and falling meteors onto three stacked
//! canvases, plus a small control strip for the aurora and meteors.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::sky::{SkyBackground, SkyConfig, SkyControls, SkyHandle};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("aurora-sky: logging initialized");
}

/// Load sky configuration from a script element with id="sky-config".
/// Expected format: JSON object with any subset of [`SkyConfig`] fields.
fn load_config() -> Option<SkyConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("sky-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SkyConfig>(&json_text) {
		Ok(config) => {
			info!("aurora-sky: loaded config {:?}", config);
			Some(config)
		}
		Err(e) => {
			warn!("aurora-sky: failed to parse sky config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads optional configuration from the DOM and renders the sky with its controls.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default().sanitize();
	let sky = SkyHandle::default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Aurora Sky" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<SkyBackground handle=sky.clone() config=config />
		<div class="sky-overlay">
			<SkyControls handle=sky />
		</div>
	}
}
