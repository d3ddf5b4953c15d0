//! Leptos components hosting the sky.
//!
//! [`SkyBackground`] stacks three full-viewport canvases (stars, aurora,
//! meteors), builds a [`Scene`] over them once all three are mounted, and
//! drives it with `requestAnimationFrame`. Window resizes resize the canvases
//! and rebuild the stars and aurora. [`SkyControls`] wires buttons to the
//! running scene through a shared [`SkyHandle`].

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use super::canvas::CanvasSurface;
use super::scene::{Driver, Layers, Scene};
use super::surface::Size;
use super::ticker::AnimationFrameTicker;
use super::types::SkyConfig;

const LAYER_STYLE: &str = "position: absolute; inset: 0; display: block;";

/// Shared access to the running sky, for controls living elsewhere in the view.
///
/// Empty until [`SkyBackground`] has mounted; every method is a no-op before that.
#[derive(Clone, Default)]
pub struct SkyHandle {
	driver: Rc<RefCell<Option<Driver<AnimationFrameTicker, CanvasSurface>>>>,
}

impl SkyHandle {
	fn with_scene<R>(&self, f: impl FnOnce(&mut Scene<CanvasSurface>) -> R) -> Option<R> {
		let driver = self.driver.borrow();
		let mut scene = driver.as_ref()?.scene().borrow_mut();
		Some(f(&mut scene))
	}

	pub fn is_mounted(&self) -> bool {
		self.driver.borrow().is_some()
	}

	/// Advance the aurora to its next color scheme.
	pub fn change_palette(&self) {
		self.with_scene(|s| s.change_palette());
	}

	/// Pause or resume the aurora; returns the new state once mounted.
	pub fn toggle_aurora(&self) -> Option<bool> {
		self.with_scene(|s| s.toggle_aurora())
	}

	/// Pause or resume the meteors; returns the new state once mounted.
	pub fn toggle_meteors(&self) -> Option<bool> {
		self.with_scene(|s| s.toggle_meteors())
	}

	/// Scale the aurora's speed; returns the clamped base speed once mounted.
	pub fn scale_aurora_speed(&self, factor: f64) -> Option<f64> {
		self.with_scene(|s| {
			s.set_aurora_speed(factor);
			s.aurora.base_speed()
		})
	}

	/// Stop the frame loop.
	pub fn stop(&self) {
		if let Some(driver) = self.driver.borrow().as_ref() {
			driver.stop();
		}
	}
}

fn viewport_size(window: &Window) -> Option<Size> {
	Some(Size::new(
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn acquire_layers(
	stars: HtmlCanvasElement,
	aurora: HtmlCanvasElement,
	particles: HtmlCanvasElement,
) -> Option<Layers<CanvasSurface>> {
	Some(Layers {
		stars: CanvasSurface::new(stars)?,
		aurora: CanvasSurface::new(aurora)?,
		particles: CanvasSurface::new(particles)?,
	})
}

/// Full-viewport animated night sky.
///
/// Nothing is drawn unless all three canvases provide a 2D context.
#[component]
pub fn SkyBackground(
	handle: SkyHandle,
	#[prop(optional)] config: SkyConfig,
) -> impl IntoView {
	let stars_ref = NodeRef::<leptos::html::Canvas>::new();
	let aurora_ref = NodeRef::<leptos::html::Canvas>::new();
	let particles_ref = NodeRef::<leptos::html::Canvas>::new();
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let (Some(stars), Some(aurora), Some(particles)) =
			(stars_ref.get(), aurora_ref.get(), particles_ref.get())
		else {
			return;
		};
		if handle.is_mounted() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};

		let Some(mut layers) = acquire_layers(stars.into(), aurora.into(), particles.into())
		else {
			warn!("aurora-sky: a sky canvas has no 2d context, not starting");
			return;
		};
		let Some(size) = viewport_size(&window) else {
			warn!("aurora-sky: viewport size unavailable, not starting");
			return;
		};
		layers.resize(size);

		let seed = js_sys::Date::now() as u64;
		let scene = Rc::new(RefCell::new(Scene::new(&config, layers, seed)));
		let driver = Driver::new(scene.clone(), Rc::new(AnimationFrameTicker::new(window.clone())));
		driver.start();
		info!(
			"aurora-sky: started at {}x{} with {} stars",
			size.width,
			size.height,
			scene.borrow().starfield.stars.len()
		);

		let scene_resize = scene.clone();
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(size) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			scene_resize.borrow_mut().resize(size);
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		*handle.driver.borrow_mut() = Some(driver);
	});

	view! {
		<div class="sky-background" style="position: fixed; inset: 0; pointer-events: none;">
			<canvas node_ref=stars_ref id="stars" style=LAYER_STYLE />
			<canvas node_ref=aurora_ref id="aurora" style=LAYER_STYLE />
			<canvas node_ref=particles_ref id="particles" style=LAYER_STYLE />
		</div>
	}
}

/// Buttons controlling a mounted [`SkyBackground`].
#[component]
pub fn SkyControls(handle: SkyHandle) -> impl IntoView {
	let (aurora_on, set_aurora_on) = signal(true);
	let (meteors_on, set_meteors_on) = signal(true);

	let handle_palette = handle.clone();
	let on_palette = move |_: MouseEvent| {
		handle_palette.change_palette();
		debug!("aurora-sky: palette changed");
	};

	let handle_aurora = handle.clone();
	let on_aurora = move |_: MouseEvent| {
		if let Some(active) = handle_aurora.toggle_aurora() {
			set_aurora_on.set(active);
		}
	};

	let handle_meteors = handle.clone();
	let on_meteors = move |_: MouseEvent| {
		if let Some(active) = handle_meteors.toggle_meteors() {
			set_meteors_on.set(active);
		}
	};

	let handle_faster = handle.clone();
	let on_faster = move |_: MouseEvent| {
		if let Some(speed) = handle_faster.scale_aurora_speed(1.25) {
			debug!("aurora-sky: aurora speed {}", speed);
		}
	};

	let handle_slower = handle;
	let on_slower = move |_: MouseEvent| {
		if let Some(speed) = handle_slower.scale_aurora_speed(0.8) {
			debug!("aurora-sky: aurora speed {}", speed);
		}
	};

	view! {
		<div class="sky-controls">
			<button on:click=on_palette>"Change colors"</button>
			<button on:click=on_aurora>
				{move || if aurora_on.get() { "Pause aurora" } else { "Resume aurora" }}
			</button>
			<button on:click=on_meteors>
				{move || if meteors_on.get() { "Pause meteors" } else { "Resume meteors" }}
			</button>
			<button on:click=on_slower>"Slower"</button>
			<button on:click=on_faster>"Faster"</button>
		</div>
	}
}
