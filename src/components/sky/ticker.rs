//! Frame scheduling.
//!
//! The driver never calls `requestAnimationFrame` itself; it asks a
//! [`TickSource`] for "one callback before the next repaint". In the browser
//! that is [`AnimationFrameTicker`]; headless code and tests step a
//! [`FixedStepTicker`] by hand.

use std::cell::{Cell, RefCell};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// A one-shot frame callback receiving the current time in seconds.
pub type Tick = Box<dyn FnOnce(f64)>;

/// Something that can run a callback once before the next frame.
pub trait TickSource {
	fn request_next_tick(&self, tick: Tick);
}

/// Browser frame scheduler backed by `requestAnimationFrame`.
///
/// Ticks receive wall-clock seconds (`Date.now() / 1000`) so the aurora's
/// motion depends on real time, not frame count.
pub struct AnimationFrameTicker {
	window: Window,
}

impl AnimationFrameTicker {
	pub fn new(window: Window) -> Self {
		Self { window }
	}
}

impl TickSource for AnimationFrameTicker {
	fn request_next_tick(&self, tick: Tick) {
		let callback = Closure::once_into_js(move |_timestamp: f64| {
			tick(js_sys::Date::now() / 1000.0);
		});
		if let Err(e) = self
			.window
			.request_animation_frame(callback.unchecked_ref())
		{
			log::warn!("aurora-sky: requestAnimationFrame failed: {:?}", e);
		}
	}
}

/// Headless scheduler with a virtual clock advanced by a fixed frame interval.
pub struct FixedStepTicker {
	frame_seconds: f64,
	now: Cell<f64>,
	pending: RefCell<Option<Tick>>,
}

impl FixedStepTicker {
	/// A ticker starting at `start` seconds, stepping `frame_seconds` per frame.
	pub fn new(start: f64, frame_seconds: f64) -> Self {
		Self {
			frame_seconds,
			now: Cell::new(start),
			pending: RefCell::new(None),
		}
	}

	/// Run the pending tick, if any. Returns whether one ran.
	pub fn advance(&self) -> bool {
		let Some(tick) = self.pending.borrow_mut().take() else {
			return false;
		};
		let now = self.now.get() + self.frame_seconds;
		self.now.set(now);
		tick(now);
		true
	}

	pub fn is_pending(&self) -> bool {
		self.pending.borrow().is_some()
	}

	pub fn now(&self) -> f64 {
		self.now.get()
	}
}

impl Default for FixedStepTicker {
	fn default() -> Self {
		Self::new(0.0, 1.0 / 60.0)
	}
}

impl TickSource for FixedStepTicker {
	fn request_next_tick(&self, tick: Tick) {
		*self.pending.borrow_mut() = Some(tick);
	}
}

#[cfg(test)]
mod tests {
	use std::rc::Rc;

	use super::*;

	#[test]
	fn advance_runs_pending_tick_once_with_stepped_time() {
		let ticker = FixedStepTicker::new(10.0, 0.5);
		let seen = Rc::new(Cell::new(0.0));
		let seen_tick = seen.clone();
		ticker.request_next_tick(Box::new(move |now| seen_tick.set(now)));

		assert!(ticker.is_pending());
		assert!(ticker.advance());
		assert_eq!(seen.get(), 10.5);
		assert!(!ticker.advance());
		assert_eq!(ticker.now(), 10.5);
	}
}
