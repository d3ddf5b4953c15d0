//! Composition root: the three effects, their surfaces, and the frame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::aurora::Aurora;
use super::particles::ParticleSystem;
use super::starfield::Starfield;
use super::surface::{Size, Surface};
use super::ticker::TickSource;
use super::types::SkyConfig;

/// The three stacked drawing surfaces, back to front.
pub struct Layers<S> {
	pub stars: S,
	pub aurora: S,
	pub particles: S,
}

impl<S: Surface> Layers<S> {
	/// Give every layer the same size.
	pub fn resize(&mut self, size: Size) {
		self.stars.set_size(size);
		self.aurora.set_size(size);
		self.particles.set_size(size);
	}
}

/// Owns every effect and the surfaces they paint on.
pub struct Scene<S> {
	pub layers: Layers<S>,
	pub starfield: Starfield,
	pub aurora: Aurora,
	pub particles: ParticleSystem,
}

impl<S: Surface> Scene<S> {
	/// Build the effects for the current surface sizes.
	///
	/// `seed` drives all randomness; each effect derives its own stream from it.
	pub fn new(config: &SkyConfig, layers: Layers<S>, seed: u64) -> Self {
		let config = config.clone().sanitize();
		let mut starfield = Starfield::new(config.star_density, config.max_stars, seed);
		let mut aurora = Aurora::new(
			config.aurora_speed,
			config.aurora_amplitude,
			config.initial_scheme,
			seed.wrapping_add(1),
		);
		let particles = ParticleSystem::new(
			config.max_meteors,
			config.meteor_spawn_chance,
			seed.wrapping_add(2),
		);

		starfield.init(layers.stars.size());
		aurora.init(layers.aurora.size());

		Self {
			layers,
			starfield,
			aurora,
			particles,
		}
	}

	/// One frame: update every effect, then paint back to front.
	pub fn tick(&mut self, now: f64) {
		self.starfield.update(self.layers.stars.size());
		self.aurora.update(now);
		self.particles.update(self.layers.particles.size());

		self.starfield.draw(&mut self.layers.stars);
		self.aurora.draw(&mut self.layers.aurora);
		self.particles.draw(&mut self.layers.particles);
	}

	/// Resize every surface and rebuild the stars and aurora for it.
	/// Live meteors are kept as they are.
	pub fn resize(&mut self, size: Size) {
		log::debug!("aurora-sky: resize to {}x{}", size.width, size.height);
		self.layers.resize(size);
		self.starfield.init(size);
		self.aurora.init(size);
	}

	pub fn change_palette(&mut self) {
		self.aurora.change_color();
	}

	pub fn toggle_aurora(&mut self) -> bool {
		self.aurora.toggle()
	}

	pub fn toggle_meteors(&mut self) -> bool {
		self.particles.toggle()
	}

	pub fn set_aurora_speed(&mut self, factor: f64) {
		self.aurora.set_speed(factor);
	}
}

/// Runs a shared [`Scene`] once per frame on a [`TickSource`].
pub struct Driver<T, S> {
	scene: Rc<RefCell<Scene<S>>>,
	ticks: Rc<T>,
	running: Rc<Cell<bool>>,
	/// Bumped on every start; callbacks from an older chain retire themselves.
	generation: Rc<Cell<u64>>,
}

impl<T: TickSource + 'static, S: Surface + 'static> Driver<T, S> {
	pub fn new(scene: Rc<RefCell<Scene<S>>>, ticks: Rc<T>) -> Self {
		Self {
			scene,
			ticks,
			running: Rc::new(Cell::new(false)),
			generation: Rc::new(Cell::new(0)),
		}
	}

	/// Begin ticking. Calling this while already running does nothing.
	pub fn start(&self) {
		if self.running.replace(true) {
			return;
		}
		let generation = self.generation.get().wrapping_add(1);
		self.generation.set(generation);
		schedule(Chain {
			scene: self.scene.clone(),
			ticks: self.ticks.clone(),
			running: self.running.clone(),
			current: self.generation.clone(),
			generation,
		});
	}

	/// Stop after the current frame; a pending callback becomes a no-op,
	/// even if the driver is started again before it fires.
	pub fn stop(&self) {
		self.running.set(false);
	}

	pub fn is_running(&self) -> bool {
		self.running.get()
	}

	pub fn scene(&self) -> &Rc<RefCell<Scene<S>>> {
		&self.scene
	}
}

/// One run of the frame loop, from a `start` to the next `start` or `stop`.
struct Chain<T, S> {
	scene: Rc<RefCell<Scene<S>>>,
	ticks: Rc<T>,
	running: Rc<Cell<bool>>,
	current: Rc<Cell<u64>>,
	generation: u64,
}

impl<T, S> Chain<T, S> {
	fn is_live(&self) -> bool {
		self.running.get() && self.current.get() == self.generation
	}
}

fn schedule<T: TickSource + 'static, S: Surface + 'static>(chain: Chain<T, S>) {
	let ticks = chain.ticks.clone();
	ticks.request_next_tick(Box::new(move |now| {
		if !chain.is_live() {
			return;
		}
		chain.scene.borrow_mut().tick(now);
		schedule(chain);
	}));
}
