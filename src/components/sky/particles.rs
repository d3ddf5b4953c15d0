//! Meteor particles: short-lived streaks falling from above the top edge.

use std::f64::consts::PI;

use fastrand::Rng;

use super::surface::{LinearGradient, Paint, Path, Size, Surface};
use super::theme::Color;

/// Life lost per frame; a meteor lasts at most 100 frames.
const LIFE_DECAY: f64 = 0.01;
/// Spawn height, just above the visible area.
const SPAWN_Y: f64 = -10.0;
/// Trail length in multiples of the per-frame velocity.
const TRAIL_FRAMES: f64 = 3.0;

/// A single meteor.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub color: Color,
	/// Starts at 1 and only decreases; the meteor is dropped at or below 0.
	pub life: f64,
}

impl Particle {
	/// A fresh meteor at `(x, SPAWN_Y)` heading along `angle`.
	///
	/// Angles are measured so that `PI` points straight down the screen, with
	/// the spawn arc `0.7π..1.1π` leaning slightly to either side.
	pub fn launch(x: f64, angle: f64, speed: f64, size: f64, color: Color) -> Self {
		Self {
			x,
			y: SPAWN_Y,
			vx: angle.sin() * speed,
			vy: -angle.cos() * speed,
			size,
			color,
			life: 1.0,
		}
	}

	/// Whether the meteor has faded out or left through the sides or bottom.
	/// Meteors above the top edge are still in flight.
	fn is_spent(&self, size: Size) -> bool {
		self.life <= 0.0 || self.x < 0.0 || self.x > size.width || self.y > size.height
	}
}

/// Bounded pool of meteors with stochastic spawning.
pub struct ParticleSystem {
	pub particles: Vec<Particle>,
	max_particles: usize,
	spawn_chance: f64,
	active: bool,
	rng: Rng,
}

impl ParticleSystem {
	pub fn new(max_particles: usize, spawn_chance: f64, seed: u64) -> Self {
		Self {
			particles: Vec::with_capacity(max_particles),
			max_particles,
			spawn_chance,
			active: true,
			rng: Rng::with_seed(seed),
		}
	}

	/// Maybe spawn a meteor, then advance and cull the live set.
	pub fn update(&mut self, size: Size) {
		if !self.active {
			return;
		}

		if self.particles.len() < self.max_particles && self.rng.f64() < self.spawn_chance {
			self.spawn(size);
		}

		self.particles.retain_mut(|p| {
			p.x += p.vx;
			p.y += p.vy;
			p.life -= LIFE_DECAY;
			!p.is_spent(size)
		});
	}

	fn spawn(&mut self, size: Size) {
		let rng = &mut self.rng;
		let speed = rng.f64() * 5.0 + 2.0;
		let angle = rng.f64() * PI * 0.4 + PI * 0.7;
		let x = rng.f64() * size.width;
		let meteor_size = rng.f64() * 2.0 + 1.0;
		let color = Color::rgb(
			(rng.f64() * 100.0 + 155.0) as u8,
			(rng.f64() * 100.0 + 155.0) as u8,
			255,
		);

		self.particles.push(Particle::launch(x, angle, speed, meteor_size, color));
	}

	pub fn draw(&self, surface: &mut dyn Surface) {
		surface.clear();
		if !self.active {
			return;
		}

		for p in &self.particles {
			let (tail_x, tail_y) = (p.x - p.vx * TRAIL_FRAMES, p.y - p.vy * TRAIL_FRAMES);
			let trail = LinearGradient::new(p.x, p.y, tail_x, tail_y)
				.stop(0.0, p.color)
				.stop(1.0, Color::WHITE.with_alpha(0.0));

			let mut path = Path::new();
			path.move_to(p.x, p.y).line_to(tail_x, tail_y);
			surface.stroke_path(&path, &Paint::Linear(trail), p.size);

			surface.fill_path(
				&Path::circle(p.x, p.y, p.size * 0.7),
				&Paint::Solid(Color::WHITE.with_alpha(p.life)),
			);
		}
	}

	/// Pause or resume; returns the new state.
	pub fn toggle(&mut self) -> bool {
		self.active = !self.active;
		self.active
	}

	pub fn is_active(&self) -> bool {
		self.active
	}
}
