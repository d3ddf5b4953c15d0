//! Drifting, twinkling background stars.

use fastrand::Rng;

use super::surface::{Paint, Path, RadialGradient, Size, Surface};
use super::theme::{Color, SKY_CENTER, SKY_EDGE};

const MIN_BRIGHTNESS: f64 = 0.2;
const MAX_BRIGHTNESS: f64 = 1.0;

/// A single point light.
#[derive(Clone, Debug)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	/// Fill alpha, always within `0.2..=1.0`.
	pub brightness: f64,
	/// Downward drift per frame.
	pub speed: f64,
	/// Brightness change per frame; flips sign at either bound.
	pub twinkle: f64,
}

/// Owns the star set and paints it over the sky gradient.
pub struct Starfield {
	pub stars: Vec<Star>,
	star_density: f64,
	max_stars: usize,
	rng: Rng,
}

impl Starfield {
	pub fn new(star_density: f64, max_stars: usize, seed: u64) -> Self {
		Self {
			stars: Vec::new(),
			star_density,
			max_stars,
			rng: Rng::with_seed(seed),
		}
	}

	/// Number of stars a surface of `size` holds.
	pub fn population(&self, size: Size) -> usize {
		let by_area = (size.width * size.height / self.star_density).floor();
		if by_area.is_finite() && by_area > 0.0 {
			(by_area as usize).min(self.max_stars)
		} else {
			0
		}
	}

	/// Repopulate the star set for a surface of `size`.
	pub fn init(&mut self, size: Size) {
		let count = self.population(size);
		let rng = &mut self.rng;

		self.stars = (0..count)
			.map(|_| Star {
				x: rng.f64() * size.width,
				y: rng.f64() * size.height,
				size: rng.f64() * 1.5 + 0.5,
				brightness: rng.f64() * 0.8 + MIN_BRIGHTNESS,
				speed: rng.f64() * 0.3 + 0.1,
				twinkle: rng.f64() * 0.05 + 0.02,
			})
			.collect();
	}

	/// Drift every star down one frame and advance its twinkle.
	pub fn update(&mut self, size: Size) {
		for star in &mut self.stars {
			star.y += star.speed;
			if star.y >= size.height {
				star.y = 0.0;
				star.x = self.rng.f64() * size.width;
			}

			star.brightness += star.twinkle;
			if star.brightness > MAX_BRIGHTNESS {
				star.brightness = MAX_BRIGHTNESS;
				star.twinkle = -star.twinkle.abs();
			} else if star.brightness < MIN_BRIGHTNESS {
				star.brightness = MIN_BRIGHTNESS;
				star.twinkle = star.twinkle.abs();
			}
		}
	}

	pub fn draw(&self, surface: &mut dyn Surface) {
		let size = surface.size();
		surface.clear();

		let (cx, cy) = (size.width / 2.0, size.height / 2.0);
		let background = RadialGradient::new(cx, cy, 0.0, cx, cy, size.max_dimension() * 1.5)
			.stop(0.0, SKY_CENTER)
			.stop(1.0, SKY_EDGE);
		surface.fill_rect(
			0.0,
			0.0,
			size.width,
			size.height,
			&Paint::Radial(background),
		);

		for star in &self.stars {
			surface.fill_path(
				&Path::circle(star.x, star.y, star.size),
				&Paint::Solid(Color::WHITE.with_alpha(star.brightness)),
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::sky::surface::{DrawCommand, RecordingSurface};

	fn starfield() -> Starfield {
		Starfield::new(800.0, 800, 7)
	}

	#[test]
	fn population_follows_surface_area() {
		let mut field = starfield();
		field.init(Size::new(800.0, 600.0));
		assert_eq!(field.stars.len(), 600);

		field.init(Size::new(100.0, 100.0));
		assert_eq!(field.stars.len(), 12);
	}

	#[test]
	fn population_is_capped() {
		let mut field = starfield();
		field.init(Size::new(1920.0, 1080.0));
		assert_eq!(field.stars.len(), 800);
	}

	#[test]
	fn empty_surface_has_no_stars() {
		let mut field = starfield();
		field.init(Size::new(0.0, 0.0));
		assert!(field.stars.is_empty());
	}

	#[test]
	fn initial_stars_are_in_range() {
		let mut field = starfield();
		let size = Size::new(640.0, 480.0);
		field.init(size);
		for star in &field.stars {
			assert!((0.0..size.width).contains(&star.x));
			assert!((0.0..size.height).contains(&star.y));
			assert!((0.5..=2.0).contains(&star.size));
			assert!((0.1..=0.4).contains(&star.speed));
			assert!((0.02..=0.07).contains(&star.twinkle));
		}
	}

	#[test]
	fn brightness_and_position_stay_bounded() {
		let mut field = starfield();
		let size = Size::new(400.0, 50.0);
		field.init(size);

		for _ in 0..2_000 {
			field.update(size);
			for star in &field.stars {
				assert!((MIN_BRIGHTNESS..=MAX_BRIGHTNESS).contains(&star.brightness));
				assert!((0.0..size.height).contains(&star.y));
			}
		}
	}

	#[test]
	fn star_wraps_to_top_past_bottom_edge() {
		let mut field = starfield();
		let size = Size::new(100.0, 100.0);
		field.stars = vec![Star {
			x: 10.0,
			y: 99.9,
			size: 1.0,
			brightness: 0.5,
			speed: 0.3,
			twinkle: 0.02,
		}];

		field.update(size);
		assert_eq!(field.stars[0].y, 0.0);
		assert!((0.0..size.width).contains(&field.stars[0].x));
	}

	#[test]
	fn twinkle_bounces_at_the_top() {
		let mut field = starfield();
		field.stars = vec![Star {
			x: 0.0,
			y: 0.0,
			size: 1.0,
			brightness: 0.99,
			speed: 0.0,
			twinkle: 0.05,
		}];

		field.update(Size::new(10.0, 10.0));
		assert_eq!(field.stars[0].brightness, MAX_BRIGHTNESS);
		assert!(field.stars[0].twinkle < 0.0);

		field.update(Size::new(10.0, 10.0));
		assert!(field.stars[0].brightness < MAX_BRIGHTNESS);
	}

	#[test]
	fn draw_paints_background_then_one_circle_per_star() {
		let mut field = starfield();
		let size = Size::new(80.0, 40.0);
		field.init(size);
		let mut surface = RecordingSurface::new(size);
		field.draw(&mut surface);

		let commands = surface.commands();
		assert_eq!(commands[0], DrawCommand::Clear);
		match &commands[1] {
			DrawCommand::FillRect {
				paint: Paint::Radial(g),
				..
			} => {
				assert_eq!((g.x0, g.y0), (40.0, 20.0));
				assert_eq!(g.r1, 120.0);
				assert_eq!(g.stops, vec![(0.0, SKY_CENTER), (1.0, SKY_EDGE)]);
			}
			other => panic!("expected background gradient, got {other:?}"),
		}
		assert_eq!(commands.len(), 2 + field.stars.len());
		for (command, star) in commands[2..].iter().zip(&field.stars) {
			let DrawCommand::FillPath {
				paint: Paint::Solid(color),
				..
			} = command
			else {
				panic!("expected star fill, got {command:?}");
			};
			assert_eq!(color.a, star.brightness);
		}
	}
}
