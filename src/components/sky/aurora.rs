//! Aurora ribbons.
//!
//! Each layer is a band whose top edge is a smooth curve through evenly spaced
//! control points. Every frame the points are displaced vertically by
//!
//! ```text
//! amplitude * sin(x * 0.01 + offset + t * speed) * cos(baseY * 0.01 + t * speed * 0.7)
//! ```
//!
//! a product of two sinusoids that reads as slow organic motion without the
//! cost of real gradient noise. Layers are painted back to front with a
//! vertical gradient from the current [`ColorScheme`], and the front layer gets
//! a thin white highlight along its crest.

use fastrand::Rng;

use super::surface::{LinearGradient, Paint, Path, Size, Surface};
use super::theme::{Color, ColorScheme, PALETTE};

/// Number of ribbons.
pub const LAYER_COUNT: usize = 5;
/// Curve segments per ribbon; each layer has one more control point than this.
pub const SEGMENT_COUNT: usize = 50;

const MIN_SPEED: f64 = 0.1;
const MAX_SPEED: f64 = 2.0;

/// A control point on a ribbon's top edge.
#[derive(Clone, Debug, PartialEq)]
pub struct AuroraPoint {
	pub x: f64,
	pub base_y: f64,
	pub current_y: f64,
}

/// One independently animated ribbon.
#[derive(Clone, Debug)]
pub struct AuroraLayer {
	/// Control points in ascending `x`, spanning the surface width.
	pub points: Vec<AuroraPoint>,
	/// Phase offset so layers don't move in lockstep.
	pub offset: f64,
	pub speed: f64,
	pub amplitude: f64,
	/// Visual thickness; only the highlight offset depends on it.
	pub width: f64,
	pub opacity: f64,
}

impl AuroraLayer {
	/// Recompute every point's displacement for time `t` (seconds).
	fn animate(&mut self, t: f64) {
		for point in &mut self.points {
			let noise_x = point.x * 0.01 + self.offset + t * self.speed;
			let noise_y = point.base_y * 0.01 + t * self.speed * 0.7;
			point.current_y = point.base_y + self.amplitude * noise_x.sin() * noise_y.cos();
		}
	}

	/// Trace the ribbon's top edge, shifted up by `lift` pixels.
	fn trace_crest(&self, path: &mut Path, lift: f64) {
		let mut points = self.points.iter();
		let Some(first) = points.next() else {
			return;
		};
		path.move_to(first.x, first.current_y - lift);

		let mut prev = first;
		for point in points {
			let span = point.x - prev.x;
			path.bezier_to(
				prev.x + span * 0.3,
				prev.current_y - lift,
				prev.x + span * 0.7,
				point.current_y - lift,
				point.x,
				point.current_y - lift,
			);
			prev = point;
		}
	}
}

/// Layered aurora with palette cycling, pause and speed control.
pub struct Aurora {
	layers: Vec<AuroraLayer>,
	scheme: usize,
	base_speed: f64,
	base_amplitude: f64,
	active: bool,
	rng: Rng,
}

impl Aurora {
	pub fn new(base_speed: f64, base_amplitude: f64, initial_scheme: usize, seed: u64) -> Self {
		Self {
			layers: Vec::new(),
			scheme: initial_scheme % PALETTE.len(),
			base_speed: base_speed.clamp(MIN_SPEED, MAX_SPEED),
			base_amplitude,
			active: true,
			rng: Rng::with_seed(seed),
		}
	}

	/// Rebuild all layers and their control points for a surface of `size`.
	pub fn init(&mut self, size: Size) {
		let (base_speed, base_amplitude) = (self.base_speed, self.base_amplitude);
		let rng = &mut self.rng;

		self.layers = (0..LAYER_COUNT)
			.map(|i| {
				let mut layer = AuroraLayer {
					points: Vec::with_capacity(SEGMENT_COUNT + 1),
					offset: rng.f64() * 1000.0,
					speed: base_speed * (0.5 + rng.f64() * 0.5),
					amplitude: base_amplitude * (0.7 + rng.f64() * 0.6),
					width: rng.f64() * 100.0 + 50.0,
					opacity: 0.1 + (i as f64 / LAYER_COUNT as f64) * 0.15,
				};
				for j in 0..=SEGMENT_COUNT {
					let base_y = rng.f64() * size.height * 0.3 + size.height * 0.1;
					layer.points.push(AuroraPoint {
						x: (j as f64 / SEGMENT_COUNT as f64) * size.width,
						base_y,
						current_y: base_y,
					});
				}
				layer
			})
			.collect();
	}

	/// Advance the ribbons to wall-clock time `t` (seconds).
	pub fn update(&mut self, t: f64) {
		if !self.active {
			return;
		}
		for layer in &mut self.layers {
			layer.animate(t);
		}
	}

	pub fn draw(&self, surface: &mut dyn Surface) {
		surface.clear();
		if !self.active {
			return;
		}

		let size = surface.size();
		let colors = self.scheme();
		let last = self.layers.len().saturating_sub(1);

		for (index, layer) in self.layers.iter().enumerate() {
			let alpha = layer.opacity;
			let gradient = LinearGradient::new(0.0, 0.0, 0.0, size.height)
				.stop(0.0, colors.primary.with_alpha(0.0))
				.stop(0.3, colors.primary.with_alpha(alpha * 0.7))
				.stop(0.7, colors.secondary.with_alpha(alpha))
				.stop(1.0, colors.secondary.with_alpha(0.0));

			let mut ribbon = Path::new();
			layer.trace_crest(&mut ribbon, 0.0);
			if let Some(end) = layer.points.last() {
				ribbon.line_to(end.x, size.height);
			}
			ribbon.line_to(0.0, size.height).close();
			surface.fill_path(&ribbon, &Paint::Linear(gradient));

			if index == last {
				let mut crest = Path::new();
				layer.trace_crest(&mut crest, layer.width * 0.1);
				surface.stroke_path(
					&crest,
					&Paint::Solid(Color::WHITE.with_alpha(layer.opacity * 0.5)),
					2.0,
				);
			}
		}
	}

	/// Move to the next palette entry, wrapping around.
	pub fn change_color(&mut self) {
		self.scheme = (self.scheme + 1) % PALETTE.len();
	}

	/// Pause or resume; returns the new state.
	pub fn toggle(&mut self) -> bool {
		self.active = !self.active;
		self.active
	}

	/// Scale the base speed by `factor`, clamped to `0.1..=2.0`, and re-roll
	/// every layer's speed from it.
	pub fn set_speed(&mut self, factor: f64) {
		let scaled = self.base_speed * factor;
		self.base_speed = if scaled.is_nan() {
			self.base_speed
		} else {
			scaled.clamp(MIN_SPEED, MAX_SPEED)
		};
		for layer in &mut self.layers {
			layer.speed = self.base_speed * (0.5 + self.rng.f64() * 0.5);
		}
	}

	pub fn scheme_index(&self) -> usize {
		self.scheme
	}

	pub fn scheme(&self) -> ColorScheme {
		PALETTE[self.scheme]
	}

	pub fn base_speed(&self) -> f64 {
		self.base_speed
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	pub fn layers(&self) -> &[AuroraLayer] {
		&self.layers
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::sky::surface::{DrawCommand, PathCommand, RecordingSurface};

	const SIZE: Size = Size::new(1000.0, 500.0);

	fn aurora() -> Aurora {
		let mut aurora = Aurora::new(0.5, 100.0, 0, 42);
		aurora.init(SIZE);
		aurora
	}

	#[test]
	fn init_builds_five_layers_of_evenly_spaced_points() {
		let aurora = aurora();
		assert_eq!(aurora.layers().len(), LAYER_COUNT);

		for (i, layer) in aurora.layers().iter().enumerate() {
			assert_eq!(layer.points.len(), SEGMENT_COUNT + 1);
			assert_eq!(layer.points[0].x, 0.0);
			assert_eq!(layer.points[SEGMENT_COUNT].x, SIZE.width);
			assert!(layer.points.windows(2).all(|w| w[0].x < w[1].x));
			assert!(
				layer
					.points
					.iter()
					.all(|p| (50.0..=200.0).contains(&p.base_y))
			);

			assert!((0.25..=0.5).contains(&layer.speed));
			assert!((70.0..=130.0).contains(&layer.amplitude));
			assert!((50.0..=150.0).contains(&layer.width));
			assert!((layer.opacity - (0.1 + i as f64 * 0.03)).abs() < 1e-12);
		}
	}

	#[test]
	fn update_applies_the_sinusoid_product() {
		let mut aurora = aurora();
		let t = 12.5;
		aurora.update(t);

		let layer = &aurora.layers()[2];
		let p = &layer.points[17];
		let expected = p.base_y
			+ layer.amplitude
				* (p.x * 0.01 + layer.offset + t * layer.speed).sin()
				* (p.base_y * 0.01 + t * layer.speed * 0.7).cos();
		assert_eq!(p.current_y, expected);
	}

	#[test]
	fn zero_amplitude_leaves_ribbons_flat() {
		let mut aurora = Aurora::new(0.5, 0.0, 0, 3);
		aurora.init(SIZE);
		for t in [0.0, 1.0, 1_700_000_000.0] {
			aurora.update(t);
			for layer in aurora.layers() {
				assert!(layer.points.iter().all(|p| p.current_y == p.base_y));
			}
		}
	}

	#[test]
	fn change_color_cycles_through_palette() {
		let mut aurora = aurora();
		let start = aurora.scheme_index();
		aurora.change_color();
		assert_eq!(aurora.scheme_index(), (start + 1) % PALETTE.len());
		for _ in 1..PALETTE.len() {
			aurora.change_color();
		}
		assert_eq!(aurora.scheme_index(), start);
	}

	#[test]
	fn set_speed_clamps_base_speed() {
		let mut aurora = aurora();
		aurora.set_speed(2.0);
		assert_eq!(aurora.base_speed(), 1.0);
		aurora.set_speed(2.0);
		assert_eq!(aurora.base_speed(), 2.0);
		aurora.set_speed(2.0);
		assert_eq!(aurora.base_speed(), 2.0);
		aurora.set_speed(0.01);
		assert_eq!(aurora.base_speed(), 0.1);

		for layer in aurora.layers() {
			assert!((0.05..=0.1).contains(&layer.speed));
		}
	}

	#[test]
	fn paused_aurora_neither_moves_nor_paints() {
		let mut aurora = aurora();
		assert!(!aurora.toggle());
		aurora.update(99.0);
		assert!(
			aurora
				.layers()
				.iter()
				.flat_map(|l| &l.points)
				.all(|p| p.current_y == p.base_y)
		);

		let mut surface = RecordingSurface::new(SIZE);
		aurora.draw(&mut surface);
		assert_eq!(surface.commands(), &[DrawCommand::Clear]);

		assert!(aurora.toggle());
		aurora.update(99.0);
		aurora.draw(&mut surface);
		assert!(surface.commands().len() > 1);
	}

	#[test]
	fn draw_fills_every_layer_and_highlights_the_front_one() {
		let mut aurora = aurora();
		aurora.change_color();
		aurora.update(4.0);
		let mut surface = RecordingSurface::new(SIZE);
		aurora.draw(&mut surface);

		let commands = surface.commands();
		assert_eq!(commands[0], DrawCommand::Clear);
		assert_eq!(commands.len(), 1 + LAYER_COUNT + 1);

		let scheme = PALETTE[1];
		let front = &aurora.layers()[LAYER_COUNT - 1];
		let DrawCommand::FillPath {
			path,
			paint: Paint::Linear(gradient),
		} = &commands[LAYER_COUNT]
		else {
			panic!("expected ribbon fill, got {:?}", commands[LAYER_COUNT]);
		};
		assert_eq!(
			gradient.stops,
			vec![
				(0.0, scheme.primary.with_alpha(0.0)),
				(0.3, scheme.primary.with_alpha(front.opacity * 0.7)),
				(0.7, scheme.secondary.with_alpha(front.opacity)),
				(1.0, scheme.secondary.with_alpha(0.0)),
			]
		);
		assert_eq!((gradient.y0, gradient.y1), (0.0, SIZE.height));

		let ribbon = path.commands();
		assert_eq!(ribbon.len(), 1 + SEGMENT_COUNT + 3);
		assert_eq!(
			&ribbon[ribbon.len() - 3..],
			&[
				PathCommand::LineTo {
					x: SIZE.width,
					y: SIZE.height
				},
				PathCommand::LineTo {
					x: 0.0,
					y: SIZE.height
				},
				PathCommand::Close,
			]
		);

		let DrawCommand::StrokePath {
			path,
			paint,
			line_width,
		} = &commands[LAYER_COUNT + 1]
		else {
			panic!("expected highlight stroke");
		};
		assert_eq!(*line_width, 2.0);
		assert_eq!(
			*paint,
			Paint::Solid(Color::WHITE.with_alpha(front.opacity * 0.5))
		);
		let lift = front.width * 0.1;
		assert_eq!(
			path.commands()[0],
			PathCommand::MoveTo {
				x: 0.0,
				y: front.points[0].current_y - lift
			}
		);
	}

	#[test]
	fn crest_segments_use_thirty_seventy_control_points() {
		let aurora = aurora();
		let layer = &aurora.layers()[0];
		let mut path = Path::new();
		layer.trace_crest(&mut path, 0.0);

		let (a, b) = (&layer.points[0], &layer.points[1]);
		let span = b.x - a.x;
		assert_eq!(
			path.commands()[1],
			PathCommand::BezierTo {
				cp1x: a.x + span * 0.3,
				cp1y: a.current_y,
				cp2x: a.x + span * 0.7,
				cp2y: b.current_y,
				x: b.x,
				y: b.current_y,
			}
		);
	}
}
