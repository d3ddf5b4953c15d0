//! Drawing surface abstraction.
//!
//! Effects never talk to a canvas directly. They describe what to paint with
//! [`Path`] and [`Paint`] values and hand them to a [`Surface`], which is either
//! a browser canvas ([`CanvasSurface`](super::canvas::CanvasSurface)) or a
//! [`RecordingSurface`] that keeps the calls for inspection.

use std::f64::consts::PI;

use super::theme::Color;

/// Width and height of a surface in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// The larger of the two dimensions.
	pub fn max_dimension(&self) -> f64 {
		self.width.max(self.height)
	}
}

/// Gradient along the line from `(x0, y0)` to `(x1, y1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
	pub x0: f64,
	pub y0: f64,
	pub x1: f64,
	pub y1: f64,
	pub stops: Vec<(f64, Color)>,
}

impl LinearGradient {
	pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
		Self {
			x0,
			y0,
			x1,
			y1,
			stops: Vec::new(),
		}
	}

	/// Append a color stop. Offsets are expected in ascending order within `[0, 1]`.
	pub fn stop(mut self, offset: f64, color: Color) -> Self {
		self.stops.push((offset, color));
		self
	}
}

/// Gradient between two circles, `(x0, y0, r0)` and `(x1, y1, r1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
	pub x0: f64,
	pub y0: f64,
	pub r0: f64,
	pub x1: f64,
	pub y1: f64,
	pub r1: f64,
	pub stops: Vec<(f64, Color)>,
}

impl RadialGradient {
	pub fn new(x0: f64, y0: f64, r0: f64, x1: f64, y1: f64, r1: f64) -> Self {
		Self {
			x0,
			y0,
			r0,
			x1,
			y1,
			r1,
			stops: Vec::new(),
		}
	}

	/// Append a color stop. Offsets are expected in ascending order within `[0, 1]`.
	pub fn stop(mut self, offset: f64, color: Color) -> Self {
		self.stops.push((offset, color));
		self
	}
}

/// Fill or stroke style.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
	Solid(Color),
	Linear(LinearGradient),
	Radial(RadialGradient),
}

impl From<Color> for Paint {
	fn from(color: Color) -> Self {
		Paint::Solid(color)
	}
}

/// A single path-building instruction, mirroring the canvas path API.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
	MoveTo {
		x: f64,
		y: f64,
	},
	LineTo {
		x: f64,
		y: f64,
	},
	BezierTo {
		cp1x: f64,
		cp1y: f64,
		cp2x: f64,
		cp2y: f64,
		x: f64,
		y: f64,
	},
	Arc {
		x: f64,
		y: f64,
		radius: f64,
		start: f64,
		end: f64,
	},
	Close,
}

/// An ordered list of path commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
	commands: Vec<PathCommand>,
}

impl Path {
	pub fn new() -> Self {
		Self::default()
	}

	/// A full circle centered on `(x, y)`.
	pub fn circle(x: f64, y: f64, radius: f64) -> Self {
		let mut path = Self::new();
		path.arc(x, y, radius, 0.0, PI * 2.0);
		path
	}

	pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
		self.commands.push(PathCommand::MoveTo { x, y });
		self
	}

	pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
		self.commands.push(PathCommand::LineTo { x, y });
		self
	}

	pub fn bezier_to(
		&mut self,
		cp1x: f64,
		cp1y: f64,
		cp2x: f64,
		cp2y: f64,
		x: f64,
		y: f64,
	) -> &mut Self {
		self.commands.push(PathCommand::BezierTo {
			cp1x,
			cp1y,
			cp2x,
			cp2y,
			x,
			y,
		});
		self
	}

	pub fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> &mut Self {
		self.commands.push(PathCommand::Arc {
			x,
			y,
			radius,
			start,
			end,
		});
		self
	}

	pub fn close(&mut self) -> &mut Self {
		self.commands.push(PathCommand::Close);
		self
	}

	pub fn commands(&self) -> &[PathCommand] {
		&self.commands
	}
}

/// A 2D paint target with a mutable size.
pub trait Surface {
	/// Current surface dimensions.
	fn size(&self) -> Size;

	/// Resize the backing store. Contents are discarded.
	fn set_size(&mut self, size: Size);

	/// Clear the whole surface to transparent.
	fn clear(&mut self);

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: &Paint);

	fn fill_path(&mut self, path: &Path, paint: &Paint);

	fn stroke_path(&mut self, path: &Path, paint: &Paint, line_width: f64);
}

/// A paint call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	Clear,
	FillRect {
		x: f64,
		y: f64,
		width: f64,
		height: f64,
		paint: Paint,
	},
	FillPath {
		path: Path,
		paint: Paint,
	},
	StrokePath {
		path: Path,
		paint: Paint,
		line_width: f64,
	},
}

/// Headless surface that records every paint call since the last clear.
///
/// Clearing drops previously recorded commands, so after a frame the list
/// holds exactly what that frame painted.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
	size: Size,
	commands: Vec<DrawCommand>,
}

impl RecordingSurface {
	pub fn new(size: Size) -> Self {
		Self {
			size,
			commands: Vec::new(),
		}
	}

	pub fn commands(&self) -> &[DrawCommand] {
		&self.commands
	}
}

impl Surface for RecordingSurface {
	fn size(&self) -> Size {
		self.size
	}

	fn set_size(&mut self, size: Size) {
		self.size = size;
		self.commands.clear();
	}

	fn clear(&mut self) {
		self.commands.clear();
		self.commands.push(DrawCommand::Clear);
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: &Paint) {
		self.commands.push(DrawCommand::FillRect {
			x,
			y,
			width,
			height,
			paint: paint.clone(),
		});
	}

	fn fill_path(&mut self, path: &Path, paint: &Paint) {
		self.commands.push(DrawCommand::FillPath {
			path: path.clone(),
			paint: paint.clone(),
		});
	}

	fn stroke_path(&mut self, path: &Path, paint: &Paint, line_width: f64) {
		self.commands.push(DrawCommand::StrokePath {
			path: path.clone(),
			paint: paint.clone(),
			line_width,
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clear_starts_a_fresh_recording() {
		let mut surface = RecordingSurface::new(Size::new(10.0, 10.0));
		surface.fill_rect(0.0, 0.0, 1.0, 1.0, &Color::WHITE.into());
		surface.clear();
		assert_eq!(surface.commands(), &[DrawCommand::Clear]);
	}

	#[test]
	fn path_builder_keeps_command_order() {
		let mut path = Path::new();
		path.move_to(0.0, 0.0).line_to(1.0, 0.0).close();
		assert_eq!(
			path.commands(),
			&[
				PathCommand::MoveTo { x: 0.0, y: 0.0 },
				PathCommand::LineTo { x: 1.0, y: 0.0 },
				PathCommand::Close,
			]
		);
	}
}
