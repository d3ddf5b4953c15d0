//! [`Surface`] backed by an HTML canvas and its 2D context.

use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Paint, Path, PathCommand, Size, Surface};

/// One stacked canvas layer of the sky.
#[derive(Clone)]
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wrap a canvas element, acquiring its 2D context.
	///
	/// Returns `None` if the browser refuses a 2D context.
	pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()?
			.dyn_into::<CanvasRenderingContext2d>()
			.ok()?;
		Some(Self { canvas, ctx })
	}

	fn gradient(&self, paint: &Paint) -> Option<CanvasGradient> {
		let (gradient, stops) = match paint {
			Paint::Solid(_) => return None,
			Paint::Linear(g) => (
				self.ctx.create_linear_gradient(g.x0, g.y0, g.x1, g.y1),
				&g.stops,
			),
			Paint::Radial(g) => (
				self.ctx
					.create_radial_gradient(g.x0, g.y0, g.r0, g.x1, g.y1, g.r1)
					.ok()?,
				&g.stops,
			),
		};
		for (offset, color) in stops {
			let _ = gradient.add_color_stop(*offset as f32, &color.to_css());
		}
		Some(gradient)
	}

	fn set_fill(&self, paint: &Paint) {
		match paint {
			Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
			_ => {
				if let Some(gradient) = self.gradient(paint) {
					#[allow(deprecated)]
					self.ctx.set_fill_style(&gradient);
				}
			}
		}
	}

	fn set_stroke(&self, paint: &Paint) {
		match paint {
			Paint::Solid(color) => self.ctx.set_stroke_style_str(&color.to_css()),
			_ => {
				if let Some(gradient) = self.gradient(paint) {
					#[allow(deprecated)]
					self.ctx.set_stroke_style(&gradient);
				}
			}
		}
	}

	fn trace(&self, path: &Path) {
		self.ctx.begin_path();
		for command in path.commands() {
			match *command {
				PathCommand::MoveTo { x, y } => self.ctx.move_to(x, y),
				PathCommand::LineTo { x, y } => self.ctx.line_to(x, y),
				PathCommand::BezierTo {
					cp1x,
					cp1y,
					cp2x,
					cp2y,
					x,
					y,
				} => self.ctx.bezier_curve_to(cp1x, cp1y, cp2x, cp2y, x, y),
				PathCommand::Arc {
					x,
					y,
					radius,
					start,
					end,
				} => {
					let _ = self.ctx.arc(x, y, radius, start, end);
				}
				PathCommand::Close => self.ctx.close_path(),
			}
		}
	}
}

impl Surface for CanvasSurface {
	fn size(&self) -> Size {
		Size::new(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn set_size(&mut self, size: Size) {
		self.canvas.set_width(size.width as u32);
		self.canvas.set_height(size.height as u32);
	}

	fn clear(&mut self) {
		let size = self.size();
		self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: &Paint) {
		self.set_fill(paint);
		self.ctx.fill_rect(x, y, width, height);
	}

	fn fill_path(&mut self, path: &Path, paint: &Paint) {
		self.trace(path);
		self.set_fill(paint);
		self.ctx.fill();
	}

	fn stroke_path(&mut self, path: &Path, paint: &Paint, line_width: f64) {
		self.trace(path);
		self.set_stroke(paint);
		self.ctx.set_line_width(line_width);
		self.ctx.stroke();
	}
}
