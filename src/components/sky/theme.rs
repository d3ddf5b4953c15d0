//! Colors and aurora palettes.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// A primary/secondary color pair used to tint an aurora layer's gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScheme {
	/// Color of the upper, fading-in half of a ribbon.
	pub primary: Color,
	/// Color of the lower, fading-out half of a ribbon.
	pub secondary: Color,
}

/// The fixed aurora palette, cycled by [`Aurora::change_color`](super::aurora::Aurora::change_color).
pub const PALETTE: [ColorScheme; 4] = [
	// Cyan / blue
	ColorScheme {
		primary: Color::rgb(0, 255, 255),
		secondary: Color::rgb(0, 150, 255),
	},
	// Green / purple
	ColorScheme {
		primary: Color::rgb(0, 255, 150),
		secondary: Color::rgb(100, 0, 255),
	},
	// Pink / light blue
	ColorScheme {
		primary: Color::rgb(255, 100, 255),
		secondary: Color::rgb(100, 200, 255),
	},
	// Yellow / cyan
	ColorScheme {
		primary: Color::rgb(255, 255, 0),
		secondary: Color::rgb(0, 255, 255),
	},
];

/// Night-sky background gradient, center stop.
pub const SKY_CENTER: Color = Color::rgba(5, 5, 30, 0.8);
/// Night-sky background gradient, outer stop.
pub const SKY_EDGE: Color = Color::rgba(0, 0, 10, 1.0);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_serialize_as_hex() {
		assert_eq!(Color::rgb(0, 150, 255).to_css(), "#0096ff");
	}

	#[test]
	fn translucent_colors_serialize_as_rgba() {
		assert_eq!(SKY_CENTER.to_css(), "rgba(5, 5, 30, 0.8)");
		assert_eq!(Color::WHITE.with_alpha(0.0).to_css(), "rgba(255, 255, 255, 0)");
	}
}
