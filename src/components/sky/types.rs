//! Sky configuration supplied by the host page.

use serde::Deserialize;

use super::theme::PALETTE;

/// Tunable parameters for the three effects.
///
/// Every field is optional in JSON; missing fields take their defaults.
/// Call [`SkyConfig::sanitize`] before use so no effect ever sees a value that
/// would produce an invalid drawing call.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkyConfig {
	/// Surface area in square pixels per star.
	pub star_density: f64,
	/// Upper bound on the number of stars.
	pub max_stars: usize,
	/// Aurora base speed, clamped to `0.1..=2.0`.
	pub aurora_speed: f64,
	/// Aurora base amplitude in pixels.
	pub aurora_amplitude: f64,
	/// Maximum number of live meteors.
	pub max_meteors: usize,
	/// Per-frame probability of spawning a meteor.
	pub meteor_spawn_chance: f64,
	/// Palette index the aurora starts with.
	pub initial_scheme: usize,
}

impl Default for SkyConfig {
	fn default() -> Self {
		Self {
			star_density: 800.0,
			max_stars: 800,
			aurora_speed: 0.5,
			aurora_amplitude: 100.0,
			max_meteors: 30,
			meteor_spawn_chance: 0.05,
			initial_scheme: 0,
		}
	}
}

impl SkyConfig {
	/// Clamp every field into its valid range, replacing non-finite numbers
	/// with defaults.
	pub fn sanitize(self) -> Self {
		let defaults = Self::default();
		let finite_or = |v: f64, d: f64| if v.is_finite() { v } else { d };

		Self {
			star_density: finite_or(self.star_density, defaults.star_density).max(1.0),
			max_stars: self.max_stars,
			aurora_speed: finite_or(self.aurora_speed, defaults.aurora_speed).clamp(0.1, 2.0),
			aurora_amplitude: finite_or(self.aurora_amplitude, defaults.aurora_amplitude)
				.max(0.0),
			max_meteors: self.max_meteors,
			meteor_spawn_chance: finite_or(self.meteor_spawn_chance, defaults.meteor_spawn_chance)
				.clamp(0.0, 1.0),
			initial_scheme: self.initial_scheme % PALETTE.len(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_fields_take_defaults() {
		let config: SkyConfig = serde_json::from_str(r#"{ "max_meteors": 10 }"#).unwrap();
		assert_eq!(config.max_meteors, 10);
		assert_eq!(config.star_density, 800.0);
		assert_eq!(config.aurora_speed, 0.5);
	}

	#[test]
	fn sanitize_clamps_out_of_range_values() {
		let config = SkyConfig {
			star_density: 0.0,
			aurora_speed: 50.0,
			aurora_amplitude: -3.0,
			meteor_spawn_chance: f64::NAN,
			initial_scheme: 6,
			..SkyConfig::default()
		}
		.sanitize();

		assert_eq!(config.star_density, 1.0);
		assert_eq!(config.aurora_speed, 2.0);
		assert_eq!(config.aurora_amplitude, 0.0);
		assert_eq!(config.meteor_spawn_chance, 0.05);
		assert_eq!(config.initial_scheme, 2);
	}

	#[test]
	fn defaults_survive_sanitize() {
		assert_eq!(SkyConfig::default().sanitize(), SkyConfig::default());
	}
}
