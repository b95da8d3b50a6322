//! Tunable parameters for the constellation background.

use serde::Deserialize;

/// Largest accepted `particle_count`; links cost grows with its square.
pub const MAX_PARTICLES: usize = 1000;
/// Largest accepted `max_shooting_stars`.
pub const MAX_SHOOTING_STARS: usize = 100;

/// Simulation parameters. Every field may be omitted from the JSON input.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
	/// Target number of particles (the pointer particle counts toward it).
	pub particle_count: usize,
	/// Radius of every ambient particle, in pixels.
	pub particle_radius: f64,
	/// Pairs closer than this are linked.
	pub link_distance: f64,
	/// Multiplier applied to every link opacity.
	pub link_dim: f64,
	/// Particles further than this outside the surface are dropped.
	pub cull_margin: f64,
	/// Phase added to every particle per frame.
	pub phase_step: f64,
	/// Initial phases are drawn from `[0, phase_max)`.
	pub phase_max: f64,
	/// Maximum number of concurrent shooting stars.
	pub max_shooting_stars: usize,
	/// Per-frame probability of a spawn attempt succeeding while under the cap.
	/// 1.0 spawns every frame until the cap is reached.
	pub shooting_star_chance: f64,
	/// Opacity lost by a shooting star each frame.
	pub shooting_star_decay: f64,
	/// How far past the right/bottom edge a shooting star may travel.
	pub shooting_star_margin: f64,
	/// Fixed RNG seed. A fresh seed is drawn per page load when absent.
	pub seed: Option<u64>,
}

impl Default for SkyConfig {
	fn default() -> Self {
		Self {
			particle_count: 50,
			particle_radius: 3.0,
			link_distance: 200.0,
			link_dim: 0.6,
			cull_margin: 50.0,
			phase_step: 0.03,
			phase_max: 10.0,
			max_shooting_stars: 5,
			shooting_star_chance: 1.0,
			shooting_star_decay: 0.02,
			shooting_star_margin: 50.0,
			seed: None,
		}
	}
}

impl SkyConfig {
	/// Replace unusable values with defaults so the simulation math stays total.
	pub fn sanitized(self) -> Self {
		let defaults = Self::default();
		let non_negative = |v: f64, fallback: f64| {
			if v.is_finite() && v >= 0.0 { v } else { fallback }
		};

		Self {
			particle_count: if self.particle_count <= MAX_PARTICLES {
				self.particle_count
			} else {
				defaults.particle_count
			},
			max_shooting_stars: if self.max_shooting_stars <= MAX_SHOOTING_STARS {
				self.max_shooting_stars
			} else {
				defaults.max_shooting_stars
			},
			particle_radius: non_negative(self.particle_radius, defaults.particle_radius),
			link_distance: non_negative(self.link_distance, defaults.link_distance),
			link_dim: non_negative(self.link_dim, defaults.link_dim).min(1.0),
			cull_margin: non_negative(self.cull_margin, defaults.cull_margin),
			phase_step: non_negative(self.phase_step, defaults.phase_step),
			phase_max: non_negative(self.phase_max, defaults.phase_max),
			shooting_star_chance: if self.shooting_star_chance.is_finite() {
				self.shooting_star_chance.clamp(0.0, 1.0)
			} else {
				defaults.shooting_star_chance
			},
			shooting_star_decay: non_negative(
				self.shooting_star_decay,
				defaults.shooting_star_decay,
			),
			shooting_star_margin: non_negative(
				self.shooting_star_margin,
				defaults.shooting_star_margin,
			),
			..self
		}
	}
}
