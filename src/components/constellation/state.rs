//! Sky simulation state.
//!
//! Owns the particle registry, the shooting stars, the surface bounds and the
//! random source. Created once when the canvas mounts, then advanced one frame
//! per `tick`. Pointer and resize handlers mutate it between frames.

use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::config::SkyConfig;
use super::links::links;
use super::particles::{Particle, ParticleRegistry};
use super::render::{self, Canvas};
use super::shooting_stars::{ShootingStar, ShootingStarField};
use super::theme::Theme;

/// Size of the drawing surface in pixels. Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	pub width: f64,
	pub height: f64,
}

impl Bounds {
	/// Clamp negative or non-finite dimensions to zero.
	pub fn new(width: f64, height: f64) -> Self {
		let clamp = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
		Self {
			width: clamp(width),
			height: clamp(height),
		}
	}
}

/// Complete state of one animated sky.
pub struct SkyState {
	config: SkyConfig,
	bounds: Bounds,
	registry: ParticleRegistry,
	stars: ShootingStarField,
	rng: SmallRng,
	frame_count: u64,
}

impl SkyState {
	/// Seed the sky with a full interior population.
	pub fn new(config: SkyConfig, width: f64, height: f64, seed: u64) -> Self {
		let config = config.sanitized();
		let bounds = Bounds::new(width, height);
		let mut rng = SmallRng::seed_from_u64(seed);

		let mut registry = ParticleRegistry::new(
			config.particle_count,
			config.particle_radius,
			config.phase_max,
		);
		registry.seed(&mut rng, bounds);

		let stars = ShootingStarField::new(
			config.max_shooting_stars,
			config.shooting_star_chance,
			config.shooting_star_decay,
			config.shooting_star_margin,
		);

		Self {
			config,
			bounds,
			registry,
			stars,
			rng,
			frame_count: 0,
		}
	}

	/// Render the current frame, then advance the simulation by one step.
	pub fn tick<C: Canvas + ?Sized>(&mut self, canvas: &mut C, theme: &Theme) {
		let particles = self.registry.particles();

		canvas.clear(self.bounds.width, self.bounds.height);
		render::draw_particles(canvas, particles, &theme.particle);
		render::draw_links(
			canvas,
			links(particles, self.config.link_distance, self.config.link_dim),
			&theme.link,
		);
		render::draw_shooting_stars(canvas, self.stars.stars(), &theme.shooting_star);

		self.step();
	}

	/// Advance one frame without drawing.
	pub fn step(&mut self) {
		self.stars.advance(self.bounds);
		self.registry.advance(
			self.bounds,
			self.config.cull_margin,
			self.config.phase_step,
		);
		self.registry.ensure_population(&mut self.rng, self.bounds);
		self.stars.try_spawn(&mut self.rng, self.bounds);
		self.frame_count += 1;
	}

	/// Track a new surface size. Particles keep their positions.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.bounds = Bounds::new(width, height);
		debug!(
			"homepage-sky: resized to {}x{}",
			self.bounds.width, self.bounds.height
		);
	}

	pub fn pointer_enter(&mut self, x: f64, y: f64) {
		self.registry.attach_pointer(x, y);
		debug!("homepage-sky: pointer entered at ({x}, {y})");
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		self.registry.move_pointer(x, y);
	}

	pub fn pointer_leave(&mut self) {
		if self.registry.detach_pointer() {
			debug!("homepage-sky: pointer left");
		}
	}

	pub fn particles(&self) -> &[Particle] {
		self.registry.particles()
	}

	pub fn shooting_stars(&self) -> &[ShootingStar] {
		self.stars.stars()
	}

	pub fn bounds(&self) -> Bounds {
		self.bounds
	}

	pub fn config(&self) -> &SkyConfig {
		&self.config
	}

	/// Frames advanced since creation.
	pub fn frame_count(&self) -> u64 {
		self.frame_count
	}

	#[cfg(test)]
	pub(crate) fn registry_mut(&mut self) -> &mut ParticleRegistry {
		&mut self.registry
	}

	#[cfg(test)]
	pub(crate) fn stars_mut(&mut self) -> &mut ShootingStarField {
		&mut self.stars
	}
}
