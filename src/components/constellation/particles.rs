//! Constellation particles: creation, registry and per-frame motion.

use rand::Rng;

use super::random::{Side, edge_velocity, uniform};
use super::state::Bounds;

/// Distinguishes drifting particles from the one that follows the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
	/// Drawn, drifts, pulses.
	Ambient,
	/// Invisible, mirrors the pointer; only takes part in linking.
	Pointer,
}

/// A single point of the constellation.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub opacity: f64,
	pub phase: f64, // drives opacity pulsing
	pub kind: ParticleKind,
}

impl Particle {
	fn ambient(x: f64, y: f64, (vx, vy): (f64, f64), radius: f64, phase: f64) -> Self {
		Self {
			x,
			y,
			vx,
			vy,
			radius,
			opacity: 1.0,
			phase,
			kind: ParticleKind::Ambient,
		}
	}

	/// Zero-radius, zero-velocity particle at the pointer position.
	pub fn pointer(x: f64, y: f64) -> Self {
		Self {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 0.0,
			opacity: 0.0,
			phase: 0.0,
			kind: ParticleKind::Pointer,
		}
	}

	pub fn is_pointer(&self) -> bool {
		self.kind == ParticleKind::Pointer
	}

	/// Euclidean distance to another particle.
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}

	/// Inside the surface grown by `margin` on every side (strict).
	pub fn within(&self, bounds: Bounds, margin: f64) -> bool {
		self.x > -margin
			&& self.x < bounds.width + margin
			&& self.y > -margin
			&& self.y < bounds.height + margin
	}
}

/// Spawn just outside a random edge, moving inward.
pub fn spawn_at_edge<R: Rng + ?Sized>(
	rng: &mut R,
	bounds: Bounds,
	radius: f64,
	phase_max: f64,
) -> Particle {
	let side = Side::random(rng);
	let (x, y) = match side {
		Side::Top => (uniform(rng, 0.0, bounds.width), -radius),
		Side::Right => (bounds.width + radius, uniform(rng, 0.0, bounds.height)),
		Side::Bottom => (uniform(rng, 0.0, bounds.width), bounds.height + radius),
		Side::Left => (-radius, uniform(rng, 0.0, bounds.height)),
	};
	let velocity = edge_velocity(rng, side);
	let phase = uniform(rng, 0.0, phase_max);
	Particle::ambient(x, y, velocity, radius, phase)
}

/// Spawn anywhere on the surface.
///
/// Velocity always uses the top-edge rule, so seeded particles drift
/// downward no matter where they start.
pub fn spawn_interior<R: Rng + ?Sized>(
	rng: &mut R,
	bounds: Bounds,
	radius: f64,
	phase_max: f64,
) -> Particle {
	let x = uniform(rng, 0.0, bounds.width);
	let y = uniform(rng, 0.0, bounds.height);
	let velocity = edge_velocity(rng, Side::Top);
	let phase = uniform(rng, 0.0, phase_max);
	Particle::ambient(x, y, velocity, radius, phase)
}

/// Ordered set of live particles with a fixed target population.
#[derive(Clone, Debug)]
pub struct ParticleRegistry {
	particles: Vec<Particle>,
	target: usize,
	radius: f64,
	phase_max: f64,
}

impl ParticleRegistry {
	pub fn new(target: usize, radius: f64, phase_max: f64) -> Self {
		Self {
			particles: Vec::with_capacity(target.saturating_add(1)),
			target,
			radius,
			phase_max,
		}
	}

	/// Fill up to the target with interior particles.
	pub fn seed<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Bounds) {
		while self.particles.len() < self.target {
			self.particles
				.push(spawn_interior(rng, bounds, self.radius, self.phase_max));
		}
	}

	/// Append at most one edge particle when under target. Returns whether one was added.
	pub fn ensure_population<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Bounds) -> bool {
		if self.particles.len() >= self.target {
			return false;
		}
		self.particles
			.push(spawn_at_edge(rng, bounds, self.radius, self.phase_max));
		true
	}

	/// Add the pointer particle, or move it if already attached.
	pub fn attach_pointer(&mut self, x: f64, y: f64) {
		if !self.move_pointer(x, y) {
			self.particles.push(Particle::pointer(x, y));
		}
	}

	/// Remove the pointer particle. Returns whether it was attached.
	pub fn detach_pointer(&mut self) -> bool {
		let before = self.particles.len();
		self.particles.retain(|p| !p.is_pointer());
		self.particles.len() != before
	}

	/// Set the pointer particle's position. Returns whether it is attached.
	pub fn move_pointer(&mut self, x: f64, y: f64) -> bool {
		match self.particles.iter_mut().find(|p| p.is_pointer()) {
			Some(p) => {
				p.x = x;
				p.y = y;
				true
			}
			None => false,
		}
	}

	pub fn has_pointer(&self) -> bool {
		self.particles.iter().any(Particle::is_pointer)
	}

	/// Integrate one frame of motion, pulse opacity, then drop particles
	/// outside the surface grown by `margin`.
	pub fn advance(&mut self, bounds: Bounds, margin: f64, phase_step: f64) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;
			if !p.is_pointer() {
				p.phase += phase_step;
				p.opacity = p.phase.cos().abs();
			}
		}
		self.particles.retain(|p| p.within(bounds, margin));
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn target(&self) -> usize {
		self.target
	}

	#[cfg(test)]
	pub(crate) fn push(&mut self, particle: Particle) {
		self.particles.push(particle);
	}

	#[cfg(test)]
	pub(crate) fn clear(&mut self) {
		self.particles.clear();
	}
}
