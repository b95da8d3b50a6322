//! Shooting stars: fast streaks that fade out independently of the particles.

use rand::Rng;

use super::random::uniform;
use super::state::Bounds;

/// Tail offset per unit of streak length; fixes the streak angle.
const TAIL_SLOPE: f64 = 0.3;

/// A single streak, moving right and down.
#[derive(Clone, Debug, PartialEq)]
pub struct ShootingStar {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub length: f64,
	pub opacity: f64,
}

impl ShootingStar {
	/// Start at a random point in the upper half of the surface.
	pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> Self {
		Self {
			x: uniform(rng, 0.0, bounds.width),
			y: uniform(rng, 0.0, bounds.height / 2.0),
			vx: uniform(rng, 8.0, 12.0),
			vy: uniform(rng, 3.0, 6.0),
			length: uniform(rng, 80.0, 150.0),
			opacity: 1.0,
		}
	}

	/// Head and tail of the streak.
	pub fn segment(&self) -> ((f64, f64), (f64, f64)) {
		(
			(self.x, self.y),
			(self.x - self.length, self.y - self.length * TAIL_SLOPE),
		)
	}
}

/// Live shooting stars, capped at `max` at any time.
#[derive(Clone, Debug)]
pub struct ShootingStarField {
	stars: Vec<ShootingStar>,
	max: usize,
	chance: f64,
	decay: f64,
	margin: f64,
}

impl ShootingStarField {
	pub fn new(max: usize, chance: f64, decay: f64, margin: f64) -> Self {
		Self {
			stars: Vec::with_capacity(max),
			max,
			chance: chance.clamp(0.0, 1.0),
			decay,
			margin,
		}
	}

	/// Spawn one star if under the cap and the per-frame roll succeeds.
	/// Returns whether a star was added.
	pub fn try_spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Bounds) -> bool {
		if self.stars.len() >= self.max {
			return false;
		}
		if self.chance < 1.0 && !rng.gen_bool(self.chance) {
			return false;
		}
		self.stars.push(ShootingStar::random(rng, bounds));
		true
	}

	/// Move and fade every star, dropping those that faded out or left the
	/// surface past the right or bottom margin.
	pub fn advance(&mut self, bounds: Bounds) {
		for i in (0..self.stars.len()).rev() {
			let star = &mut self.stars[i];
			star.x += star.vx;
			star.y += star.vy;
			star.opacity -= self.decay;

			if star.opacity <= 0.0
				|| star.x > bounds.width + self.margin
				|| star.y > bounds.height + self.margin
			{
				self.stars.remove(i);
			}
		}
	}

	pub fn stars(&self) -> &[ShootingStar] {
		&self.stars
	}

	pub fn len(&self) -> usize {
		self.stars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stars.is_empty()
	}

	#[cfg(test)]
	pub(crate) fn push(&mut self, star: ShootingStar) {
		self.stars.push(star);
	}
}
