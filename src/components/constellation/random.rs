//! Random helpers shared by the particle factory and the shooting stars.
//!
//! All functions take the RNG explicitly so a seeded source reproduces the
//! exact same sky.

use rand::Rng;

/// Edge of the drawing surface a particle enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
	Top,
	Right,
	Bottom,
	Left,
}

impl Side {
	pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

	/// Pick one of the four sides uniformly.
	pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
		Self::ALL[rng.gen_range(0..Self::ALL.len())]
	}
}

/// Uniform value in `[min, max)`. An empty range yields `min`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
	if max > min {
		rng.gen_range(min..max)
	} else {
		min
	}
}

/// Velocity pointing into the surface from `side`.
///
/// The inward component is at least 0.1 px/frame so an edge particle never
/// stalls outside the visible area; the tangential component spans `[-1, 1)`.
pub fn edge_velocity<R: Rng + ?Sized>(rng: &mut R, side: Side) -> (f64, f64) {
	const MIN: f64 = -1.0;
	const MAX: f64 = 1.0;
	const INWARD: f64 = 0.1;

	match side {
		Side::Top => (uniform(rng, MIN, MAX), uniform(rng, INWARD, MAX)),
		Side::Right => (uniform(rng, MIN, -INWARD), uniform(rng, MIN, MAX)),
		Side::Bottom => (uniform(rng, MIN, MAX), uniform(rng, MIN, -INWARD)),
		Side::Left => (uniform(rng, INWARD, MAX), uniform(rng, MIN, MAX)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	#[test]
	fn uniform_stays_in_range() {
		let mut rng = SmallRng::seed_from_u64(1);
		for _ in 0..1000 {
			let v = uniform(&mut rng, -2.5, 4.0);
			assert!((-2.5..4.0).contains(&v));
		}
	}

	#[test]
	fn uniform_empty_range_returns_min() {
		let mut rng = SmallRng::seed_from_u64(1);
		assert_eq!(uniform(&mut rng, 0.0, 0.0), 0.0);
		assert_eq!(uniform(&mut rng, 5.0, 1.0), 5.0);
	}

	#[test]
	fn edge_velocity_points_inward() {
		let mut rng = SmallRng::seed_from_u64(42);
		for _ in 0..500 {
			let (vx, vy) = edge_velocity(&mut rng, Side::Top);
			assert!((-1.0..1.0).contains(&vx));
			assert!((0.1..1.0).contains(&vy));

			let (vx, vy) = edge_velocity(&mut rng, Side::Right);
			assert!((-1.0..-0.1).contains(&vx));
			assert!((-1.0..1.0).contains(&vy));

			let (vx, vy) = edge_velocity(&mut rng, Side::Bottom);
			assert!((-1.0..1.0).contains(&vx));
			assert!((-1.0..-0.1).contains(&vy));

			let (vx, vy) = edge_velocity(&mut rng, Side::Left);
			assert!((0.1..1.0).contains(&vx));
			assert!((-1.0..1.0).contains(&vy));
		}
	}

	#[test]
	fn random_side_covers_all_sides() {
		let mut rng = SmallRng::seed_from_u64(3);
		let mut seen = [false; 4];
		for _ in 0..200 {
			let side = Side::random(&mut rng);
			let idx = Side::ALL.iter().position(|s| *s == side).unwrap();
			seen[idx] = true;
		}
		assert!(seen.iter().all(|s| *s));
	}
}
