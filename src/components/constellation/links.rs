//! Proximity links between particles.

use super::particles::Particle;

/// A line to draw between two particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub opacity: f64,
}

/// Opacity of a link spanning `distance`, or `None` at or beyond `threshold`.
///
/// Falls linearly from `dim` at distance 0 to 0 at the threshold.
pub fn link_opacity(distance: f64, threshold: f64, dim: f64) -> Option<f64> {
	let fraction = distance / threshold;
	if fraction < 1.0 {
		Some((1.0 - fraction) * dim)
	} else {
		None
	}
}

/// Every unordered pair closer than `threshold`, pointer particle included.
pub fn links(
	particles: &[Particle],
	threshold: f64,
	dim: f64,
) -> impl Iterator<Item = Link> + '_ {
	particles.iter().enumerate().flat_map(move |(i, a)| {
		particles[i + 1..].iter().filter_map(move |b| {
			link_opacity(a.distance_to(b), threshold, dim).map(|opacity| Link {
				from: (a.x, a.y),
				to: (b.x, b.y),
				opacity,
			})
		})
	})
}
