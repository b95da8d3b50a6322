//! Animated constellation background.
//!
//! Renders a drifting particle field on an HTML canvas with:
//! - Particles that drift in from the edges and pulse in opacity
//! - Fading links between particles closer than a distance threshold
//! - An invisible particle that follows the pointer and links to its neighbours
//! - Shooting stars streaking across the upper half of the page
//!
//! The simulation ([`SkyState`]) is independent of the browser: it draws
//! through the [`Canvas`] trait and is driven frame by frame by an
//! [`AnimationLoop`] over any [`FrameScheduler`].
//!
//! # Example
//!
//! ```ignore
//! use homepage_sky::{ConstellationCanvas, SkyConfig};
//!
//! let config = SkyConfig { particle_count: 80, ..SkyConfig::default() };
//! view! { <ConstellationCanvas config=config fullscreen=true /> }
//! ```

mod component;
mod config;
mod links;
mod particles;
mod random;
mod render;
mod scheduler;
mod shooting_stars;
mod state;
pub mod theme;

pub use component::ConstellationCanvas;
pub use config::SkyConfig;
pub use links::{Link, link_opacity, links};
pub use particles::{Particle, ParticleKind, ParticleRegistry, spawn_at_edge, spawn_interior};
pub use random::{Side, edge_velocity, uniform};
pub use render::Canvas;
pub use scheduler::{
	AnimationFrameScheduler, AnimationLoop, FrameHandle, FrameScheduler, ManualScheduler,
};
pub use shooting_stars::{ShootingStar, ShootingStarField};
pub use state::{Bounds, SkyState};
pub use theme::Theme;
