//! Drawing surface abstraction and frame rendering passes.
//!
//! Passes run in a fixed order so later layers sit on top:
//! 1. Particles (glowing dots; the pointer particle is skipped)
//! 2. Links between nearby particles
//! 3. Shooting stars

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::links::Link;
use super::particles::Particle;
use super::shooting_stars::ShootingStar;
use super::theme::{Color, LineStyle, ParticleStyle};

/// Immediate-mode 2D drawing primitives the renderer needs.
pub trait Canvas {
	/// Erase the rectangle `(0, 0)..(width, height)`.
	fn clear(&mut self, width: f64, height: f64);
	fn set_fill(&mut self, color: Color);
	fn set_stroke(&mut self, color: Color);
	fn set_line_width(&mut self, width: f64);
	/// Soft glow applied to everything drawn afterwards.
	fn set_glow(&mut self, color: Color, blur: f64);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
}

impl Canvas for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn set_fill(&mut self, color: Color) {
		self.set_fill_style_str(&color.to_css());
	}

	fn set_stroke(&mut self, color: Color) {
		self.set_stroke_style_str(&color.to_css());
	}

	fn set_line_width(&mut self, width: f64) {
		CanvasRenderingContext2d::set_line_width(self, width);
	}

	fn set_glow(&mut self, color: Color, blur: f64) {
		self.set_shadow_color(&color.to_css());
		self.set_shadow_blur(blur);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
		self.begin_path();
		self.move_to(x1, y1);
		self.line_to(x2, y2);
		self.stroke();
	}
}

/// Draw every ambient particle as a disc plus a brighter core.
pub fn draw_particles<C: Canvas + ?Sized>(
	canvas: &mut C,
	particles: &[Particle],
	style: &ParticleStyle,
) {
	canvas.set_fill(style.fill);
	for p in particles.iter().filter(|p| !p.is_pointer()) {
		canvas.set_glow(style.glow, style.outer_blur + p.opacity * style.outer_blur_gain);
		canvas.fill_circle(p.x, p.y, p.radius);

		canvas.set_glow(style.glow, style.core_blur + p.opacity * style.core_blur_gain);
		canvas.fill_circle(p.x, p.y, p.radius * style.core_ratio);
	}
}

pub fn draw_links<C, I>(canvas: &mut C, links: I, style: &LineStyle)
where
	C: Canvas + ?Sized,
	I: IntoIterator<Item = Link>,
{
	canvas.set_line_width(style.width);
	canvas.set_glow(style.glow, style.glow_blur);
	for link in links {
		canvas.set_stroke(style.color.with_alpha(link.opacity));
		canvas.stroke_line(link.from.0, link.from.1, link.to.0, link.to.1);
	}
}

pub fn draw_shooting_stars<C: Canvas + ?Sized>(
	canvas: &mut C,
	stars: &[ShootingStar],
	style: &LineStyle,
) {
	canvas.set_line_width(style.width);
	canvas.set_glow(style.glow, style.glow_blur);
	for star in stars.iter().rev() {
		let ((hx, hy), (tx, ty)) = star.segment();
		canvas.set_stroke(style.color.with_alpha(star.opacity));
		canvas.stroke_line(hx, hy, tx, ty);
	}
}


#[cfg(test)]
mod tests {
	use super::testing::{DrawCall, RecordingCanvas};
	use super::*;
	use crate::components::constellation::links::links;
	use crate::components::constellation::particles::ParticleKind;
	use crate::components::constellation::theme::Theme;

	fn dot(x: f64, y: f64, opacity: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 3.0,
			opacity,
			phase: 0.0,
			kind: ParticleKind::Ambient,
		}
	}

	#[test]
	fn particle_draws_disc_and_core_with_opacity_glow() {
		let theme = Theme::default();
		let mut canvas = RecordingCanvas::default();
		draw_particles(&mut canvas, &[dot(10.0, 20.0, 0.5)], &theme.particle);

		assert_eq!(
			canvas.calls,
			vec![
				DrawCall::Fill(Color::WHITE),
				DrawCall::Glow(Color::GOLD, 25.0),
				DrawCall::Circle(10.0, 20.0, 3.0),
				DrawCall::Glow(Color::GOLD, 32.5),
				DrawCall::Circle(10.0, 20.0, 3.0 * 0.6),
			]
		);
	}

	#[test]
	fn pointer_particle_is_not_drawn() {
		let theme = Theme::default();
		let mut canvas = RecordingCanvas::default();
		draw_particles(
			&mut canvas,
			&[Particle::pointer(5.0, 5.0), dot(1.0, 1.0, 1.0)],
			&theme.particle,
		);
		assert!(canvas.circles().iter().all(|&(x, _, _)| x == 1.0));
		assert_eq!(canvas.circles().len(), 2);
	}

	#[test]
	fn link_stroke_alpha_matches_opacity() {
		let theme = Theme::default();
		let mut canvas = RecordingCanvas::default();
		let particles = [dot(0.0, 0.0, 1.0), dot(150.0, 0.0, 1.0)];
		draw_links(&mut canvas, links(&particles, 200.0, 0.6), &theme.link);

		assert_eq!(canvas.lines(), vec![(0.0, 0.0, 150.0, 0.0)]);
		let stroke = canvas
			.calls
			.iter()
			.find_map(|c| match c {
				DrawCall::Stroke(color) => Some(*color),
				_ => None,
			})
			.unwrap();
		assert!((stroke.a - 0.15).abs() < 1e-12);
		assert!(canvas.calls.contains(&DrawCall::LineWidth(1.2)));
		assert!(canvas.calls.contains(&DrawCall::Glow(Color::GOLD, 10.0)));
	}

	#[test]
	fn shooting_star_streak() {
		let theme = Theme::default();
		let mut canvas = RecordingCanvas::default();
		let star = ShootingStar {
			x: 300.0,
			y: 200.0,
			vx: 9.0,
			vy: 4.0,
			length: 100.0,
			opacity: 0.5,
		};
		draw_shooting_stars(&mut canvas, &[star], &theme.shooting_star);

		assert_eq!(canvas.lines(), vec![(300.0, 200.0, 200.0, 170.0)]);
		assert!(canvas.calls.contains(&DrawCall::Stroke(Color::WHITE.with_alpha(0.5))));
		assert!(canvas.calls.contains(&DrawCall::LineWidth(2.0)));
	}
}
