//! Visual styling for the constellation: colors, glow and stroke widths.

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
	pub const GOLD: Color = Color::rgb(255, 215, 0);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with alpha replaced, clamped to [0, 1].
	pub fn with_alpha(self, a: f64) -> Self {
		Self {
			a: a.clamp(0.0, 1.0),
			..self
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// How a glowing dot is drawn. Blur grows with the particle's opacity.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	pub fill: Color,
	pub glow: Color,
	/// Outer disc glow: `blur + opacity * blur_gain`.
	pub outer_blur: f64,
	pub outer_blur_gain: f64,
	/// Inner core radius as a fraction of the particle radius.
	pub core_ratio: f64,
	pub core_blur: f64,
	pub core_blur_gain: f64,
}

/// Stroke style shared by links and shooting stars.
#[derive(Clone, Debug)]
pub struct LineStyle {
	/// Base color; alpha is replaced per line.
	pub color: Color,
	pub width: f64,
	pub glow: Color,
	pub glow_blur: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub particle: ParticleStyle,
	pub link: LineStyle,
	pub shooting_star: LineStyle,
}

impl Theme {
	/// White points with a gold halo.
	pub fn gold() -> Self {
		Self {
			particle: ParticleStyle {
				fill: Color::WHITE,
				glow: Color::GOLD,
				outer_blur: 15.0,
				outer_blur_gain: 20.0,
				core_ratio: 0.6,
				core_blur: 25.0,
				core_blur_gain: 15.0,
			},
			link: LineStyle {
				color: Color::WHITE,
				width: 1.2,
				glow: Color::GOLD,
				glow_blur: 10.0,
			},
			shooting_star: LineStyle {
				color: Color::WHITE,
				width: 2.0,
				glow: Color::GOLD,
				glow_blur: 15.0,
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::gold()
	}
}
