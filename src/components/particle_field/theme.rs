//! Visual styling for the particle field.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colors and stroke settings for particles and their connecting lines.
#[derive(Clone, Debug)]
pub struct FieldTheme {
	/// Fill color for every particle.
	pub particle: Color,
	/// Hue for connection lines; alpha is replaced per pair by the
	/// distance falloff.
	pub link: Color,
	/// Connection line width in canvas units.
	pub link_width: f64,
}

impl Default for FieldTheme {
	fn default() -> Self {
		// The site's accent cyan.
		let accent = Color::rgb(0, 212, 255);
		Self {
			particle: accent,
			link: accent,
			link_width: 1.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_formatting() {
		assert_eq!(Color::rgb(0, 212, 255).to_css(), "#00d4ff");
		assert_eq!(
			Color::rgb(0, 212, 255).with_alpha(0.5).to_css(),
			"rgba(0, 212, 255, 0.5)"
		);
	}
}
