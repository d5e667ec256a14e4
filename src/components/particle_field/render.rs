//! Canvas drawing for the particle field.
//!
//! One pass per frame: clear the surface, fill every particle, then stroke a
//! line for each pair within the connection threshold. The pair loop starts
//! at `a` rather than `a + 1`, so each particle is also paired with itself;
//! that degenerate zero-length segment is harmless and kept to match the
//! site's original look. The pass is O(n²) in particle count, which is fine
//! at the densities the area formula produces for typical viewports.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::{PARTICLE_RADIUS, ParticleField, connection_alpha};
use super::theme::FieldTheme;

/// Draws the complete field to the canvas.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	ctx.set_fill_style_str(&theme.particle.to_css());
	for p in &field.particles {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, PARTICLE_RADIUS, 0.0, PI * 2.0);
		ctx.fill();
	}

	connect(field, ctx, theme);
}

fn connect(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	ctx.set_line_width(theme.link_width);

	let particles = &field.particles;
	for a in 0..particles.len() {
		for b in a..particles.len() {
			let (dx, dy) = (particles[a].x - particles[b].x, particles[a].y - particles[b].y);
			let Some(alpha) = connection_alpha(dx * dx + dy * dy) else {
				continue;
			};

			ctx.set_stroke_style_str(&theme.link.with_alpha(alpha).to_css());
			ctx.begin_path();
			ctx.move_to(particles[a].x, particles[a].y);
			ctx.line_to(particles[b].x, particles[b].y);
			ctx.stroke();
		}
	}
}
