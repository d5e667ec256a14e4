//! Particle field simulation.
//!
//! Pure state and motion logic for the decorative background: particle
//! placement, boundary reflection, and the proximity-connection falloff.
//! Randomness is injected so the simulation can run deterministically in
//! host tests; the component layer passes `js_sys::Math::random`.

/// Fixed particle radius in canvas units.
pub const PARTICLE_RADIUS: f64 = 2.0;

/// Surface area (in square canvas units) per particle. A 1920x1080 viewport
/// yields 69 particles.
pub const AREA_PER_PARTICLE: f64 = 30000.0;

/// Squared-distance threshold below which two particles are connected.
/// Constant regardless of density or viewport; see DESIGN.md for the tuning
/// trade-off.
pub const CONNECT_DIST_SQ: f64 = 9000.0;

/// A single moving point in the background field.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
}

/// The full particle set plus the surface bounds it moves within.
///
/// Created once at mount and rebuilt wholesale by [`ParticleField::resize`];
/// no particle identity survives a resize.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Populate a field sized for the given surface.
	///
	/// Particle count is `floor(width * height / 30000)`. Positions are
	/// uniform in `[0, dimension - 2 * radius)` per axis; velocity
	/// components are uniform in `[-0.5, 0.5)` per axis and may be zero.
	/// `rng` must return values in `[0, 1)`.
	pub fn new(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			width,
			height,
		};
		field.populate(rng);
		field
	}

	fn populate(&mut self, rng: &mut impl FnMut() -> f64) {
		let count = (self.width * self.height / AREA_PER_PARTICLE).floor() as usize;
		self.particles = Vec::with_capacity(count);

		for _ in 0..count {
			self.particles.push(Particle {
				x: rng() * (self.width - PARTICLE_RADIUS * 2.0),
				y: rng() * (self.height - PARTICLE_RADIUS * 2.0),
				vx: rng() - 0.5,
				vy: rng() - 0.5,
			});
		}
	}

	/// Surface width in canvas units.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Surface height in canvas units.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Advance every particle by one frame.
	///
	/// Reflection is checked on the pre-move position: a component whose
	/// position already lies outside `[0, bound]` has its velocity negated
	/// first, then the position advances by the (possibly flipped) velocity.
	pub fn tick(&mut self) {
		for p in &mut self.particles {
			if p.x < 0.0 || p.x > self.width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > self.height {
				p.vy = -p.vy;
			}
			p.x += p.vx;
			p.y += p.vy;
		}
	}

	/// Replace the surface bounds and regenerate the whole particle set.
	pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) {
		self.width = width;
		self.height = height;
		self.populate(rng);
	}
}

/// Stroke opacity for a particle pair at the given squared distance.
///
/// Linear falloff: fully opaque at distance 0, `None` (no line) at or beyond
/// the threshold.
pub fn connection_alpha(dist_sq: f64) -> Option<f64> {
	if dist_sq < CONNECT_DIST_SQ {
		Some(1.0 - dist_sq / CONNECT_DIST_SQ)
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	// Deterministic xorshift in [0, 1) for reproducible fields.
	fn xorshift(state: &mut u32) -> f64 {
		*state ^= *state << 13;
		*state ^= *state >> 17;
		*state ^= *state << 5;
		*state as f64 / (u32::MAX as f64 + 1.0)
	}

	fn test_rng() -> impl FnMut() -> f64 {
		let mut state = 0xDEADBEEFu32;
		move || xorshift(&mut state)
	}

	#[test]
	fn count_follows_area_formula() {
		let mut rng = test_rng();
		assert_eq!(ParticleField::new(600.0, 500.0, &mut rng).particles.len(), 10);
		// 700 * 500 / 30000 = 11.66.. -> floor, not the loop-bound ceiling
		assert_eq!(ParticleField::new(700.0, 500.0, &mut rng).particles.len(), 11);
		assert_eq!(ParticleField::new(100.0, 100.0, &mut rng).particles.len(), 0);
	}

	#[test]
	fn initial_positions_and_velocities_in_bounds() {
		let mut rng = test_rng();
		let field = ParticleField::new(1920.0, 1080.0, &mut rng);
		assert_eq!(field.particles.len(), 69);
		for p in &field.particles {
			assert!(p.x >= 0.0 && p.x < 1920.0 - PARTICLE_RADIUS * 2.0);
			assert!(p.y >= 0.0 && p.y < 1080.0 - PARTICLE_RADIUS * 2.0);
			assert!(p.vx >= -0.5 && p.vx < 0.5);
			assert!(p.vy >= -0.5 && p.vy < 0.5);
		}
	}

	#[test]
	fn tick_advances_interior_particle_by_velocity() {
		let mut rng = test_rng();
		let mut field = ParticleField::new(0.0, 0.0, &mut rng);
		field.width = 100.0;
		field.height = 100.0;
		field.particles = vec![Particle {
			x: 50.0,
			y: 50.0,
			vx: 0.3,
			vy: -0.2,
		}];

		field.tick();

		let p = &field.particles[0];
		assert!((p.x - 50.3).abs() < 1e-12);
		assert!((p.y - 49.8).abs() < 1e-12);
		assert_eq!((p.vx, p.vy), (0.3, -0.2));
	}

	#[test]
	fn reflection_flips_velocity_before_moving() {
		let mut rng = test_rng();
		let mut field = ParticleField::new(0.0, 0.0, &mut rng);
		field.width = 100.0;
		field.height = 100.0;
		// Already past the left edge and the bottom edge: both components
		// flip, then the move applies the flipped velocity.
		field.particles = vec![Particle {
			x: -1.0,
			y: 101.0,
			vx: -0.4,
			vy: 0.5,
		}];

		field.tick();

		let p = &field.particles[0];
		assert_eq!((p.vx, p.vy), (0.4, -0.5));
		assert!((p.x - -0.6).abs() < 1e-12);
		assert!((p.y - 100.5).abs() < 1e-12);
	}

	#[test]
	fn reflection_is_per_axis() {
		let mut rng = test_rng();
		let mut field = ParticleField::new(0.0, 0.0, &mut rng);
		field.width = 100.0;
		field.height = 100.0;
		field.particles = vec![Particle {
			x: 101.0,
			y: 50.0,
			vx: 0.2,
			vy: 0.1,
		}];

		field.tick();

		let p = &field.particles[0];
		assert_eq!(p.vx, -0.2);
		assert_eq!(p.vy, 0.1);
	}

	#[test]
	fn resize_rebuilds_the_whole_set() {
		let mut rng = test_rng();
		let mut field = ParticleField::new(600.0, 500.0, &mut rng);
		let before = field.particles.clone();

		field.resize(900.0, 600.0, &mut rng);

		assert_eq!(field.particles.len(), 18);
		assert_eq!(field.width(), 900.0);
		assert_eq!(field.height(), 600.0);
		assert_ne!(field.particles, before);
	}

	#[test]
	fn connection_alpha_linear_falloff() {
		assert_eq!(connection_alpha(0.0), Some(1.0));
		assert_eq!(connection_alpha(4500.0), Some(0.5));
		assert_eq!(connection_alpha(9000.0), None);
		assert_eq!(connection_alpha(12000.0), None);

		let alpha = connection_alpha(2700.0).unwrap();
		assert!((alpha - 0.7).abs() < 1e-12);
	}
}
