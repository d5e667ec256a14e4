//! Decorative particle background.
//!
//! Renders a field of drifting points on a fullscreen HTML canvas with:
//! - Particle count proportional to surface area
//! - Boundary reflection and constant per-particle velocity
//! - Proximity connections: a line per close pair with linear opacity falloff
//! - Full reinitialization on viewport resize
//!
//! The simulation core ([`field`]) is pure and host-testable; only the
//! component and render layers touch the DOM.

mod component;
pub mod field;
mod render;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use field::ParticleField;
pub use theme::FieldTheme;
