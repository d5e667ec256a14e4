//! Page components.

pub mod content;
pub mod particle_field;
