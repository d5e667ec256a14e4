//! Catalog-driven content rendering.
//!
//! Skills and projects render from the immutable catalogs in the
//! [`crate::state::RenderState`] context. Everything language-dependent is
//! derived from the context's language signal; everything filterable from
//! its filter signal.

mod details;
mod projects;
mod skills;
mod toolbar;

pub use details::ProjectDetails;
pub use projects::{FilterBar, ProjectsGrid};
pub use skills::SkillsGrid;
pub use toolbar::Toolbar;
