//! Shared render context.
//!
//! All session-wide mutable state lives here as an explicit value passed
//! through Leptos context rather than module-level globals: current language,
//! active project filter, theme, and the project selected for the detail
//! view. Every render path reads these signals; user-gesture handlers are the
//! only writers. Language and theme persist across sessions, the filter does
//! not.

use leptos::prelude::*;

use crate::catalog::{Catalog, Filter};
use crate::locale::Lang;
use crate::prefs::{self, Theme};

/// The render context consulted by every content component.
///
/// Copyable handle; all fields are signals or stored values.
#[derive(Clone, Copy)]
pub struct RenderState {
	/// The immutable skills/projects catalogs.
	pub catalog: StoredValue<Catalog>,
	/// Current display language.
	pub lang: RwSignal<Lang>,
	/// Active project filter. Survives language switches by construction:
	/// card visibility is derived from this signal, so a rebuild re-applies
	/// it as its own explicit step.
	pub filter: RwSignal<Filter>,
	/// Current color theme.
	pub theme: RwSignal<Theme>,
	/// Project id shown in the detail view, if any.
	pub selected_project: RwSignal<Option<u32>>,
}

impl RenderState {
	/// Build the context from a validated catalog and stored preferences.
	pub fn new(catalog: Catalog) -> Self {
		Self {
			catalog: StoredValue::new(catalog),
			lang: RwSignal::new(prefs::load_lang()),
			filter: RwSignal::new(Filter::default()),
			theme: RwSignal::new(prefs::load_theme()),
			selected_project: RwSignal::new(None),
		}
	}

	/// Switch the display language and persist the choice.
	///
	/// Setting the signal rebuilds language-dependent content; the active
	/// filter is untouched and re-applies to the fresh cards on its own.
	pub fn set_language(&self, lang: Lang) {
		self.lang.set(lang);
		prefs::store_lang(lang);
	}

	/// Apply a new project filter.
	pub fn set_filter(&self, filter: Filter) {
		self.filter.set(filter);
	}

	/// Flip the color theme and persist the choice.
	pub fn toggle_theme(&self) {
		let next = self.theme.get_untracked().toggled();
		self.theme.set(next);
		prefs::store_theme(next);
	}

	/// Open the detail view for a project id. An unknown id is a silent
	/// no-op: the selection is left untouched.
	pub fn show_project(&self, id: u32) {
		if self.catalog.with_value(|c| c.project_by_id(id).is_some()) {
			self.selected_project.set(Some(id));
		}
	}

	/// Dismiss the detail view.
	pub fn close_project(&self) {
		self.selected_project.set(None);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::{Project, ProjectCategory, ProjectType};

	// Built by hand so host tests never touch browser storage.
	fn test_state() -> RenderState {
		let catalog = Catalog {
			skills: Vec::new(),
			projects: vec![Project {
				id: 4,
				name: "Travel Egypt Vacation".to_string(),
				name_ar: "رحلات مصر".to_string(),
				project_type: ProjectType::Heavy,
				category: ProjectCategory::Fullstack,
				description: "Tourism booking platform.".to_string(),
				description_ar: "منصة حجز سياحية.".to_string(),
				tags: Vec::new(),
				icon: "fas fa-plane".to_string(),
				features: Vec::new(),
				tech: Vec::new(),
			}],
		};
		RenderState {
			catalog: StoredValue::new(catalog),
			lang: RwSignal::new(Lang::En),
			filter: RwSignal::new(Filter::default()),
			theme: RwSignal::new(Theme::default()),
			selected_project: RwSignal::new(None),
		}
	}

	#[test]
	fn unknown_project_id_leaves_selection_unchanged() {
		let state = test_state();

		state.show_project(99);
		assert_eq!(state.selected_project.get_untracked(), None);

		state.show_project(4);
		assert_eq!(state.selected_project.get_untracked(), Some(4));

		state.show_project(99);
		assert_eq!(state.selected_project.get_untracked(), Some(4));
	}

	#[test]
	fn close_clears_the_selection() {
		let state = test_state();
		state.show_project(4);
		state.close_project();
		assert_eq!(state.selected_project.get_untracked(), None);
	}
}
