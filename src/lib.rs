//! folio: single-page portfolio front end.
//!
//! This crate renders the two subsystems that share the page lifecycle: a
//! decorative canvas particle field and the catalog-driven content (skills,
//! projects, filtering, bilingual text). Everything runs client-side on the
//! single UI thread; no server, no networking, and no persistence beyond two
//! preference strings in local storage.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod catalog;
pub mod components;
pub mod locale;
pub mod prefs;
pub mod state;

pub use catalog::{Catalog, Filter};
pub use components::content::{ProjectDetails, ProjectsGrid, SkillsGrid, Toolbar};
pub use components::particle_field::ParticleFieldCanvas;
pub use locale::Lang;
pub use state::RenderState;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("folio: logging initialized");
}

/// Load catalog data from a script element with id="catalog-data".
/// Expected format: JSON with { skills: [...], projects: [...] }
fn catalog_from_dom() -> Option<Catalog> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("catalog-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<Catalog>(&json_text) {
		Ok(catalog) => match catalog.validate() {
			Ok(()) => {
				info!(
					"folio: loaded {} skills, {} projects",
					catalog.skills.len(),
					catalog.projects.len()
				);
				Some(catalog)
			}
			Err(e) => {
				warn!("folio: rejecting page catalog: {e}");
				None
			}
		},
		Err(e) => {
			warn!("folio: failed to parse page catalog: {e}");
			None
		}
	}
}

/// The page catalog if present and valid, otherwise the compiled-in default.
pub fn load_catalog() -> Catalog {
	if let Some(catalog) = catalog_from_dom() {
		return catalog;
	}
	match Catalog::embedded() {
		Ok(catalog) => catalog,
		Err(e) => {
			// Content sections render empty; the page itself stays up.
			error!("folio: embedded catalog rejected: {e}");
			Catalog::default()
		}
	}
}

/// Main application component.
/// Loads the catalog, builds the render context, and lays out the page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let state = RenderState::new(load_catalog());
	provide_context(state);

	view! {
		<Html
			attr:lang=move || state.lang.get().as_str()
			attr:dir=move || state.lang.get().dir()
			attr:data-theme=move || state.theme.get().as_str()
		/>
		<Title text="Osama Romih | Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleFieldCanvas />
		<main class="page-content">
			<Toolbar />
			<SkillsGrid />
			<ProjectsGrid />
		</main>
	}
}
