//! Project detail view.

use leptos::prelude::*;

use crate::locale::text;
use crate::state::RenderState;

/// Localized detail panel for the currently selected project.
///
/// Looks the project up by id when a selection exists; an unknown id is a
/// silent no-op and renders nothing. Features and tech tags keep catalog
/// order.
#[component]
pub fn ProjectDetails() -> impl IntoView {
	let state = expect_context::<RenderState>();

	let panel = move || {
		let id = state.selected_project.get()?;
		let lang = state.lang.get();
		state.catalog.with_value(|catalog| {
			let project = catalog.project_by_id(id)?;

			Some(view! {
				<div class="project-modal" role="dialog">
					<div class="project-modal-content">
						<div class="project-image">
							<i class=project.icon.clone()></i>
						</div>
						<h4>{project.name(lang).to_string()}</h4>
						<p class="lead">{project.description(lang).to_string()}</p>
						<h6>{text::FEATURES.get(lang)}</h6>
						<ul>
							{project
								.features
								.iter()
								.map(|feature| view! { <li>{feature.clone()}</li> })
								.collect_view()}
						</ul>
						<h6>{text::TECHNOLOGIES.get(lang)}</h6>
						<div class="project-tags">
							{project
								.tech
								.iter()
								.map(|tech| view! { <span class="tag">{tech.clone()}</span> })
								.collect_view()}
						</div>
						<button class="btn btn-outline" on:click=move |_| state.close_project()>
							{text::CLOSE.get(lang)}
						</button>
					</div>
				</div>
			})
		})
	};

	view! { {panel} }
}
