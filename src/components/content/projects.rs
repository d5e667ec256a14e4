//! Projects grid and filter bar.
//!
//! Cards rebuild as a unit whenever the language changes, so their derived
//! `data-category`/`data-type` attributes are always attached to fresh
//! elements. Visibility is a separate reactive step: each card reads the
//! active filter and collapses itself with `display: none`, which keeps
//! filtering reversible without touching the card list. A rebuild therefore
//! never resets the visitor's filter choice.

use leptos::prelude::*;

use crate::catalog::{Filter, Project, ProjectCategory, ProjectType};
use crate::locale::{Lang, UiText, text};
use crate::state::RenderState;

use super::details::ProjectDetails;
use super::skills::reveal_delay;

fn filter_label(filter: Filter) -> UiText {
	match filter {
		Filter::All => text::FILTER_ALL,
		Filter::Type(ProjectType::Heavy) => text::FILTER_HEAVY,
		Filter::Type(ProjectType::Small) => text::FILTER_SMALL,
		Filter::Category(ProjectCategory::Frontend) => text::FILTER_FRONTEND,
		Filter::Category(ProjectCategory::Backend) => text::FILTER_BACKEND,
		Filter::Category(ProjectCategory::Fullstack) => text::FILTER_FULLSTACK,
		Filter::Category(ProjectCategory::Other) => text::FILTER_OTHER,
	}
}

/// One toggle button per selectable filter, with `active` tracking the
/// context's filter signal.
#[component]
pub fn FilterBar() -> impl IntoView {
	let state = expect_context::<RenderState>();

	view! {
		<div class="project-filters">
			{Filter::ALL_FILTERS
				.into_iter()
				.map(|filter| {
					view! {
						<button
							class="filter-btn"
							class:active=move || state.filter.get() == filter
							data-filter=filter.token()
							on:click=move |_| state.set_filter(filter)
						>
							{move || filter_label(filter).get(state.lang.get())}
						</button>
					}
				})
				.collect_view()}
		</div>
	}
}

fn project_card(
	state: RenderState,
	project: &Project,
	lang: Lang,
	index: usize,
) -> impl IntoView + use<> {
	let id = project.id;
	let project_type = project.project_type;
	let category = project.category;

	view! {
		<div
			class="col-lg-4 col-md-6 mb-4 project-item fade-in"
			data-category=category.token()
			data-type=project_type.token()
			style:animation-delay=reveal_delay(index)
			style:display=move || {
				if state.filter.get().shows(project_type, category) { "block" } else { "none" }
			}
		>
			<div class="project-card">
				<div class="project-image">
					<i class=project.icon.clone()></i>
				</div>
				<div class="project-content">
					<span class="project-type">{project_type.label()}</span>
					<h5>{project.name(lang).to_string()}</h5>
					<p>{project.description(lang).to_string()}</p>
					<button class="btn btn-outline mt-3" on:click=move |_| state.show_project(id)>
						{text::VIEW_DETAILS.get(lang)}
					</button>
				</div>
			</div>
		</div>
	}
}

/// The filterable project grid plus the detail view it feeds.
#[component]
pub fn ProjectsGrid() -> impl IntoView {
	let state = expect_context::<RenderState>();

	view! {
		<section id="projects" class="projects-section">
			<h2>{move || text::PROJECTS_TITLE.get(state.lang.get())}</h2>
			<FilterBar />
			<div class="row" id="projectsGrid">
				{move || {
					let lang = state.lang.get();
					state.catalog.with_value(|catalog| {
						catalog
							.projects
							.iter()
							.enumerate()
							.map(|(index, project)| project_card(state, project, lang, index))
							.collect_view()
					})
				}}
			</div>
			<ProjectDetails />
		</section>
	}
}
