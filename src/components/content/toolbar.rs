//! Language and theme toggles.

use leptos::prelude::*;

use crate::locale::Lang;
use crate::prefs::Theme;
use crate::state::RenderState;

fn lang_button(state: RenderState, lang: Lang) -> impl IntoView {
	view! {
		<button
			class="lang-btn"
			class:active=move || state.lang.get() == lang
			data-lang=lang.as_str()
			on:click=move |_| state.set_language(lang)
		>
			{lang.as_str().to_uppercase()}
		</button>
	}
}

/// Header controls: the two language buttons and the theme toggle.
#[component]
pub fn Toolbar() -> impl IntoView {
	let state = expect_context::<RenderState>();

	view! {
		<header class="toolbar">
			<div class="lang-switch">
				{lang_button(state, Lang::En)}
				{lang_button(state, Lang::Ar)}
			</div>
			<button id="themeToggle" class="theme-toggle" on:click=move |_| state.toggle_theme()>
				<i class=move || {
					match state.theme.get() {
						Theme::Light => "fas fa-moon",
						Theme::Dark => "fas fa-sun",
					}
				}></i>
			</button>
		</header>
	}
}
