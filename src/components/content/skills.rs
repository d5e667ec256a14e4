//! Skills grid.

use leptos::prelude::*;

use crate::locale::text;
use crate::state::RenderState;

/// Reveal delay added per grid position, in seconds. The stagger is consumed
/// by the CSS fade-in animation.
pub(crate) const REVEAL_STEP_SECS: f64 = 0.1;

pub(crate) fn reveal_delay(index: usize) -> String {
	format!("{:.1}s", index as f64 * REVEAL_STEP_SECS)
}

/// One tile per skill, in catalog order. Skills carry no localized text, so
/// the tiles themselves are built once; only the section heading tracks the
/// language.
#[component]
pub fn SkillsGrid() -> impl IntoView {
	let state = expect_context::<RenderState>();

	view! {
		<section id="skills" class="skills-section">
			<h2>{move || text::SKILLS_TITLE.get(state.lang.get())}</h2>
			<div class="row" id="skillsGrid">
				{state.catalog.with_value(|catalog| {
					catalog
						.skills
						.iter()
						.enumerate()
						.map(|(index, skill)| {
							view! {
								<div
									class="col-lg-3 col-md-4 col-sm-6 fade-in"
									style:animation-delay=reveal_delay(index)
								>
									<div class="skill-item">
										<div class="skill-icon">
											<i class=skill.icon.clone()></i>
										</div>
										<h6>{skill.name.clone()}</h6>
									</div>
								</div>
							}
						})
						.collect_view()
				})}
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reveal_delay_staggers_by_tenths() {
		assert_eq!(reveal_delay(0), "0.0s");
		assert_eq!(reveal_delay(3), "0.3s");
		assert_eq!(reveal_delay(14), "1.4s");
	}
}
