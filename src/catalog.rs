//! Skill and project catalogs.
//!
//! Both catalogs are immutable after load. Entries are deserialized from
//! JSON (a `<script id="catalog-data">` element, or the compiled-in default)
//! and validated once: every project must carry both English and Arabic
//! display strings. A missing translation is a data-entry defect caught at
//! load time, never a case the renderer handles.

use serde::Deserialize;

use crate::locale::Lang;

/// Grouping for skill entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
	Frontend,
	Backend,
	Cloud,
	Tools,
	Database,
	Other,
	Soft,
}

/// A single technology or competency shown in the skills grid.
#[derive(Clone, Debug, Deserialize)]
pub struct Skill {
	pub name: String,
	/// Symbolic icon identifier (a Font Awesome class in the default data).
	pub icon: String,
	pub category: SkillCategory,
}

/// Project weight class, used both as a badge and a filter axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum ProjectType {
	Heavy,
	Small,
}

impl ProjectType {
	/// Badge label as it appears in the JSON data.
	pub fn label(self) -> &'static str {
		match self {
			ProjectType::Heavy => "Heavy",
			ProjectType::Small => "Small",
		}
	}

	/// Lower-cased token used for `data-type` attributes and filter buttons.
	pub fn token(self) -> &'static str {
		match self {
			ProjectType::Heavy => "heavy",
			ProjectType::Small => "small",
		}
	}
}

/// Project domain, the second filter axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
	Frontend,
	Backend,
	Fullstack,
	Other,
}

impl ProjectCategory {
	/// Token used for `data-category` attributes and filter buttons.
	pub fn token(self) -> &'static str {
		match self {
			ProjectCategory::Frontend => "frontend",
			ProjectCategory::Backend => "backend",
			ProjectCategory::Fullstack => "fullstack",
			ProjectCategory::Other => "other",
		}
	}
}

/// A portfolio project with bilingual display strings.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
	/// Stable lookup key for the detail view.
	pub id: u32,
	pub name: String,
	pub name_ar: String,
	#[serde(rename = "type")]
	pub project_type: ProjectType,
	pub category: ProjectCategory,
	pub description: String,
	pub description_ar: String,
	pub tags: Vec<String>,
	pub icon: String,
	pub features: Vec<String>,
	pub tech: Vec<String>,
}

impl Project {
	/// Display name for the given language.
	pub fn name(&self, lang: Lang) -> &str {
		match lang {
			Lang::En => &self.name,
			Lang::Ar => &self.name_ar,
		}
	}

	/// Long-form description for the given language.
	pub fn description(&self, lang: Lang) -> &str {
		match lang {
			Lang::En => &self.description,
			Lang::Ar => &self.description_ar,
		}
	}
}

/// Visibility selector applied over rendered project cards.
///
/// A pure presentation predicate: it never touches the catalog, and hiding
/// is reversible without re-rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
	/// Show everything.
	#[default]
	All,
	/// Show projects of one weight class.
	Type(ProjectType),
	/// Show projects of one domain.
	Category(ProjectCategory),
}

impl Filter {
	/// All selectable filters, in filter-bar order.
	pub const ALL_FILTERS: [Filter; 6] = [
		Filter::All,
		Filter::Type(ProjectType::Heavy),
		Filter::Type(ProjectType::Small),
		Filter::Category(ProjectCategory::Frontend),
		Filter::Category(ProjectCategory::Backend),
		Filter::Category(ProjectCategory::Fullstack),
	];

	/// Parse a filter-button token. Type tokens win over category tokens,
	/// matching how the original page dispatched on them.
	pub fn from_token(token: &str) -> Option<Self> {
		match token {
			"all" => Some(Filter::All),
			"heavy" => Some(Filter::Type(ProjectType::Heavy)),
			"small" => Some(Filter::Type(ProjectType::Small)),
			"frontend" => Some(Filter::Category(ProjectCategory::Frontend)),
			"backend" => Some(Filter::Category(ProjectCategory::Backend)),
			"fullstack" => Some(Filter::Category(ProjectCategory::Fullstack)),
			"other" => Some(Filter::Category(ProjectCategory::Other)),
			_ => None,
		}
	}

	/// The token this filter is keyed on.
	pub fn token(self) -> &'static str {
		match self {
			Filter::All => "all",
			Filter::Type(t) => t.token(),
			Filter::Category(c) => c.token(),
		}
	}

	/// Whether a project stays visible under this filter.
	pub fn matches(self, project: &Project) -> bool {
		self.shows(project.project_type, project.category)
	}

	/// Membership test on the two filter axes a rendered card carries.
	pub fn shows(self, project_type: ProjectType, category: ProjectCategory) -> bool {
		match self {
			Filter::All => true,
			Filter::Type(t) => project_type == t,
			Filter::Category(c) => category == c,
		}
	}
}

/// The full load-time-fixed content of the page.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Catalog {
	pub skills: Vec<Skill>,
	pub projects: Vec<Project>,
}

impl Catalog {
	/// Parse and validate the compiled-in default catalog.
	pub fn embedded() -> Result<Self, String> {
		let catalog: Catalog = serde_json::from_str(include_str!("../assets/catalog.json"))
			.map_err(|e| format!("embedded catalog is malformed: {e}"))?;
		catalog.validate()?;
		Ok(catalog)
	}

	/// Assert the bilingual invariant and id uniqueness.
	pub fn validate(&self) -> Result<(), String> {
		for project in &self.projects {
			if self.projects.iter().filter(|p| p.id == project.id).count() > 1 {
				return Err(format!("duplicate project id {}", project.id));
			}
			for (field, value) in [
				("name", &project.name),
				("nameAr", &project.name_ar),
				("description", &project.description),
				("descriptionAr", &project.description_ar),
			] {
				if value.trim().is_empty() {
					return Err(format!("project {} is missing {field}", project.id));
				}
			}
		}
		for skill in &self.skills {
			if skill.name.trim().is_empty() {
				return Err("skill with empty name".to_string());
			}
		}
		Ok(())
	}

	/// Linear lookup by project id. The catalog stays in the low hundreds,
	/// so no index is kept.
	pub fn project_by_id(&self, id: u32) -> Option<&Project> {
		self.projects.iter().find(|p| p.id == id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample_project(id: u32, project_type: ProjectType, category: ProjectCategory) -> Project {
		Project {
			id,
			name: format!("Project {id}"),
			name_ar: format!("مشروع {id}"),
			project_type,
			category,
			description: "desc".to_string(),
			description_ar: "وصف".to_string(),
			tags: vec!["Angular".to_string()],
			icon: "fas fa-cube".to_string(),
			features: vec!["First".to_string(), "Second".to_string()],
			tech: vec!["Angular 17".to_string(), "Firebase".to_string()],
		}
	}

	#[test]
	fn embedded_catalog_parses_and_validates() {
		let catalog = Catalog::embedded().unwrap();
		assert_eq!(catalog.skills.len(), 21);
		assert_eq!(catalog.projects.len(), 9);
	}

	#[test]
	fn filter_tokens_round_trip() {
		for filter in Filter::ALL_FILTERS {
			assert_eq!(Filter::from_token(filter.token()), Some(filter));
		}
		assert_eq!(Filter::from_token("database"), None);
	}

	#[test]
	fn filter_all_shows_everything() {
		let heavy = sample_project(1, ProjectType::Heavy, ProjectCategory::Frontend);
		let small = sample_project(2, ProjectType::Small, ProjectCategory::Fullstack);
		assert!(Filter::All.matches(&heavy));
		assert!(Filter::All.matches(&small));
	}

	#[test]
	fn type_filter_matches_on_type_only() {
		let filter = Filter::Type(ProjectType::Heavy);
		assert!(filter.matches(&sample_project(1, ProjectType::Heavy, ProjectCategory::Backend)));
		assert!(!filter.matches(&sample_project(2, ProjectType::Small, ProjectCategory::Backend)));
	}

	#[test]
	fn category_filter_matches_on_category_only() {
		let filter = Filter::Category(ProjectCategory::Frontend);
		assert!(filter.matches(&sample_project(1, ProjectType::Small, ProjectCategory::Frontend)));
		assert!(!filter.matches(&sample_project(2, ProjectType::Small, ProjectCategory::Fullstack)));
	}

	#[test]
	fn lookup_preserves_list_order_and_misses_silently() {
		let catalog = Catalog {
			skills: Vec::new(),
			projects: vec![
				sample_project(3, ProjectType::Heavy, ProjectCategory::Frontend),
				sample_project(7, ProjectType::Small, ProjectCategory::Other),
			],
		};
		let found = catalog.project_by_id(7).unwrap();
		assert_eq!(found.features, vec!["First", "Second"]);
		assert_eq!(found.tech, vec!["Angular 17", "Firebase"]);
		assert!(catalog.project_by_id(99).is_none());
	}

	#[test]
	fn validation_rejects_missing_translation() {
		let mut project = sample_project(1, ProjectType::Heavy, ProjectCategory::Frontend);
		project.name_ar = String::new();
		let catalog = Catalog {
			skills: Vec::new(),
			projects: vec![project],
		};
		assert!(catalog.validate().unwrap_err().contains("nameAr"));
	}

	#[test]
	fn validation_rejects_duplicate_ids() {
		let catalog = Catalog {
			skills: Vec::new(),
			projects: vec![
				sample_project(1, ProjectType::Heavy, ProjectCategory::Frontend),
				sample_project(1, ProjectType::Small, ProjectCategory::Backend),
			],
		};
		assert!(catalog.validate().unwrap_err().contains("duplicate"));
	}

	#[test]
	fn localized_accessors_pick_the_right_side() {
		let project = sample_project(1, ProjectType::Heavy, ProjectCategory::Frontend);
		assert_eq!(project.name(crate::locale::Lang::En), "Project 1");
		assert_eq!(project.name(crate::locale::Lang::Ar), "مشروع 1");
		assert_eq!(project.description(crate::locale::Lang::Ar), "وصف");
	}
}
