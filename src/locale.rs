//! Two-locale language handling.
//!
//! The site speaks English and Arabic, nothing else: localization is a typed
//! lookup against bilingual pairs rather than a translation pipeline. Static
//! UI strings live in the [`text`] table; catalog entries carry their own
//! pairs (see [`crate::catalog`]).

use serde::Deserialize;

/// Display language for the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
	/// English, left-to-right (default).
	#[default]
	En,
	/// Arabic, right-to-left.
	Ar,
}

impl Lang {
	/// Storage/DOM token for this language.
	pub fn as_str(self) -> &'static str {
		match self {
			Lang::En => "en",
			Lang::Ar => "ar",
		}
	}

	/// Parse a storage/DOM token. Unknown tokens are `None`.
	pub fn from_str(token: &str) -> Option<Self> {
		match token {
			"en" => Some(Lang::En),
			"ar" => Some(Lang::Ar),
			_ => None,
		}
	}

	/// Text direction for the `<html dir>` attribute.
	pub fn dir(self) -> &'static str {
		match self {
			Lang::En => "ltr",
			Lang::Ar => "rtl",
		}
	}
}

/// A bilingual static string pair.
#[derive(Clone, Copy, Debug)]
pub struct UiText {
	pub en: &'static str,
	pub ar: &'static str,
}

impl UiText {
	/// The string for the given language. Both sides always exist, so this
	/// never falls back.
	pub fn get(self, lang: Lang) -> &'static str {
		match lang {
			Lang::En => self.en,
			Lang::Ar => self.ar,
		}
	}
}

/// Static UI strings consumed by the content components.
pub mod text {
	use super::UiText;

	pub const SKILLS_TITLE: UiText = UiText {
		en: "Skills",
		ar: "المهارات",
	};
	pub const PROJECTS_TITLE: UiText = UiText {
		en: "Projects",
		ar: "المشاريع",
	};
	pub const VIEW_DETAILS: UiText = UiText {
		en: "View Details",
		ar: "عرض التفاصيل",
	};
	pub const FEATURES: UiText = UiText {
		en: "Features:",
		ar: "الميزات:",
	};
	pub const TECHNOLOGIES: UiText = UiText {
		en: "Technologies:",
		ar: "التقنيات المستخدمة:",
	};
	pub const CLOSE: UiText = UiText {
		en: "Close",
		ar: "إغلاق",
	};

	pub const FILTER_ALL: UiText = UiText {
		en: "All",
		ar: "الكل",
	};
	pub const FILTER_HEAVY: UiText = UiText {
		en: "Heavy",
		ar: "مشاريع كبيرة",
	};
	pub const FILTER_SMALL: UiText = UiText {
		en: "Small",
		ar: "مشاريع صغيرة",
	};
	pub const FILTER_FRONTEND: UiText = UiText {
		en: "Frontend",
		ar: "فرونت إند",
	};
	pub const FILTER_BACKEND: UiText = UiText {
		en: "Backend",
		ar: "باك إند",
	};
	pub const FILTER_FULLSTACK: UiText = UiText {
		en: "Fullstack",
		ar: "فل ستاك",
	};
	pub const FILTER_OTHER: UiText = UiText {
		en: "Other",
		ar: "أخرى",
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn token_round_trip() {
		assert_eq!(Lang::from_str("en"), Some(Lang::En));
		assert_eq!(Lang::from_str("ar"), Some(Lang::Ar));
		assert_eq!(Lang::from_str("fr"), None);
		assert_eq!(Lang::Ar.as_str(), "ar");
	}

	#[test]
	fn direction_flips_for_arabic() {
		assert_eq!(Lang::En.dir(), "ltr");
		assert_eq!(Lang::Ar.dir(), "rtl");
	}

	#[test]
	fn ui_text_lookup_never_falls_back() {
		assert_eq!(text::VIEW_DETAILS.get(Lang::En), "View Details");
		assert_eq!(text::VIEW_DETAILS.get(Lang::Ar), "عرض التفاصيل");
	}
}
