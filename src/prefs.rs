//! Persisted preferences.
//!
//! Exactly two strings round-trip through browser local storage: the display
//! language and the color theme. Both are read once at startup and written on
//! toggle. Storage being unavailable (or holding junk) silently falls back to
//! the defaults.

use web_sys::Storage;

use crate::locale::Lang;

const LANG_KEY: &str = "lang";
const THEME_KEY: &str = "theme";

/// Page color theme, applied as `data-theme` on the document element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	Light,
	/// The site ships dark unless the visitor chose otherwise.
	#[default]
	Dark,
}

impl Theme {
	/// Storage/DOM token for this theme.
	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}

	/// Parse a storage token. Unknown tokens are `None`.
	pub fn from_str(token: &str) -> Option<Self> {
		match token {
			"light" => Some(Theme::Light),
			"dark" => Some(Theme::Dark),
			_ => None,
		}
	}

	/// The other theme.
	pub fn toggled(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}
}

fn storage() -> Option<Storage> {
	web_sys::window()?.local_storage().ok().flatten()
}

fn load(key: &str) -> Option<String> {
	storage()?.get_item(key).ok().flatten()
}

fn store(key: &str, value: &str) {
	if let Some(storage) = storage() {
		let _ = storage.set_item(key, value);
	}
}

/// The stored language, or the default when unset/unreadable.
pub fn load_lang() -> Lang {
	load(LANG_KEY)
		.and_then(|t| Lang::from_str(&t))
		.unwrap_or_default()
}

/// Persist the language preference.
pub fn store_lang(lang: Lang) {
	store(LANG_KEY, lang.as_str());
}

/// The stored theme, or the default when unset/unreadable.
pub fn load_theme() -> Theme {
	load(THEME_KEY)
		.and_then(|t| Theme::from_str(&t))
		.unwrap_or_default()
}

/// Persist the theme preference.
pub fn store_theme(theme: Theme) {
	store(THEME_KEY, theme.as_str());
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn theme_tokens_round_trip() {
		assert_eq!(Theme::from_str("light"), Some(Theme::Light));
		assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
		assert_eq!(Theme::from_str("sepia"), None);
		assert_eq!(Theme::default(), Theme::Dark);
	}

	#[test]
	fn toggle_is_an_involution() {
		assert_eq!(Theme::Light.toggled(), Theme::Dark);
		assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
	}
}
