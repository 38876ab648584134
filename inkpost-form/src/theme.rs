//! Theme preference model.

use serde::{Deserialize, Serialize};

/// Storage key under which the preference persists across visits.
pub const THEME_STORAGE_KEY: &str = "preferred-theme";

/// The persisted theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    /// The persisted string form, `"light"` or `"dark"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything unrecognized reads as absent,
    /// leaving the control's default state untouched.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Preference corresponding to the toggle's checked state.
    #[must_use]
    pub const fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    /// Whether the toggle should be checked for this preference.
    #[must_use]
    pub const fn is_checked(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Seam between the theme logic and wherever the preference lives.
///
/// The web crate backs this with `localStorage`; tests back it with a
/// plain map.
pub trait PreferenceStore {
    /// Read the persisted preference, if any.
    fn load(&self) -> Option<ThemePreference>;
    /// Persist a new preference. Failures are swallowed by design: a
    /// broken store degrades the feature, it never breaks the page.
    fn save(&mut self, preference: ThemePreference);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        map: HashMap<String, String>,
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Option<ThemePreference> {
            self.map
                .get(THEME_STORAGE_KEY)
                .and_then(|v| ThemePreference::parse(v))
        }

        fn save(&mut self, preference: ThemePreference) {
            self.map.insert(
                THEME_STORAGE_KEY.to_string(),
                preference.as_str().to_string(),
            );
        }
    }

    #[test]
    fn string_forms_round_trip() {
        assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse("light"), Some(ThemePreference::Light));
        assert_eq!(ThemePreference::parse("solarized"), None);
        assert_eq!(ThemePreference::Dark.as_str(), "dark");
    }

    #[test]
    fn checked_state_maps_dark_to_checked() {
        assert!(ThemePreference::Dark.is_checked());
        assert!(!ThemePreference::Light.is_checked());
        assert_eq!(ThemePreference::from_checked(true), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_checked(false), ThemePreference::Light);
    }

    #[test]
    fn toggling_persists_the_opposite_and_survives_reload() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load(), None);

        // User checks the toggle.
        store.save(ThemePreference::from_checked(true));
        assert_eq!(store.load(), Some(ThemePreference::Dark));

        // Simulated reload: a fresh reader sees the persisted value.
        let reload = MemoryStore { map: store.map.clone() };
        assert!(reload.load().is_some_and(ThemePreference::is_checked));

        // User unchecks it again.
        store.save(ThemePreference::from_checked(false));
        assert_eq!(store.load(), Some(ThemePreference::Light));
    }
}
