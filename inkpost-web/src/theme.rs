//! Theme persistence and page styling.
//!
//! The preference lives under one `localStorage` key and is mirrored as
//! a `dark` class on the document element. A missing window or storage
//! silently disables the feature.

use inkpost_form::{THEME_STORAGE_KEY, ThemePreference};

/// Read the persisted theme preference, if any.
#[must_use]
pub fn saved_theme() -> Option<ThemePreference> {
    crate::dom::local_storage()
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|value| ThemePreference::parse(&value))
}

/// Whether the toggle should start checked: true only when a dark
/// preference was persisted on a previous visit.
#[must_use]
pub fn dark_theme_enabled() -> bool {
    saved_theme().is_some_and(ThemePreference::is_checked)
}

/// Persist a preference and restyle the page accordingly.
///
/// Adds or removes the `dark` class on the HTML element and writes the
/// choice so the next visit starts from it.
pub fn set_theme(preference: ThemePreference) {
    apply_theme_class(preference);

    if let Some(storage) = crate::dom::local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, preference.as_str());
    }
}

/// Restyle the page for a preference without persisting it. Used at
/// startup to reapply the saved choice.
pub fn apply_theme_class(preference: ThemePreference) {
    let Some(html) = crate::dom::document().and_then(|doc| doc.document_element()) else {
        return;
    };
    let _ = if preference.is_checked() {
        html.class_list().add_1("dark")
    } else {
        html.class_list().remove_1("dark")
    };
}
