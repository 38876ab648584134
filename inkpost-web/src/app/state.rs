use inkpost_form::{ContactForm, CounterView, MESSAGE_MAX_CHARS, counter_view};
use yew::prelude::*;

/// All page-session state, held in Yew handles so handlers can clone
/// what they need.
#[derive(Clone)]
pub struct AppState {
    /// The headless form engine, including the session diagnostic log.
    pub form: UseStateHandle<ContactForm>,
    /// Message-field countdown, derived on every message edit.
    pub counter: UseStateHandle<CounterView>,
    /// Rejected-keystroke flash on the name field.
    pub flash: UseStateHandle<bool>,
    /// Shared status line (first invalid field's message).
    pub status: UseStateHandle<AttrValue>,
    /// Confirmation line after an accepted submission.
    pub info: UseStateHandle<AttrValue>,
    /// Serialized diagnostics, mirrored into the hidden field.
    pub diagnostics: UseStateHandle<AttrValue>,
    /// Theme toggle state, seeded from the persisted preference.
    pub dark_theme: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        form: use_state(ContactForm::default),
        // Computed once at setup so pre-filled content is reflected.
        counter: use_state(|| counter_view(MESSAGE_MAX_CHARS, "")),
        flash: use_state(|| false),
        status: use_state(AttrValue::default),
        info: use_state(AttrValue::default),
        diagnostics: use_state(AttrValue::default),
        dark_theme: use_state(crate::theme::dark_theme_enabled),
    }
}
