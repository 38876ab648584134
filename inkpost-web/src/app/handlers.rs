use crate::app::state::AppState;
use inkpost_form::{FieldId, MESSAGE_MAX_CHARS, ThemePreference, counter_view};
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(target_arch = "wasm32")]
fn schedule_flash_clear(flash: &UseStateHandle<bool>) {
    let flash = flash.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let _ = crate::dom::sleep_ms(inkpost_form::FLASH_MS).await;
        // Overlapping timers from rapid illegal keystrokes each clear the
        // flash; harmless, same as the original page.
        flash.set(false);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_flash_clear(_flash: &UseStateHandle<bool>) {}

fn status_value(form: &inkpost_form::ContactForm) -> AttrValue {
    AttrValue::from(form.first_error().unwrap_or(""))
}

pub fn build_input_changed(state: &AppState) -> Callback<(FieldId, String)> {
    let form_handle = state.form.clone();
    let counter_handle = state.counter.clone();
    let flash_handle = state.flash.clone();
    let status_handle = state.status.clone();
    let info_handle = state.info.clone();
    Callback::from(move |(field, typed): (FieldId, String)| {
        let mut form = (*form_handle).clone();
        let outcome = form.input_changed(field, typed, &now_iso());
        if field == FieldId::Message {
            counter_handle.set(counter_view(MESSAGE_MAX_CHARS, &outcome.value));
        }
        if outcome.flash {
            flash_handle.set(true);
            schedule_flash_clear(&flash_handle);
        }
        status_handle.set(status_value(&form));
        info_handle.set(AttrValue::default());
        form_handle.set(form);
    })
}

pub fn build_focus_lost(state: &AppState) -> Callback<FieldId> {
    let form_handle = state.form.clone();
    let status_handle = state.status.clone();
    Callback::from(move |field: FieldId| {
        let mut form = (*form_handle).clone();
        form.focus_lost(field, &now_iso());
        status_handle.set(status_value(&form));
        form_handle.set(form);
    })
}

pub fn build_submit(state: &AppState) -> Callback<()> {
    let form_handle = state.form.clone();
    let status_handle = state.status.clone();
    let info_handle = state.info.clone();
    let diagnostics_handle = state.diagnostics.clone();
    Callback::from(move |()| {
        let mut form = (*form_handle).clone();
        let report = form.submit(&now_iso());
        // The whole session history goes into the hidden field on every
        // attempt, blocked or accepted.
        match form.diagnostics() {
            Ok(payload) => diagnostics_handle.set(AttrValue::from(payload)),
            Err(err) => log::warn!("diagnostics serialization failed: {err}"),
        }
        status_handle.set(status_value(&form));
        if report.accepted {
            info_handle.set(AttrValue::from("Thanks! Your message is on its way."));
        } else {
            info_handle.set(AttrValue::default());
        }
        form_handle.set(form);
    })
}

pub fn build_theme_toggle(state: &AppState) -> Callback<bool> {
    let dark_theme = state.dark_theme.clone();
    Callback::from(move |checked: bool| {
        crate::theme::set_theme(ThemePreference::from_checked(checked));
        dark_theme.set(checked);
    })
}

/// Host-page escape hatch: wipe the session diagnostic log.
pub fn build_reset_log(state: &AppState) -> Callback<()> {
    let form_handle = state.form.clone();
    let diagnostics_handle = state.diagnostics.clone();
    Callback::from(move |()| {
        let mut form = (*form_handle).clone();
        form.reset_log();
        diagnostics_handle.set(AttrValue::default());
        form_handle.set(form);
    })
}

#[derive(Clone)]
pub struct AppHandlers {
    pub input_changed: Callback<(FieldId, String)>,
    pub focus_lost: Callback<FieldId>,
    pub submit: Callback<()>,
    pub theme_toggle: Callback<bool>,
    pub reset_log: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            input_changed: build_input_changed(state),
            focus_lost: build_focus_lost(state),
            submit: build_submit(state),
            theme_toggle: build_theme_toggle(state),
            reset_log: build_reset_log(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::use_app_state;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(FormHandlersHarness)]
    fn form_handlers_harness() -> Html {
        let invoked = use_state(|| false);
        let app_state = use_app_state();
        let handlers = AppHandlers::new(&app_state);

        if !*invoked {
            invoked.set(true);
            handlers
                .input_changed
                .emit((FieldId::Name, String::from("Ada9")));
            handlers
                .input_changed
                .emit((FieldId::Message, "a".repeat(520)));
            handlers.focus_lost.emit(FieldId::Email);
            handlers.submit.emit(());
            handlers
                .input_changed
                .emit((FieldId::Name, String::from("Ada")));
            handlers
                .input_changed
                .emit((FieldId::Email, String::from("ada@example.com")));
            handlers
                .input_changed
                .emit((FieldId::Message, String::from("A long enough message.")));
            handlers.submit.emit(());
            handlers.reset_log.emit(());
        }
        Html::default()
    }

    #[function_component(ThemeHandlersHarness)]
    fn theme_handlers_harness() -> Html {
        let invoked = use_state(|| false);
        let app_state = use_app_state();
        let handlers = AppHandlers::new(&app_state);

        if !*invoked {
            invoked.set(true);
            handlers.theme_toggle.emit(true);
            handlers.theme_toggle.emit(false);
        }
        Html::default()
    }

    #[test]
    fn handlers_cover_form_paths() {
        let _ = block_on(LocalServerRenderer::<FormHandlersHarness>::new().render());
    }

    #[test]
    fn handlers_cover_theme_paths() {
        let _ = block_on(LocalServerRenderer::<ThemeHandlersHarness>::new().render());
    }
}
