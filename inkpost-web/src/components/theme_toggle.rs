use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub checked: bool,
    #[prop_or_default]
    pub on_toggle: Callback<bool>,
}

/// Checkbox-style control for the persisted theme preference.
#[function_component(ThemeToggle)]
pub fn theme_toggle(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_toggle.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.checked());
            }
        })
    };
    html! {
        <label class="theme-toggle-label" for="theme-toggle">
            <span>{ "Dark theme" }</span>
            <input
                id="theme-toggle"
                type="checkbox"
                class="toggle"
                checked={p.checked}
                onchange={on_change}
            />
        </label>
    }
}
