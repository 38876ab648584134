use crate::components::theme_toggle::ThemeToggle;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub dark_theme: bool,
    pub on_toggle_theme: Callback<bool>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    html! {
        <header role="banner">
            <div class="header-content">
                <span class="site-title">{ "Inkpost" }</span>
                <div class="header-right">
                    <ThemeToggle checked={p.dark_theme} on_toggle={p.on_toggle_theme.clone()} />
                </div>
            </div>
        </header>
    }
}
