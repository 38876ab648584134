#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod pages;
pub mod router;
pub mod theme;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Restyle the page from the saved preference before first paint.
    if let Some(saved) = crate::theme::saved_theme() {
        crate::theme::apply_theme_class(saved);
    }
    yew::Renderer::<app::App>::new().render();
}
