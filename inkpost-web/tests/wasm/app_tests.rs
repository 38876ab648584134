use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlInputElement};
use yew::Renderer;

use inkpost_form::THEME_STORAGE_KEY;
use inkpost_web::app::App;
use inkpost_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    Renderer::<App>::with_root(ensure_app_root()).render();
}

fn theme_toggle() -> HtmlInputElement {
    dom::document()
        .expect("document")
        .get_element_by_id("theme-toggle")
        .expect("toggle present")
        .dyn_into()
        .expect("toggle is an input")
}

#[wasm_bindgen_test]
async fn toggling_theme_persists_preference() {
    let storage = dom::local_storage().expect("storage");
    let _ = storage.remove_item(THEME_STORAGE_KEY);
    render_app();
    dom::sleep_ms(20).await.expect("settle");

    let toggle = theme_toggle();
    assert!(!toggle.checked());

    toggle.set_checked(true);
    let event = Event::new("change").expect("event");
    toggle.dispatch_event(&event).expect("dispatch");
    dom::sleep_ms(20).await.expect("settle");

    assert_eq!(
        storage.get_item(THEME_STORAGE_KEY).expect("read"),
        Some(String::from("dark"))
    );
}

#[wasm_bindgen_test]
async fn persisted_dark_preference_checks_the_toggle() {
    let storage = dom::local_storage().expect("storage");
    storage.set_item(THEME_STORAGE_KEY, "dark").expect("write");
    render_app();
    dom::sleep_ms(20).await.expect("settle");

    assert!(theme_toggle().checked());
    let _ = storage.remove_item(THEME_STORAGE_KEY);
}
