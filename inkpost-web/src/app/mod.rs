pub mod handlers;
pub mod state;

pub use handlers::AppHandlers;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::contact::ContactPage;
use crate::pages::not_found::NotFoundPage;
use crate::router::Route;
use inkpost_form::FieldId;
use state::AppState;
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <yew_router::BrowserRouter>
            <AppInner />
        </yew_router::BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    let handlers = AppHandlers::new(&app_state);
    let route = yew_router::prelude::use_route::<Route>();
    render_app(&app_state, &handlers, route.as_ref())
}

pub fn render_app(state: &AppState, handlers: &AppHandlers, route: Option<&Route>) -> Html {
    let form = &*state.form;
    let main_view = if route == Some(&Route::NotFound) {
        html! { <NotFoundPage /> }
    } else {
        html! {
            <ContactPage
                name_value={AttrValue::from(form.value(FieldId::Name).to_string())}
                email_value={AttrValue::from(form.value(FieldId::Email).to_string())}
                message_value={AttrValue::from(form.value(FieldId::Message).to_string())}
                name_invalid={form.validity(FieldId::Name).is_invalid()}
                email_invalid={form.validity(FieldId::Email).is_invalid()}
                message_invalid={form.validity(FieldId::Message).is_invalid()}
                flash={*state.flash}
                counter={(*state.counter).clone()}
                status={(*state.status).clone()}
                info={(*state.info).clone()}
                diagnostics={(*state.diagnostics).clone()}
                on_input={handlers.input_changed.clone()}
                on_blur={handlers.focus_lost.clone()}
                on_submit={handlers.submit.clone()}
            />
        }
    };

    html! {
        <>
            <Header
                dark_theme={*state.dark_theme}
                on_toggle_theme={handlers.theme_toggle.clone()}
            />
            <main id="main" role="main">
                { main_view }
            </main>
            <Footer />
        </>
    }
}
