use yew::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ "Page not found" }</h1>
            <p>{ "That page does not exist. The contact form lives at the site root." }</p>
            <a href="/">{ "Back to the form" }</a>
        </section>
    }
}
