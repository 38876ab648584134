use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>{ "© Inkpost. Thanks for stopping by." }</footer>
    }
}
