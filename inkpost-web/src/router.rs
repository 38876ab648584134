use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Contact,
    #[at("/404")]
    #[not_found]
    NotFound,
}
