use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/policies/:id")]
    PolicyDetail { id: String },
    #[at("/login")]
    Login,
    #[at("/add-policy")]
    AddPolicy,
    #[at("/signup")]
    Signup,
    #[at("/404")]
    #[not_found]
    NotFound,
}
