#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use crate::services::Services;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod routes;
pub mod shell;

pub use shell::AppShell;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    let services = use_state(Services::browser);
    html! {
        <BrowserRouter basename={router_base}>
            <ContextProvider<Services> context={(*services).clone()}>
                <AppShell>
                    <Switch<Route> render={routes::switch} />
                </AppShell>
            </ContextProvider<Services>>
        </BrowserRouter>
    }
}
