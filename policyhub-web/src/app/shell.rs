use crate::components::page_layout::PageLayout;
use crate::router::Route;
use crate::services::{use_services, use_session};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppShellProps {
    #[prop_or_default]
    pub children: Children,
}

/// Page chrome bound to the session store.
#[function_component(AppShell)]
pub fn app_shell(props: &AppShellProps) -> Html {
    let services = use_services();
    let session = use_session(&services);
    let navigator = use_navigator();

    let go = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&route);
            }
        })
    };
    let on_logout = {
        let store = services.session.clone();
        let navigator = navigator.clone();
        Callback::from(move |()| {
            store.logout();
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Home);
            }
        })
    };

    html! {
        <PageLayout
            display_name={session.display_name.clone().map(AttrValue::from)}
            on_login={go(Route::Login)}
            on_signup={go(Route::Signup)}
            {on_logout}
        >
            { props.children.clone() }
        </PageLayout>
    }
}

