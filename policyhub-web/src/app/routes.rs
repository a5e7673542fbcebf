//! Route containers: each one wires a pure page to the stores and the navigator.

use crate::pages::add_policy::AddPolicyPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFound;
use crate::pages::policy_detail::PolicyDetailPage;
use crate::pages::policy_list::PolicyListPage;
use crate::pages::signup::SignupPage;
use crate::router::Route;
use crate::services::{use_policy_page, use_services, use_session};
use policyhub_core::{LoginForm, Policy, PolicyForm, SessionError, SignupForm, StoreError};
use yew::prelude::*;
use yew_router::prelude::*;

pub const LOGIN_FAILED: &str = "Invalid email or password.";
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";
pub const SIGNUP_FAILED: &str = "Failed to register. Please try again.";
pub const SIGNUP_SUCCEEDED: &str = "User registered successfully! Redirecting to login...";
pub const ADD_POLICY_FAILED: &str = "Failed to add the policy. Please try again.";

/// Delay before leaving the signup view after a successful registration.
pub const SIGNUP_REDIRECT_MS: i32 = 2_000;

#[must_use]
pub fn login_error_message(err: &SessionError) -> &'static str {
    match err {
        SessionError::Rejected { .. } => LOGIN_FAILED,
        SessionError::Transport(_) | SessionError::Storage(_) => GENERIC_FAILURE,
    }
}

#[must_use]
pub fn signup_error_message(err: &SessionError) -> String {
    match err {
        SessionError::Rejected { message } => message
            .clone()
            .unwrap_or_else(|| SIGNUP_FAILED.to_string()),
        SessionError::Transport(_) | SessionError::Storage(_) => GENERIC_FAILURE.to_string(),
    }
}

/// What the add-policy view does after a failed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddPolicyOutcome {
    Redirect(Route),
    Show(&'static str),
}

#[must_use]
pub fn add_policy_failure(err: &StoreError) -> AddPolicyOutcome {
    match err {
        StoreError::Unauthenticated => AddPolicyOutcome::Redirect(Route::Login),
        StoreError::NotFound | StoreError::Api(_) => AddPolicyOutcome::Show(ADD_POLICY_FAILED),
    }
}

fn navigate(navigator: Option<&Navigator>, route: &Route) {
    match navigator {
        Some(nav) => nav.push(route),
        None => log::warn!("No navigator available for {}", route.to_path()),
    }
}

fn show(error: &UseStateHandle<Option<AttrValue>>, message: impl Into<AttrValue>) {
    error.set(Some(message.into()));
}

#[function_component(HomeRoute)]
pub fn home_route() -> Html {
    let services = use_services();
    let session = use_session(&services);
    let page = use_policy_page(&services);
    let navigator = use_navigator();
    let filter_year = use_state(AttrValue::default);
    let filter_category = use_state(AttrValue::default);

    {
        let store = services.policies.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = store.fetch_policies().await {
                    log::error!("Failed to fetch policies: {err}");
                }
            });
        });
    }

    let on_filter_year = {
        let filter_year = filter_year.clone();
        Callback::from(move |value: String| filter_year.set(value.into()))
    };
    let on_filter_category = {
        let filter_category = filter_category.clone();
        Callback::from(move |value: String| filter_category.set(value.into()))
    };
    let on_add_policy = {
        let navigator = navigator.clone();
        let active = session.is_active();
        Callback::from(move |()| {
            let target = if active { Route::AddPolicy } else { Route::Login };
            navigate(navigator.as_ref(), &target);
        })
    };
    let on_view = {
        let navigator = navigator.clone();
        Callback::from(move |id: String| navigate(navigator.as_ref(), &Route::PolicyDetail { id }))
    };
    let on_previous = {
        let store = services.policies.clone();
        Callback::from(move |()| store.set_page(store.current_page().saturating_sub(1)))
    };
    let on_next = {
        let store = services.policies.clone();
        Callback::from(move |()| store.set_page(store.current_page() + 1))
    };

    html! {
        <PolicyListPage
            {page}
            filter_year={(*filter_year).clone()}
            filter_category={(*filter_category).clone()}
            {on_filter_year}
            {on_filter_category}
            {on_add_policy}
            {on_view}
            {on_previous}
            {on_next}
        />
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct PolicyDetailRouteProps {
    pub id: AttrValue,
}

#[function_component(PolicyDetailRoute)]
pub fn policy_detail_route(props: &PolicyDetailRouteProps) -> Html {
    let services = use_services();
    let session = use_session(&services);
    let navigator = use_navigator();
    let policy = use_state(|| None::<Policy>);

    let load = {
        let store = services.policies.clone();
        let policy = policy.clone();
        let navigator = navigator.clone();
        let id = props.id.clone();
        Callback::from(move |()| {
            let store = store.clone();
            let policy = policy.clone();
            let navigator = navigator.clone();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match store.fetch_policy(&id).await {
                    Ok(found) => policy.set(Some(found)),
                    Err(err) => {
                        log::error!("Error fetching policy {id}: {err}");
                        navigate(navigator.as_ref(), &Route::Home);
                    }
                }
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with(props.id.clone(), move |_| load.emit(()));
    }

    let already_voted = (*policy).as_ref().is_some_and(|p| session.has_voted_on(p));

    let on_upvote = {
        let store = services.policies.clone();
        let navigator = navigator.clone();
        let session = session.clone();
        let id = props.id.clone();
        Callback::from(move |()| {
            if !session.is_active() {
                navigate(navigator.as_ref(), &Route::Login);
                return;
            }
            if already_voted {
                return;
            }
            let store = store.clone();
            let session = session.clone();
            let load = load.clone();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match store.upvote_policy(&session, &id).await {
                    Ok(_) => load.emit(()),
                    Err(err) => log::error!("Error upvoting policy {id}: {err}"),
                }
            });
        })
    };

    html! {
        <PolicyDetailPage policy={(*policy).clone()} {already_voted} {on_upvote} />
    }
}

#[function_component(LoginRoute)]
pub fn login_route() -> Html {
    let services = use_services();
    let navigator = use_navigator();
    let error = use_state(|| None::<AttrValue>);

    let on_submit = {
        let store = services.session.clone();
        let navigator = navigator.clone();
        let error = error.clone();
        Callback::from(move |form: LoginForm| {
            if let Err(err) = form.validate() {
                show(&error, err.to_string());
                return;
            }
            let store = store.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match store.login(&form.username, &form.password).await {
                    Ok(()) => navigate(navigator.as_ref(), &Route::Home),
                    Err(err) => show(&error, login_error_message(&err)),
                }
            });
        })
    };
    let on_signup = {
        let navigator = navigator.clone();
        Callback::from(move |()| navigate(navigator.as_ref(), &Route::Signup))
    };

    html! {
        <LoginPage error={(*error).clone()} {on_submit} {on_signup} />
    }
}

#[function_component(SignupRoute)]
pub fn signup_route() -> Html {
    let services = use_services();
    let navigator = use_navigator();
    let error = use_state(|| None::<AttrValue>);
    let success = use_state(|| None::<AttrValue>);

    let on_submit = {
        let store = services.session.clone();
        let navigator = navigator.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |form: SignupForm| {
            if let Err(err) = form.validate() {
                success.set(None);
                show(&error, err.to_string());
                return;
            }
            let store = store.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let success = success.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = store
                    .signup(
                        &form.username,
                        &form.password,
                        &form.first_name,
                        &form.last_name,
                    )
                    .await;
                match result {
                    Ok(()) => {
                        error.set(None);
                        success.set(Some(AttrValue::Static(SIGNUP_SUCCEEDED)));
                        if let Err(err) = crate::dom::sleep_ms(SIGNUP_REDIRECT_MS).await {
                            log::warn!("Redirect timer unavailable: {err}");
                        }
                        navigate(navigator.as_ref(), &Route::Login);
                    }
                    Err(err) => {
                        success.set(None);
                        show(&error, signup_error_message(&err));
                    }
                }
            });
        })
    };

    html! {
        <SignupPage error={(*error).clone()} success={(*success).clone()} {on_submit} />
    }
}

#[function_component(AddPolicyRoute)]
pub fn add_policy_route() -> Html {
    let services = use_services();
    let session = use_session(&services);
    let navigator = use_navigator();
    let error = use_state(|| None::<AttrValue>);

    let on_submit = {
        let store = services.policies.clone();
        let navigator = navigator.clone();
        let error = error.clone();
        Callback::from(move |form: PolicyForm| {
            let draft = match form.to_draft() {
                Ok(draft) => draft,
                Err(err) => {
                    show(&error, err.to_string());
                    return;
                }
            };
            if !session.is_active() {
                navigate(navigator.as_ref(), &Route::Login);
                return;
            }
            let store = store.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match store.add_policy(&session, &draft).await {
                    Ok(_) => navigate(navigator.as_ref(), &Route::Home),
                    Err(err) => match add_policy_failure(&err) {
                        AddPolicyOutcome::Redirect(route) => navigate(navigator.as_ref(), &route),
                        AddPolicyOutcome::Show(message) => show(&error, message),
                    },
                }
            });
        })
    };

    html! {
        <AddPolicyPage error={(*error).clone()} {on_submit} />
    }
}

#[function_component(NotFoundRoute)]
fn not_found_route() -> Html {
    let navigator = use_navigator();
    let on_go_home = Callback::from(move |()| navigate(navigator.as_ref(), &Route::Home));
    html! { <NotFound {on_go_home} /> }
}

/// Maps a matched route to its container.
#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomeRoute /> },
        Route::PolicyDetail { id } => html! { <PolicyDetailRoute id={id} /> },
        Route::Login => html! { <LoginRoute /> },
        Route::Signup => html! { <SignupRoute /> },
        Route::AddPolicy => html! { <AddPolicyRoute /> },
        Route::NotFound => html! { <NotFoundRoute /> },
    }
}
