//! Store services shared with components through a Yew context.

use crate::api::HttpApi;
use crate::storage::BrowserTokenStorage;
use policyhub_core::{
    AuthApi, PolicyApi, PolicyPage, PolicyStore, Session, SessionStore, TokenStorage,
};
use std::rc::Rc;
use yew::prelude::*;

/// The session and policy stores, injected once at the application root.
#[derive(Clone)]
pub struct Services {
    pub session: Rc<SessionStore>,
    pub policies: Rc<PolicyStore>,
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session) && Rc::ptr_eq(&self.policies, &other.policies)
    }
}

impl Services {
    #[must_use]
    pub fn new(
        auth: Rc<dyn AuthApi>,
        policies: Rc<dyn PolicyApi>,
        storage: Rc<dyn TokenStorage>,
    ) -> Self {
        Self {
            session: Rc::new(SessionStore::new(auth, storage)),
            policies: Rc::new(PolicyStore::new(policies)),
        }
    }

    /// Services backed by `fetch` and `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        let http = Rc::new(HttpApi::from_env());
        Self::new(http.clone(), http, Rc::new(BrowserTokenStorage))
    }
}

/// Services from the nearest context provider.
///
/// Without a provider the component gets browser services created once and
/// kept for its lifetime.
#[hook]
pub fn use_services() -> Services {
    let context = use_context::<Services>();
    let fallback = use_memo(context.is_none(), |&missing| {
        missing.then(|| {
            log::error!("No Services context provided; falling back to browser services");
            Services::browser()
        })
    });
    context
        .or_else(|| (*fallback).clone())
        .unwrap_or_else(Services::browser)
}

/// Current session; the calling component re-renders on login and logout.
#[hook]
pub fn use_session(services: &Services) -> Session {
    let update = use_force_update();
    {
        let store = services.session.clone();
        use_effect_with(services.clone(), move |_| {
            let id = store.subscribe(move || update.force_update());
            move || store.unsubscribe(id)
        });
    }
    services.session.session()
}

/// Current policy page; the calling component re-renders on every store change.
#[hook]
pub fn use_policy_page(services: &Services) -> PolicyPage {
    let update = use_force_update();
    {
        let store = services.policies.clone();
        use_effect_with(services.clone(), move |_| {
            let id = store.subscribe(move || update.force_update());
            move || store.unsubscribe(id)
        });
    }
    services.policies.page()
}
