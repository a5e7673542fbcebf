use crate::error::SessionError;
use crate::subscribers::{Subscribers, SubscriptionId};
use crate::token::read_claims;
use crate::wire::{LoginRequest, SignupRequest};
use crate::{AuthApi, TokenStorage};
use std::cell::RefCell;
use std::rc::Rc;

/// Snapshot of the authenticated identity.
///
/// `display_name` and `voter_id` are only ever derived from `token`; a session
/// without a token carries neither.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub display_name: Option<String>,
    pub voter_id: Option<String>,
}

impl Session {
    #[must_use]
    pub fn from_token(token: Option<String>) -> Self {
        let Some(token) = token else {
            return Self::default();
        };
        match read_claims(&token) {
            Some(claims) => {
                let voter_id = claims.username.unwrap_or_else(|| claims.name.clone());
                Self {
                    token: Some(token),
                    display_name: Some(claims.name),
                    voter_id: Some(voter_id),
                }
            }
            None => Self {
                token: Some(token),
                display_name: None,
                voter_id: None,
            },
        }
    }

    /// A session is active once a display name could be derived.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.display_name.is_some()
    }

    /// Bearer credential for session-requiring calls.
    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        if self.is_active() {
            self.token.as_deref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn has_voted_on(&self, policy: &crate::Policy) -> bool {
        self.voter_id
            .as_deref()
            .is_some_and(|voter| policy.has_voted(voter))
    }
}

/// Observable holder of the current [`Session`].
pub struct SessionStore {
    api: Rc<dyn AuthApi>,
    storage: Rc<dyn TokenStorage>,
    session: RefCell<Session>,
    subscribers: Subscribers,
}

impl SessionStore {
    /// Build the store, rehydrating any token left in storage by a previous visit.
    #[must_use]
    pub fn new(api: Rc<dyn AuthApi>, storage: Rc<dyn TokenStorage>) -> Self {
        let session = Session::from_token(storage.load_token());
        Self {
            api,
            storage,
            session: RefCell::new(session),
            subscribers: Subscribers::new(),
        }
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.session.borrow().display_name.clone()
    }

    /// Log in and persist the returned token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Rejected`] when the server refuses the
    /// credentials and [`SessionError::Transport`] when it cannot be reached.
    /// State and storage are untouched in both cases.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), SessionError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let token = self.api.login(&request).await.map_err(|err| {
            log::error!("Login failed: {err}");
            SessionError::from(err)
        })?;

        self.session.replace(Session::from_token(Some(token.clone())));
        // The in-memory session still works for this visit if storage is unavailable.
        if let Err(err) = self.storage.store_token(&token) {
            log::warn!("Could not persist session token: {err}");
        }
        log::debug!("Logged in as {:?}", self.display_name());
        self.subscribers.notify();
        Ok(())
    }

    /// Register an account. The caller logs in separately afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Rejected`] carrying the server message, if any,
    /// or [`SessionError::Transport`] when the server cannot be reached.
    pub async fn signup(
        &self,
        username: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), SessionError> {
        let request = SignupRequest {
            username: username.to_string(),
            password: password.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        self.api.signup(&request).await.map_err(|err| {
            log::error!("Error signing up: {err}");
            SessionError::from(err)
        })
    }

    pub fn logout(&self) {
        self.session.replace(Session::default());
        self.storage.clear_token();
        self.subscribers.notify();
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }
}
