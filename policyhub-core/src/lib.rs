//! PolicyHub client core
//!
//! Platform-agnostic client state for the PolicyHub policy board: the session
//! and policy stores, wire payloads, list filtering and form validation.
//! Platform crates supply the HTTP transport and durable token storage by
//! implementing [`AuthApi`], [`PolicyApi`] and [`TokenStorage`].

pub mod error;
pub mod listing;
pub mod policy;
pub mod session;
pub mod store;
pub mod subscribers;
pub mod token;
pub mod validation;
pub mod wire;

// Re-export commonly used types
pub use error::{ApiError, SessionError, StoreError};
pub use listing::{ListFilter, category_options, year_options};
pub use policy::{Category, Policy, PolicyDraft};
pub use session::{Session, SessionStore};
pub use store::{PAGE_SIZE, PolicyPage, PolicyStore, total_pages};
pub use subscribers::{Subscribers, SubscriptionId};
pub use token::{TokenClaims, decode_claims, decode_display_name, read_claims};
pub use validation::{LoginForm, PolicyForm, SignupForm, ValidationError};
pub use wire::{LoginRequest, SignupRequest};

use async_trait::async_trait;

/// Key under which the raw session token is persisted.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Authentication endpoints of the remote API.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a session token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the credentials.
    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError>;

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the registration.
    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError>;
}

/// Policy endpoints of the remote API.
#[async_trait(?Send)]
pub trait PolicyApi {
    /// Fetch the full policy collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    async fn list_policies(&self) -> Result<Vec<Policy>, ApiError>;

    /// Fetch a single policy by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the server has no such policy.
    async fn get_policy(&self, id: &str) -> Result<Policy, ApiError>;

    /// Create a policy on behalf of the bearer of `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    async fn add_policy(&self, token: &str, draft: &PolicyDraft) -> Result<Policy, ApiError>;

    /// Record a vote for `id` on behalf of the bearer of `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    async fn upvote_policy(&self, token: &str, id: &str) -> Result<Policy, ApiError>;
}

/// Durable client-side storage for the raw session token.
pub trait TokenStorage {
    /// Read the persisted token, if any.
    fn load_token(&self) -> Option<String>;

    /// Persist the token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage refuses the write.
    fn store_token(&self, token: &str) -> Result<(), SessionError>;

    /// Remove the persisted token.
    fn clear_token(&self);
}
