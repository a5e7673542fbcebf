//! Browser `fetch` implementation of the PolicyHub API traits.

use crate::dom::{self, DomError, HttpResponse};
use crate::paths;
use async_trait::async_trait;
use policyhub_core::wire::{LoginResponse, MessageBody, PoliciesEnvelope, PolicyEnvelope};
use policyhub_core::{
    ApiError, AuthApi, LoginRequest, Policy, PolicyApi, PolicyDraft, SignupRequest,
};
use serde::de::DeserializeOwned;

/// HTTP client for the API at `base_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client for the compile-time configured `POLICY_API_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(paths::api_base())
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        paths::join_url(&self.base_url, path)
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
        bearer: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        dom::fetch_text(method, &self.url(path), body.as_deref(), bearer)
            .await
            .map_err(transport_error)
    }
}

fn transport_error(err: DomError) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Map a raw response to the decoded success body or a typed API error.
///
/// # Errors
/// Returns [`ApiError::NotFound`] for 404, [`ApiError::Status`] for any other
/// non-2xx status and [`ApiError::Decode`] when a success body does not parse.
pub fn decode_response<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    if response.is_success() {
        return Ok(serde_json::from_str(&response.body)?);
    }
    Err(status_error(response))
}

fn status_error(response: &HttpResponse) -> ApiError {
    if response.status == 404 {
        ApiError::NotFound
    } else {
        ApiError::Status {
            status: response.status,
            message: MessageBody::parse(&response.body),
        }
    }
}

fn encode<T: serde::Serialize>(body: &T) -> Result<String, ApiError> {
    Ok(serde_json::to_string(body)?)
}

#[async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        let response = self
            .send("POST", "/auth/login", Some(encode(request)?), None)
            .await?;
        decode_response::<LoginResponse>(&response).map(|body| body.token)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        let response = self
            .send("POST", "/auth/signup", Some(encode(request)?), None)
            .await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(status_error(&response))
        }
    }
}

#[async_trait(?Send)]
impl PolicyApi for HttpApi {
    async fn list_policies(&self) -> Result<Vec<Policy>, ApiError> {
        let response = self.send("GET", "/policies/all", None, None).await?;
        decode_response::<PoliciesEnvelope>(&response).map(PoliciesEnvelope::into_policies)
    }

    async fn get_policy(&self, id: &str) -> Result<Policy, ApiError> {
        let response = self
            .send("GET", &format!("/policies/{id}"), None, None)
            .await?;
        decode_response::<PolicyEnvelope>(&response).map(|env| env.policy)
    }

    async fn add_policy(&self, token: &str, draft: &PolicyDraft) -> Result<Policy, ApiError> {
        let response = self
            .send("POST", "/policies/add", Some(encode(draft)?), Some(token))
            .await?;
        decode_response::<PolicyEnvelope>(&response).map(|env| env.policy)
    }

    async fn upvote_policy(&self, token: &str, id: &str) -> Result<Policy, ApiError> {
        let response = self
            .send("POST", &format!("/policies/upvote/{id}"), None, Some(token))
            .await?;
        decode_response::<PolicyEnvelope>(&response).map(|env| env.policy)
    }
}
