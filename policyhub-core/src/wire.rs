//! JSON request and response bodies exchanged with the PolicyHub API.

use crate::policy::Policy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PoliciesEnvelope {
    #[serde(default)]
    pub policies: Option<Vec<Policy>>,
}

impl PoliciesEnvelope {
    #[must_use]
    pub fn into_policies(self) -> Vec<Policy> {
        self.policies.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolicyEnvelope {
    pub policy: Policy,
}

/// Optional `{message}` body sent with rejected requests.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageBody {
    /// Extract a message from a raw error body, tolerating non-JSON bodies.
    #[must_use]
    pub fn parse(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
    }
}
