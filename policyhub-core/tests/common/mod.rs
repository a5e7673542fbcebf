#![allow(dead_code)]

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use policyhub_core::{
    ApiError, AuthApi, LoginRequest, Policy, PolicyApi, PolicyDraft, SessionError, SignupRequest,
    TokenStorage,
};
use std::cell::RefCell;
use std::rc::Rc;

pub fn signed_token(name: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(serde_json::json!({ "name": name }).to_string());
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

pub fn policy(id: &str, votes: &[&str]) -> Policy {
    Policy {
        id: id.to_string(),
        title: format!("Policy {id}"),
        description: "Description".into(),
        owner: "Owner".into(),
        date: "2024-01-01".into(),
        category: "Academic".into(),
        votes: votes.iter().map(ToString::to_string).collect(),
    }
}

pub fn policies(count: usize) -> Vec<Policy> {
    (0..count).map(|i| policy(&i.to_string(), &[])).collect()
}

/// Scripted API that records every call it receives.
#[derive(Default)]
pub struct FixtureApi {
    pub calls: RefCell<Vec<String>>,
    pub login: RefCell<Option<Result<String, ApiError>>>,
    pub signup: RefCell<Option<Result<(), ApiError>>>,
    pub list: RefCell<Option<Result<Vec<Policy>, ApiError>>>,
    pub get: RefCell<Option<Result<Policy, ApiError>>>,
    pub add: RefCell<Option<Result<Policy, ApiError>>>,
    pub upvote: RefCell<Option<Result<Policy, ApiError>>>,
}

impl FixtureApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

fn scripted<T: Clone>(slot: &RefCell<Option<Result<T, ApiError>>>) -> Result<T, ApiError> {
    slot.borrow()
        .clone()
        .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".into())))
}

#[async_trait(?Send)]
impl AuthApi for FixtureApi {
    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        self.record(format!("login:{}", request.username));
        scripted(&self.login)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.record(format!("signup:{}", request.username));
        scripted(&self.signup)
    }
}

#[async_trait(?Send)]
impl PolicyApi for FixtureApi {
    async fn list_policies(&self) -> Result<Vec<Policy>, ApiError> {
        self.record("list".into());
        scripted(&self.list)
    }

    async fn get_policy(&self, id: &str) -> Result<Policy, ApiError> {
        self.record(format!("get:{id}"));
        scripted(&self.get)
    }

    async fn add_policy(&self, token: &str, draft: &PolicyDraft) -> Result<Policy, ApiError> {
        self.record(format!("add:{}:{}", draft.title, token.len()));
        scripted(&self.add)
    }

    async fn upvote_policy(&self, token: &str, id: &str) -> Result<Policy, ApiError> {
        self.record(format!("upvote:{id}:{}", token.len()));
        scripted(&self.upvote)
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    pub token: RefCell<Option<String>>,
    pub writes: RefCell<usize>,
}

impl MemoryStorage {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
            writes: RefCell::new(0),
        }
    }
}

impl TokenStorage for MemoryStorage {
    fn load_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store_token(&self, token: &str) -> Result<(), SessionError> {
        *self.writes.borrow_mut() += 1;
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) {
        self.token.borrow_mut().take();
    }
}

pub fn fixture() -> (Rc<FixtureApi>, Rc<MemoryStorage>) {
    (Rc::new(FixtureApi::default()), Rc::new(MemoryStorage::default()))
}
