use crate::dom;
use policyhub_core::{SessionError, TOKEN_STORAGE_KEY, TokenStorage};

/// `localStorage`-backed token persistence. The raw token string is stored
/// under [`TOKEN_STORAGE_KEY`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserTokenStorage;

impl TokenStorage for BrowserTokenStorage {
    fn load_token(&self) -> Option<String> {
        let storage = dom::local_storage().ok()?;
        storage
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn store_token(&self, token: &str) -> Result<(), SessionError> {
        let storage =
            dom::local_storage().map_err(|err| SessionError::Storage(err.to_string()))?;
        storage
            .set_item(TOKEN_STORAGE_KEY, token)
            .map_err(|err| SessionError::Storage(dom::js_error_message(&err)))
    }

    fn clear_token(&self) {
        if let Ok(storage) = dom::local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}
