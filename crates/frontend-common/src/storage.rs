//! Browser-backed token store
//!
//! Persists the token pair in `localStorage` under the fixed keys, so a
//! session survives page reloads until the tokens are cleared or expire.

use edunexus_core::{TokenPair, TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use gloo::storage::{LocalStorage, Storage};

/// [`TokenStore`] over `localStorage`. Stateless; every call goes to the
/// browser directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    pub fn new() -> Self {
        Self
    }
}

impl TokenStore for BrowserTokenStore {
    fn access_token(&self) -> Option<String> {
        LocalStorage::get(ACCESS_TOKEN_KEY).ok()
    }

    fn refresh_token(&self) -> Option<String> {
        LocalStorage::get(REFRESH_TOKEN_KEY).ok()
    }

    fn store(&self, tokens: &TokenPair) {
        if let Err(err) = LocalStorage::set(ACCESS_TOKEN_KEY, &tokens.access) {
            tracing::error!(error = %err, "failed to persist access token");
        }
        if let Err(err) = LocalStorage::set(REFRESH_TOKEN_KEY, &tokens.refresh) {
            tracing::error!(error = %err, "failed to persist refresh token");
        }
    }

    fn set_access_token(&self, access: &str) {
        if let Err(err) = LocalStorage::set(ACCESS_TOKEN_KEY, access) {
            tracing::error!(error = %err, "failed to persist access token");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(ACCESS_TOKEN_KEY);
        LocalStorage::delete(REFRESH_TOKEN_KEY);
    }
}
