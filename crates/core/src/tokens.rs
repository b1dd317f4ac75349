//! Durable token storage.
//!
//! The session layer keeps the two bearer tokens in a key-value store
//! that outlives the in-memory session: browser `localStorage` in the
//! web frontend, an in-memory map in native code and tests. The store is
//! injected wherever tokens are read or written so the session layer can
//! be exercised without a browser.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Storage key for the short-lived access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key for the long-lived refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// An access/refresh token pair as issued by the auth endpoints.
///
/// Both tokens are opaque bearer strings; the client never inspects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Durable storage for the session tokens.
///
/// Methods take `&self`; implementations use interior mutability. Browser
/// storage is synchronous, so the trait is too.
pub trait TokenStore {
    /// The currently stored access token, if any.
    fn access_token(&self) -> Option<String>;

    /// The currently stored refresh token, if any.
    fn refresh_token(&self) -> Option<String>;

    /// Persist both tokens, replacing any previous pair.
    fn store(&self, tokens: &TokenPair);

    /// Overwrite only the access token, keeping the refresh token.
    /// Used after a successful renewal.
    fn set_access_token(&self, access: &str);

    /// Remove both tokens.
    fn clear(&self);
}

/// Mutex-backed [`TokenStore`] for native callers and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: Mutex<StoredTokens>,
}

#[derive(Debug, Default)]
struct StoredTokens {
    access: Option<String>,
    refresh: Option<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the given pair, for hydration tests.
    pub fn with_tokens(tokens: TokenPair) -> Self {
        let store = Self::new();
        store.store(&tokens);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.inner.lock().expect("token store poisoned").access.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.inner.lock().expect("token store poisoned").refresh.clone()
    }

    fn store(&self, tokens: &TokenPair) {
        let mut inner = self.inner.lock().expect("token store poisoned");
        inner.access = Some(tokens.access.clone());
        inner.refresh = Some(tokens.refresh.clone());
    }

    fn set_access_token(&self, access: &str) {
        self.inner.lock().expect("token store poisoned").access = Some(access.to_owned());
    }

    fn clear(&self) {
        let mut inner = self.inner.lock().expect("token store poisoned");
        inner.access = None;
        inner.refresh = None;
    }
}
