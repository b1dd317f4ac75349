//! Process-wide API client handle
//!
//! The client reads tokens from the store on every request, so a single
//! instance serves both the anonymous and the authenticated phases of a
//! session; nothing needs rebuilding on login or logout.

use crate::config::AuthConfig;
use crate::storage::BrowserTokenStore;
use edunexus_http::{ApiClient, ClientError};
use std::cell::RefCell;
use std::sync::Arc;

thread_local! {
    static CLIENT: RefCell<Option<ApiClient>> = const { RefCell::new(None) };
}

/// Base URL for API calls: the page origin plus the API prefix, falling
/// back to a relative prefix outside a browser window.
fn base_url() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(origin) = window.location().origin() {
            return format!("{origin}{}", AuthConfig::API_BASE_PATH);
        }
    }
    AuthConfig::API_BASE_PATH.to_string()
}

/// Get the shared client, building it on first use.
pub fn api_client() -> Result<ApiClient, ClientError> {
    CLIENT.with(|cell| {
        let mut cell = cell.borrow_mut();
        if let Some(client) = cell.as_ref() {
            return Ok(client.clone());
        }
        let client = ApiClient::builder()
            .base_url(base_url())
            .token_store(Arc::new(BrowserTokenStore::new()))
            .build()?;
        *cell = Some(client.clone());
        Ok(client)
    })
}
