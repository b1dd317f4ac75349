//! Session transition flows
//!
//! Plain async functions over an [`ApiClient`] and its token store; the
//! Yew layer dispatches their results into the session context. Keeping
//! them free of UI types lets the whole state machine run against a mock
//! server in native tests.

use edunexus_core::{TokenPair, User};
use edunexus_http::types::{LoginRequest, RegisterRequest};
use edunexus_http::{ApiClient, ClientError};

/// Hydrate a session from durable storage at application start.
///
/// With no stored access token this is a no-op. With one, the profile is
/// fetched (renewing the token once if stale); an irrecoverable failure
/// clears both tokens so the next start goes straight to login.
pub async fn initialize(client: &ApiClient) -> Option<(User, Vec<String>)> {
    client.token_store().access_token()?;

    match client.profile().await {
        Ok(profile) => Some((profile.user, profile.roles)),
        Err(err) => {
            tracing::debug!(error = %err, "stored token rejected, clearing session");
            client.token_store().clear();
            None
        }
    }
}

/// Authenticate and establish a session: persist the issued token pair,
/// then fetch the profile for the role list.
///
/// Errors propagate to the caller for display; a login attempt while
/// already authenticated simply overwrites the stored session.
pub async fn login(
    client: &ApiClient,
    credentials: &LoginRequest,
) -> Result<(User, Vec<String>), ClientError> {
    let response = client.login(credentials).await?;
    client.token_store().store(&TokenPair {
        access: response.access,
        refresh: response.refresh,
    });

    let profile = client.profile().await?;
    Ok((response.user, profile.roles))
}

/// Create an account and establish a session. Symmetric to [`login`].
pub async fn register(
    client: &ApiClient,
    data: &RegisterRequest,
) -> Result<(User, Vec<String>), ClientError> {
    let response = client.register(data).await?;
    client.token_store().store(&TokenPair {
        access: response.access,
        refresh: response.refresh,
    });

    let profile = client.profile().await?;
    Ok((response.user, profile.roles))
}

/// End the session. The server is informed on a best-effort basis so it
/// can invalidate the refresh token; local tokens are cleared no matter
/// what.
pub async fn logout(client: &ApiClient) {
    if let Some(refresh) = client.token_store().refresh_token() {
        if let Err(err) = client.logout(&refresh).await {
            tracing::warn!(error = %err, "server logout failed, clearing local session anyway");
        }
    }
    client.token_store().clear();
}
