//! EduNexus API client
//!
//! Every request goes out with `Authorization: Bearer <access>` when an
//! access token is present in the injected [`TokenStore`]. A 401 response
//! triggers at most one token renewal: the refresh token is exchanged for
//! a new access token with a dedicated, uninstrumented call, the stored
//! access token is overwritten, and the original request is re-issued
//! transparently. If renewal fails both tokens are cleared and the
//! session-expiry hook fires.

pub mod auth;
pub mod error;
pub mod expiry;

use edunexus_core::TokenStore;
use error::ClientError;
use reqwest::{header, Client, ClientBuilder, Method, Response, StatusCode};
use std::sync::Arc;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::types::{RefreshRequest, RefreshResponse};

/// One-shot marker consumed by the single refresh-and-retry attempt.
///
/// A fresh token accompanies every original request; `take` succeeds
/// exactly once, which is what bounds the interceptor to one renewal per
/// request and keeps the refresh call from recursing.
#[derive(Debug, Default)]
pub struct RetryToken {
    used: bool,
}

impl RetryToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the token. Returns `true` only on the first call.
    pub fn take(&mut self) -> bool {
        !std::mem::replace(&mut self.used, true)
    }
}

/// EduNexus API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The token store this client reads bearer tokens from.
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Create a request builder, attaching the stored access token if one
    /// is present. Without a token the request goes out unauthenticated.
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(access) = self.tokens.access_token() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {access}"));
        }

        request
    }

    /// Execute a request and deserialize the JSON response body.
    pub async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let response = self.send_with_refresh(method, path, body).await?;
        Ok(response.json().await?)
    }

    /// Execute a request, discarding any response body.
    pub async fn execute_unit<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ClientError>
    where
        B: serde::Serialize,
    {
        self.send_with_refresh(method, path, body).await?;
        Ok(())
    }

    /// Send a request, renewing the access token at most once on a 401.
    async fn send_with_refresh<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ClientError>
    where
        B: serde::Serialize,
    {
        let mut retry = RetryToken::new();
        loop {
            let mut request = self.request(method.clone(), path);
            if let Some(body) = body {
                request = request.json(body);
            }

            let response = request.send().await?;
            let status = response.status();

            if status.is_success() {
                return Ok(response);
            }

            // One renewal per original request. A 401 with no stored
            // refresh token propagates unchanged.
            if status == StatusCode::UNAUTHORIZED
                && retry.take()
                && self.tokens.refresh_token().is_some()
            {
                tracing::debug!(path, "access token rejected, attempting renewal");
                match self.refresh_access_token().await {
                    Ok(()) => continue,
                    Err(err) => {
                        tracing::warn!(error = %err, "token renewal failed, clearing session");
                        self.tokens.clear();
                        expiry::notify_session_expired();
                        return Err(err);
                    }
                }
            }

            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(ClientError::from_status(status, message));
        }
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// Issued directly on the inner client: no bearer header, no 401
    /// interception.
    async fn refresh_access_token(&self) -> Result<(), ClientError> {
        let refresh = self
            .tokens
            .refresh_token()
            .ok_or_else(|| ClientError::RefreshFailed("no refresh token stored".into()))?;

        let url = format!("{}/auth/refresh/", self.base_url);
        let response = self
            .client
            .post(url)
            .json(&RefreshRequest { refresh })
            .send()
            .await
            .map_err(|e| ClientError::RefreshFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(ClientError::RefreshFailed(message));
        }

        let renewed: RefreshResponse = response
            .json()
            .await
            .map_err(|e| ClientError::RefreshFailed(e.to_string()))?;
        self.tokens.set_access_token(&renewed.access);
        Ok(())
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    token_store: Option<Arc<dyn TokenStore>>,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Set the base URL (including the `/api` prefix)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the durable token store
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(store);
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let tokens = self
            .token_store
            .ok_or_else(|| ClientError::Configuration("token_store is required".into()))?;

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        client_builder = client_builder.user_agent(
            self.user_agent
                .unwrap_or_else(|| "edunexus-frontend/0.1.0".to_string()),
        );

        let client = client_builder.build()?;

        Ok(ApiClient {
            client,
            base_url,
            tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RetryToken;

    #[test]
    fn retry_token_is_one_shot() {
        let mut token = RetryToken::new();
        assert!(token.take());
        assert!(!token.take());
        assert!(!token.take());
    }
}
