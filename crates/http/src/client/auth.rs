//! Typed auth endpoint wrappers

use super::{error::ClientError, ApiClient};
use crate::types::{AuthResponse, LoginRequest, LogoutRequest, ProfileResponse, RegisterRequest};
use reqwest::Method;

impl ApiClient {
    /// Authenticate with email and password. Invalid credentials come
    /// back as [`ClientError::AuthenticationFailed`] or
    /// [`ClientError::Validation`].
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        self.execute(Method::POST, "/auth/login/", Some(request))
            .await
    }

    /// Create an account. Server-side validation failures (including a
    /// password confirmation mismatch) surface as
    /// [`ClientError::Validation`].
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        self.execute(Method::POST, "/auth/register/", Some(request))
            .await
    }

    /// Invalidate the given refresh token server-side. Whether to treat
    /// failures as fatal is the caller's decision; the session layer
    /// logs and swallows them.
    pub async fn logout(&self, refresh: &str) -> Result<(), ClientError> {
        let request = LogoutRequest {
            refresh: refresh.to_owned(),
        };
        self.execute_unit(Method::POST, "/auth/logout/", Some(&request))
            .await
    }

    /// Fetch the authenticated user together with their role names.
    /// This is the call the 401 renewal logic protects.
    pub async fn profile(&self) -> Result<ProfileResponse, ClientError> {
        self.execute::<_, ()>(Method::GET, "/auth/profile/", None)
            .await
    }
}
