//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Path prefix the API is mounted under, relative to the page origin.
    pub const API_BASE_PATH: &'static str = "/api";

    /// Route the app navigates to when the session expires.
    pub const LOGIN_ROUTE: &'static str = "/login";
}
