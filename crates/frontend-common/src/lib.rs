//! Shared session layer for the EduNexus frontend.

pub mod auth;
pub mod client;
pub mod config;
pub mod storage;

pub use auth::context::{
    use_is_authenticated, use_session, use_session_user, SessionAction, SessionContext,
    SessionData, SessionProvider,
};
pub use client::api_client;
pub use config::AuthConfig;
pub use storage::BrowserTokenStore;
