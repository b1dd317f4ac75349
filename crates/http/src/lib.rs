//! EduNexus HTTP client
//!
//! A thin typed wrapper over `reqwest` that attaches the stored bearer
//! token to outgoing requests, intercepts 401 responses to renew the
//! access token once, and exposes the auth endpoints as typed calls.

pub mod client;
pub mod types;

pub use client::{error::ClientError, ApiClient, ApiClientBuilder};
