//! EduNexus core types and utilities

pub mod tokens;
pub mod types;

pub use tokens::{MemoryTokenStore, TokenPair, TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
pub use types::{User, UserProfile};

#[cfg(test)]
mod tests;
