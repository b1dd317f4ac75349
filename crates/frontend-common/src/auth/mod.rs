//! Session management

pub mod context;
pub mod flows;

pub use context::{
    use_is_authenticated, use_session, use_session_user, SessionAction, SessionContext,
    SessionData, SessionProvider,
};
