//! Session-expiry notification hook
//!
//! When a token renewal fails the client clears the stored tokens and
//! fires a callback the host application registered, typically to
//! navigate to the login entry point. The registry keeps the client
//! decoupled from any particular navigation mechanism.

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static SESSION_EXPIRED_HOOK: RefCell<Option<Rc<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Register the callback fired when the session can no longer be renewed.
pub fn on_session_expired(callback: Rc<dyn Fn()>) {
    SESSION_EXPIRED_HOOK.with(|hook| {
        *hook.borrow_mut() = Some(callback);
    });
}

/// Remove the registered callback.
pub fn clear_session_expired_hook() {
    SESSION_EXPIRED_HOOK.with(|hook| {
        *hook.borrow_mut() = None;
    });
}

/// Fire the registered callback, if any.
pub(crate) fn notify_session_expired() {
    SESSION_EXPIRED_HOOK.with(|hook| {
        if let Some(callback) = hook.borrow().as_ref() {
            callback();
        }
    });
}
