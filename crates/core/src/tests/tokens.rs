use crate::tokens::{MemoryTokenStore, TokenPair, TokenStore};

fn pair(access: &str, refresh: &str) -> TokenPair {
    TokenPair {
        access: access.into(),
        refresh: refresh.into(),
    }
}

#[test]
fn empty_store_has_no_tokens() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.access_token(), None);
    assert_eq!(store.refresh_token(), None);
}

#[test]
fn store_replaces_both_tokens() {
    let store = MemoryTokenStore::with_tokens(pair("A1", "R1"));
    store.store(&pair("A2", "R2"));
    assert_eq!(store.access_token().as_deref(), Some("A2"));
    assert_eq!(store.refresh_token().as_deref(), Some("R2"));
}

#[test]
fn set_access_token_keeps_refresh_token() {
    let store = MemoryTokenStore::with_tokens(pair("A1", "R1"));
    store.set_access_token("A2");
    assert_eq!(store.access_token().as_deref(), Some("A2"));
    assert_eq!(store.refresh_token().as_deref(), Some("R1"));
}

#[test]
fn clear_removes_both_tokens() {
    let store = MemoryTokenStore::with_tokens(pair("A1", "R1"));
    store.clear();
    assert_eq!(store.access_token(), None);
    assert_eq!(store.refresh_token(), None);
}
