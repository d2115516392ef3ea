use super::*;
use crate::state::session::Session;
use crate::util::storage::MemoryStorage;

#[test]
fn entry_redirect_forwards_signed_in_visitor_to_dashboard() {
    assert_eq!(entry_redirect(true), Some("/hero"));
}

#[test]
fn entry_redirect_keeps_signed_out_visitor() {
    assert_eq!(entry_redirect(false), None);
}

#[test]
fn sign_out_clears_store_and_resets_state() {
    let store = SessionStore::new(MemoryStorage::new());
    store.write(&Session::new("abc123", "john.doe@example.com", None));

    let state = sign_out(&store);

    assert!(!store.is_present());
    assert_eq!(state, AuthState::default());
}

#[test]
fn sign_out_on_empty_store_is_harmless() {
    let store = SessionStore::new(MemoryStorage::new());
    assert_eq!(sign_out(&store), AuthState::default());
    assert!(store.storage().is_empty());
}
