use super::*;
use crate::util::storage::MemoryStore;

fn store_with(token: Option<&str>, user: Option<&str>) -> MemoryStore {
    let store = MemoryStore::new();
    if let Some(token) = token {
        store.set(TOKEN_KEY, token);
    }
    if let Some(user) = user {
        store.set(USER_KEY, user);
    }
    store
}

#[test]
fn missing_token_is_logged_out_regardless_of_user() {
    let store = store_with(None, Some(r#"{"name":"Ada","email":"ada@example.com"}"#));
    let auth = AuthState::load(&store);
    assert!(!auth.logged_in());
    assert_eq!(auth.button_label(), "Sign In");
    assert_eq!(auth.logout_prompt(), None);
}

#[test]
fn missing_user_is_logged_out() {
    let auth = AuthState::load(&store_with(Some("tok"), None));
    assert!(!auth.logged_in());
}

#[test]
fn malformed_user_is_logged_out() {
    let auth = AuthState::load(&store_with(Some("tok"), Some("{not json")));
    assert!(!auth.logged_in());
    assert_eq!(auth.button_label(), "Sign In");
}

#[test]
fn greeting_prefers_name() {
    let auth = AuthState::load(&store_with(Some("tok"), Some(r#"{"name":"Ada","email":"ada@example.com"}"#)));
    assert!(auth.logged_in());
    assert_eq!(auth.button_label(), "Hi, Ada");
}

#[test]
fn greeting_falls_back_to_email_local_part() {
    let auth = AuthState::load(&store_with(Some("tok"), Some(r#"{"email":"grace@navy.mil"}"#)));
    assert_eq!(auth.button_label(), "Hi, grace");
    let prompt = auth.logout_prompt().unwrap();
    assert!(prompt.starts_with("Logged in as: grace@navy.mil\n\n"));
}

#[test]
fn logout_clears_both_keys() {
    let store = store_with(Some("tok"), Some(r#"{"name":"Ada","email":"ada@example.com"}"#));
    let mut auth = AuthState::load(&store);
    auth.logout(&store);
    assert!(!auth.logged_in());
    assert!(store.is_empty());
    assert_eq!(AuthState::load(&store), AuthState::default());
}
