use super::*;
use crate::net::types::User;

fn someone() -> User {
    User {
        id: 1,
        email: "alice@example.com".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Ng".to_owned(),
    }
}

#[test]
fn redirects_when_loaded_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn does_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn does_not_redirect_when_user_exists() {
    let state = AuthState { user: Some(someone()), loading: false };
    assert!(!should_redirect_unauth(&state));
}
