use super::*;

fn someone() -> User {
    User {
        id: 1,
        email: "alice@example.com".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Ng".to_owned(),
    }
}

// =============================================================
// AuthState defaults and derivation
// =============================================================

#[test]
fn default_state_is_anonymous_and_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn is_authenticated_is_exactly_user_presence() {
    let mut state = AuthState::default();
    assert!(!state.is_authenticated());
    state.user = Some(someone());
    assert!(state.is_authenticated());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn apply_login_sets_user_and_clears_loading() {
    let mut state = AuthState::default();
    apply_login(&mut state, someone());
    assert!(state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn apply_logout_clears_user() {
    let mut state = AuthState { user: Some(someone()), loading: false };
    apply_logout(&mut state);
    assert!(!state.is_authenticated());
}

// =============================================================
// Failure classification
// =============================================================

#[test]
fn non_2xx_classifies_as_invalid_credentials() {
    let err = classify_auth_failure(ApiError::Status(401));
    assert!(matches!(err, AuthError::InvalidCredentials));
    let err = classify_auth_failure(ApiError::Status(500));
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[test]
fn transport_failures_pass_through() {
    let err = classify_auth_failure(ApiError::Network("refused".to_owned()));
    assert!(matches!(err, AuthError::Api(ApiError::Network(_))));
}
