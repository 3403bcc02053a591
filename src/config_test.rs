use super::*;

#[test]
fn join_url_keeps_single_slash() {
    assert_eq!(join_url("/api", "/leagues"), "/api/leagues");
    assert_eq!(join_url("/api/", "/leagues"), "/api/leagues");
    assert_eq!(join_url("/api", "leagues"), "/api/leagues");
}

#[test]
fn join_url_accepts_absolute_base() {
    assert_eq!(
        join_url("http://localhost:8080/api/", "/auth/me"),
        "http://localhost:8080/api/auth/me"
    );
}

#[test]
fn api_base_defaults_when_env_unset() {
    // PINLEAGUE_API_BASE is not set in the test environment.
    assert_eq!(api_base(), DEFAULT_API_BASE);
}
