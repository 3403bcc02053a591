use super::*;

#[test]
fn endpoints_are_stable() {
    assert_eq!(LOGIN_ENDPOINT, "/auth/login");
    assert_eq!(SIGNUP_ENDPOINT, "/auth/signup");
    assert_eq!(ME_ENDPOINT, "/auth/me");
}
