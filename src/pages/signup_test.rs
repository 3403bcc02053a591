use super::*;

#[test]
fn validate_signup_input_trims_names_and_email() {
    let input = validate_signup_input(" a@b.com ", "pw", " Ada ", " Lovelace ").unwrap();
    assert_eq!(
        input,
        SignupInput {
            email: "a@b.com".to_owned(),
            password: "pw".to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
        }
    );
}

#[test]
fn validate_signup_input_requires_every_field() {
    assert!(validate_signup_input("", "pw", "Ada", "Lovelace").is_err());
    assert!(validate_signup_input("a@b.com", "", "Ada", "Lovelace").is_err());
    assert!(validate_signup_input("a@b.com", "pw", "  ", "Lovelace").is_err());
    assert!(validate_signup_input("a@b.com", "pw", "Ada", "").is_err());
}
