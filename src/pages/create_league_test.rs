use super::*;

#[test]
fn validate_league_input_trims_both_fields() {
    assert_eq!(
        validate_league_input("  Flip City  ", " Austin "),
        Ok(("Flip City".to_owned(), "Austin".to_owned()))
    );
}

#[test]
fn validate_league_input_requires_name() {
    assert_eq!(
        validate_league_input("   ", "Austin"),
        Err("Enter both a name and a location.")
    );
}

#[test]
fn validate_league_input_requires_location() {
    assert_eq!(
        validate_league_input("Flip City", ""),
        Err("Enter both a name and a location.")
    );
}
