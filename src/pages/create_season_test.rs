use super::*;

#[test]
fn validate_season_input_accepts_trimmed_name_and_count() {
    assert_eq!(
        validate_season_input(" Spring 2024 ", " 8 "),
        Ok(("Spring 2024".to_owned(), 8))
    );
}

#[test]
fn validate_season_input_requires_name() {
    assert_eq!(validate_season_input("  ", "8"), Err("Enter a season name."));
}

#[test]
fn validate_season_input_rejects_zero_games() {
    assert_eq!(
        validate_season_input("Spring", "0"),
        Err("Counting games must be a positive number.")
    );
}

#[test]
fn validate_season_input_rejects_non_numeric_games() {
    assert_eq!(
        validate_season_input("Spring", "eight"),
        Err("Counting games must be a positive number.")
    );
    assert_eq!(
        validate_season_input("Spring", ""),
        Err("Counting games must be a positive number.")
    );
}
