use super::*;

#[test]
fn format_date_truncates_iso_timestamp() {
    assert_eq!(format_date("2024-03-01T18:00:00Z"), "2024-03-01");
}

#[test]
fn format_date_keeps_bare_day() {
    assert_eq!(format_date("2024-03-01"), "2024-03-01");
}

#[test]
fn format_date_passes_through_unrecognized_values() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_date(""), "");
}

#[test]
fn full_name_joins_and_trims() {
    let user = User {
        id: 1,
        email: "a@b.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: String::new(),
    };
    assert_eq!(full_name(&user), "Ada");
}
