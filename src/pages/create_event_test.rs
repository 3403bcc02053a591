use super::*;

#[test]
fn validate_event_input_trims_all_fields() {
    let input = validate_event_input(" Week 1 ", " 2024-04-02 ", " Pinballz ").unwrap();
    assert_eq!(
        input,
        EventInput {
            name: "Week 1".to_owned(),
            date: "2024-04-02".to_owned(),
            location: "Pinballz".to_owned(),
        }
    );
}

#[test]
fn validate_event_input_requires_every_field() {
    assert!(validate_event_input("", "2024-04-02", "Pinballz").is_err());
    assert!(validate_event_input("Week 1", "  ", "Pinballz").is_err());
    assert!(validate_event_input("Week 1", "2024-04-02", "").is_err());
}
