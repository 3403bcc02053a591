use super::*;

#[test]
fn events_endpoint_scopes_to_season() {
    assert_eq!(events_endpoint(5), "/seasons/5/events");
}

#[test]
fn create_event_endpoint_scopes_to_season() {
    assert_eq!(create_event_endpoint(5), "/seasons/5/events/create");
}

#[test]
fn event_endpoint_formats_expected_path() {
    assert_eq!(event_endpoint(42), "/events/42");
}
