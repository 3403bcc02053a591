use super::*;

#[test]
fn seasons_endpoint_scopes_to_league() {
    assert_eq!(seasons_endpoint(7), "/leagues/7/seasons");
}

#[test]
fn create_season_endpoint_scopes_to_league() {
    assert_eq!(create_season_endpoint(7), "/leagues/7/seasons/create");
}

#[test]
fn season_endpoint_formats_expected_path() {
    assert_eq!(season_endpoint(12), "/seasons/12");
}
