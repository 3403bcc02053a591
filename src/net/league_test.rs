use super::*;

#[test]
fn league_endpoint_formats_expected_path() {
    assert_eq!(league_endpoint(7), "/leagues/7");
}

#[test]
fn players_endpoint_formats_expected_path() {
    assert_eq!(players_endpoint(7), "/leagues/7/players");
}

#[test]
fn players_ifpa_endpoint_formats_expected_path() {
    assert_eq!(players_ifpa_endpoint(7), "/leagues/7/players/ifpa");
}
