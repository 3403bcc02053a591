use super::*;

fn season(id: u64, created: &str) -> Season {
    Season {
        id,
        name: format!("Season {id}"),
        date_created: created.to_owned(),
        league_id: 7,
        counting_games: 8,
        event_count: 0,
        has_finals: false,
        point_distribution: std::collections::HashMap::new(),
    }
}

// =============================================================
// split_seasons
// =============================================================

#[test]
fn split_seasons_picks_newest_as_active() {
    let (active, past) = split_seasons(vec![
        season(1, "2023-09-01T00:00:00Z"),
        season(2, "2024-03-10T00:00:00Z"),
        season(3, "2023-01-15T00:00:00Z"),
    ]);
    assert_eq!(active.map(|s| s.id), Some(2));
    assert_eq!(past.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn split_seasons_handles_empty_list() {
    let (active, past) = split_seasons(Vec::new());
    assert!(active.is_none());
    assert!(past.is_empty());
}

#[test]
fn split_seasons_single_entry_has_no_past() {
    let (active, past) = split_seasons(vec![season(1, "2024-01-01T00:00:00Z")]);
    assert_eq!(active.map(|s| s.id), Some(1));
    assert!(past.is_empty());
}

// =============================================================
// parse_ifpa_numbers
// =============================================================

#[test]
fn parse_ifpa_numbers_splits_on_commas_and_spaces() {
    assert_eq!(parse_ifpa_numbers("1234, 5678 910"), Ok(vec![1234, 5678, 910]));
}

#[test]
fn parse_ifpa_numbers_rejects_non_numeric() {
    assert_eq!(
        parse_ifpa_numbers("1234, abc"),
        Err("IFPA numbers must be comma-separated integers.")
    );
}

#[test]
fn parse_ifpa_numbers_rejects_empty_input() {
    assert_eq!(parse_ifpa_numbers("  , "), Err("Enter at least one IFPA number."));
}
