use super::*;

fn owner_json() -> &'static str {
    r#"{"id": 3, "email": "kim@example.com", "firstName": "Kim", "lastName": "Reyes"}"#
}

#[test]
fn user_deserializes_camel_case_fields() {
    let user: User = serde_json::from_str(owner_json()).unwrap();
    assert_eq!(user.id, 3);
    assert_eq!(user.first_name, "Kim");
    assert_eq!(user.last_name, "Reyes");
}

#[test]
fn league_deserializes_with_owner() {
    let json = format!(
        r#"{{"id": 7, "name": "Flip City", "location": "Austin",
            "dateCreated": "2024-03-01T18:00:00Z", "owner": {}}}"#,
        owner_json()
    );
    let league: League = serde_json::from_str(&json).unwrap();
    assert_eq!(league.id, 7);
    assert_eq!(league.name, "Flip City");
    assert_eq!(league.location, "Austin");
    assert_eq!(league.owner.email, "kim@example.com");
}

#[test]
fn envelope_unwraps_league_list() {
    let json = format!(
        r#"{{"data": [{{"id": 1, "name": "A", "location": "B",
            "dateCreated": "2024-01-01T00:00:00Z", "owner": {}}}]}}"#,
        owner_json()
    );
    let envelope: Envelope<Vec<League>> = serde_json::from_str(&json).unwrap();
    assert_eq!(envelope.data.len(), 1);
    assert_eq!(envelope.data[0].name, "A");
}

#[test]
fn season_defaults_missing_point_distribution() {
    let json = r#"{"id": 5, "name": "Spring 2024", "dateCreated": "2024-03-10T00:00:00Z",
        "leagueID": 7, "countingGames": 8, "eventCount": 0, "hasFinals": true}"#;
    let season: Season = serde_json::from_str(json).unwrap();
    assert_eq!(season.league_id, 7);
    assert!(season.point_distribution.is_empty());
}

#[test]
fn season_parses_point_distribution() {
    let json = r#"{"id": 5, "name": "Spring 2024", "dateCreated": "2024-03-10T00:00:00Z",
        "leagueID": 7, "countingGames": 8, "eventCount": 2, "hasFinals": false,
        "pointDistribution": {"3": [3, 2, 1], "4": [4, 3, 2, 1]}}"#;
    let season: Season = serde_json::from_str(json).unwrap();
    assert_eq!(season.point_distribution["4"], vec![4, 3, 2, 1]);
}

#[test]
fn numeric_ids_tolerate_float_encoding() {
    let json = r#"{"id": 9.0, "email": "a@b.com", "firstName": "A", "lastName": "B"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, 9);
}

#[test]
fn fractional_ids_are_rejected() {
    let json = r#"{"id": 9.5, "email": "a@b.com", "firstName": "A", "lastName": "B"}"#;
    assert!(serde_json::from_str::<User>(json).is_err());
}

#[test]
fn negative_ids_are_rejected() {
    let json = r#"{"id": -1, "email": "a@b.com", "firstName": "A", "lastName": "B"}"#;
    assert!(serde_json::from_str::<User>(json).is_err());
}

#[test]
fn player_tolerates_missing_ifpa_number() {
    let json = r#"{"id": 2, "name": "Dot Mitchell", "leagueID": 7}"#;
    let player: Player = serde_json::from_str(json).unwrap();
    assert_eq!(player.ifpa_number, None);
}

#[test]
fn event_defaults_location_and_finals_flag() {
    let json = r#"{"id": 4, "name": "Week 1", "date": "2024-04-02", "seasonID": 5}"#;
    let event: Event = serde_json::from_str(json).unwrap();
    assert_eq!(event.location, "");
    assert!(!event.is_finals);
}

#[test]
fn auth_response_carries_user_and_token() {
    let json = format!(r#"{{"user": {}, "token": "tok-123"}}"#, owner_json());
    let resp: AuthResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.token, "tok-123");
    assert_eq!(resp.user.id, 3);
}
