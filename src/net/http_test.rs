use super::*;

#[test]
fn api_url_joins_base_and_path() {
    assert_eq!(api_url("/leagues"), "/api/leagues");
}

#[test]
fn bearer_value_formats_header() {
    assert_eq!(bearer_value("abc.def.ghi"), "Bearer abc.def.ghi");
}
