use super::*;

#[test]
fn point_distribution_rows_sort_numerically() {
    let mut dist = HashMap::new();
    dist.insert("10".to_owned(), vec![10, 8, 6]);
    dist.insert("2".to_owned(), vec![2, 1]);
    dist.insert("4".to_owned(), vec![4, 3, 2, 1]);
    let rows = point_distribution_rows(&dist);
    assert_eq!(rows.iter().map(|(c, _)| *c).collect::<Vec<_>>(), vec![2, 4, 10]);
}

#[test]
fn point_distribution_rows_drop_unparseable_keys() {
    let mut dist = HashMap::new();
    dist.insert("three".to_owned(), vec![3, 2, 1]);
    dist.insert("4".to_owned(), vec![4, 3, 2, 1]);
    let rows = point_distribution_rows(&dist);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0, 4);
}

#[test]
fn format_points_joins_with_commas() {
    assert_eq!(format_points(&[4, 3, 2, 1]), "4, 3, 2, 1");
    assert_eq!(format_points(&[]), "");
}
