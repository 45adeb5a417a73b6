use super::*;

#[test]
fn default_filters_select_everything() {
    let filters = TaskFilters::default();
    assert_eq!(filters.project, ALL);
    assert_eq!(filters.person, ALL);
    assert!(filters.from_date.is_empty());
    assert!(filters.to_date.is_empty());
}

#[test]
fn query_pairs_always_carry_project_and_person() {
    let pairs = TaskFilters::default().query_pairs();
    assert_eq!(
        pairs,
        vec![
            ("project", "all".to_owned()),
            ("person", "all".to_owned()),
        ]
    );
}

#[test]
fn query_pairs_include_only_set_dates() {
    let filters = TaskFilters {
        project: "Apollo".to_owned(),
        person: ALL.to_owned(),
        from_date: "2024-03-01".to_owned(),
        to_date: String::new(),
    };
    let pairs = filters.query_pairs();
    assert!(pairs.contains(&("project", "Apollo".to_owned())));
    assert!(pairs.contains(&("fromDate", "2024-03-01".to_owned())));
    assert!(!pairs.iter().any(|(key, _)| *key == "toDate"));
}
