use super::*;

// =============================================================
// merge_options
// =============================================================

#[test]
fn merge_keeps_fallback_first_then_fetched() {
    let merged = merge_options(&["Coding", "Testing"], &["Design".to_owned()]);
    assert_eq!(merged, vec!["Coding", "Testing", "Design"]);
}

#[test]
fn merge_dedupes_repeated_values() {
    let merged = merge_options(
        &["Coding"],
        &["Coding".to_owned(), "Testing".to_owned(), "Testing".to_owned()],
    );
    assert_eq!(merged, vec!["Coding", "Testing"]);
}

#[test]
fn merge_drops_empty_strings() {
    let merged = merge_options(&["Coding"], &[String::new(), "Testing".to_owned()]);
    assert_eq!(merged, vec!["Coding", "Testing"]);
}

#[test]
fn merge_of_nothing_is_empty() {
    assert!(merge_options(&[], &[]).is_empty());
}

// =============================================================
// OptionSets
// =============================================================

#[test]
fn defaults_cover_every_dropdown() {
    let sets = OptionSets::default();
    assert!(!sets.projects.is_empty());
    assert!(!sets.milestones.is_empty());
    assert!(!sets.generic_activities.is_empty());
}

#[test]
fn merged_combines_defaults_with_server_options() {
    let fetched = TaskOptions {
        projects: vec!["Apollo".to_owned()],
        people: vec!["Alice".to_owned()],
        milestones: vec!["None".to_owned(), "Beta".to_owned()],
        generic_activities: vec!["Coding".to_owned()],
    };
    let sets = OptionSets::merged(&fetched);

    assert!(sets.projects.contains(&"Apollo".to_owned()));
    assert_eq!(sets.people, vec!["Alice"]);
    // "None" appears once even though both sides contribute it.
    assert_eq!(
        sets.milestones.iter().filter(|m| m.as_str() == "None").count(),
        1
    );
    assert_eq!(
        sets.generic_activities.iter().filter(|a| a.as_str() == "Coding").count(),
        1
    );
}

#[test]
fn selectable_milestones_skip_the_none_placeholder() {
    let sets = OptionSets {
        milestones: vec!["None".to_owned(), "Alpha".to_owned(), "Beta".to_owned()],
        ..OptionSets::default()
    };
    let selectable: Vec<&String> = sets.selectable_milestones().collect();
    assert_eq!(selectable, vec!["Alpha", "Beta"]);
}
