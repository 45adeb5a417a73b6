use super::*;

fn user(role: Role) -> User {
    User {
        id: "1".to_owned(),
        display_name: "Alice".to_owned(),
        username: "alice".to_owned(),
        email: None,
        role,
    }
}

fn labels(entries: &[&NavEntry]) -> Vec<&'static str> {
    entries.iter().map(|entry| entry.label).collect()
}

#[test]
fn regular_user_does_not_see_admin_entries() {
    let visible = visible_entries(Some(&user(Role::User)));
    assert_eq!(labels(&visible), vec!["Add Task", "Task List", "Analytics"]);
}

#[test]
fn admin_sees_every_entry() {
    let visible = visible_entries(Some(&user(Role::Admin)));
    assert_eq!(
        labels(&visible),
        vec!["Add Task", "Task List", "Analytics", "Manage Options"]
    );
}

#[test]
fn anonymous_visitor_sees_only_unrestricted_entries() {
    let visible = visible_entries(None);
    assert!(labels(&visible).iter().all(|label| *label != "Manage Options"));
    assert_eq!(visible.len(), 3);
}

#[test]
fn entry_paths_point_at_guarded_routes() {
    assert!(NAV_ENTRIES.iter().all(|entry| entry.path.starts_with('/')));
}
