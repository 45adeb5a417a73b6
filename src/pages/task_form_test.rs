use super::*;

fn task() -> Task {
    Task {
        id: "t-1".to_owned(),
        name: "Write report".to_owned(),
        person: "Alice".to_owned(),
        project: "Apollo".to_owned(),
        milestone: None,
        generic_activity: "Documentation".to_owned(),
        work_date: Some("2024-03-07T00:00:00.000Z".to_owned()),
        planned_start: Some("2024-03-01".to_owned()),
        planned_end: None,
        actual_start: None,
        actual_end: None,
    }
}

// =============================================================
// Prefill from an existing task
// =============================================================

#[test]
fn from_task_normalizes_dates_for_inputs() {
    let form = TaskForm::from_task(&task());
    assert_eq!(form.work_date, "2024-03-07");
    assert_eq!(form.planned_start, "2024-03-01");
    assert_eq!(form.planned_end, "");
}

#[test]
fn from_task_defaults_missing_milestone_to_none() {
    let form = TaskForm::from_task(&task());
    assert_eq!(form.milestone, "None");

    let mut with_milestone = task();
    with_milestone.milestone = Some("Beta".to_owned());
    assert_eq!(TaskForm::from_task(&with_milestone).milestone, "Beta");
}

// =============================================================
// Completeness
// =============================================================

#[test]
fn blank_form_is_incomplete() {
    assert!(!TaskForm::default().is_complete());
}

#[test]
fn whitespace_only_required_fields_are_incomplete() {
    let form = TaskForm {
        name: "   ".to_owned(),
        work_date: "2024-03-07".to_owned(),
        person: "Alice".to_owned(),
        project: "Apollo".to_owned(),
        generic_activity: "Coding".to_owned(),
        ..TaskForm::default()
    };
    assert!(!form.is_complete());
}

#[test]
fn filled_required_fields_are_complete() {
    let form = TaskForm::from_task(&task());
    assert!(form.is_complete());
}

// =============================================================
// Payload mapping
// =============================================================

#[test]
fn to_payload_trims_text_and_drops_empty_dates() {
    let form = TaskForm {
        name: "  Fix bug  ".to_owned(),
        work_date: "2024-03-07".to_owned(),
        person: " Bob ".to_owned(),
        project: "Apollo".to_owned(),
        milestone: String::new(),
        generic_activity: "Coding".to_owned(),
        planned_start: "2024-03-01".to_owned(),
        ..TaskForm::default()
    };
    let payload = form.to_payload();
    assert_eq!(payload.name, "Fix bug");
    assert_eq!(payload.person, "Bob");
    assert_eq!(payload.milestone, "None");
    assert_eq!(payload.planned_start.as_deref(), Some("2024-03-01"));
    assert_eq!(payload.planned_end, None);
    assert_eq!(payload.actual_start, None);
}

#[test]
fn round_trip_task_to_form_to_payload_preserves_fields() {
    let payload = TaskForm::from_task(&task()).to_payload();
    assert_eq!(payload.name, "Write report");
    assert_eq!(payload.work_date, "2024-03-07");
    assert_eq!(payload.generic_activity, "Documentation");
    assert_eq!(payload.milestone, "None");
}
