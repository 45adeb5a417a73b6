use super::*;

// =============================================================
// format_display_date
// =============================================================

#[test]
fn formats_plain_iso_date() {
    assert_eq!(format_display_date(Some("2024-03-07")), "07 Mar 2024");
}

#[test]
fn formats_iso_datetime_by_ignoring_time_part() {
    assert_eq!(
        format_display_date(Some("2024-12-25T10:30:00.000Z")),
        "25 Dec 2024"
    );
}

#[test]
fn missing_date_renders_a_dash() {
    assert_eq!(format_display_date(None), EMPTY_DATE);
}

#[test]
fn malformed_dates_render_a_dash() {
    assert_eq!(format_display_date(Some("")), EMPTY_DATE);
    assert_eq!(format_display_date(Some("yesterday")), EMPTY_DATE);
    assert_eq!(format_display_date(Some("2024-13-01")), EMPTY_DATE);
    assert_eq!(format_display_date(Some("2024-00-10")), EMPTY_DATE);
    assert_eq!(format_display_date(Some("2024-3-7")), EMPTY_DATE);
}

// =============================================================
// date_input_value
// =============================================================

#[test]
fn input_value_truncates_datetime_to_date() {
    assert_eq!(date_input_value("2024-03-07T00:00:00.000Z"), "2024-03-07");
    assert_eq!(date_input_value("2024-03-07"), "2024-03-07");
}

#[test]
fn input_value_empty_for_garbage() {
    assert_eq!(date_input_value(""), "");
    assert_eq!(date_input_value("not a date"), "");
}
