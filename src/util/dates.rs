//! Date display helpers.
//!
//! Dates travel as ISO strings (`YYYY-MM-DD`, optionally with a time part)
//! and are only reformatted for display, so no date/time crate is needed.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Placeholder rendered for absent or unparseable dates.
pub const EMPTY_DATE: &str = "\u{2014}";

/// Format an ISO date for table display, e.g. `07 Mar 2024`.
/// Missing or malformed values render as a dash rather than failing.
pub fn format_display_date(value: Option<&str>) -> String {
    let Some(value) = value else {
        return EMPTY_DATE.to_owned();
    };
    match parse_ymd(value) {
        Some((year, month, day)) => {
            format!("{day:02} {} {year}", MONTHS[(month - 1) as usize])
        }
        None => EMPTY_DATE.to_owned(),
    }
}

/// Normalize an ISO date or datetime to the `YYYY-MM-DD` form expected by
/// `<input type="date">`. Unparseable values become the empty string.
pub fn date_input_value(value: &str) -> String {
    if parse_ymd(value).is_some() {
        value[..10].to_owned()
    } else {
        String::new()
    }
}

/// Today's date as `YYYY-MM-DD` in the browser's local time zone.
/// Empty outside the browser; the form treats that as "unset".
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format!(
            "{:04}-{:02}-{:02}",
            now.get_full_year(),
            now.get_month() + 1,
            now.get_date()
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Parse the leading `YYYY-MM-DD` of an ISO date/datetime string.
fn parse_ymd(value: &str) -> Option<(u32, u32, u32)> {
    let date = value.get(..10)?;
    let mut parts = date.split('-');
    let year: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}
