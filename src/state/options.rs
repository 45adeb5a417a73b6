//! Dropdown option sets: built-in defaults merged with server lookups.
//!
//! The server's lists win nothing over the defaults; both are kept, deduped
//! in first-seen order, so a fresh install still offers something to pick
//! before any lookup values exist.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use crate::net::types::TaskOptions;

pub const DEFAULT_PROJECTS: &[&str] = &["General"];
pub const DEFAULT_PEOPLE: &[&str] = &[];
pub const DEFAULT_MILESTONES: &[&str] = &["None"];
pub const DEFAULT_ACTIVITIES: &[&str] =
    &["Coding", "Testing", "Documentation", "Review", "Meeting"];

/// Option lists backing the task form and filter dropdowns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSets {
    pub projects: Vec<String>,
    pub people: Vec<String>,
    pub milestones: Vec<String>,
    pub generic_activities: Vec<String>,
}

impl Default for OptionSets {
    fn default() -> Self {
        Self {
            projects: to_owned_vec(DEFAULT_PROJECTS),
            people: to_owned_vec(DEFAULT_PEOPLE),
            milestones: to_owned_vec(DEFAULT_MILESTONES),
            generic_activities: to_owned_vec(DEFAULT_ACTIVITIES),
        }
    }
}

impl OptionSets {
    /// Defaults merged with whatever the server returned.
    pub fn merged(fetched: &TaskOptions) -> Self {
        Self {
            projects: merge_options(DEFAULT_PROJECTS, &fetched.projects),
            people: merge_options(DEFAULT_PEOPLE, &fetched.people),
            milestones: merge_options(DEFAULT_MILESTONES, &fetched.milestones),
            generic_activities: merge_options(DEFAULT_ACTIVITIES, &fetched.generic_activities),
        }
    }

    /// Milestones excluding the "None" placeholder, which the form renders
    /// as its own fixed first choice.
    pub fn selectable_milestones(&self) -> impl Iterator<Item = &String> {
        self.milestones.iter().filter(|m| m.as_str() != "None")
    }
}

/// Union of fallback and fetched values: deduped, first-seen order, empty
/// strings dropped. An empty union falls back to the defaults.
pub fn merge_options(fallback: &[&str], fetched: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for value in fallback
        .iter()
        .map(|v| (*v).to_owned())
        .chain(fetched.iter().cloned())
    {
        if value.is_empty() || merged.contains(&value) {
            continue;
        }
        merged.push(value);
    }
    if merged.is_empty() {
        return to_owned_vec(fallback);
    }
    merged
}

fn to_owned_vec(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}
