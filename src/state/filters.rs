//! Task list and analytics filter state.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

/// Sentinel meaning "do not filter on this dimension".
pub const ALL: &str = "all";

/// Filters shared by the task list and the analytics dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskFilters {
    pub project: String,
    pub person: String,
    pub from_date: String,
    pub to_date: String,
}

impl Default for TaskFilters {
    fn default() -> Self {
        Self {
            project: ALL.to_owned(),
            person: ALL.to_owned(),
            from_date: String::new(),
            to_date: String::new(),
        }
    }
}

impl TaskFilters {
    /// Query parameters for the list/stats endpoints. Unset dates are
    /// omitted; the `"all"` sentinel is passed through, matching what the
    /// server expects.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("project", self.project.clone()),
            ("person", self.person.clone()),
        ];
        if !self.from_date.is_empty() {
            pairs.push(("fromDate", self.from_date.clone()));
        }
        if !self.to_date.is_empty() {
            pairs.push(("toDate", self.to_date.clone()));
        }
        pairs
    }
}
