//! Wire types shared with the Work Manager REST API.
//!
//! Field names follow the server's JSON contract: camelCase keys, Mongo-style
//! `_id` identifiers on stored documents. Dates travel as ISO strings and are
//! only formatted client-side (see `util::dates`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. The server only ever issues these two values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Self::Admin
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

/// An account as returned by the auth and user endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub display_name: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// The authenticated identity: bearer token plus the user it belongs to.
///
/// Token and user always travel together; there is no partially-set session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Payload for `POST /auth/login`. `identifier` is a username or email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub identifier: String,
    pub password: String,
}

/// Payload for `PUT /users/change-password`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordPayload {
    pub current_password: String,
    pub new_password: String,
}

/// Payload for creating a user account (admin only).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserPayload {
    pub display_name: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
    pub role: Role,
}

/// A logged work item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub person: String,
    pub project: String,
    #[serde(default)]
    pub milestone: Option<String>,
    pub generic_activity: String,
    #[serde(default)]
    pub work_date: Option<String>,
    #[serde(default)]
    pub planned_start: Option<String>,
    #[serde(default)]
    pub planned_end: Option<String>,
    #[serde(default)]
    pub actual_start: Option<String>,
    #[serde(default)]
    pub actual_end: Option<String>,
}

/// Create/update payload for a task. Optional dates serialize as `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub name: String,
    pub work_date: String,
    pub person: String,
    pub project: String,
    pub milestone: String,
    pub generic_activity: String,
    pub planned_start: Option<String>,
    pub planned_end: Option<String>,
    pub actual_start: Option<String>,
    pub actual_end: Option<String>,
}

/// Dropdown option lists from `GET /tasks/options`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOptions {
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub milestones: Vec<String>,
    #[serde(default)]
    pub generic_activities: Vec<String>,
}

/// Aggregated counters from `GET /tasks/stats`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    #[serde(default)]
    pub summary: StatsSummary,
    #[serde(default)]
    pub tasks_by_project: Vec<StatBucket>,
    #[serde(default)]
    pub tasks_by_person: Vec<StatBucket>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StatsSummary {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub open: u32,
}

/// One grouped row of the stats breakdown (per project or per person).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StatBucket {
    pub key: String,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub open: u32,
}

/// The four lookup kinds managed on the admin screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupKind {
    Project,
    Person,
    Milestone,
    Activity,
}

impl LookupKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Person => "person",
            Self::Milestone => "milestone",
            Self::Activity => "activity",
        }
    }
}

/// One stored lookup value.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LookupEntry {
    #[serde(alias = "_id")]
    pub id: String,
    pub value: String,
}

/// All lookup values grouped by kind, from `GET /lookups`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LookupSets {
    #[serde(default)]
    pub project: Vec<LookupEntry>,
    #[serde(default)]
    pub person: Vec<LookupEntry>,
    #[serde(default)]
    pub milestone: Vec<LookupEntry>,
    #[serde(default)]
    pub activity: Vec<LookupEntry>,
}

impl LookupSets {
    pub fn entries(&self, kind: LookupKind) -> &[LookupEntry] {
        match kind {
            LookupKind::Project => &self.project,
            LookupKind::Person => &self.person,
            LookupKind::Milestone => &self.milestone,
            LookupKind::Activity => &self.activity,
        }
    }
}

/// Payload for `POST /lookups`.
#[derive(Clone, Debug, Serialize)]
pub struct NewLookupPayload {
    #[serde(rename = "type")]
    pub kind: LookupKind,
    pub value: String,
}
