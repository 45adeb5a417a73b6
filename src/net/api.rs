//! Typed REST helpers over the [`ApiClient`] gateway.
//!
//! One thin function per endpoint; every call inherits bearer-token
//! attachment and 401 handling from the gateway. Callers get
//! `Result<_, ApiError>` and decide how failures surface in the UI.

use crate::net::client::{ApiClient, ApiError};
use crate::net::types::{
    AuthSession, ChangePasswordPayload, LoginCredentials, LookupSets, NewLookupPayload,
    NewUserPayload, Task, TaskOptions, TaskPayload, TaskStats, User,
};
use crate::state::filters::TaskFilters;

// ---- auth ----

/// Exchange credentials for a session via `POST /auth/login`.
pub async fn login(
    client: &ApiClient,
    credentials: &LoginCredentials,
) -> Result<AuthSession, ApiError> {
    client.post("/auth/login", credentials).await
}

/// `PUT /users/change-password` for the signed-in account.
pub async fn change_password(
    client: &ApiClient,
    payload: &ChangePasswordPayload,
) -> Result<(), ApiError> {
    client
        .put::<_, serde_json::Value>("/users/change-password", payload)
        .await
        .map(|_| ())
}

// ---- tasks ----

pub async fn fetch_tasks(client: &ApiClient, filters: &TaskFilters) -> Result<Vec<Task>, ApiError> {
    client.get_with_query("/tasks", &filters.query_pairs()).await
}

pub async fn fetch_task(client: &ApiClient, id: &str) -> Result<Task, ApiError> {
    client.get(&format!("/tasks/{id}")).await
}

pub async fn create_task(client: &ApiClient, payload: &TaskPayload) -> Result<Task, ApiError> {
    client.post("/tasks", payload).await
}

pub async fn update_task(
    client: &ApiClient,
    id: &str,
    payload: &TaskPayload,
) -> Result<Task, ApiError> {
    client.put(&format!("/tasks/{id}"), payload).await
}

pub async fn remove_task(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/tasks/{id}")).await
}

/// Aggregated dashboard counters, filtered like the task list.
pub async fn fetch_task_stats(
    client: &ApiClient,
    filters: &TaskFilters,
) -> Result<TaskStats, ApiError> {
    client
        .get_with_query("/tasks/stats", &filters.query_pairs())
        .await
}

/// Dropdown option lists derived from stored lookups.
pub async fn fetch_task_options(client: &ApiClient) -> Result<TaskOptions, ApiError> {
    client.get("/tasks/options").await
}

// ---- lookups (admin) ----

pub async fn fetch_lookups(client: &ApiClient) -> Result<LookupSets, ApiError> {
    client.get("/lookups").await
}

pub async fn create_lookup_value(
    client: &ApiClient,
    payload: &NewLookupPayload,
) -> Result<(), ApiError> {
    client
        .post::<_, serde_json::Value>("/lookups", payload)
        .await
        .map(|_| ())
}

pub async fn delete_lookup_value(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/lookups/{id}")).await
}

// ---- users (admin) ----

pub async fn fetch_users(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.get("/users").await
}

pub async fn create_user_account(
    client: &ApiClient,
    payload: &NewUserPayload,
) -> Result<(), ApiError> {
    client
        .post::<_, serde_json::Value>("/users", payload)
        .await
        .map(|_| ())
}
