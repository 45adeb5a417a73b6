use super::*;
use crate::net::types::{AuthSession, Role, User};

fn session(token: &str) -> AuthSession {
    AuthSession {
        token: token.to_owned(),
        user: User {
            id: "1".to_owned(),
            display_name: "Alice".to_owned(),
            username: "alice".to_owned(),
            email: None,
            role: Role::User,
        },
    }
}

fn client() -> (ApiClient, UnauthorizedReceiver, SessionStore) {
    let store = SessionStore::in_memory();
    let (client, rx) = ApiClient::new(DEFAULT_BASE_URL, store.clone());
    (client, rx, store)
}

// =============================================================
// Bearer token attachment
// =============================================================

#[test]
fn bearer_token_read_from_stored_session() {
    let (client, _rx, store) = client();
    store.write(&session("abc"));
    assert_eq!(client.bearer_token().as_deref(), Some("abc"));
}

#[test]
fn bearer_token_absent_without_session() {
    let (client, _rx, _store) = client();
    assert_eq!(client.bearer_token(), None);
}

#[test]
fn bearer_header_value_encodes_token() {
    assert_eq!(bearer_header_value("abc"), "Bearer abc");
}

#[test]
fn urls_are_joined_onto_the_base() {
    let (client, _rx, _store) = client();
    assert_eq!(client.url("/tasks"), "/api/tasks");
    assert_eq!(client.url("/tasks/t-1"), "/api/tasks/t-1");
}

// =============================================================
// Unauthorized handling
// =============================================================

#[test]
fn handle_unauthorized_clears_store_and_broadcasts_once() {
    let (client, mut rx, store) = client();
    store.write(&session("abc"));

    client.handle_unauthorized();

    assert_eq!(store.read(), None);
    assert_eq!(rx.try_next().ok().flatten(), Some(()));
    // No second broadcast for a single failing response.
    assert!(rx.try_next().is_err());
}

#[test]
fn each_failing_response_broadcasts_separately() {
    let (client, mut rx, _store) = client();

    client.handle_unauthorized();
    client.handle_unauthorized();

    assert_eq!(rx.try_next().ok().flatten(), Some(()));
    assert_eq!(rx.try_next().ok().flatten(), Some(()));
    assert!(rx.try_next().is_err());
}

#[test]
fn handle_unauthorized_survives_dropped_receiver() {
    let (client, rx, store) = client();
    store.write(&session("abc"));
    drop(rx);

    client.handle_unauthorized();
    assert_eq!(store.read(), None);
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn response_error_maps_401_with_server_message() {
    let err = response_error(401, "{\"message\":\"Invalid credentials\"}");
    assert_eq!(
        err,
        ApiError::Unauthorized {
            message: "Invalid credentials".to_owned()
        }
    );
}

#[test]
fn response_error_maps_401_without_body_to_default_message() {
    let err = response_error(401, "");
    assert_eq!(
        err,
        ApiError::Unauthorized {
            message: SESSION_EXPIRED_MESSAGE.to_owned()
        }
    );
}

#[test]
fn response_error_maps_other_statuses_to_api_error() {
    let err = response_error(422, "{\"message\":\"Value already exists.\"}");
    assert_eq!(
        err,
        ApiError::Api {
            status: 422,
            message: "Value already exists.".to_owned()
        }
    );
}

#[test]
fn response_error_falls_back_on_unparseable_body() {
    let err = response_error(500, "<html>Internal Server Error</html>");
    assert_eq!(
        err,
        ApiError::Api {
            status: 500,
            message: "request failed with status 500".to_owned()
        }
    );
}

#[test]
fn extract_message_ignores_non_string_message() {
    assert_eq!(extract_message("{\"message\":42}"), None);
    assert_eq!(extract_message("{}"), None);
    assert_eq!(
        extract_message("{\"message\":\"nope\"}").as_deref(),
        Some("nope")
    );
}

#[test]
fn error_display_uses_server_message() {
    let err = ApiError::Api {
        status: 400,
        message: "Display name is required.".to_owned(),
    };
    assert_eq!(err.to_string(), "Display name is required.");
}
