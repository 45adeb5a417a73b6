use super::*;
use crate::net::types::{AuthSession, User};

fn anonymous() -> SessionState {
    let mut state = SessionState::initializing();
    state.resolve_initial(None);
    state
}

fn authenticated(role: Role) -> SessionState {
    let mut state = SessionState::initializing();
    state.resolve_initial(Some(AuthSession {
        token: "abc".to_owned(),
        user: User {
            id: "1".to_owned(),
            display_name: "Alice".to_owned(),
            username: "alice".to_owned(),
            email: None,
            role,
        },
    }));
    state
}

// =============================================================
// Decision table
// =============================================================

#[test]
fn initializing_never_redirects() {
    let state = SessionState::initializing();
    assert_eq!(route_access(&state, None), RouteAccess::Pending);
    assert_eq!(
        route_access(&state, Some(&[Role::Admin])),
        RouteAccess::Pending
    );
}

#[test]
fn uninitialized_counts_as_pending() {
    assert_eq!(
        route_access(&SessionState::default(), None),
        RouteAccess::Pending
    );
}

#[test]
fn anonymous_redirects_to_login() {
    assert_eq!(route_access(&anonymous(), None), RouteAccess::RedirectToLogin);
    assert_eq!(
        route_access(&anonymous(), Some(&[Role::Admin])),
        RouteAccess::RedirectToLogin
    );
}

#[test]
fn authenticated_user_enters_unrestricted_destination() {
    assert_eq!(
        route_access(&authenticated(Role::User), None),
        RouteAccess::Grant
    );
}

#[test]
fn role_outside_allow_set_redirects_to_default() {
    assert_eq!(
        route_access(&authenticated(Role::User), Some(&[Role::Admin])),
        RouteAccess::RedirectToDefault
    );
}

#[test]
fn role_inside_allow_set_is_granted() {
    assert_eq!(
        route_access(&authenticated(Role::Admin), Some(&[Role::Admin])),
        RouteAccess::Grant
    );
    assert_eq!(
        route_access(&authenticated(Role::User), Some(&[Role::User, Role::Admin])),
        RouteAccess::Grant
    );
}

// =============================================================
// Scenario flows
// =============================================================

#[test]
fn empty_store_flow_redirects_to_login() {
    // Fresh start with nothing persisted: initializing shows the
    // placeholder, resolution redirects to login.
    let mut state = SessionState::initializing();
    assert_eq!(route_access(&state, None), RouteAccess::Pending);

    state.resolve_initial(None);
    assert_eq!(route_access(&state, None), RouteAccess::RedirectToLogin);
}

#[test]
fn login_grants_tasks_but_not_admin_screen() {
    let mut state = anonymous();
    state.begin_login();
    state.complete_login(AuthSession {
        token: "abc".to_owned(),
        user: User {
            id: "1".to_owned(),
            display_name: "Alice".to_owned(),
            username: "alice".to_owned(),
            email: None,
            role: Role::User,
        },
    });

    assert_eq!(route_access(&state, None), RouteAccess::Grant);
    assert_eq!(
        route_access(&state, Some(&[Role::Admin])),
        RouteAccess::RedirectToDefault
    );
}

#[test]
fn forced_logout_revokes_a_granted_destination() {
    let mut state = authenticated(Role::User);
    assert_eq!(route_access(&state, None), RouteAccess::Grant);

    state.logout();
    assert_eq!(route_access(&state, None), RouteAccess::RedirectToLogin);
}
