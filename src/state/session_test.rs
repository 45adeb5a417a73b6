use super::*;

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

// =============================================================
// SessionState machine
// =============================================================

#[test]
fn default_state_counts_as_initializing() {
    let state = SessionState::default();
    assert!(state.is_initializing());
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
    assert!(state.token().is_none());
}

#[test]
fn resolve_initial_without_session_is_anonymous() {
    let mut state = SessionState::initializing();
    state.resolve_initial(None);
    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert!(!state.is_initializing());
}

#[test]
fn resolve_initial_with_session_is_authenticated() {
    let mut state = SessionState::initializing();
    state.resolve_initial(Some(session("abc")));
    assert!(state.is_authenticated());
    assert_eq!(state.token(), Some("abc"));
    assert_eq!(state.user().map(|u| u.username.as_str()), Some("alice"));
}

#[test]
fn resolve_initial_is_ignored_once_resolved() {
    let mut state = SessionState::initializing();
    state.resolve_initial(None);
    state.complete_login(session("abc"));

    // A stray second resolution must not clobber the login.
    state.resolve_initial(None);
    assert!(state.is_authenticated());
}

#[test]
fn login_flow_toggles_loading_and_sets_session() {
    let mut state = SessionState::initializing();
    state.resolve_initial(None);

    state.begin_login();
    assert!(state.auth_loading);
    assert!(!state.is_authenticated());

    state.complete_login(session("abc"));
    assert!(!state.auth_loading);
    assert_eq!(state.token(), Some("abc"));
}

#[test]
fn failed_login_preserves_existing_session() {
    let mut state = SessionState::initializing();
    state.resolve_initial(Some(session("abc")));

    state.begin_login();
    state.fail_login();

    assert!(!state.auth_loading);
    assert_eq!(state.token(), Some("abc"));
}

#[test]
fn relogin_replaces_the_session() {
    let mut state = SessionState::initializing();
    state.resolve_initial(Some(session("abc")));

    state.begin_login();
    state.complete_login(session("def"));
    assert_eq!(state.token(), Some("def"));
}

#[test]
fn logout_is_idempotent_from_any_state() {
    let mut state = SessionState::initializing();
    state.logout();
    assert_eq!(state.phase, SessionPhase::Anonymous);

    state.complete_login(session("abc"));
    state.logout();
    state.logout();
    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert!(state.user().is_none());
}

#[test]
fn role_comes_from_the_authenticated_user() {
    let mut state = SessionState::initializing();
    assert_eq!(state.role(), None);

    let mut admin = session("abc");
    admin.user.role = Role::Admin;
    state.resolve_initial(Some(admin));
    assert_eq!(state.role(), Some(Role::Admin));
}

// =============================================================
// SessionHandle: store and memory move together
// =============================================================

#[test]
fn initialize_restores_a_stored_session() {
    let store = SessionStore::in_memory();
    store.write(&session("abc"));

    let handle = SessionHandle::new(store);
    assert!(handle.state.with_untracked(SessionState::is_initializing));

    handle.initialize();
    assert_eq!(
        handle.state.with_untracked(|s| s.token().map(ToOwned::to_owned)),
        Some("abc".to_owned())
    );
}

#[test]
fn initialize_with_empty_store_resolves_anonymous() {
    let handle = SessionHandle::new(SessionStore::in_memory());
    handle.initialize();
    assert_eq!(
        handle.state.with_untracked(|s| s.phase.clone()),
        SessionPhase::Anonymous
    );
}

#[test]
fn login_success_updates_store_and_memory_atomically() {
    let store = SessionStore::in_memory();
    let handle = SessionHandle::new(store.clone());
    handle.initialize();

    handle.apply_login_success(session("abc"));

    assert_eq!(store.read(), Some(session("abc")));
    assert!(handle.state.with_untracked(SessionState::is_authenticated));
}

#[test]
fn logout_clears_store_and_memory_atomically() {
    let store = SessionStore::in_memory();
    let handle = SessionHandle::new(store.clone());
    handle.initialize();
    handle.apply_login_success(session("abc"));

    handle.logout();

    assert_eq!(store.read(), None);
    assert!(!handle.state.with_untracked(SessionState::is_authenticated));

    // Gateway-forced logout arrives after the store was already cleared.
    handle.logout();
    assert_eq!(store.read(), None);
}
