//! Session state machine and the application-wide session handle.
//!
//! DESIGN
//! ======
//! The machine itself (`SessionState`) is plain data with pure transitions
//! so it can be exercised in native tests. `SessionHandle` wraps it in an
//! `RwSignal`, pairs it with the durable store, and is provided via Leptos
//! context as the single owner of session mutations: every in-memory change
//! is immediately mirrored to the store, because a page reload reads only
//! the durable copy.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::client::{ApiClient, ApiError};
use crate::net::types::{AuthSession, LoginCredentials, Role, User};
use crate::storage::SessionStore;

/// Lifecycle of the client session.
///
/// `Uninitialized` and `Initializing` both mean "the stored session has not
/// been read yet"; consumers must not redirect while in either.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    Initializing,
    Anonymous,
    /// Token and user live together inside the phase, so a half-set session
    /// cannot be represented.
    Authenticated(AuthSession),
}

/// Reactive session state exposed through [`SessionHandle`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub phase: SessionPhase,
    /// True only while a `login` call is in flight.
    pub auth_loading: bool,
}

impl SessionState {
    /// State at provider construction, before the store has been read.
    pub fn initializing() -> Self {
        Self {
            phase: SessionPhase::Initializing,
            auth_loading: false,
        }
    }

    pub fn is_initializing(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::Uninitialized | SessionPhase::Initializing
        )
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, SessionPhase::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match &self.phase {
            SessionPhase::Authenticated(session) => Some(&session.user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match &self.phase {
            SessionPhase::Authenticated(session) => Some(session.token.as_str()),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }

    /// Leave the initializing phases with whatever the store produced.
    /// A no-op once the session is resolved, so a late or repeated read
    /// cannot clobber a login that already happened.
    pub fn resolve_initial(&mut self, restored: Option<AuthSession>) {
        if !self.is_initializing() {
            return;
        }
        self.phase = match restored {
            Some(session) => SessionPhase::Authenticated(session),
            None => SessionPhase::Anonymous,
        };
    }

    /// Mark a login call in flight. Valid from `Anonymous` and
    /// `Authenticated` (re-authentication replaces the session).
    pub fn begin_login(&mut self) {
        self.auth_loading = true;
    }

    pub fn complete_login(&mut self, session: AuthSession) {
        self.phase = SessionPhase::Authenticated(session);
        self.auth_loading = false;
    }

    /// A failed login leaves the current session untouched.
    pub fn fail_login(&mut self) {
        self.auth_loading = false;
    }

    /// Valid from any state; repeat calls are harmless.
    pub fn logout(&mut self) {
        self.phase = SessionPhase::Anonymous;
    }
}

/// Application-wide session owner, provided once via context.
///
/// Holds the reactive state and the durable store together so the two are
/// always mutated in the same call.
#[derive(Clone)]
pub struct SessionHandle {
    pub state: RwSignal<SessionState>,
    store: SessionStore,
}

impl SessionHandle {
    pub fn new(store: SessionStore) -> Self {
        Self {
            state: RwSignal::new(SessionState::initializing()),
            store,
        }
    }

    /// One-time read of the stored session at startup. Storage that is
    /// unavailable or malformed resolves to `Anonymous`, identically to
    /// "no session found".
    pub fn initialize(&self) {
        let restored = self.store.read();
        self.state.update(|state| state.resolve_initial(restored));
    }

    /// Authenticate against the server. On success the session is persisted
    /// and mirrored in memory before the call returns; on failure only the
    /// loading flag changes and the error propagates for UI display.
    pub async fn login(
        &self,
        client: &ApiClient,
        credentials: LoginCredentials,
    ) -> Result<AuthSession, ApiError> {
        self.state.update(SessionState::begin_login);
        match api::login(client, &credentials).await {
            Ok(session) => {
                self.apply_login_success(session.clone());
                Ok(session)
            }
            Err(err) => {
                self.state.update(SessionState::fail_login);
                Err(err)
            }
        }
    }

    /// Drop the session everywhere: durable store first, then memory.
    /// Safe to call repeatedly and from any state; also invoked for
    /// gateway-forced logouts, where the store is already clear.
    pub fn logout(&self) {
        self.store.clear();
        self.state.update(SessionState::logout);
    }

    fn apply_login_success(&self, session: AuthSession) {
        self.store.write(&session);
        self.state.update(|state| state.complete_login(session));
    }
}
