//! Declarative access control for protected views.
//!
//! The decision logic is a pure function of session state and the
//! destination's role allow-set; the component wraps it reactively so a
//! logout forced by the network layer redirects an already-rendered view on
//! the next render.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::net::types::Role;
use crate::state::session::{SessionHandle, SessionState};

pub const LOGIN_PATH: &str = "/login";

/// Where under-privileged (but authenticated) visitors land instead of a
/// protected destination. Not the login page: they have a session.
pub const DEFAULT_AUTHENTICATED_PATH: &str = "/tasks";

/// Outcome of evaluating a destination against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// The stored session has not been read yet; show a placeholder and
    /// decide on a later render.
    Pending,
    RedirectToLogin,
    RedirectToDefault,
    Grant,
}

/// Evaluate access for a destination. `allowed` of `None` means any
/// authenticated role may enter.
pub fn route_access(state: &SessionState, allowed: Option<&[Role]>) -> RouteAccess {
    if state.is_initializing() {
        return RouteAccess::Pending;
    }
    let Some(user) = state.user() else {
        return RouteAccess::RedirectToLogin;
    };
    match allowed {
        Some(roles) if !roles.contains(&user.role) => RouteAccess::RedirectToDefault,
        _ => RouteAccess::Grant,
    }
}

/// Wrapper for protected routes. Re-evaluates on every session change.
#[component]
pub fn RequireAuth(
    children: ChildrenFn,
    /// Roles allowed to enter; omit to admit any authenticated user.
    #[prop(optional)]
    roles: Option<Vec<Role>>,
) -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    view! {
        {move || match route_access(&session.state.get(), roles.as_deref()) {
            RouteAccess::Pending => {
                view! { <div class="empty-state">"Checking access..."</div> }.into_any()
            }
            RouteAccess::RedirectToLogin => view! { <Redirect path=LOGIN_PATH/> }.into_any(),
            RouteAccess::RedirectToDefault => {
                view! { <Redirect path=DEFAULT_AUTHENTICATED_PATH/> }.into_any()
            }
            RouteAccess::Grant => children(),
        }}
    }
}
