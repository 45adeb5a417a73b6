//! Top navigation bar with role-filtered entries and account actions.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::change_password::ChangePasswordModal;
use crate::components::route_guard::LOGIN_PATH;
use crate::net::types::{Role, User};
use crate::state::session::SessionHandle;

/// One navigation destination, optionally restricted to a role allow-set.
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub roles: Option<&'static [Role]>,
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "Add Task",
        path: "/tasks/new",
        roles: None,
    },
    NavEntry {
        label: "Task List",
        path: "/tasks",
        roles: None,
    },
    NavEntry {
        label: "Analytics",
        path: "/analytics",
        roles: None,
    },
    NavEntry {
        label: "Manage Options",
        path: "/manage",
        roles: Some(&[Role::Admin]),
    },
];

/// Entries the visitor may see. Role-restricted entries are hidden outright
/// when the current role is not in the allow-set; unrestricted entries are
/// always visible. The same rule serves every presentation of the menu.
pub fn visible_entries(user: Option<&User>) -> Vec<&'static NavEntry> {
    NAV_ENTRIES
        .iter()
        .filter(|entry| match entry.roles {
            None => true,
            Some(roles) => user.is_some_and(|u| roles.contains(&u.role)),
        })
        .collect()
}

/// Application header. Renders nothing for anonymous visitors; signed-in
/// users get the filtered menu plus change-password and sign-out actions.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let navigate = use_navigate();
    let show_change_password = RwSignal::new(false);

    let on_close = Callback::new(move |()| show_change_password.set(false));

    view! {
        {
            let session = session.clone();
            move || {
                let state = session.state.get();
                let Some(user) = state.user().cloned() else {
                    return ().into_any();
                };

                let session = session.clone();
                let navigate = navigate.clone();
                let on_logout = move |_| {
                    session.logout();
                    navigate(LOGIN_PATH, NavigateOptions::default());
                };

                view! {
                    <header class="app-navbar">
                        <div class="navbar-brand">
                            <span>"Work Manager"</span>
                        </div>
                        <nav class="nav-links">
                            {visible_entries(Some(&user))
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <a class="nav-link" href=entry.path>
                                            {entry.label}
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </nav>
                        <div class="navbar-user">
                            <span class="navbar-user__name">{user.display_name.clone()}</span>
                            <button
                                type="button"
                                class="btn"
                                on:click=move |_| show_change_password.set(true)
                            >
                                "Change Password"
                            </button>
                            <button type="button" class="btn" on:click=on_logout>
                                "Sign Out"
                            </button>
                        </div>
                    </header>
                }
                .into_any()
            }
        }
        <Show when=move || show_change_password.get()>
            <ChangePasswordModal on_close=on_close/>
        </Show>
    }
}
