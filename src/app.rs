//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::route_guard::RequireAuth;
use crate::net::client::{ApiClient, DEFAULT_BASE_URL};
use crate::net::types::Role;
use crate::pages::{
    analytics::AnalyticsPage, landing::LandingPage, login::LoginPage, manage::ManageOptionsPage,
    task_form::TaskFormPage, tasks::TaskListPage,
};
use crate::state::session::SessionHandle;
use crate::storage::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Wires the session subsystem together: the durable store, the request
/// gateway built over it, and the session handle that owns the reactive
/// state, then provides them as context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::browser();
    let (client, unauthorized_rx) = ApiClient::new(DEFAULT_BASE_URL, store.clone());
    let session = SessionHandle::new(store);

    provide_context(session.clone());
    provide_context(client);

    // Initial store read happens after mount. During SSR the session stays
    // in its initializing phase, so guards render placeholders and never
    // redirect before the store has been consulted.
    Effect::new({
        let session = session.clone();
        move || session.initialize()
    });

    // Lifetime subscription to the gateway's unauthorized broadcast: any
    // 401 anywhere forces a logout, and the guard redirects on next render.
    #[cfg(feature = "hydrate")]
    {
        use futures::StreamExt;
        let session = session.clone();
        let mut unauthorized_rx = unauthorized_rx;
        leptos::task::spawn_local(async move {
            while unauthorized_rx.next().await.is_some() {
                session.logout();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    drop(unauthorized_rx);

    view! {
        <Stylesheet id="leptos" href="/pkg/workmanager-client.css"/>
        <Title text="Work Manager"/>

        <Router>
            <div class="app-shell">
                <Navbar/>
                <main class="app-main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=LandingPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route
                            path=StaticSegment("tasks")
                            view=|| {
                                view! {
                                    <RequireAuth>
                                        <TaskListPage/>
                                    </RequireAuth>
                                }
                            }
                        />
                        <Route
                            path=(StaticSegment("tasks"), StaticSegment("new"))
                            view=|| {
                                view! {
                                    <RequireAuth>
                                        <TaskFormPage/>
                                    </RequireAuth>
                                }
                            }
                        />
                        <Route
                            path=(StaticSegment("tasks"), ParamSegment("id"), StaticSegment("edit"))
                            view=|| {
                                view! {
                                    <RequireAuth>
                                        <TaskFormPage/>
                                    </RequireAuth>
                                }
                            }
                        />
                        <Route
                            path=StaticSegment("analytics")
                            view=|| {
                                view! {
                                    <RequireAuth>
                                        <AnalyticsPage/>
                                    </RequireAuth>
                                }
                            }
                        />
                        <Route
                            path=StaticSegment("manage")
                            view=|| {
                                view! {
                                    <RequireAuth roles=vec![Role::Admin]>
                                        <ManageOptionsPage/>
                                    </RequireAuth>
                                }
                            }
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
