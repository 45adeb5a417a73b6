//! Public landing page.

use leptos::prelude::*;

use crate::state::session::SessionHandle;

/// Marketing-free front door: a short pitch plus the entry link. Signed-in
/// visitors are offered the task list instead of the login form.
#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    let entry = move || {
        if session.state.get().is_authenticated() {
            ("/tasks", "Open your tasks")
        } else {
            ("/login", "Sign in")
        }
    };

    view! {
        <section class="landing-page">
            <h1>"Work Manager"</h1>
            <p class="landing-page__tagline">
                "Log work items, track planned against actual dates, and keep the whole team's effort in one filterable list."
            </p>
            <ul class="landing-page__features">
                <li>"Guided task capture with shared projects, people, and activities"</li>
                <li>"Planned vs. actual timelines at a glance"</li>
                <li>"Analytics across projects and team members"</li>
            </ul>
            {move || {
                let (href, label) = entry();
                view! {
                    <a class="btn btn--primary landing-page__cta" href=href>
                        {label}
                    </a>
                }
            }}
        </section>
    }
}
