//! Login page with the credential form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::route_guard::DEFAULT_AUTHENTICATED_PATH;
use crate::net::client::ApiClient;
use crate::net::types::LoginCredentials;
use crate::state::session::SessionHandle;

/// Login page: authenticates against the server and redirects to the task
/// list. Visitors who already hold a session are redirected immediately.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let auth_loading = Signal::derive({
        let session = session.clone();
        move || session.state.get().auth_loading
    });

    // Covers both arriving with a session and completing a login here.
    Effect::new({
        let session = session.clone();
        let navigate = navigate.clone();
        move || {
            if session.state.get().is_authenticated() {
                let mut options = NavigateOptions::default();
                options.replace = true;
                navigate(DEFAULT_AUTHENTICATED_PATH, options);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let credentials = LoginCredentials {
            identifier: identifier.get().trim().to_owned(),
            password: password.get(),
        };
        if credentials.identifier.is_empty() || credentials.password.is_empty() {
            error.set(Some(
                "Please enter your username/email and password.".to_owned(),
            ));
            return;
        }

        let session = session.clone();
        let client = client.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = session.login(&client, credentials).await {
                error.set(Some(err.to_string()));
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in to Work Manager"</h1>
                <p class="login-card__subtitle">
                    "Use the credentials shared with you by the administrator. There is no self-serve signup."
                </p>

                <form on:submit=on_submit>
                    <label class="form-group">
                        "Username or Email"
                        <input
                            type="text"
                            autocomplete="username"
                            placeholder="e.g. satish or satish@company.com"
                            prop:value=move || identifier.get()
                            on:input=move |ev| identifier.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="form-group">
                        "Password"
                        <input
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    {move || {
                        error
                            .get()
                            .map(|message| view! { <div class="alert alert--error">{message}</div> })
                    }}

                    <button
                        type="submit"
                        class="btn btn--primary login-card__submit"
                        disabled=move || auth_loading.get()
                    >
                        {move || if auth_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
