//! Modal dialog for changing the signed-in account's password.

#[cfg(test)]
#[path = "change_password_test.rs"]
mod change_password_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::types::ChangePasswordPayload;

const MIN_PASSWORD_LEN: usize = 6;

/// Local checks before the request goes out. The server re-validates; this
/// only catches the obvious cases inline.
fn validate(current: &str, new: &str, confirm: &str) -> Result<(), &'static str> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err("Please fill in all fields.");
    }
    if new.len() < MIN_PASSWORD_LEN {
        return Err("New password must be at least 6 characters long.");
    }
    if new != confirm {
        return Err("New passwords do not match.");
    }
    if current == new {
        return Err("New password must be different from current password.");
    }
    Ok(())
}

/// Change-password dialog. Closes itself shortly after a successful change.
#[component]
pub fn ChangePasswordModal(on_close: Callback<()>) -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        success.set(None);

        let current_value = current.get();
        let new_value = new_password.get();
        if let Err(message) = validate(&current_value, &new_value, &confirm_password.get()) {
            error.set(Some(message.to_owned()));
            return;
        }

        saving.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let payload = ChangePasswordPayload {
                current_password: current_value,
                new_password: new_value,
            };
            match api::change_password(&client, &payload).await {
                Ok(()) => {
                    saving.set(false);
                    success.set(Some("Password changed successfully!".to_owned()));
                    current.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());

                    // Leave the confirmation visible briefly, then close.
                    #[cfg(feature = "hydrate")]
                    {
                        gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                        on_close.run(());
                    }
                }
                Err(err) => {
                    saving.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Change Password"</h2>
                <p class="dialog__subtitle">"Update your account password"</p>

                <form on:submit=on_submit>
                    <label class="dialog__label">
                        "Current Password"
                        <input
                            class="dialog__input"
                            type="password"
                            autocomplete="current-password"
                            placeholder="Enter current password"
                            prop:value=move || current.get()
                            on:input=move |ev| current.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__label">
                        "New Password"
                        <input
                            class="dialog__input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="Enter new password (min. 6 characters)"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__label">
                        "Confirm New Password"
                        <input
                            class="dialog__input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="Confirm new password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>

                    {move || {
                        error
                            .get()
                            .map(|message| view! { <div class="alert alert--error">{message}</div> })
                    }}
                    {move || {
                        success
                            .get()
                            .map(|message| {
                                view! { <div class="alert alert--success">{message}</div> }
                            })
                    }}

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() { "Changing..." } else { "Change Password" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
