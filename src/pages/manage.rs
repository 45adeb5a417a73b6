//! Admin screen: lookup value management and user accounts.
//!
//! Reached only through the admin-gated route; the guard redirects everyone
//! else before this renders.

use leptos::prelude::*;

use crate::net::api;
use crate::net::client::{ApiClient, ApiError};
use crate::net::types::{
    LookupKind, LookupSets, NewLookupPayload, NewUserPayload, Role, User,
};
use crate::util::browser;

struct LookupSection {
    kind: LookupKind,
    title: &'static str,
    description: &'static str,
    placeholder: &'static str,
    button_label: &'static str,
}

static LOOKUP_SECTIONS: [LookupSection; 4] = [
    LookupSection {
        kind: LookupKind::Project,
        title: "Projects",
        description: "List every project your team is tracking.",
        placeholder: "Project name",
        button_label: "Save Project",
    },
    LookupSection {
        kind: LookupKind::Person,
        title: "People",
        description: "Add teammates responsible for tasks.",
        placeholder: "Person name",
        button_label: "Save Person",
    },
    LookupSection {
        kind: LookupKind::Milestone,
        title: "Milestones",
        description: "Optional checkpoints tied to a project.",
        placeholder: "Milestone name",
        button_label: "Save Milestone",
    },
    LookupSection {
        kind: LookupKind::Activity,
        title: "Generic Activities",
        description: "Reuse activity types such as Coding or Testing.",
        placeholder: "Activity name",
        button_label: "Save Activity",
    },
];

/// How many recent values each lookup card lists.
const RECENT_LIMIT: usize = 8;

/// Admin management page: user account creation plus the four lookup card
/// sections.
#[component]
pub fn ManageOptionsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let lookups = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { api::fetch_lookups(&client).await }
        }
    });

    view! {
        <section class="manage-page">
            <div class="page-card">
                <h1 class="page-title">"Manage Options"</h1>
                <p class="page-subtitle">
                    "Control the master list of projects, people, milestones, and generic activities."
                </p>
            </div>

            <UserAccountsCard/>

            {move || match lookups.get() {
                None => {
                    Some(view! { <div class="empty-state">"Loading option data..."</div> }.into_any())
                }
                Some(Err(_)) => {
                    Some(
                        view! { <div class="empty-state">"Unable to load current options."</div> }
                            .into_any(),
                    )
                }
                Some(Ok(_)) => None,
            }}

            <div class="manage-grid">
                {LOOKUP_SECTIONS
                    .iter()
                    .map(|section| view! { <LookupCard section=section lookups=lookups/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// One lookup kind: input, save button, and the most recent values with
/// delete actions. Entries come reactively from the shared resource so the
/// card survives refetches without losing its own input state.
#[component]
fn LookupCard(
    section: &'static LookupSection,
    lookups: LocalResource<Result<LookupSets, ApiError>>,
) -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let input = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let deleting_id = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<(bool, String)>);

    let recent = move || {
        lookups
            .get()
            .and_then(Result::ok)
            .map(|sets| {
                sets.entries(section.kind)
                    .iter()
                    .rev()
                    .take(RECENT_LIMIT)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let on_save = {
        let client = client.clone();
        move |_| {
            let value = input.get().trim().to_owned();
            if value.is_empty() {
                notice.set(Some((
                    false,
                    "Please provide a value before saving.".to_owned(),
                )));
                return;
            }
            saving.set(true);
            notice.set(None);
            let client = client.clone();
            let payload = NewLookupPayload {
                kind: section.kind,
                value,
            };
            leptos::task::spawn_local(async move {
                match api::create_lookup_value(&client, &payload).await {
                    Ok(()) => {
                        input.set(String::new());
                        notice.set(Some((true, "Saved successfully.".to_owned())));
                        lookups.refetch();
                    }
                    Err(err) => notice.set(Some((false, err.to_string()))),
                }
                saving.set(false);
            });
        }
    };

    let on_delete = Callback::new({
        let client = client.clone();
        move |entry_id: String| {
            if !browser::confirm("Delete this option?") {
                return;
            }
            deleting_id.set(Some(entry_id.clone()));
            notice.set(None);
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match api::delete_lookup_value(&client, &entry_id).await {
                    Ok(()) => {
                        notice.set(Some((true, "Option removed successfully.".to_owned())));
                        lookups.refetch();
                    }
                    Err(err) => notice.set(Some((false, err.to_string()))),
                }
                deleting_id.set(None);
            });
        }
    });

    view! {
        <div class="manage-card">
            <div class="manage-card__header">
                <h3>{section.title}</h3>
                <p>{section.description}</p>
            </div>

            <Notice notice=notice/>

            <label class="form-group">
                {section.placeholder}
                <input
                    type="text"
                    placeholder=section.placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
            </label>

            <button
                type="button"
                class="btn btn--primary"
                disabled=move || saving.get()
                on:click=on_save
            >
                {move || if saving.get() { "Saving..." } else { section.button_label }}
            </button>

            <div class="manage-card__list">
                <p class="manage-card__list-title">"Recently added"</p>
                {move || {
                    let entries = recent();
                    if entries.is_empty() {
                        return view! { <p class="empty-state">"No values yet."</p> }.into_any();
                    }
                    view! {
                        <ul>
                            {entries
                                .into_iter()
                                .map(|entry| {
                                    let delete_id = entry.id.clone();
                                    let row_id = entry.id.clone();
                                    view! {
                                        <li class="manage-card__entry">
                                            <span>{entry.value.clone()}</span>
                                            <button
                                                type="button"
                                                class="icon-button icon-button--delete"
                                                title="Delete option"
                                                disabled=move || {
                                                    deleting_id.get().as_deref()
                                                        == Some(row_id.as_str())
                                                }
                                                on:click=move |_| on_delete.run(delete_id.clone())
                                            >
                                                "✕"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct NewUserForm {
    display_name: String,
    username: String,
    email: String,
    password: String,
    admin: bool,
}

impl NewUserForm {
    fn is_complete(&self) -> bool {
        !self.display_name.trim().is_empty()
            && !self.username.trim().is_empty()
            && !self.password.trim().is_empty()
    }

    fn to_payload(&self) -> NewUserPayload {
        NewUserPayload {
            display_name: self.display_name.trim().to_owned(),
            username: self.username.trim().to_owned(),
            email: if self.email.trim().is_empty() {
                None
            } else {
                Some(self.email.trim().to_owned())
            },
            password: self.password.clone(),
            role: if self.admin { Role::Admin } else { Role::User },
        }
    }
}

/// Success/error banner shared by the management cards.
#[component]
fn Notice(notice: RwSignal<Option<(bool, String)>>) -> impl IntoView {
    view! {
        {move || {
            notice
                .get()
                .map(|(success, message)| {
                    let class = if success {
                        "alert alert--success"
                    } else {
                        "alert alert--error"
                    };
                    view! { <div class=class>{message}</div> }
                })
        }}
    }
}

/// Account creation form plus the list of existing users.
#[component]
fn UserAccountsCard() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let users = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { api::fetch_users(&client).await }
        }
    });

    let form = RwSignal::new(NewUserForm::default());
    let saving = RwSignal::new(false);
    let notice = RwSignal::new(None::<(bool, String)>);

    let on_create = {
        let client = client.clone();
        move |_| {
            let current = form.get();
            if !current.is_complete() {
                notice.set(Some((
                    false,
                    "Display name, username, and password are required.".to_owned(),
                )));
                return;
            }
            saving.set(true);
            notice.set(None);
            let client = client.clone();
            let payload = current.to_payload();
            leptos::task::spawn_local(async move {
                match api::create_user_account(&client, &payload).await {
                    Ok(()) => {
                        form.set(NewUserForm::default());
                        notice.set(Some((true, "User created successfully.".to_owned())));
                        users.refetch();
                    }
                    Err(err) => notice.set(Some((false, err.to_string()))),
                }
                saving.set(false);
            });
        }
    };

    fn user_line(user: &User) -> String {
        let mut line = format!("{} — {}", user.display_name, user.username);
        if user.role.is_admin() {
            line.push_str(" (Admin)");
        }
        if let Some(email) = &user.email {
            line.push_str(&format!(" · {email}"));
        }
        line
    }

    view! {
        <div class="manage-card manage-card--wide">
            <div class="manage-card__header">
                <h3>"Create User Account"</h3>
                <p>"Invite teammates by creating their login credentials."</p>
            </div>

            <Notice notice=notice/>

            <div class="form-grid">
                <label class="form-group">
                    "Display Name"
                    <input
                        type="text"
                        placeholder="e.g. Satish Kumar"
                        prop:value=move || form.get().display_name
                        on:input=move |ev| {
                            form.update(|f| f.display_name = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="form-group">
                    "Username"
                    <input
                        type="text"
                        placeholder="e.g. satish"
                        prop:value=move || form.get().username
                        on:input=move |ev| {
                            form.update(|f| f.username = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="form-group">
                    "Email (optional)"
                    <input
                        type="email"
                        placeholder="name@example.com"
                        prop:value=move || form.get().email
                        on:input=move |ev| {
                            form.update(|f| f.email = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="form-group">
                    "Password"
                    <input
                        type="password"
                        placeholder="Temporary password"
                        prop:value=move || form.get().password
                        on:input=move |ev| {
                            form.update(|f| f.password = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="form-group">
                    "Role"
                    <select
                        prop:value=move || if form.get().admin { "admin" } else { "user" }
                        on:change=move |ev| {
                            form.update(|f| f.admin = event_target_value(&ev) == "admin");
                        }
                    >
                        <option value="user">"User"</option>
                        <option value="admin">"Admin"</option>
                    </select>
                </label>
            </div>

            <button
                type="button"
                class="btn btn--primary"
                disabled=move || saving.get()
                on:click=on_create
            >
                {move || if saving.get() { "Creating..." } else { "Create User" }}
            </button>

            <div class="manage-card__list">
                <p class="manage-card__list-title">"Existing Users"</p>
                {move || match users.get() {
                    None => view! { <p class="empty-state">"Loading users..."</p> }.into_any(),
                    Some(Err(_)) => {
                        view! { <p class="empty-state">"Unable to load users."</p> }.into_any()
                    }
                    Some(Ok(list)) if list.is_empty() => {
                        view! { <p class="empty-state">"No users found."</p> }.into_any()
                    }
                    Some(Ok(list)) => {
                        view! {
                            <ul>
                                {list
                                    .iter()
                                    .map(|user| view! { <li>{user_line(user)}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
