//! Add/edit task form, served at `/tasks/new` and `/tasks/:id/edit`.

#[cfg(test)]
#[path = "task_form_test.rs"]
mod task_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::types::{Task, TaskPayload};
use crate::state::options::OptionSets;
use crate::util::dates::{date_input_value, today_iso};

/// Raw form state: everything is a string until submission, exactly as the
/// inputs hold it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub name: String,
    pub work_date: String,
    pub person: String,
    pub project: String,
    pub milestone: String,
    pub generic_activity: String,
    pub planned_start: String,
    pub planned_end: String,
    pub actual_start: String,
    pub actual_end: String,
}

impl TaskForm {
    /// Blank form for a new entry, dated today.
    pub fn new_entry() -> Self {
        Self {
            work_date: today_iso(),
            milestone: "None".to_owned(),
            ..Self::default()
        }
    }

    /// Prefill from an existing task for editing.
    pub fn from_task(task: &Task) -> Self {
        let date = |value: &Option<String>| {
            value.as_deref().map(date_input_value).unwrap_or_default()
        };
        Self {
            name: task.name.clone(),
            work_date: date(&task.work_date),
            person: task.person.clone(),
            project: task.project.clone(),
            milestone: task
                .milestone
                .clone()
                .unwrap_or_else(|| "None".to_owned()),
            generic_activity: task.generic_activity.clone(),
            planned_start: date(&task.planned_start),
            planned_end: date(&task.planned_end),
            actual_start: date(&task.actual_start),
            actual_end: date(&task.actual_end),
        }
    }

    /// All fields the server requires are filled in.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.work_date.is_empty()
            && !self.person.trim().is_empty()
            && !self.project.trim().is_empty()
            && !self.generic_activity.trim().is_empty()
    }

    /// Request payload: trimmed text, optional dates mapped to `None` when
    /// unset, and the milestone defaulting to "None".
    pub fn to_payload(&self) -> TaskPayload {
        let optional = |value: &str| {
            if value.is_empty() {
                None
            } else {
                Some(value.to_owned())
            }
        };
        TaskPayload {
            name: self.name.trim().to_owned(),
            work_date: self.work_date.clone(),
            person: self.person.trim().to_owned(),
            project: self.project.trim().to_owned(),
            milestone: if self.milestone.is_empty() {
                "None".to_owned()
            } else {
                self.milestone.clone()
            },
            generic_activity: self.generic_activity.trim().to_owned(),
            planned_start: optional(&self.planned_start),
            planned_end: optional(&self.planned_end),
            actual_start: optional(&self.actual_start),
            actual_end: optional(&self.actual_end),
        }
    }
}

/// Add/edit form. With an `:id` param the task is loaded and updated in
/// place; without one a new task is created. Either way a successful save
/// returns to the task list.
#[component]
pub fn TaskFormPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let params = use_params_map();

    let task_id = Memo::new(move |_| params.read().get("id"));

    let form = RwSignal::new(TaskForm::new_entry());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let options = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { api::fetch_task_options(&client).await }
        }
    });
    let option_sets = move || {
        options
            .get()
            .and_then(Result::ok)
            .map(|fetched| OptionSets::merged(&fetched))
            .unwrap_or_default()
    };

    // Loads the task being edited; resolves to Ok(None) on the add route.
    let existing = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = task_id.get();
            async move {
                match id {
                    Some(id) => api::fetch_task(&client, &id).await.map(Some),
                    None => Ok(None),
                }
            }
        }
    });

    Effect::new(move || match existing.get() {
        Some(Ok(Some(task))) => form.set(TaskForm::from_task(&task)),
        Some(Ok(None)) => form.set(TaskForm::new_entry()),
        Some(Err(_)) => error.set(Some("We could not load the task for editing.".to_owned())),
        None => {}
    });

    let editing = move || task_id.get().is_some();
    let disabled = move || saving.get() || (editing() && existing.get().is_none());

    let on_cancel = {
        let navigate = navigate.clone();
        move |_| navigate("/tasks", NavigateOptions::default())
    };

    let on_submit = {
        let client = client.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            error.set(None);

            let current = form.get();
            if !current.is_complete() {
                error.set(Some("Please fill in all required fields.".to_owned()));
                return;
            }

            saving.set(true);
            let payload = current.to_payload();
            let id = task_id.get();
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match id {
                    Some(id) => api::update_task(&client, &id, &payload).await,
                    None => api::create_task(&client, &payload).await,
                };
                saving.set(false);
                match result {
                    Ok(_) => navigate("/tasks", NavigateOptions::default()),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
    };

    view! {
        <section class="page-card">
            <h1 class="page-title">
                {move || if editing() { "Edit Task" } else { "Add Task / Activity" }}
            </h1>
            <p class="page-subtitle">
                "Capture the work you or your team completed today, along with the planned and actual dates."
            </p>

            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="alert alert--error">{message}</div> })
            }}

            <form on:submit=on_submit>
                <h2>"Basic Information"</h2>
                <div class="form-grid">
                    <label class="form-group">
                        "Task Name"
                        <input
                            type="text"
                            placeholder="Enter task name"
                            required
                            disabled=disabled
                            prop:value=move || form.get().name
                            on:input=move |ev| {
                                form.update(|f| f.name = event_target_value(&ev));
                            }
                        />
                    </label>

                    <label class="form-group">
                        "Work Date"
                        <input
                            type="date"
                            required
                            disabled=disabled
                            prop:value=move || form.get().work_date
                            on:input=move |ev| {
                                form.update(|f| f.work_date = event_target_value(&ev));
                            }
                        />
                    </label>

                    <label class="form-group">
                        "Person"
                        <input
                            type="text"
                            list="people-options"
                            placeholder="Who is responsible?"
                            required
                            disabled=disabled
                            prop:value=move || form.get().person
                            on:input=move |ev| {
                                form.update(|f| f.person = event_target_value(&ev));
                            }
                        />
                        <datalist id="people-options">
                            {move || {
                                option_sets()
                                    .people
                                    .into_iter()
                                    .map(|person| view! { <option value=person/> })
                                    .collect::<Vec<_>>()
                            }}
                        </datalist>
                    </label>

                    <label class="form-group">
                        "Project"
                        <select
                            required
                            disabled=disabled
                            prop:value=move || form.get().project
                            on:change=move |ev| {
                                form.update(|f| f.project = event_target_value(&ev));
                            }
                        >
                            <option value="" disabled>
                                "Select a project"
                            </option>
                            {move || {
                                option_sets()
                                    .projects
                                    .into_iter()
                                    .map(|project| {
                                        view! { <option value=project.clone()>{project.clone()}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>

                    <label class="form-group">
                        "Milestone"
                        <select
                            disabled=disabled
                            prop:value=move || form.get().milestone
                            on:change=move |ev| {
                                form.update(|f| f.milestone = event_target_value(&ev));
                            }
                        >
                            <option value="None">"None"</option>
                            {move || {
                                option_sets()
                                    .selectable_milestones()
                                    .cloned()
                                    .map(|milestone| {
                                        view! {
                                            <option value=milestone.clone()>{milestone.clone()}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>

                    <label class="form-group">
                        "Generic Activity"
                        <select
                            required
                            disabled=disabled
                            prop:value=move || form.get().generic_activity
                            on:change=move |ev| {
                                form.update(|f| f.generic_activity = event_target_value(&ev));
                            }
                        >
                            <option value="" disabled>
                                "Select activity type"
                            </option>
                            {move || {
                                option_sets()
                                    .generic_activities
                                    .into_iter()
                                    .map(|activity| {
                                        view! { <option value=activity.clone()>{activity.clone()}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                </div>

                <hr class="divider"/>

                <h2>"Dates"</h2>
                <div class="form-grid">
                    <label class="form-group">
                        "Planned Start Date"
                        <input
                            type="date"
                            disabled=disabled
                            prop:value=move || form.get().planned_start
                            on:input=move |ev| {
                                form.update(|f| f.planned_start = event_target_value(&ev));
                            }
                        />
                    </label>

                    <label class="form-group">
                        "Planned End Date"
                        <input
                            type="date"
                            disabled=disabled
                            prop:value=move || form.get().planned_end
                            on:input=move |ev| {
                                form.update(|f| f.planned_end = event_target_value(&ev));
                            }
                        />
                    </label>

                    <label class="form-group">
                        "Actual Start Date"
                        <input
                            type="date"
                            disabled=disabled
                            prop:value=move || form.get().actual_start
                            on:input=move |ev| {
                                form.update(|f| f.actual_start = event_target_value(&ev));
                            }
                        />
                    </label>

                    <label class="form-group">
                        "Actual End Date"
                        <input
                            type="date"
                            disabled=disabled
                            prop:value=move || form.get().actual_end
                            on:input=move |ev| {
                                form.update(|f| f.actual_end = event_target_value(&ev));
                            }
                        />
                    </label>
                </div>

                <div class="form-actions">
                    <button type="button" class="btn" on:click=on_cancel disabled=disabled>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=disabled>
                        {move || {
                            if saving.get() {
                                "Saving..."
                            } else if editing() {
                                "Save Changes"
                            } else {
                                "Save Task"
                            }
                        }}
                    </button>
                </div>
            </form>
        </section>
    }
}
