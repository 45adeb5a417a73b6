//! Task list page: filter bar, task table, edit and delete actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::client::ApiClient;
use crate::state::filters::{ALL, TaskFilters};
use crate::state::options::OptionSets;
use crate::util::browser;
use crate::util::dates::format_display_date;

/// Task list: every captured task, filterable by project, person, and date
/// range. Deletes confirm first and refetch the list afterwards.
#[component]
pub fn TaskListPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let draft = RwSignal::new(TaskFilters::default());
    let applied = RwSignal::new(TaskFilters::default());
    let deleting_id = RwSignal::new(None::<String>);
    let action_error = RwSignal::new(None::<String>);

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

    let tasks = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            let filters = applied.get();
            async move { api::fetch_tasks(&client, &filters).await }
        }
    });

    let on_delete = Callback::new({
        let client = client.clone();
        move |task_id: String| {
            if !browser::confirm("Delete this task?") {
                return;
            }
            deleting_id.set(Some(task_id.clone()));
            action_error.set(None);
            let client = client.clone();
            let tasks = tasks.clone();
            leptos::task::spawn_local(async move {
                match api::remove_task(&client, &task_id).await {
                    Ok(()) => tasks.refetch(),
                    Err(err) => action_error.set(Some(err.to_string())),
                }
                deleting_id.set(None);
            });
        }
    });

    let on_add = {
        let navigate = navigate.clone();
        move |_| navigate("/tasks/new", NavigateOptions::default())
    };

    let table_content = {
        let navigate = navigate.clone();
        move || {
            match tasks.get() {
                None => view! { <div class="empty-state">"Loading tasks..."</div> }.into_any(),
                Some(Err(_)) => {
                    view! { <div class="empty-state">"Unable to load tasks right now."</div> }
                        .into_any()
                }
                Some(Ok(list)) if list.is_empty() => {
                    view! {
                        <div class="empty-state">
                            "No tasks captured yet. Start by adding your first task."
                        </div>
                    }
                    .into_any()
                }
                Some(Ok(list)) => {
                    let navigate = navigate.clone();
                    view! {
                        <div class="table-scroll">
                            <table class="task-table">
                                <thead>
                                    <tr>
                                        <th>"Task Name"</th>
                                        <th>"Person"</th>
                                        <th>"Project"</th>
                                        <th>"Milestone"</th>
                                        <th>"Generic Activity"</th>
                                        <th>"Work Date"</th>
                                        <th>"Planned Start"</th>
                                        <th>"Planned End"</th>
                                        <th>"Actual Start"</th>
                                        <th>"Actual End"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|task| {
                                            let edit_navigate = navigate.clone();
                                            let edit_id = task.id.clone();
                                            let delete_id = task.id.clone();
                                            let row_id = task.id.clone();
                                            view! {
                                                <tr>
                                                    <td>{task.name.clone()}</td>
                                                    <td>{task.person.clone()}</td>
                                                    <td>{task.project.clone()}</td>
                                                    <td>
                                                        {task
                                                            .milestone
                                                            .clone()
                                                            .unwrap_or_else(|| "None".to_owned())}
                                                    </td>
                                                    <td>{task.generic_activity.clone()}</td>
                                                    <td>{format_display_date(task.work_date.as_deref())}</td>
                                                    <td>{format_display_date(task.planned_start.as_deref())}</td>
                                                    <td>{format_display_date(task.planned_end.as_deref())}</td>
                                                    <td>{format_display_date(task.actual_start.as_deref())}</td>
                                                    <td>{format_display_date(task.actual_end.as_deref())}</td>
                                                    <td>
                                                        <div class="action-buttons">
                                                            <button
                                                                type="button"
                                                                class="icon-button icon-button--edit"
                                                                title="Edit"
                                                                on:click=move |_| {
                                                                    edit_navigate(
                                                                        &format!("/tasks/{edit_id}/edit"),
                                                                        NavigateOptions::default(),
                                                                    );
                                                                }
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                type="button"
                                                                class="icon-button icon-button--delete"
                                                                title="Delete"
                                                                disabled=move || {
                                                                    deleting_id.get().as_deref()
                                                                        == Some(row_id.as_str())
                                                                }
                                                                on:click=move |_| on_delete.run(delete_id.clone())
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                }
            }
        }
    };

    view! {
        <section class="task-list-page">
            <div class="filters-bar">
                <div class="filters-grid">
                    <label class="form-group">
                        "Project"
                        <select
                            prop:value=move || draft.get().project
                            on:change=move |ev| {
                                draft.update(|f| f.project = event_target_value(&ev));
                            }
                        >
                            <option value=ALL>"All Projects"</option>
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
                        "Person"
                        <select
                            prop:value=move || draft.get().person
                            on:change=move |ev| {
                                draft.update(|f| f.person = event_target_value(&ev));
                            }
                        >
                            <option value=ALL>"All People"</option>
                            {move || {
                                option_sets()
                                    .people
                                    .into_iter()
                                    .map(|person| {
                                        view! { <option value=person.clone()>{person.clone()}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>

                    <label class="form-group">
                        "From Date"
                        <input
                            type="date"
                            prop:value=move || draft.get().from_date
                            on:input=move |ev| {
                                draft.update(|f| f.from_date = event_target_value(&ev));
                            }
                        />
                    </label>

                    <label class="form-group">
                        "To Date"
                        <input
                            type="date"
                            prop:value=move || draft.get().to_date
                            on:input=move |ev| {
                                draft.update(|f| f.to_date = event_target_value(&ev));
                            }
                        />
                    </label>
                </div>

                <div class="filter-actions">
                    <button
                        type="button"
                        class="btn btn--primary"
                        on:click=move |_| applied.set(draft.get())
                    >
                        "Filter"
                    </button>
                    <button
                        type="button"
                        class="btn"
                        on:click=move |_| {
                            draft.set(TaskFilters::default());
                            applied.set(TaskFilters::default());
                        }
                    >
                        "Clear"
                    </button>
                </div>
            </div>

            <div class="table-card">
                <div class="table-card__header">
                    <div>
                        <h2>"Task List"</h2>
                        <p class="table-card__subtitle">
                            "Every task you add appears here. Filter, edit, or delete as needed."
                        </p>
                    </div>
                    <button type="button" class="btn btn--primary" on:click=on_add>
                        "+ Add New Task"
                    </button>
                </div>

                {move || {
                    action_error
                        .get()
                        .map(|message| view! { <div class="alert alert--error">{message}</div> })
                }}

                {table_content}
            </div>
        </section>
    }
}
