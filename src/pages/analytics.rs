//! Analytics dashboard: summary counters and per-project/per-person
//! breakdowns over the same filters as the task list.

use leptos::prelude::*;

use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::types::StatBucket;
use crate::state::filters::{ALL, TaskFilters};
use crate::state::options::OptionSets;

/// Analytics page. Breakdown rows carry a proportional bar so relative
/// volume is readable without a chart library.
#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let draft = RwSignal::new(TaskFilters::default());
    let applied = RwSignal::new(TaskFilters::default());

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

    let stats = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            let filters = applied.get();
            async move { api::fetch_task_stats(&client, &filters).await }
        }
    });

    let content = move || match stats.get() {
        None => view! { <div class="empty-state">"Loading analytics..."</div> }.into_any(),
        Some(Err(_)) => {
            view! { <div class="empty-state">"Unable to load analytics right now."</div> }
                .into_any()
        }
        Some(Ok(stats)) => {
            let detail = if stats.tasks_by_project.is_empty() {
                ("Person", stats.tasks_by_person.clone())
            } else {
                ("Project", stats.tasks_by_project.clone())
            };
            view! {
                <div class="stats-grid">
                    <div class="stat-card">
                        <h4>"Total Tasks"</h4>
                        <p class="stat-card__value">{stats.summary.total}</p>
                    </div>
                    <div class="stat-card">
                        <h4>"Completed"</h4>
                        <p class="stat-card__value">{stats.summary.completed}</p>
                    </div>
                    <div class="stat-card">
                        <h4>"Open"</h4>
                        <p class="stat-card__value">{stats.summary.open}</p>
                    </div>
                </div>

                <div class="chart-grid">
                    <BreakdownCard title="Tasks by Project" buckets=stats.tasks_by_project.clone()/>
                    <BreakdownCard title="Tasks by Person" buckets=stats.tasks_by_person.clone()/>
                </div>

                <div class="table-card">
                    <h3>"Detailed Analytics"</h3>
                    <table class="detail-table">
                        <thead>
                            <tr>
                                <th>{detail.0}</th>
                                <th>"Total"</th>
                                <th>"Completed"</th>
                                <th>"Open"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {detail
                                .1
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td>{row.key.clone()}</td>
                                            <td>{row.total}</td>
                                            <td>{row.completed}</td>
                                            <td>{row.open}</td>
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
    };

    view! {
        <section class="analytics-page">
            <div class="page-card">
                <h1 class="page-title">"Analytics Dashboard"</h1>
                <p class="page-subtitle">
                    "View task performance insights across projects and team members."
                </p>

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
                                            view! {
                                                <option value=project.clone()>{project.clone()}</option>
                                            }
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
                            "From"
                            <input
                                type="date"
                                prop:value=move || draft.get().from_date
                                on:input=move |ev| {
                                    draft.update(|f| f.from_date = event_target_value(&ev));
                                }
                            />
                        </label>

                        <label class="form-group">
                            "To"
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
                            "Apply"
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
            </div>

            {content}
        </section>
    }
}

/// One breakdown list with proportional bars.
#[component]
fn BreakdownCard(title: &'static str, buckets: Vec<StatBucket>) -> impl IntoView {
    let max_total = buckets.iter().map(|b| b.total).max().unwrap_or(0);

    view! {
        <div class="chart-card">
            <h3>{title}</h3>
            {if buckets.is_empty() {
                view! { <div class="empty-state">"No data yet"</div> }.into_any()
            } else {
                buckets
                    .into_iter()
                    .map(|bucket| {
                        let width = if max_total == 0 {
                            0
                        } else {
                            bucket.total * 100 / max_total
                        };
                        view! {
                            <div class="chart-card__row">
                                <span class="chart-card__label">{bucket.key.clone()}</span>
                                <span
                                    class="chart-card__bar"
                                    style:width=format!("{width}%")
                                ></span>
                                <span class="chart-card__count">{bucket.total}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
