mod form;
pub mod my_tasks;

use std::sync::Arc;

use contracts::domain::common::EntityId;
use contracts::domain::project::{Project, ProjectId};
use contracts::domain::task::{CreateTaskPayload, Task, TaskStatus, TaskSummary, UpdateTaskPayload};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::domain::project::api as project_api;
use crate::shared::api_client::use_api;
use crate::shared::components::confirm_dialog::{ConfirmDialog, DialogMode};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::SaveHandler;

use form::TaskFormModal;

fn status_options() -> Vec<(String, String)> {
    TaskStatus::ALL
        .iter()
        .map(|s| (s.label().to_string(), s.label().to_string()))
        .collect()
}

#[component]
pub fn TaskBoardPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();

    let project_id = Memo::new(move |_| {
        params.with(|p| {
            p.get("id")
                .and_then(|raw| ProjectId::from_string(&raw).ok())
        })
    });

    let project = RwSignal::new(Option::<Project>::None);
    let tasks = RwSignal::new(Vec::<Task>::new());
    let summary = RwSignal::new(TaskSummary::default());
    let reload = RwSignal::new(0u32);

    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);

    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Task>::None);
    let delete_target = RwSignal::new(Option::<Task>::None);

    Effect::new(move |_| {
        let Some(id) = project_id.get() else {
            error.set(Some("Invalid project id".to_string()));
            return;
        };
        reload.get();
        loading.set(true);
        spawn_local(async move {
            match project_api::get(api, id).await {
                Ok(p) => project.set(Some(p)),
                Err(e) => {
                    error.set(Some(e));
                    loading.set(false);
                    return;
                }
            }
            match api::by_project(api, id).await {
                Ok(board) => {
                    tasks.set(board.items);
                    summary.set(board.summary);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    });

    let team = Signal::derive(move || {
        project
            .get()
            .map(|p| p.employees)
            .unwrap_or_default()
    });

    let save: SaveHandler<CreateTaskPayload> = Arc::new(move |mut payload| {
        Box::pin(async move {
            match editing.get_untracked() {
                Some(existing) => {
                    let update = UpdateTaskPayload {
                        title: Some(payload.title),
                        description: payload.description,
                        assigned_to: Some(payload.assigned_to),
                        priority: Some(payload.priority),
                        due_date: payload.due_date,
                        estimated_hours: payload.estimated_hours,
                    };
                    api::update(api, existing.id, &update).await.map(|_| ())
                }
                None => {
                    payload.project_id = project_id.get_untracked();
                    api::create(api, &payload).await.map(|_| ())
                }
            }
        })
    });

    let on_saved = Callback::new(move |_: ()| {
        let was_edit = editing.get_untracked().is_some();
        form_open.set(false);
        editing.set(None);
        notice.set(Some(if was_edit {
            "Task updated successfully.".to_string()
        } else {
            "Task created successfully.".to_string()
        }));
        reload.update(|n| *n += 1);
    });

    let change_status = move |task: Task, status: TaskStatus| {
        if task.status == status {
            return;
        }
        spawn_local(async move {
            match api::update_status(api, task.id, status).await {
                Ok(_) => reload.update(|n| *n += 1),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(target) = delete_target.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete(api, target.id).await {
                Ok(_) => {
                    delete_target.set(None);
                    notice.set(Some("Task deleted successfully.".to_string()));
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    delete_target.set(None);
                    error.set(Some(e));
                }
            }
        });
    });

    let board_columns = move || {
        let all_tasks = tasks.get();
        TaskStatus::ALL
            .into_iter()
            .map(|status| {
                let column_tasks: Vec<Task> = all_tasks
                    .iter()
                    .filter(|t| t.status == status)
                    .cloned()
                    .collect();
                (status, column_tasks)
            })
            .collect::<Vec<_>>()
    };

    let initial = Signal::derive(move || {
        editing
            .get()
            .map(|t| CreateTaskPayload {
                project_id: Some(t.project_id),
                title: t.title,
                description: t.description,
                assigned_to: t.assigned_to.id,
                priority: t.priority,
                due_date: t.due_date,
                estimated_hours: t.estimated_hours,
            })
            .unwrap_or_default()
    });

    view! {
        <div class="page">
            <PageHeader
                title="Task Board"
                subtitle=Signal::derive(move || project.get().map(|p| p.name))
            >
                <button
                    class="button button--primary"
                    on:click=move |_| {
                        editing.set(None);
                        form_open.set(true);
                    }
                >
                    {icon("plus")}
                    "Add Task"
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| reload.update(|n| *n += 1)
                >
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="board-summary">
                <div class="board-summary__bar">
                    <div
                        class="board-summary__fill"
                        style=move || format!("width: {:.0}%", summary.get().progress)
                    ></div>
                </div>
                <span class="board-summary__text">
                    {move || {
                        let s = summary.get();
                        format!("{} / {} tasks completed", s.completed_tasks, s.total_tasks)
                    }}
                </span>
            </div>

            {move || loading.get().then(|| view! {
                <div class="loading-hint">"Loading..."</div>
            })}
            {move || error.get().map(|e| view! {
                <div class="notice notice--error">
                    <span>{e}</span>
                    <button class="notice__dismiss" on:click=move |_| error.set(None)>
                        {icon("x")}
                    </button>
                </div>
            })}

            <div class="board">
                {move || board_columns().into_iter().map(|(status, column_tasks)| {
                    let count = column_tasks.len();
                    view! {
                        <div class="board__column">
                            <div class="board__column-header">
                                <span>{status.label()}</span>
                                <span class="board__column-count">{count}</span>
                            </div>
                            {column_tasks.into_iter().map(|task| {
                                let task_for_edit = task.clone();
                                let task_for_delete = task.clone();
                                let task_for_status = task.clone();
                                view! {
                                    <div class="task-card">
                                        <div class="task-card__title">{task.title.clone()}</div>
                                        <div class="task-card__meta">
                                            <span class="task-card__assignee">
                                                {task.assigned_to.name.clone()}
                                            </span>
                                            <span class=format!(
                                                "task-card__priority task-card__priority--{}",
                                                task.priority.label().to_lowercase()
                                            )>
                                                {task.priority.label()}
                                            </span>
                                        </div>
                                        <div class="task-card__due">
                                            {format!("Due: {}", format_date_opt(task.due_date))}
                                        </div>
                                        <div class="task-card__actions">
                                            <select
                                                class="form__select task-card__status"
                                                on:change=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    let next = TaskStatus::ALL
                                                        .into_iter()
                                                        .find(|s| s.label() == value)
                                                        .unwrap_or(task_for_status.status);
                                                    change_status(task_for_status.clone(), next);
                                                }
                                            >
                                                {status_options().into_iter().map(|(value, label)| {
                                                    let selected = value == task.status.label();
                                                    view! {
                                                        <option value=value selected=selected>
                                                            {label}
                                                        </option>
                                                    }
                                                }).collect_view()}
                                            </select>
                                            <button
                                                class="table-action"
                                                on:click=move |_| {
                                                    editing.set(Some(task_for_edit.clone()));
                                                    form_open.set(true);
                                                }
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="table-action table-action--danger"
                                                on:click=move |_| {
                                                    delete_target.set(Some(task_for_delete.clone()));
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }
                }).collect_view()}
            </div>

            <TaskFormModal
                open=Signal::derive(move || form_open.get())
                title=Signal::derive(move || {
                    if editing.get().is_some() { "Edit Task" } else { "Add Task" }.to_string()
                })
                initial=initial
                employees=team
                on_close=Callback::new(move |_: ()| form_open.set(false))
                on_saved=on_saved
                save=save
            />

            <ConfirmDialog
                open=Signal::derive(move || delete_target.get().is_some())
                title="Delete Task".to_string()
                message=Signal::derive(move || {
                    delete_target
                        .get()
                        .map(|t| format!("Are you sure you want to delete \"{}\"?", t.title))
                        .unwrap_or_default()
                })
                confirm_text="Delete"
                danger=true
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_: ()| delete_target.set(None))
            />

            <ConfirmDialog
                open=Signal::derive(move || notice.get().is_some())
                title="Success".to_string()
                message=Signal::derive(move || notice.get().unwrap_or_default())
                mode=DialogMode::Notice
                on_confirm=Callback::new(move |_: ()| notice.set(None))
            />
        </div>
    }
}
