use dioxus::prelude::*;
use flags_core::catalog::ui_text;
use flags_core::machine::AppEvent;
use services::ClearConfirmation;
use services::session_store::filter_sessions;

use crate::context::AppContext;
use crate::views::state::{dispatch, use_machine};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{AdminRowVm, map_admin_rows};

#[derive(Clone, Debug, PartialEq)]
struct AdminData {
    total: usize,
    rows: Vec<AdminRowVm>,
}

#[component]
pub fn AdminView() -> Element {
    let ctx = use_context::<AppContext>();
    let machine = use_machine();
    let text = ui_text(machine.read().language());

    let query = use_signal(String::new);
    let mut expanded = use_signal(|| None::<String>);
    let mut confirm_clear = use_signal(|| false);
    let mut notice = use_signal(|| None::<String>);

    let store = ctx.session_store();
    let mut resource = use_resource({
        let store = store.clone();
        move || {
            let store = store.clone();
            let query = query();
            async move {
                let sessions = store.list_all().await;
                let total = sessions.len();
                let matched = filter_sessions(sessions, &query);
                Ok::<_, ViewError>(AdminData {
                    total,
                    rows: map_admin_rows(&matched, text),
                })
            }
        }
    });
    let state = view_state_from_resource(resource);

    let export = {
        let store = store.clone();
        let dir = ctx.export_dir();
        move |_: MouseEvent| {
            let store = store.clone();
            let dir = dir.clone();
            spawn(async move {
                let message = match store.export_to_table().await {
                    None => text.export_empty.to_string(),
                    Some(export) => match export.write_to_dir(&dir).await {
                        Ok(path) => format!("{}: {}", text.export_saved, path.display()),
                        Err(err) => {
                            tracing::warn!(error = %err, "export failed");
                            err.to_string()
                        }
                    },
                };
                notice.set(Some(message));
            });
        }
    };

    let clear = move |_: MouseEvent| {
        let store = store.clone();
        confirm_clear.set(false);
        spawn(async move {
            if let Err(err) = store.clear_all(ClearConfirmation::confirmed()).await {
                tracing::warn!(error = %err, "clear failed");
                notice.set(Some(err.to_string()));
            }
            expanded.set(None);
            resource.restart();
        });
    };

    rsx! {
        div { class: "page admin",
            header { class: "admin-header",
                h2 { "{text.admin_title}" }
                button {
                    class: "btn secondary",
                    onclick: move |_| dispatch(machine, AppEvent::CloseAdmin),
                    "{text.admin_close}"
                }
            }

            div { class: "admin-toolbar",
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: "{text.admin_search}",
                    value: "{query}",
                    oninput: move |evt| {
                        let mut query = query;
                        query.set(evt.value());
                    },
                }
                button { class: "btn primary", onclick: export, "⬇ {text.admin_export}" }
                button {
                    class: "btn danger",
                    onclick: move |_| confirm_clear.set(true),
                    "🗑 {text.admin_clear}"
                }
            }

            if let Some(message) = notice() {
                p { class: "notice", "{message}" }
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "…" }
                },
                ViewState::Error(_) => rsx! {
                    p { class: "error", {ViewError::message()} }
                },
                ViewState::Ready(data) => rsx! {
                    p { class: "total", "{text.admin_total}: {data.total}" }
                    if data.rows.is_empty() {
                        p { class: "empty", "{text.admin_empty}" }
                    }
                    ul { class: "sessions",
                        for row in data.rows {
                            SessionRow {
                                key: "{row.id}",
                                open: expanded().as_deref() == Some(row.id.as_str()),
                                answers_label: text.admin_answers,
                                on_toggle: move |id: String| {
                                    let next = if expanded().as_deref() == Some(id.as_str()) { None } else { Some(id) };
                                    expanded.set(next);
                                },
                                row: row.clone(),
                            }
                        }
                    }
                },
            }

            if confirm_clear() {
                div { class: "modal-backdrop",
                    div { class: "modal confirm",
                        p { "{text.confirm_clear}" }
                        div { class: "actions",
                            button {
                                class: "btn secondary",
                                onclick: move |_| confirm_clear.set(false),
                                "{text.cancel}"
                            }
                            button { class: "btn danger", onclick: clear, "{text.confirm}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SessionRow(
    row: AdminRowVm,
    open: bool,
    answers_label: &'static str,
    on_toggle: EventHandler<String>,
) -> Element {
    let id = row.id.clone();

    rsx! {
        li { class: if open { "session open" } else { "session" },
            div { class: "session-summary", onclick: move |_| on_toggle.call(id.clone()),
                span { class: "date", "{row.date}" }
                span { class: "phone", "{row.phone}" }
                span { class: "meta", "{row.age} · {row.gender} · {row.region} · {row.language}" }
                span { class: "flags",
                    span { class: "red", "🚩 {row.red}" }
                    span { class: "green", "✅ {row.green}" }
                }
            }
            if open {
                div { class: "session-detail",
                    h4 { "{answers_label}" }
                    ol { class: "answers",
                        for answer in row.answers.iter() {
                            li { class: if answer.is_red { "answer red" } else { "answer green" },
                                span { class: "question", "{answer.text}" }
                                span { class: "choice", "{answer.label}" }
                            }
                        }
                    }
                    div { class: "markdown", dangerous_inner_html: "{row.analysis_html}" }
                }
            }
        }
    }
}
