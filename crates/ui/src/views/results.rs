use dioxus::prelude::*;
use flags_core::catalog::ui_text;
use flags_core::machine::{AppEvent, AppState};

use crate::views::state::{dispatch, use_machine};
use crate::vm::map_results;

#[component]
pub fn ResultsView() -> Element {
    let machine = use_machine();
    let mut show_share = use_signal(|| false);
    let text = ui_text(machine.read().language());

    let vm = match machine.read().state() {
        AppState::Results {
            answers, analysis, ..
        } => Some(map_results(answers, analysis)),
        _ => None,
    };
    let Some(vm) = vm else {
        return rsx! {};
    };

    rsx! {
        div { class: "page results",
            section { class: "card stats",
                h2 { "{text.your_result}" }
                div { class: "counts",
                    div { class: "count red",
                        span { class: "number", "{vm.red}" }
                        span { class: "caption", "🚩 Red Flags" }
                    }
                    div { class: "divider" }
                    div { class: "count green",
                        span { class: "number", "{vm.green}" }
                        span { class: "caption", "✅ Green Flags" }
                    }
                }
                div { class: "ratio",
                    div { class: "ratio-red", style: "width: {vm.red_width}%" }
                    div { class: "ratio-green", style: "width: {vm.green_width}%" }
                }
            }

            section { class: "card analysis",
                h3 { "🤖 {text.ai_analysis}" }
                div { class: "markdown", dangerous_inner_html: "{vm.analysis_html}" }
            }

            if show_share() {
                p { class: "notice", "{text.share_notice}" }
            }

            div { class: "actions",
                button {
                    class: "btn secondary",
                    onclick: move |_| dispatch(machine, AppEvent::Restart),
                    "↺ {text.restart}"
                }
                button {
                    class: "btn primary",
                    onclick: move |_| show_share.set(true),
                    "⇪ {text.share}"
                }
                button {
                    class: "icon-btn admin-btn",
                    title: "Admin Panel",
                    onclick: move |_| dispatch(machine, AppEvent::OpenAdmin),
                    "🛡"
                }
            }
        }
    }
}
