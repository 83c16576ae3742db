use dioxus::prelude::*;
use flags_core::catalog::ui_text;
use flags_core::machine::AppEvent;

use crate::context::AppContext;
use crate::views::state::{dispatch, use_machine};

/// Runs the analysis for the pending quiz once, then moves on to the results.
#[component]
pub fn AnalyzingView() -> Element {
    let ctx = use_context::<AppContext>();
    let machine = use_machine();
    let text = ui_text(machine.read().language());

    use_future(move || {
        let completion = ctx.completion();
        async move {
            let pending = machine
                .peek()
                .pending_analysis()
                .map(|(profile, answers)| (profile.clone(), answers.to_vec()));
            let Some((profile, answers)) = pending else {
                return;
            };
            let done = completion.complete(&profile, &answers).await;
            tracing::info!(outcome = ?done.analysis.outcome, saved = done.session.is_some(), "analysis resolved");
            dispatch(machine, AppEvent::AnalysisResolved(done.analysis.text));
        }
    });

    rsx! {
        div { class: "page analyzing",
            div { class: "spinner" }
            h2 { "{text.analyzing}" }
            p { class: "muted", "{text.analyzing_sub}" }
        }
    }
}
