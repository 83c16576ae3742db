use dioxus::prelude::*;
use flags_core::catalog::{questions, ui_text};
use flags_core::flow::FlowStep;
use flags_core::machine::AppEvent;
use flags_core::model::Flag;
use services::QuizLoop;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::state::{dispatch, use_machine};
use crate::vm::map_quiz_card;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let machine = use_machine();
    let language = machine.read().language();
    let text = ui_text(language);

    let quiz = use_hook(|| QuizLoop::new(questions(language), ctx.transition_delay()).ok());
    let mut snapshot = use_signal({
        let quiz = quiz.clone();
        move || quiz.as_ref().map(QuizLoop::snapshot)
    });
    let mut pending = use_signal(|| false);

    let card = snapshot
        .read()
        .as_ref()
        .and_then(|flow| map_quiz_card(flow, text));
    let Some(card) = card else {
        return rsx! {
            div { class: "page quiz",
                p { class: "error", {ViewError::message()} }
            }
        };
    };

    let submit = move |flag: Flag| {
        let Some(quiz) = quiz.clone() else {
            return;
        };
        if pending() {
            return;
        }
        pending.set(true);
        spawn(async move {
            let result = quiz.submit(flag).await;
            snapshot.set(Some(quiz.snapshot()));
            pending.set(false);
            match result {
                Ok(FlowStep::Completed(answers)) => {
                    dispatch(machine, AppEvent::QuizCompleted(answers));
                }
                Ok(FlowStep::Advanced) => {}
                Err(err) => tracing::debug!(error = %err, "choice ignored"),
            }
        });
    };
    let mut choose_red = submit.clone();
    let mut choose_green = submit;

    let busy = pending() || card.locked;
    let card_class = if busy { "quiz-card leaving" } else { "quiz-card" };

    rsx! {
        div { class: "page quiz",
            div { class: "quiz-header",
                span { class: "situation", "{card.situation}" }
                span { class: "percent", "{card.percent}%" }
            }
            div { class: "progress",
                div { class: "progress-fill", style: "width: {card.percent}%" }
            }

            div { class: "{card_class}",
                div { class: "scene scene-{card.scene}", "{card.glyph}" }
                p { class: "context", "{card.context}" }
                h2 { class: "prompt", "{card.text}" }
            }

            div { class: "choices",
                button {
                    class: "flag-btn red",
                    disabled: busy,
                    onclick: move |_| choose_red(Flag::Red),
                    "🚩 "
                    {Flag::Red.label()}
                }
                button {
                    class: "flag-btn green",
                    disabled: busy,
                    onclick: move |_| choose_green(Flag::Green),
                    "✅ "
                    {Flag::Green.label()}
                }
            }
        }
    }
}
