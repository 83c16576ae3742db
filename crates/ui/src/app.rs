use dioxus::prelude::*;
use flags_core::machine::{AppMachine, StateKind};

use crate::context::AppContext;
use crate::views::{
    AdminView, AnalyzingView, GuideModal, OnboardingView, QuizView, ResultsView,
};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let machine = use_context_provider(|| Signal::new(AppMachine::new(ctx.initial_language())));
    let mut show_guide = use_signal(|| false);

    let kind = machine.read().kind();
    let language = machine.read().language();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Red Flag / Green Flag" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                match kind {
                    StateKind::Onboarding => rsx! {
                        OnboardingView { on_guide: move |()| show_guide.set(true) }
                    },
                    StateKind::Quiz => rsx! { QuizView {} },
                    StateKind::Analyzing => rsx! { AnalyzingView {} },
                    StateKind::Results => rsx! { ResultsView {} },
                    StateKind::Admin => rsx! { AdminView {} },
                }
            }

            if show_guide() {
                GuideModal { language, on_close: move |()| show_guide.set(false) }
            }
        }
    }
}
