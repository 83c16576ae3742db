use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use flags_core::machine::{AppEvent, AppMachine};
use flags_core::model::{Answer, Flag, Gender, Language, ProfileDraft, UserProfile};
use flags_core::catalog::questions;
use flags_core::time::fixed_clock;
use services::{
    AppServices, CompletionService, GenerationError, ServicesConfig, SessionStore, TextGenerator,
};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{AdminView, OnboardingView, QuizView, ResultsView};

struct CannedGenerator;

#[async_trait]
impl TextGenerator for CannedGenerator {
    fn model(&self) -> &str {
        "canned"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Ok("**Stub** analysis".to_string())
    }
}

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn initial_language(&self) -> Language {
        Language::Ru
    }

    fn transition_delay(&self) -> Duration {
        self.services.transition_delay()
    }

    fn export_dir(&self) -> PathBuf {
        std::env::temp_dir()
    }

    fn session_store(&self) -> Arc<SessionStore> {
        self.services.session_store()
    }

    fn completion(&self) -> Arc<CompletionService> {
        self.services.completion()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Onboarding,
    Quiz,
    Results,
    Admin,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    machine: AppMachine,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(props.machine.clone()));
    match props.view {
        ViewKind::Onboarding => rsx! { OnboardingView { on_guide: |()| {} } },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Results => rsx! { ResultsView {} },
        ViewKind::Admin => rsx! { AdminView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: Arc<SessionStore>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn sample_profile() -> UserProfile {
    let mut draft = ProfileDraft::new(Language::Ru);
    draft.phone = "+77011234567".into();
    draft.age = Some(25);
    draft.gender = Gender::Female;
    draft.region = "Almaty".into();
    draft.validate().expect("valid profile")
}

pub fn alternating_answers() -> Vec<Answer> {
    questions(Language::Ru)
        .iter()
        .enumerate()
        .map(|(i, q)| Answer::for_question(q, if i % 2 == 0 { Flag::Red } else { Flag::Green }))
        .collect()
}

/// Machine advanced through `events`, starting from onboarding in Russian.
pub fn machine_after(events: Vec<AppEvent>) -> AppMachine {
    let mut machine = AppMachine::new(Language::Ru);
    for event in events {
        machine.handle(event).expect("valid transition");
    }
    machine
}

pub fn setup_view_harness(view: ViewKind, machine: AppMachine) -> ViewHarness {
    let services = AppServices::from_parts(
        Storage::in_memory(),
        Arc::new(CannedGenerator),
        fixed_clock(),
        ServicesConfig {
            transition_delay: Duration::ZERO,
            analysis_timeout: None,
        },
    );
    let store = services.session_store();
    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(ViewRoot, ViewHarnessProps { app, view, machine });
    ViewHarness { dom, store }
}
