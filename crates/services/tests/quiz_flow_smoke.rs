use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use flags_core::catalog::questions;
use flags_core::flow::FlowStep;
use flags_core::machine::{AppEvent, AppMachine, AppState, StateKind};
use flags_core::model::{Flag, Gender, Language, ProfileDraft};
use flags_core::time::fixed_clock;
use services::{
    AnalysisOutcome, AppServices, ClearConfirmation, GenerationError, QuizLoop, ServicesConfig,
    TextGenerator,
};
use storage::repository::Storage;

struct CannedGenerator(Result<&'static str, ()>);

#[async_trait]
impl TextGenerator for CannedGenerator {
    fn model(&self) -> &str {
        "canned"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        match self.0 {
            Ok(text) => Ok(text.to_string()),
            Err(()) => Err(GenerationError::EmptyResponse),
        }
    }
}

fn services(reply: Result<&'static str, ()>) -> AppServices {
    AppServices::from_parts(
        Storage::in_memory(),
        Arc::new(CannedGenerator(reply)),
        fixed_clock(),
        ServicesConfig {
            transition_delay: Duration::ZERO,
            analysis_timeout: Some(Duration::from_secs(5)),
        },
    )
}

fn scenario_draft() -> ProfileDraft {
    let mut draft = ProfileDraft::new(Language::Ru);
    draft.phone = "+77011234567".into();
    draft.age = Some(25);
    draft.gender = Gender::Female;
    draft.region = "Almaty".into();
    draft
}

async fn play(services: &AppServices, machine: &mut AppMachine, choose: impl Fn(usize) -> Flag) {
    let profile = scenario_draft().validate().unwrap();
    machine.handle(AppEvent::ProfileSubmitted(profile.clone())).unwrap();

    let quiz = QuizLoop::new(questions(profile.language()), services.transition_delay()).unwrap();
    let mut i = 0;
    let answers = loop {
        match quiz.submit(choose(i)).await.unwrap() {
            FlowStep::Advanced => i += 1,
            FlowStep::Completed(answers) => break answers,
        }
    };
    machine.handle(AppEvent::QuizCompleted(answers)).unwrap();

    let (profile, answers) = machine.pending_analysis().unwrap();
    let completed = services.completion().complete(profile, answers).await;
    machine
        .handle(AppEvent::AnalysisResolved(completed.analysis.text))
        .unwrap();
}

#[tokio::test]
async fn alternating_answers_scenario_is_stored_and_exported() {
    let services = services(Ok("## Портрет\n\nВсё хорошо"));
    let mut machine = AppMachine::new(Language::Ru);

    play(&services, &mut machine, |i| if i % 2 == 0 { Flag::Red } else { Flag::Green }).await;

    let AppState::Results { answers, analysis, .. } = machine.state() else {
        panic!("expected results, got {:?}", machine.kind());
    };
    assert_eq!(answers.len(), 10);
    assert_eq!(analysis, "## Портрет\n\nВсё хорошо");

    let ids: Vec<u32> = answers.iter().map(|a| a.question_id.value()).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());

    let store = services.session_store();
    let sessions = store.list_all().await;
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].red_count(), 5);
    assert_eq!(sessions[0].green_count(), 5);
    assert_eq!(sessions[0].profile().region(), "Almaty");

    let export = store.export_to_table().await.unwrap();
    let text = std::str::from_utf8(export.bytes()).unwrap();
    let row = text.lines().nth(1).unwrap();
    assert!(
        row.contains(",25,female,\"Almaty\",ru,5,5,"),
        "unexpected row: {row}"
    );
}

#[tokio::test]
async fn admin_overlay_returns_to_results_and_restart_clears_flow() {
    let services = services(Err(()));
    let mut machine = AppMachine::new(Language::Ru);

    play(&services, &mut machine, |_| Flag::Green).await;
    let before = machine.state().clone();
    assert_eq!(machine.kind(), StateKind::Results);

    machine.handle(AppEvent::OpenAdmin).unwrap();
    assert_eq!(machine.kind(), StateKind::Admin);
    assert_eq!(services.session_store().list_all().await.len(), 1);
    machine.handle(AppEvent::CloseAdmin).unwrap();
    assert_eq!(machine.state(), &before);

    machine.handle(AppEvent::Restart).unwrap();
    assert_eq!(machine.kind(), StateKind::Onboarding);
    assert!(machine.state().profile().is_none());
}

#[tokio::test]
async fn fallback_analysis_is_still_recorded() {
    let services = services(Err(()));
    let mut machine = AppMachine::new(Language::Ru);
    play(&services, &mut machine, |_| Flag::Red).await;

    let sessions = services.session_store().list_all().await;
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].analysis(), "Не удалось сгенерировать анализ.");
    assert_eq!(sessions[0].red_count(), 10);

    let profile = sessions[0].profile().clone();
    let analysis = services.analyzer().analyze(&profile, sessions[0].answers()).await;
    assert_eq!(analysis.outcome, AnalysisOutcome::EmptyFallback);
}

#[tokio::test]
async fn each_completed_quiz_lands_first_and_clear_empties_store() {
    let services = services(Ok("ok"));
    for _ in 0..3 {
        let mut machine = AppMachine::new(Language::Ru);
        play(&services, &mut machine, |_| Flag::Green).await;
    }

    let store = services.session_store();
    let sessions = store.list_all().await;
    assert_eq!(sessions.len(), 3);
    let newest = services
        .completion()
        .complete(sessions[0].profile(), sessions[0].answers())
        .await
        .session
        .unwrap();
    assert_eq!(store.list_all().await[0], newest);

    store.clear_all(ClearConfirmation::confirmed()).await.unwrap();
    assert!(store.list_all().await.is_empty());
    assert!(store.export_to_table().await.is_none());
}
