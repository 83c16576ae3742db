use flags_core::machine::AppEvent;

use super::test_harness::{
    ViewKind, alternating_answers, machine_after, sample_profile, setup_view_harness,
};

#[tokio::test(flavor = "current_thread")]
async fn onboarding_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Onboarding, machine_after(Vec::new()));

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Red Flag / Green Flag"), "missing title in {html}");
    assert!(html.contains("RU"), "missing RU switch in {html}");
    assert!(html.contains("KZ"), "missing KZ switch in {html}");
    assert!(html.contains("Алматы"), "missing default region in {html}");
    assert!(html.contains("disabled"), "start should be disabled in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_situation() {
    let machine = machine_after(vec![AppEvent::ProfileSubmitted(sample_profile())]);
    let mut harness = setup_view_harness(ViewKind::Quiz, machine);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Ситуация 1 из 10"), "missing progress label in {html}");
    assert!(html.contains("RED FLAG"), "missing red choice in {html}");
    assert!(html.contains("GREEN FLAG"), "missing green choice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_counts_and_analysis() {
    let machine = machine_after(vec![
        AppEvent::ProfileSubmitted(sample_profile()),
        AppEvent::QuizCompleted(alternating_answers()),
        AppEvent::AnalysisResolved("**Итог** спокойный".to_string()),
    ]);
    let mut harness = setup_view_harness(ViewKind::Results, machine);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Твой результат"), "missing heading in {html}");
    assert!(html.contains("width: 50%"), "missing ratio bar in {html}");
    assert!(
        html.contains("<strong>Итог</strong>"),
        "missing rendered analysis in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn admin_view_smoke_renders_stored_sessions() {
    let machine = machine_after(vec![AppEvent::OpenAdmin]);
    let mut harness = setup_view_harness(ViewKind::Admin, machine);
    harness
        .store
        .append(sample_profile(), alternating_answers(), "ok")
        .await
        .expect("append session");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Всего записей: 1"), "missing total in {html}");
    assert!(html.contains("+77011234567"), "missing phone in {html}");
    assert!(html.contains("Almaty"), "missing region in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_view_smoke_renders_empty_message() {
    let machine = machine_after(vec![AppEvent::OpenAdmin]);
    let mut harness = setup_view_harness(ViewKind::Admin, machine);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Всего записей: 0"), "missing total in {html}");
    assert!(
        html.contains("База данных пуста"),
        "missing empty message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn admin_view_smoke_counts_and_lists_every_session() {
    let machine = machine_after(vec![AppEvent::OpenAdmin]);
    let mut harness = setup_view_harness(ViewKind::Admin, machine);
    for _ in 0..2 {
        harness
            .store
            .append(sample_profile(), alternating_answers(), "ok")
            .await
            .expect("append session");
    }

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Всего записей: 2"), "missing total in {html}");
    assert_eq!(html.matches("+77011234567").count(), 2, "{html}");
}
