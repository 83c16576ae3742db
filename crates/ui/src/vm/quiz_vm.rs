use flags_core::catalog::UiText;
use flags_core::flow::QuizFlow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    pub situation: String,
    pub percent: u32,
    pub glyph: &'static str,
    pub scene: &'static str,
    pub context: &'static str,
    pub text: &'static str,
    pub locked: bool,
}

/// Card for the current question, or `None` once the quiz has finished.
#[must_use]
pub fn map_quiz_card(flow: &QuizFlow, text: &UiText) -> Option<QuizCardVm> {
    if flow.is_finished() {
        return None;
    }
    let question = flow.current_question()?;
    let progress = flow.progress();
    Some(QuizCardVm {
        situation: format!(
            "{} {} {} {}",
            text.situation,
            flow.index() + 1,
            text.of,
            flow.total()
        ),
        percent: progress.percent,
        glyph: question.animation().glyph(),
        scene: question.animation().code(),
        context: question.context(),
        text: question.text(),
        locked: flow.is_locked(),
    })
}
