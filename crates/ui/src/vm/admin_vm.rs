use flags_core::catalog::UiText;
use flags_core::model::{Flag, GameSession};
use services::export::format_timestamp;

use super::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminAnswerVm {
    pub text: String,
    pub label: &'static str,
    pub is_red: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminRowVm {
    pub id: String,
    pub date: String,
    pub phone: String,
    pub age: String,
    pub gender: &'static str,
    pub region: String,
    pub language: &'static str,
    pub red: u32,
    pub green: u32,
    pub answers: Vec<AdminAnswerVm>,
    pub analysis_html: String,
}

#[must_use]
pub fn map_admin_rows(sessions: &[GameSession], text: &UiText) -> Vec<AdminRowVm> {
    sessions.iter().map(|s| map_admin_row(s, text)).collect()
}

fn map_admin_row(session: &GameSession, text: &UiText) -> AdminRowVm {
    let profile = session.profile();
    AdminRowVm {
        id: session.id().to_string(),
        date: format_timestamp(session.timestamp()),
        phone: profile.phone().to_string(),
        age: format!("{} {}", profile.age(), text.admin_years),
        gender: text.gender(profile.gender()),
        region: profile.region().to_string(),
        language: profile.language().switcher_label(),
        red: session.red_count(),
        green: session.green_count(),
        answers: session
            .answers()
            .iter()
            .map(|a| AdminAnswerVm {
                text: a.question_text.clone(),
                label: a.choice.label(),
                is_red: a.choice == Flag::Red,
            })
            .collect(),
        analysis_html: markdown_to_html(session.analysis()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flags_core::catalog::ui_text;
    use flags_core::model::{Answer, Gender, Language, QuestionId, SessionId, UserProfile};
    use flags_core::time::fixed_now;

    #[test]
    fn row_formats_profile_and_answers() {
        let profile =
            UserProfile::from_persisted("+77011234567", 31, Gender::Other, "Атырау", Language::Kk)
                .unwrap();
        let session = GameSession::new(
            "abc".parse::<SessionId>().unwrap(),
            fixed_now(),
            profile,
            vec![
                Answer::new(QuestionId::new(1), "Бірінші", Flag::Red),
                Answer::new(QuestionId::new(2), "Екінші", Flag::Green),
            ],
            "# Талдау",
        );

        let rows = map_admin_rows(&[session], ui_text(Language::Ru));
        let row = &rows[0];
        assert_eq!(row.id, "abc");
        assert_eq!(row.date, "14.11.2023, 22:13:20");
        assert_eq!(row.age, "31 лет");
        assert_eq!(row.gender, "Другой");
        assert_eq!(row.language, "KZ");
        assert_eq!((row.red, row.green), (1, 1));
        assert_eq!(row.answers[0].label, "RED FLAG");
        assert!(row.answers[0].is_red);
        assert!(!row.answers[1].is_red);
        assert!(row.analysis_html.contains("<h1>Талдау</h1>"));
    }
}
