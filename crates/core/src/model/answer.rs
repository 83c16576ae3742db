use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::QuestionId;
use crate::model::question::Question;

/// The binary tag a respondent assigns to a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Flag {
    Red,
    Green,
}

impl Flag {
    /// Wire code (`RED` / `GREEN`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Flag::Red => "RED",
            Flag::Green => "GREEN",
        }
    }

    /// Button and badge label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Flag::Red => "RED FLAG",
            Flag::Green => "GREEN FLAG",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One recorded choice. `question_text` is a snapshot taken when answering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub question_id: QuestionId,
    pub question_text: String,
    pub choice: Flag,
}

impl Answer {
    #[must_use]
    pub fn new(question_id: QuestionId, question_text: impl Into<String>, choice: Flag) -> Self {
        Self {
            question_id,
            question_text: question_text.into(),
            choice,
        }
    }

    /// Snapshot `question` and record `choice` against it.
    #[must_use]
    pub fn for_question(question: &Question, choice: Flag) -> Self {
        Self::new(question.id(), question.text(), choice)
    }
}

/// Red/green counts derived from an answer sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagTally {
    pub red: u32,
    pub green: u32,
}

impl FlagTally {
    #[must_use]
    pub fn from_answers(answers: &[Answer]) -> Self {
        answers.iter().fold(Self::default(), |mut tally, answer| {
            match answer.choice {
                Flag::Red => tally.red = tally.red.saturating_add(1),
                Flag::Green => tally.green = tally.green.saturating_add(1),
            }
            tally
        })
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.red.saturating_add(self.green)
    }

    /// Share of red answers in percent, 0 when nothing was answered.
    #[must_use]
    pub fn red_percent(&self) -> u32 {
        match self.total() {
            0 => 0,
            total => self.red * 100 / total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(id: u32, choice: Flag) -> Answer {
        Answer::new(QuestionId::new(id), format!("Q{id}"), choice)
    }

    #[test]
    fn tally_counts_each_flag() {
        let answers = vec![
            answer(1, Flag::Red),
            answer(2, Flag::Green),
            answer(3, Flag::Red),
        ];
        let tally = FlagTally::from_answers(&answers);
        assert_eq!(tally, FlagTally { red: 2, green: 1 });
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.red_percent(), 66);
    }

    #[test]
    fn empty_tally_has_zero_percent() {
        assert_eq!(FlagTally::from_answers(&[]).red_percent(), 0);
    }

    #[test]
    fn flag_serializes_as_upper_case_code() {
        assert_eq!(serde_json::to_string(&Flag::Red).unwrap(), "\"RED\"");
        let parsed: Flag = serde_json::from_str("\"GREEN\"").unwrap();
        assert_eq!(parsed, Flag::Green);
    }
}
