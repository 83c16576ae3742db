use flags_core::model::{Answer, FlagTally};

use super::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub red: u32,
    pub green: u32,
    /// Share of the ratio bar, in percent.
    pub red_width: u32,
    pub green_width: u32,
    pub analysis_html: String,
}

#[must_use]
pub fn map_results(answers: &[Answer], analysis: &str) -> ResultsVm {
    let tally = FlagTally::from_answers(answers);
    let red_width = tally.red_percent();
    let green_width = if tally.total() == 0 { 0 } else { 100 - red_width };
    ResultsVm {
        red: tally.red,
        green: tally.green,
        red_width,
        green_width,
        analysis_html: markdown_to_html(analysis),
    }
}
