mod admin;
mod analyzing;
mod guide;
mod onboarding;
mod quiz;
mod results;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use admin::AdminView;
pub use analyzing::AnalyzingView;
pub use guide::GuideModal;
pub use onboarding::OnboardingView;
pub use quiz::QuizView;
pub use results::ResultsView;
pub use state::{ViewError, ViewState, dispatch, use_machine, view_state_from_resource};
