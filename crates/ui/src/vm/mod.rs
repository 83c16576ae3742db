mod admin_vm;
mod markdown_vm;
mod onboarding_vm;
mod quiz_vm;
mod results_vm;

pub use admin_vm::{AdminAnswerVm, AdminRowVm, map_admin_rows};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use onboarding_vm::OnboardingVm;
pub use quiz_vm::{QuizCardVm, map_quiz_card};
pub use results_vm::{ResultsVm, map_results};
