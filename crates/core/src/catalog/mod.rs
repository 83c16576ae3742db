//! Static, per-language tables consumed by the quiz and the presentation layer.

mod guide;
mod questions;
mod regions;
mod text;

pub use guide::{Guide, GuideSection, guide};
pub use questions::questions;
pub use regions::{default_region, regions};
pub use text::{UiText, ui_text};
