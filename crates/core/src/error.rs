use thiserror::Error;

use crate::flow::FlowError;
use crate::machine::TransitionError;
use crate::model::{ParseIdError, ProfileError};

/// Umbrella error for callers that do not care which domain rule failed.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Flow(#[from] FlowError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Id(#[from] ParseIdError),
}
