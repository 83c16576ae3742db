use dioxus::prelude::*;
use flags_core::machine::{AppEvent, AppMachine};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message() -> &'static str {
        "Something went wrong. Please try again."
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

/// The application state machine shared by every view.
#[must_use]
pub fn use_machine() -> Signal<AppMachine> {
    use_context::<Signal<AppMachine>>()
}

/// Feed `event` to the machine. Events that do not apply to the current state are dropped.
pub fn dispatch(mut machine: Signal<AppMachine>, event: AppEvent) {
    let kind = event.kind();
    let mut guard = machine.write();
    match guard.handle(event) {
        Ok(state) => tracing::debug!(event = ?kind, state = %state.kind(), "state changed"),
        Err(err) => tracing::warn!(error = %err, "ignored event"),
    }
}
