use dioxus::prelude::*;
use services::LoadFailure;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    Load(LoadFailure),
}

impl ViewError {
    /// Text shown under the failure label: the literal load failure reason.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Unknown => "Something went wrong. Please try again.",
            Self::Load(failure) => failure.reason(),
        }
    }
}

impl From<LoadFailure> for ViewError {
    fn from(failure: LoadFailure) -> Self {
        Self::Load(failure)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

impl<T> ViewState<T> {
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Error(_))
    }
}

#[must_use]
pub fn view_state_from_resource<T, E>(resource: &Resource<Result<T, E>>) -> ViewState<T>
where
    T: Clone + 'static,
    E: Clone + Into<ViewError> + 'static,
{
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone().into()),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
