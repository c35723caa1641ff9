/// State of a one-shot fetch, such as the user list behind a modal
///
/// One enum instead of separate loading/data/error signals, so a modal can
/// never show a spinner and a result at the same time.
///
/// # Examples
///
/// ```
/// let mut list = use_signal(|| DataState::Loading);
///
/// // On success:
/// list.set(DataState::Loaded(html));
///
/// // On error:
/// list.set(DataState::Error("Failed to load".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DataState<T> {
    /// Request in flight
    Loading,

    Loaded(T),

    /// Request failed with a displayable message
    Error(String),
}

impl<T> DataState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Helper to convert a request Result into DataState
impl<T, E: std::fmt::Display> From<Result<T, E>> for DataState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => DataState::Loaded(data),
            Err(err) => DataState::Error(err.to_string()),
        }
    }
}
