//! Request error type shared by the profile widgets
//!
//! Every failure a widget can see while talking to the server maps to one of
//! these variants. Callers never branch on the variant to recover; they log it
//! and hand it to the generic error notice.

use std::fmt;

/// Error returned by profile page requests and widget guards
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// Transport failure (request never produced a response)
    Network(String),
    /// Server answered with a non-2xx status
    Status { status: u16, text: String },
    /// Response body did not have the expected shape
    Decode(String),
    /// A request for this widget is already in flight
    Busy,
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Request failed: {}", msg),
            Self::Status { status, text } => write!(f, "Server returned {} {}", status, text),
            Self::Decode(msg) => write!(f, "Failed to parse response: {}", msg),
            Self::Busy => write!(f, "Request already in progress"),
        }
    }
}

impl std::error::Error for WidgetError {}

impl From<gloo_net::Error> for WidgetError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

/// Result type alias for widget requests
pub type WidgetResult<T> = Result<T, WidgetError>;

impl WidgetError {
    /// Whether the server was reached at all
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = WidgetError::Status { status: 403, text: "Forbidden".to_string() };
        assert_eq!(err.to_string(), "Server returned 403 Forbidden");
        assert_eq!(WidgetError::Busy.to_string(), "Request already in progress");
    }

    #[test]
    fn test_connection_error() {
        assert!(WidgetError::Network("offline".to_string()).is_connection_error());
        assert!(!WidgetError::Decode("eof".to_string()).is_connection_error());
    }
}
