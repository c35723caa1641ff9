//! Generic error notices
//!
//! Failed requests end up here. The toast provider renders whatever is in
//! [`TOASTS`]; each notice removes itself after the configured timeout.

use dioxus::prelude::*;

use crate::services::error::WidgetError;
use crate::stores::config_store::CONFIG;

/// Message shown for any failed widget request
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Message shown when the server could not be reached
pub const OFFLINE_ERROR_MESSAGE: &str = "Could not reach the server. Check your connection.";

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: String,
    pub message: String,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            message: message.into(),
        }
    }
}

pub static TOASTS: GlobalSignal<Vec<Toast>> = Signal::global(Vec::new);

/// Remove a toast from a list by id
pub fn without_toast(toasts: &[Toast], id: &str) -> Vec<Toast> {
    toasts.iter().filter(|t| t.id != id).cloned().collect()
}

pub fn dismiss(id: &str) {
    let remaining = without_toast(&TOASTS.read(), id);
    *TOASTS.write() = remaining;
}

/// Show an error notice and schedule its removal
pub fn show_error(message: impl Into<String>) {
    let toast = Toast::new(message);
    let id = toast.id.clone();
    TOASTS.write().push(toast);

    let timeout = CONFIG.read().toast_timeout_ms;
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(timeout).await;
        dismiss(&id);
    });
}

pub fn error_message(err: &WidgetError) -> &'static str {
    if err.is_connection_error() {
        OFFLINE_ERROR_MESSAGE
    } else {
        GENERIC_ERROR_MESSAGE
    }
}

/// Generic handler for failed widget requests
pub fn report_request_error(err: &WidgetError) {
    log::error!("Widget request failed: {}", err);
    show_error(error_message(err));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_toast_removes_only_match() {
        let a = Toast::new("first");
        let b = Toast::new("second");
        let list = vec![a.clone(), b.clone()];

        let remaining = without_toast(&list, &a.id);
        assert_eq!(remaining, vec![b]);
        assert_eq!(without_toast(&remaining, "missing").len(), 1);
    }

    #[test]
    fn test_error_message_by_kind() {
        assert_eq!(error_message(&WidgetError::Network("offline".to_string())), OFFLINE_ERROR_MESSAGE);
        assert_eq!(error_message(&WidgetError::Decode("eof".to_string())), GENERIC_ERROR_MESSAGE);
    }
}
