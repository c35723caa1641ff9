//! Follow/unfollow toggle state
//!
//! The follow form sends a single field whose *name* is the action to apply
//! (`follow` or `unfollow`). Its submit button shows the label for that action
//! and caches the label of the opposite action. A successful toggle swaps the
//! direction and both labels in one step.

use serde::{Deserialize, Serialize};

use crate::services::error::WidgetError;

/// Action the follow form submits next
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowDirection {
    Follow,
    Unfollow,
}

impl FollowDirection {
    /// Name of the form field carrying the username
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowDirection::Follow => "follow",
            FollowDirection::Unfollow => "unfollow",
        }
    }
}

/// Result discriminator of a toggle response
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FollowResult {
    Followed,
    Unfollowed,
    /// Anything else the server sends; never changes the toggle
    Other(String),
}

impl FollowResult {
    pub fn parse(value: &str) -> Self {
        match value {
            "followed" => FollowResult::Followed,
            "unfollowed" => FollowResult::Unfollowed,
            other => FollowResult::Other(other.to_string()),
        }
    }

    /// Classify any JSON value; only the two known strings toggle
    pub fn from_value(value: Option<&serde_json::Value>) -> Self {
        match value {
            Some(serde_json::Value::String(s)) => Self::parse(s),
            Some(other) => FollowResult::Other(other.to_string()),
            None => FollowResult::Other(String::new()),
        }
    }

    /// Direction the form must carry after this result, if it toggles at all
    pub fn next_direction(&self) -> Option<FollowDirection> {
        match self {
            FollowResult::Followed => Some(FollowDirection::Unfollow),
            FollowResult::Unfollowed => Some(FollowDirection::Follow),
            FollowResult::Other(_) => None,
        }
    }
}

/// JSON body returned by the follow endpoint
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FollowResponse {
    /// Kept untyped: a null or non-string result is still a valid no-op response
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    /// Present whenever the server recomputed the count, including when it is 0
    #[serde(default)]
    pub total_followers: Option<u64>,
}

impl FollowResponse {
    pub fn result(&self) -> FollowResult {
        FollowResult::from_value(self.result.as_ref())
    }
}

/// Number of followers shown next to the profile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FollowerCount {
    pub total: u64,
}

impl FollowerCount {
    pub fn new(total: u64) -> Self {
        Self { total }
    }

    /// The followers link is hidden when nobody follows the user
    pub fn is_visible(&self) -> bool {
        self.total > 0
    }

    pub fn label(&self) -> String {
        self.total.to_string()
    }
}

/// Lifecycle of the toggle widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TogglePhase {
    /// Button visible, accepting submissions
    Idle,
    /// Request in flight, loader visible
    Submitting,
    /// Request failed and the loader was left in place
    Stalled,
}

/// Explicit state of one follow toggle widget
#[derive(Clone, Debug, PartialEq)]
pub struct FollowToggleState {
    pub direction: FollowDirection,
    pub label: String,
    pub reverse_label: String,
    phase: TogglePhase,
}

impl FollowToggleState {
    pub fn new(direction: FollowDirection, label: impl Into<String>, reverse_label: impl Into<String>) -> Self {
        Self {
            direction,
            label: label.into(),
            reverse_label: reverse_label.into(),
            phase: TogglePhase::Idle,
        }
    }

    pub fn phase(&self) -> TogglePhase {
        self.phase
    }

    pub fn loader_visible(&self) -> bool {
        self.phase != TogglePhase::Idle
    }

    pub fn button_visible(&self) -> bool {
        self.phase == TogglePhase::Idle
    }

    /// Take the request lock and return the direction to submit
    pub fn begin(&mut self) -> Result<FollowDirection, WidgetError> {
        if self.phase != TogglePhase::Idle {
            return Err(WidgetError::Busy);
        }
        self.phase = TogglePhase::Submitting;
        Ok(self.direction)
    }

    /// Apply a successful response.
    ///
    /// Returns the follower count carried by the response, if any.
    pub fn apply_response(&mut self, response: &FollowResponse) -> Option<FollowerCount> {
        if let Some(next) = response.result().next_direction() {
            self.direction = next;
            std::mem::swap(&mut self.label, &mut self.reverse_label);
        }
        self.phase = TogglePhase::Idle;
        response.total_followers.map(FollowerCount::new)
    }

    /// Release the request after a failed submission.
    ///
    /// With `restore` unset the loader stays up and the button stays hidden.
    pub fn fail(&mut self, restore: bool) {
        self.phase = if restore { TogglePhase::Idle } else { TogglePhase::Stalled };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> FollowToggleState {
        FollowToggleState::new(FollowDirection::Follow, "Follow", "Unfollow")
    }

    fn response(result: &str, total: Option<u64>) -> FollowResponse {
        FollowResponse {
            result: Some(serde_json::Value::String(result.to_string())),
            total_followers: total,
        }
    }

    #[test]
    fn test_followed_swaps_direction_and_labels() {
        let mut state = initial();
        state.begin().unwrap();
        state.apply_response(&response("followed", None));

        assert_eq!(state.direction, FollowDirection::Unfollow);
        assert_eq!(state.label, "Unfollow");
        assert_eq!(state.reverse_label, "Follow");
    }

    #[test]
    fn test_alternating_results_return_to_initial() {
        let mut state = initial();
        let results = ["followed", "unfollowed", "followed", "unfollowed"];

        for (i, result) in results.iter().enumerate() {
            state.begin().unwrap();
            state.apply_response(&response(result, None));
            if i % 2 == 0 {
                assert_eq!(state.direction, FollowDirection::Unfollow);
                assert_eq!(state.label, "Unfollow");
            } else {
                assert_eq!(state, initial());
            }
        }
    }

    #[test]
    fn test_unknown_result_is_noop_but_restores_button() {
        let mut state = initial();
        state.begin().unwrap();
        assert!(state.loader_visible());

        state.apply_response(&response("not_logged_in", None));

        assert_eq!(state.direction, FollowDirection::Follow);
        assert_eq!(state.label, "Follow");
        assert_eq!(state.reverse_label, "Unfollow");
        assert!(state.button_visible());
        assert!(!state.loader_visible());
    }

    #[test]
    fn test_single_request_in_flight() {
        let mut state = initial();
        assert_eq!(state.begin(), Ok(FollowDirection::Follow));
        assert_eq!(state.begin(), Err(WidgetError::Busy));

        state.apply_response(&response("followed", None));
        assert_eq!(state.begin(), Ok(FollowDirection::Unfollow));
    }

    #[test]
    fn test_loader_and_button_mutually_exclusive() {
        let mut state = initial();
        assert!(state.button_visible() ^ state.loader_visible());
        state.begin().unwrap();
        assert!(state.button_visible() ^ state.loader_visible());
        state.apply_response(&response("followed", Some(3)));
        assert!(state.button_visible() ^ state.loader_visible());
        state.begin().unwrap();
        state.fail(false);
        assert!(state.button_visible() ^ state.loader_visible());
    }

    #[test]
    fn test_failure_restore_policy() {
        let mut state = initial();
        state.begin().unwrap();
        state.fail(true);
        assert_eq!(state.phase(), TogglePhase::Idle);

        state.begin().unwrap();
        state.fail(false);
        assert_eq!(state.phase(), TogglePhase::Stalled);
        assert!(state.loader_visible());
        assert_eq!(state.begin(), Err(WidgetError::Busy));
    }

    #[test]
    fn test_follower_count_from_response() {
        let mut state = initial();
        state.begin().unwrap();
        assert_eq!(state.apply_response(&response("followed", Some(0))), Some(FollowerCount::new(0)));

        state.begin().unwrap();
        assert_eq!(state.apply_response(&response("unfollowed", None)), None);
    }

    #[test]
    fn test_follower_count_visibility() {
        assert!(!FollowerCount::new(0).is_visible());
        assert!(FollowerCount::new(1).is_visible());
        assert_eq!(FollowerCount::new(5).label(), "5");
    }

    #[test]
    fn test_response_decoding() {
        let parsed: FollowResponse =
            serde_json::from_str(r#"{"result": "followed", "total_followers": 0}"#).unwrap();
        assert_eq!(parsed.result(), FollowResult::Followed);
        assert_eq!(parsed.total_followers, Some(0));

        let parsed: FollowResponse = serde_json::from_str(r#"{"result": "error"}"#).unwrap();
        assert_eq!(parsed.result(), FollowResult::Other("error".to_string()));
        assert_eq!(parsed.total_followers, None);
    }

    #[test]
    fn test_non_string_result_is_noop_and_keeps_count() {
        let parsed: FollowResponse =
            serde_json::from_str(r#"{"result": null, "total_followers": 3}"#).unwrap();
        assert!(matches!(parsed.result(), FollowResult::Other(_)));

        let mut state = initial();
        state.begin().unwrap();
        assert_eq!(state.apply_response(&parsed), Some(FollowerCount::new(3)));
        assert_eq!(state.direction, FollowDirection::Follow);
        assert_eq!(state.label, "Follow");
        assert!(state.button_visible());

        let parsed: FollowResponse = serde_json::from_str(r#"{"result": 1}"#).unwrap();
        assert_eq!(parsed.result(), FollowResult::Other("1".to_string()));
        state.begin().unwrap();
        assert_eq!(state.apply_response(&parsed), None);
        assert_eq!(state, initial());
    }

    #[test]
    fn test_missing_result_is_noop() {
        let parsed: FollowResponse = serde_json::from_str(r#"{"total_followers": 2}"#).unwrap();
        assert!(parsed.result().next_direction().is_none());
        assert_eq!(parsed.total_followers, Some(2));
    }
}
