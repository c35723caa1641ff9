//! Initial profile values rendered by the server
//!
//! The page embeds a JSON object in
//! `<script id="profile-seed" type="application/json">`. Everything the widgets
//! start from (username, owner id, follow button labels, counts) comes from it.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::stores::follow_toggle::{FollowDirection, FollowToggleState};

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub const SEED_ELEMENT_ID: &str = "profile-seed";

/// Follow form as rendered for the current viewer
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FollowSeed {
    /// Form action the toggle posts to
    pub action: String,
    /// Current name of the hidden field
    pub direction: FollowDirection,
    /// Visible button label
    pub label: String,
    /// Label for the opposite action
    pub reverse_label: String,
}

impl FollowSeed {
    pub fn initial_state(&self) -> FollowToggleState {
        FollowToggleState::new(self.direction, self.label.clone(), self.reverse_label.clone())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProfileSeed {
    pub username: String,
    pub user_id: u64,
    /// Absent on the viewer's own profile and for anonymous visitors
    #[serde(default)]
    pub follow: Option<FollowSeed>,
    #[serde(default)]
    pub total_followers: u64,
    #[serde(default)]
    pub total_following: u64,
    /// Markdown profile description
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub csrf_token: Option<String>,
}

pub fn parse_seed(json: &str) -> Result<ProfileSeed> {
    serde_json::from_str(json).context("Invalid profile seed")
}

/// Read the seed embedded in the current document
pub fn read_seed() -> Result<ProfileSeed> {
    #[cfg(target_arch = "wasm32")]
    {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .context("No document available")?;
        let element = document
            .get_element_by_id(SEED_ELEMENT_ID)
            .with_context(|| format!("Missing #{} element", SEED_ELEMENT_ID))?;
        let json = element.text_content().unwrap_or_default();
        parse_seed(&json)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        anyhow::bail!("Profile seed is only available in the browser")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_seed() {
        let seed = parse_seed(
            r#"{
                "username": "alice",
                "user_id": 42,
                "follow": {
                    "action": "/user/alice/",
                    "direction": "follow",
                    "label": "Follow",
                    "reverse_label": "Unfollow"
                },
                "total_followers": 3,
                "total_following": 0,
                "description": "Hi **there**",
                "csrf_token": "abc"
            }"#,
        )
        .unwrap();

        assert_eq!(seed.user_id, 42);
        let follow = seed.follow.unwrap();
        let state = follow.initial_state();
        assert_eq!(state.direction, FollowDirection::Follow);
        assert_eq!(state.label, "Follow");
        assert_eq!(state.reverse_label, "Unfollow");
    }

    #[test]
    fn test_parse_minimal_seed() {
        let seed = parse_seed(r#"{"username": "bob", "user_id": 7}"#).unwrap();
        assert!(seed.follow.is_none());
        assert_eq!(seed.total_followers, 0);
        assert!(seed.description.is_none());
    }

    #[test]
    fn test_rejects_bad_direction() {
        let err = parse_seed(
            r#"{"username": "bob", "user_id": 7, "follow": {"action": "/", "direction": "block", "label": "", "reverse_label": ""}}"#,
        );
        assert!(err.is_err());
    }
}
