//! use_follow_toggle hook - follow/unfollow submission for one widget
//!
//! Owns the toggle state, holds the request lock while a submission is in
//! flight and writes the follower count the server sends back.

use dioxus::prelude::*;
use dioxus::core::Task;

use crate::services::profile_api::{self, FollowForm};
use crate::stores::config_store::CONFIG;
use crate::stores::follow_toggle::{FollowToggleState, FollowerCount};
use crate::stores::profile_seed::FollowSeed;
use crate::stores::toasts;

/// Return type for the use_follow_toggle hook
#[derive(Clone, Copy)]
pub struct UseFollowToggle {
    /// Direction, labels and loader visibility
    pub state: Signal<FollowToggleState>,
    /// Submit the form; ignored while a request is in flight
    pub submit: EventHandler<()>,
}

/// Hook driving a follow toggle
///
/// # Arguments
/// * `seed` - Follow form as rendered by the server
/// * `username` - Profile owner, sent as the form field value
/// * `csrf_token` - Token the form endpoint expects
/// * `followers` - Shared follower count, updated from each response
pub fn use_follow_toggle(
    seed: FollowSeed,
    username: String,
    csrf_token: Option<String>,
    mut followers: Signal<FollowerCount>,
) -> UseFollowToggle {
    let initial = seed.initial_state();
    let mut state = use_signal(move || initial);
    let mut pending = use_signal(|| None::<Task>);

    let submit = use_callback(move |_: ()| {
        let begun = state.write().begin();
        let direction = match begun {
            Ok(direction) => direction,
            Err(e) => {
                log::debug!("Follow toggle ignored: {}", e);
                return;
            }
        };

        let form = FollowForm {
            action: seed.action.clone(),
            direction,
            username: username.clone(),
            csrf_token: csrf_token.clone(),
        };

        let task = spawn(async move {
            match profile_api::submit_follow(&form).await {
                Ok(response) => {
                    log::info!("Follow toggle for {} returned {:?}", form.username, response.result());
                    let count = state.write().apply_response(&response);
                    if let Some(count) = count {
                        followers.set(count);
                    }
                }
                Err(e) => {
                    let restore = CONFIG.read().restore_on_failure;
                    state.write().fail(restore);
                    toasts::report_request_error(&e);
                }
            }
            pending.set(None);
        });

        pending.set(Some(task));
    });

    // Abandon the request if the widget goes away
    use_drop(move || {
        if let Some(task) = pending.peek().as_ref() {
            task.cancel();
        }
    });

    UseFollowToggle { state, submit }
}
