use dioxus::prelude::*;

use crate::components::{enhance_activities, FollowButton, ProfileTabs};
use crate::stores::follow_toggle::FollowerCount;
use crate::stores::profile_seed::ProfileSeed;
use crate::utils::markdown::render_description;

/// Profile page: header with follow button and description, then the tabs
#[component]
pub fn Profile(seed: ProfileSeed) -> Element {
    // Shared by the follow button (writes) and the followers link (reads)
    let followers = use_signal(|| FollowerCount::new(seed.total_followers));

    let description_html = use_hook(|| seed.description.as_deref().map(render_description));

    rsx! {
        div {
            class: "max-w-2xl mx-auto",

            div {
                class: "topprofile px-4 pt-6 pb-4 border-b border-border",

                div {
                    class: "flex items-start justify-between gap-4",
                    h1 {
                        id: "username",
                        class: "text-2xl font-bold",
                        "data-user-id": "{seed.user_id}",
                        "{seed.username}"
                    }

                    if let Some(follow) = seed.follow.clone() {
                        FollowButton {
                            seed: follow,
                            username: seed.username.clone(),
                            csrf_token: seed.csrf_token.clone(),
                            followers,
                        }
                    }
                }

                if let Some(html) = description_html {
                    div {
                        class: "description mt-3 prose prose-sm",
                        dangerous_inner_html: "{html}",
                    }
                }
            }

            ProfileTabs {
                username: seed.username.clone(),
                owner_id: seed.user_id,
                followers,
                total_following: seed.total_following,
                on_rendered: move |container_id: String| enhance_activities(&container_id),
            }
        }
    }
}
