use dioxus::prelude::*;
use dioxus::core::Task;

use crate::components::{ActivityFeed, FollowStats};
use crate::services::profile_api;
use crate::stores::activity_feed::{ActivityFeedState, ProfileTab};
use crate::stores::config_store::CONFIG;
use crate::stores::follow_toggle::FollowerCount;
use crate::stores::pagination::PaginatorState;

/// Tab strip and panels of the profile page.
///
/// Panels stay mounted while hidden so an in-flight page request survives a
/// tab switch. Showing the activities tab for the first time loads page 1.
#[component]
pub fn ProfileTabs(
    username: String,
    owner_id: u64,
    followers: Signal<FollowerCount>,
    total_following: u64,
    on_rendered: EventHandler<String>,
) -> Element {
    let mut active_tab = use_signal(|| ProfileTab::About);
    let mut feed = use_signal(|| ActivityFeedState::new(owner_id));
    let mut paginator = use_signal(|| None::<PaginatorState>);
    let mut first_page_task = use_signal(|| None::<Task>);

    let show_tab = use_callback(move |tab: ProfileTab| {
        active_tab.set(tab);

        let request = feed.write().on_tab_shown(tab);
        let Some(request) = request else {
            return;
        };

        let endpoint = CONFIG.read().activities_endpoint.clone();
        log::info!("Loading activities for owner {}", request.owner_id);

        let task = spawn(async move {
            let url = profile_api::activities_url(&endpoint, request.owner_id);
            match profile_api::fetch_activities_page(&url).await {
                Ok(html) => {
                    let next = feed.write().first_page_loaded(html, &endpoint);
                    paginator.set(Some(next));
                }
                Err(e) => {
                    // Unloaded feeds are fetched again on the next activation
                    log::warn!("Failed to load activities: {}", e);
                    feed.write().first_page_failed();
                }
            }
            first_page_task.set(None);
        });
        first_page_task.set(Some(task));
    });

    use_drop(move || {
        if let Some(task) = first_page_task.peek().as_ref() {
            task.cancel();
        }
    });

    let active = active_tab();

    rsx! {
        div {
            class: "border-b border-border",
            div {
                class: "flex overflow-x-auto scrollbar-hide",
                role: "tablist",
                for tab in [ProfileTab::About, ProfileTab::Activities] {
                    ProfileTabButton {
                        key: "{tab.label()}",
                        label: tab.label(),
                        active: active == tab,
                        onclick: move |_| show_tab.call(tab),
                    }
                }
            }
        }

        div {
            id: "profileabout",
            class: if active == ProfileTab::About { "p-4" } else { "hidden" },
            FollowStats {
                username: username.clone(),
                followers,
                total_following,
            }
        }

        div {
            id: "profileactivities",
            class: if active == ProfileTab::Activities { "" } else { "hidden" },
            ActivityFeed {
                feed,
                paginator,
                on_rendered,
            }
        }
    }
}

#[component]
fn ProfileTabButton(label: &'static str, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "flex-shrink-0 px-4 py-4 font-semibold hover:bg-accent transition relative",
            role: "tab",
            aria_selected: if active { "true" } else { "false" },
            onclick: move |e| onclick.call(e),

            span {
                class: if active { "" } else { "text-muted-foreground" },
                "{label}"
            }

            if active {
                div {
                    class: "absolute bottom-0 left-0 right-0 h-1 bg-blue-500 rounded-t"
                }
            }
        }
    }
}
