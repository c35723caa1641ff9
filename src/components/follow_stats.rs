use dioxus::prelude::*;
use dioxus::core::Task;

use crate::components::UserListModal;
use crate::services::profile_api::{self, UserListKind};
use crate::stores::config_store::CONFIG;
use crate::stores::follow_toggle::FollowerCount;
use crate::utils::DataState;

#[derive(Clone, Debug, PartialEq)]
struct OpenList {
    title: String,
    list: DataState<String>,
}

/// Only the count link hides at zero; the row and its label stay
fn count_link_class(count: FollowerCount) -> &'static str {
    if count.is_visible() {
        "hover:underline"
    } else {
        "hidden"
    }
}

/// Followers/following table. Each count opens the matching user list in a modal.
#[component]
pub fn FollowStats(username: String, followers: Signal<FollowerCount>, total_following: u64) -> Element {
    let mut open_list = use_signal(|| None::<OpenList>);
    let mut list_task = use_signal(|| None::<Task>);

    let username_for_open = username.clone();
    let show_list = use_callback(move |kind: UserListKind| {
        if let Some(task) = list_task.take() {
            task.cancel();
        }

        let username = username_for_open.clone();
        open_list.set(Some(OpenList {
            title: format!("{}: {}", username, kind.label()),
            list: DataState::Loading,
        }));

        let endpoint = CONFIG.read().users_endpoint.clone();
        let task = spawn(async move {
            let result = profile_api::fetch_user_list(&endpoint, kind, &username).await;
            if let Err(e) = &result {
                log::warn!("Failed to load {} of {}: {}", kind.label(), username, e);
            }
            if let Some(open) = open_list.write().as_mut() {
                open.list = result.into();
            }
            list_task.set(None);
        });
        list_task.set(Some(task));
    });

    let close_list = move |_: ()| {
        if let Some(task) = list_task.take() {
            task.cancel();
        }
        open_list.set(None);
    };

    let count = followers();
    let following = FollowerCount::new(total_following);

    rsx! {
        table {
            class: "text-sm",
            tbody {
                tr {
                    th { class: "pr-4 text-left text-muted-foreground font-normal", "{UserListKind::FollowersOf.label()}" }
                    td {
                        a {
                            href: "#followers",
                            class: count_link_class(count),
                            onclick: move |evt| {
                                evt.prevent_default();
                                show_list.call(UserListKind::FollowersOf);
                            },
                            strong { "{count.label()}" }
                        }
                    }
                }
                tr {
                    th { class: "pr-4 text-left text-muted-foreground font-normal", "{UserListKind::FollowedBy.label()}" }
                    td {
                        a {
                            href: "#following",
                            class: count_link_class(following),
                            onclick: move |evt| {
                                evt.prevent_default();
                                show_list.call(UserListKind::FollowedBy);
                            },
                            strong { "{following.label()}" }
                        }
                    }
                }
            }
        }

        if let Some(open) = open_list() {
            UserListModal {
                title: open.title,
                list: open.list,
                on_close: close_list,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_count_hides_only_the_link() {
        assert_eq!(count_link_class(FollowerCount::new(0)), "hidden");
        assert_eq!(count_link_class(FollowerCount::new(2)), "hover:underline");
    }
}
