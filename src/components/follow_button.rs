use dioxus::prelude::*;
use std::rc::Rc;

use crate::components::Spinner;
use crate::hooks::use_follow_toggle;
use crate::stores::follow_toggle::{FollowerCount, TogglePhase};
use crate::stores::profile_seed::FollowSeed;

/// Follow/unfollow form. Submits in place; the loader replaces the button
/// while the request is in flight and takes its width.
#[component]
pub fn FollowButton(
    seed: FollowSeed,
    username: String,
    csrf_token: Option<String>,
    followers: Signal<FollowerCount>,
) -> Element {
    let toggle = use_follow_toggle(seed, username.clone(), csrf_token, followers);
    let state = toggle.state;

    let mut button_ref = use_signal(|| None::<Rc<MountedData>>);
    let mut loader_width = use_signal(|| None::<f64>);

    // Measure the button once mounted and each time it comes back with a new label
    use_effect(move || {
        if !state.read().button_visible() {
            return;
        }
        let Some(element) = button_ref() else {
            return;
        };

        spawn(async move {
            match element.get_client_rect().await {
                Ok(rect) => loader_width.set(Some(rect.width())),
                Err(e) => log::debug!("Could not measure follow button: {:?}", e),
            }
        });
    });

    let current = state.read().clone();
    let loader_style = loader_width()
        .map(|w| format!("width: {}px;", w))
        .unwrap_or_default();

    rsx! {
        form {
            id: "follow",
            class: "inline-flex items-center",
            aria_busy: current.phase() == TogglePhase::Submitting,
            onsubmit: move |evt| {
                evt.prevent_default();
                toggle.submit.call(());
            },

            input {
                r#type: "hidden",
                name: "{current.direction.as_str()}",
                value: "{username}",
            }

            input {
                r#type: "submit",
                class: if current.button_visible() {
                    "px-6 py-2 bg-foreground text-background rounded-full font-semibold hover:opacity-90 transition cursor-pointer"
                } else {
                    "hidden"
                },
                value: "{current.label}",
                "data-reverse": "{current.reverse_label}",
                onmounted: move |evt: MountedEvent| button_ref.set(Some(evt.data())),
            }

            div {
                id: "follow-hidden-loader",
                class: if current.loader_visible() {
                    "flex justify-center py-2"
                } else {
                    "hidden"
                },
                style: "{loader_style}",
                Spinner {}
            }
        }
    }
}
