use dioxus::prelude::*;
use dioxus::core::Task;

use crate::components::Spinner;
use crate::hooks::use_infinite_scroll;
use crate::services::profile_api;
use crate::stores::activity_feed::ActivityFeedState;
use crate::stores::config_store::CONFIG;
use crate::stores::pagination::PaginatorState;

/// Element id of the container holding every rendered activity page
pub const ACTIVITIES_CONTAINER_ID: &str = "activities";

/// Rewrite `time[datetime]` elements in the feed as relative labels
#[cfg_attr(not(target_family = "wasm"), allow(unused_variables))]
pub fn enhance_activities(container_id: &str) {
    #[cfg(target_family = "wasm")]
    {
        use crate::utils::time::relative_label;
        use wasm_bindgen::JsCast;

        let Some(container) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(container_id))
        else {
            return;
        };

        let nodes = match container.query_selector_all("time[datetime]") {
            Ok(nodes) => nodes,
            Err(e) => {
                log::warn!("Failed to query activity timestamps: {:?}", e);
                return;
            }
        };

        let now = chrono::Utc::now();
        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            if let Some(label) = element
                .get_attribute("datetime")
                .and_then(|dt| relative_label(&dt, now))
            {
                element.set_text_content(Some(&label));
            }
        }
    }
}

/// Activity feed panel: page 1 from the tab controller, later pages from the paginator
#[component]
pub fn ActivityFeed(
    feed: Signal<ActivityFeedState>,
    paginator: Signal<Option<PaginatorState>>,
    on_rendered: EventHandler<String>,
) -> Element {
    let mut feed = feed;
    let mut paginator = paginator;
    let mut page_task = use_signal(|| None::<Task>);

    let load_next_page = use_callback(move |_: ()| {
        let url = paginator.write().as_mut().and_then(|p| {
            log::debug!("Requesting activity page {}", p.next_page());
            p.begin()
        });
        let Some(url) = url else {
            return;
        };

        let task = spawn(async move {
            match profile_api::fetch_activities_page(&url).await {
                Ok(html) => {
                    let appended = paginator
                        .write()
                        .as_mut()
                        .map(|p| p.page_loaded(&html))
                        .unwrap_or(false);
                    if appended {
                        feed.write().append_page(html);
                    }
                }
                Err(e) => {
                    log::warn!("Failed to load activity page: {}", e);
                    if let Some(p) = paginator.write().as_mut() {
                        p.page_failed(e.to_string());
                    }
                }
            }
            page_task.set(None);
        });
        page_task.set(Some(task));
    });

    // Scrolling only drives healthy pagination; after a failure the button retries
    let can_auto_load = use_memo(move || {
        paginator
            .read()
            .as_ref()
            .map(|p| p.can_load() && p.last_error().is_none())
            .unwrap_or(false)
    });

    let margin = CONFIG.read().scroll_margin_px;
    let sentinel_id = use_infinite_scroll(load_next_page, can_auto_load, margin);

    // Run the enhancement step once per rendered page
    let page_count = use_memo(move || feed.read().page_count());
    use_effect(move || {
        if page_count() == 0 {
            return;
        }
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(50).await;
            on_rendered.call(ACTIVITIES_CONTAINER_ID.to_string());
        });
    });

    use_drop(move || {
        if let Some(task) = page_task.peek().as_ref() {
            task.cancel();
        }
    });

    let state = feed.read().clone();
    let pager = paginator.read().clone();

    rsx! {
        div {
            id: ACTIVITIES_CONTAINER_ID,
            class: "divide-y divide-border",
            for (i, page) in state.pages().iter().enumerate() {
                div {
                    key: "{i}",
                    class: "activity-page",
                    dangerous_inner_html: "{page}",
                }
            }
        }

        if state.is_loaded() && state.pages().iter().all(|p| p.trim().is_empty()) {
            p { class: "text-center text-muted-foreground py-8", "No activities yet." }
        }

        if state.is_fetching() {
            div { class: "flex justify-center py-8", Spinner {} }
        }

        if let Some(pager) = pager {
            if pager.has_more() {
                div { id: "{sentinel_id}", class: "h-4" }

                if let Some(err) = pager.last_error() {
                    p { class: "text-center text-sm text-destructive py-2", "{err}" }
                }

                div {
                    class: "flex justify-center py-4",
                    button {
                        class: "px-4 py-2 border border-border rounded-full hover:bg-accent transition",
                        disabled: pager.is_loading(),
                        onclick: move |_| load_next_page.call(()),
                        if pager.is_loading() {
                            "Loading..."
                        } else {
                            "Load more"
                        }
                    }
                }
            }
        }
    }
}
