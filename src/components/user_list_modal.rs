use dioxus::prelude::*;

use crate::components::Spinner;
use crate::utils::DataState;

/// Modal showing a server-rendered followers/following list
#[component]
pub fn UserListModal(
    title: String,
    list: DataState<String>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        // Modal overlay - clicking outside closes
        div {
            class: "fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4",
            onclick: move |_| on_close.call(()),

            div {
                class: "bg-card border border-border rounded-xl max-w-md w-full max-h-[80vh] flex flex-col shadow-xl",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "user-list-title",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "flex items-center justify-between px-6 py-4 border-b border-border",
                    h2 {
                        class: "text-lg font-bold",
                        id: "user-list-title",
                        "{title}"
                    }
                    button {
                        class: "px-3 py-1 rounded-lg hover:bg-accent transition",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }

                div {
                    class: "overflow-y-auto p-6",
                    if let Some(html) = list.data() {
                        div { dangerous_inner_html: "{html}" }
                    } else if let Some(msg) = list.error() {
                        p { class: "text-destructive", "{msg}" }
                    } else {
                        div { class: "flex justify-center py-6", Spinner {} }
                    }
                }
            }
        }
    }
}
