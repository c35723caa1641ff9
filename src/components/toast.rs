use dioxus::prelude::*;

use crate::stores::toasts::{self, TOASTS};

/// Renders the page and, on top of it, any pending error notices
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let notices = TOASTS.read().clone();

    rsx! {
        {children}

        div {
            class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2",
            role: "status",
            aria_live: "polite",
            for toast in notices {
                ToastNotice {
                    key: "{toast.id}",
                    id: toast.id.clone(),
                    message: toast.message.clone(),
                }
            }
        }
    }
}

#[component]
fn ToastNotice(id: String, message: String) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-3 px-4 py-3 bg-destructive text-destructive-foreground rounded-lg shadow-lg",
            span { "{message}" }
            button {
                class: "opacity-80 hover:opacity-100",
                aria_label: "Dismiss",
                onclick: move |_| toasts::dismiss(&id),
                "✕"
            }
        }
    }
}
