use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// An observation that can be stopped
pub trait Disconnect {
    fn disconnect(&self);
}

/// Holds the one observer currently watching the sentinel
///
/// Installing a new observer disconnects the previous one, so re-arming the
/// scroll trigger never leaves stale observers behind.
pub struct ObserverSlot<T: Disconnect> {
    current: Option<T>,
}

impl<T: Disconnect> ObserverSlot<T> {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn replace(&mut self, next: T) {
        self.clear();
        self.current = Some(next);
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.disconnect();
        }
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

/// Browser observer together with the callback it invokes
#[cfg(target_family = "wasm")]
struct SentinelObserver {
    observer: web_sys::IntersectionObserver,
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(target_family = "wasm")]
impl Disconnect for SentinelObserver {
    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

#[cfg(target_family = "wasm")]
type ActiveObserver = SentinelObserver;

#[cfg(not(target_family = "wasm"))]
type ActiveObserver = ();

#[cfg(not(target_family = "wasm"))]
impl Disconnect for () {
    fn disconnect(&self) {}
}

/// Request the next activity page when a sentinel element scrolls into view
///
/// Returns the id to put on a sentinel element placed after the last page.
/// While `enabled` is false (no paginator yet, a page in flight, or no pages
/// left) nothing is observed.
///
/// # Arguments
/// * `on_reach` - Called when the sentinel comes within `margin_px` of the viewport
/// * `enabled` - Whether another page may be requested right now
/// * `margin_px` - Root margin for early triggering
///
/// # Example
/// ```
/// let sentinel_id = use_infinite_scroll(load_next_page, can_load, 300);
///
/// // In your rsx:
/// div { id: "{sentinel_id}", class: "h-4" }
/// ```
pub fn use_infinite_scroll(
    on_reach: EventHandler<()>,
    enabled: Memo<bool>,
    margin_px: u32,
) -> String {
    let sentinel_id = use_hook(|| format!("activities-sentinel-{}", uuid::Uuid::new_v4()));
    let slot = use_hook(|| Rc::new(RefCell::new(ObserverSlot::<ActiveObserver>::new())));

    // Bumped by the observer; the call itself happens inside the runtime
    let reached = use_signal(|| 0u64);

    use_effect(move || {
        if reached() > 0 {
            on_reach.call(());
        }
    });

    #[cfg_attr(not(target_family = "wasm"), allow(unused_variables))]
    let id_for_effect = sentinel_id.clone();
    let slot_for_effect = slot.clone();

    use_effect(move || {
        if !enabled() {
            let mut slot = slot_for_effect.borrow_mut();
            if slot.is_active() {
                log::debug!("Activity paginator idle, disconnecting sentinel observer");
                slot.clear();
            }
            return;
        }

        #[cfg(target_family = "wasm")]
        {
            use wasm_bindgen::prelude::*;
            use wasm_bindgen::JsCast;

            let id = id_for_effect.clone();
            let slot = slot_for_effect.clone();

            spawn(async move {
                // Wait for the newly rendered page to land in the DOM
                gloo_timers::future::TimeoutFuture::new(100).await;

                if !*enabled.peek() {
                    return;
                }

                let Some(element) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id(&id))
                else {
                    log::debug!("Activities sentinel not in the DOM yet");
                    return;
                };

                let mut reached = reached;
                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                        let intersecting = entries.iter().any(|entry| {
                            entry
                                .dyn_into::<web_sys::IntersectionObserverEntry>()
                                .map(|e| e.is_intersecting())
                                .unwrap_or(false)
                        });
                        if intersecting {
                            // One trigger per observation; the effect re-arms after the page settles
                            observer.disconnect();
                            log::debug!("Activities sentinel reached, loading next page");
                            reached += 1;
                        }
                    },
                ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

                let mut options = web_sys::IntersectionObserverInit::new();
                options.set_root_margin(&format!("{}px", margin_px));

                let observer = match web_sys::IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    Ok(obs) => obs,
                    Err(e) => {
                        log::error!("Failed to create IntersectionObserver: {:?}", e);
                        return;
                    }
                };

                observer.observe(&element);

                // The slot keeps the callback alive for as long as the observer runs
                slot.borrow_mut().replace(SentinelObserver {
                    observer,
                    _callback: callback,
                });
            });
        }
    });

    use_drop(move || {
        slot.borrow_mut().clear();
    });

    sentinel_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingObserver {
        disconnects: Rc<Cell<u32>>,
    }

    impl Disconnect for CountingObserver {
        fn disconnect(&self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    #[test]
    fn test_rearming_disconnects_previous_observer() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut slot = ObserverSlot::new();

        slot.replace(CountingObserver { disconnects: first.clone() });
        slot.replace(CountingObserver { disconnects: second.clone() });

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
        assert!(slot.is_active());
    }

    #[test]
    fn test_many_manual_loads_leave_one_observer() {
        let counts: Vec<Rc<Cell<u32>>> = (0..5).map(|_| Rc::new(Cell::new(0))).collect();
        let mut slot = ObserverSlot::new();

        for count in &counts {
            // Disabled while the page loads, enabled again once it lands
            slot.clear();
            slot.replace(CountingObserver { disconnects: count.clone() });
        }

        assert!(counts[..4].iter().all(|c| c.get() == 1));
        assert_eq!(counts[4].get(), 0);

        slot.clear();
        assert_eq!(counts[4].get(), 1);
        assert!(!slot.is_active());
    }
}
