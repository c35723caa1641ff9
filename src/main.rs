#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::{config_store, profile_seed};

// Modules
mod components;
mod hooks;
mod routes;
mod services;
mod stores;
mod utils;

use components::ToastProvider;

fn main() {
    // Storage is read once here; CONFIG picks up the installed value
    let (config, warning) = config_store::resolve_config(config_store::read_stored_config());
    let config = config_store::install_config(config);

    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    }

    if let Some(e) = warning {
        log::warn!("Ignoring stored widget config: {}", e);
    }

    log::info!(
        "Starting profile widgets (users: {}, activities: {})",
        config.users_endpoint,
        config.activities_endpoint
    );

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Initial values rendered into the page by the server
    let seed = use_hook(|| match profile_seed::read_seed() {
        Ok(seed) => {
            log::info!("Loaded profile seed for {}", seed.username);
            Some(seed)
        }
        Err(e) => {
            log::error!("Failed to read profile seed: {:#}", e);
            None
        }
    });

    rsx! {
        ToastProvider {
            if let Some(seed) = seed {
                routes::Profile { seed }
            } else {
                div {
                    class: "p-8 text-center text-muted-foreground",
                    "This profile could not be loaded."
                }
            }
        }
    }
}
