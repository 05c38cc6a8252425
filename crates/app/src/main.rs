use std::sync::Arc;

use client::{load_config, ApiClient, SharedStore};
use dioxus::prelude::*;

mod auth;
mod browser_store;
mod components;
pub mod format_helpers;
pub mod permission_gate;
mod routes;

use auth::AuthState;
use browser_store::BrowserStore;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

/// Reads persisted storage once, then mounts the routed application.
#[component]
fn App() -> Element {
    let snapshot = use_resource(browser_store::read_snapshot);

    let entries = match &*snapshot.read() {
        Some(entries) => entries.clone(),
        None => {
            return rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Shell { entries }
    }
}

/// Owns the process-wide API client and session state.
#[component]
fn Shell(entries: Vec<(String, String)>) -> Element {
    let api = use_context_provider(|| {
        let config = load_config();
        let store: SharedStore = Arc::new(BrowserStore::hydrate(entries.clone()));
        tracing::info!(
            platform = client_platform(),
            base_url = config.base_url(),
            "starting ProjectHub"
        );
        ApiClient::from_config(config, store)
    });

    use_context_provider(|| AuthState::restore(api.store().as_ref()));

    rsx! {
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
