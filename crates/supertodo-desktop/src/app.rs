//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use supertodo_core::config::ClientConfig;
use supertodo_core::state::InteractionState;
use supertodo_core::NotesApiClient;

use crate::state::AppState;
use crate::theme::PALETTE;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        ClientConfig::from_env().unwrap_or_else(|e| {
            tracing::error!("Invalid configuration, using defaults: {}", e);
            ClientConfig::default()
        })
    });

    let interaction = use_signal(InteractionState::default);
    let client = use_signal(|| match NotesApiClient::from_config(&config) {
        Ok(client) => {
            tracing::info!("Using notes API at {}", client.base_url());
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::error!("Failed to build notes API client: {}", e);
            None
        }
    });
    let page = use_signal(|| 0usize);
    let page_size = use_signal(|| config.page_size);

    let state = use_context_provider(|| AppState {
        interaction,
        client,
        page,
        page_size,
    });

    // Initial list load (only once)
    use_hook(move || state.reload_notes());

    rsx! {
        div {
            class: "app-container",
            style: "
                height: 100vh;
                overflow: hidden;
                font-family: system-ui, -apple-system, sans-serif;
                background: {PALETTE.bg_primary};
                color: {PALETTE.text_primary};
            ",
            Home {}
        }
    }
}
