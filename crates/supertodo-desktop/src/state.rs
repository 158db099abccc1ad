//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use supertodo_core::gesture::DropZone;
use supertodo_core::session::{handle_drop, refresh_notes};
use supertodo_core::state::{InteractionState, NotesAction};
use supertodo_core::NotesApiClient;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Editor card, loaded list, and animation target
    pub interaction: Signal<InteractionState>,
    /// Notes API client; `None` when the configured base URL was rejected
    pub client: Signal<Option<Arc<NotesApiClient>>>,
    /// Current list tab page (zero-based)
    pub page: Signal<usize>,
    /// Notes per list tab page
    pub page_size: Signal<usize>,
}

impl AppState {
    /// Apply one action to the interaction state.
    pub fn dispatch(&self, action: NotesAction) {
        let mut interaction = self.interaction;
        interaction.write().apply(action);
    }

    /// Reload the note list in the background.
    pub fn reload_notes(&self) {
        let Some(client) = self.client.read().clone() else {
            tracing::warn!("Notes API client unavailable; skipping list load");
            return;
        };
        let mut interaction = self.interaction;
        spawn(async move {
            refresh_notes(client.as_ref(), &mut |action| {
                interaction.write().apply(action);
            })
            .await;
        });
    }

    /// The card was released over `zone` (or outside every zone).
    pub fn drop_card(&self, zone: Option<DropZone>) {
        let Some(client) = self.client.read().clone() else {
            tracing::warn!("Notes API client unavailable; drop on {:?} ignored", zone);
            self.dispatch(NotesAction::DragEnded);
            return;
        };
        let snapshot = self.interaction.read().clone();
        let mut interaction = self.interaction;
        spawn(async move {
            let outcome = handle_drop(client.as_ref(), &snapshot, zone, move |action| {
                interaction.write().apply(action);
            })
            .await;
            tracing::debug!("Drop on {:?} finished: {:?}", zone, outcome);
        });
    }
}
