//! Note list tab with a client-side page window

use dioxus::prelude::*;

use supertodo_core::pagination::page_window;
use supertodo_core::state::NotesAction;

use super::NoteCard;
use crate::state::AppState;
use crate::theme::PALETTE;

/// Paginated list of stored notes; clicking one loads it into the card
#[component]
pub fn NoteList() -> Element {
    let state = use_context::<AppState>();
    let mut page = state.page;
    let interaction = state.interaction.read();
    let selected_id = interaction.edit_note.as_ref().map(|note| note.id.clone());

    let Some(notes) = interaction.notes.as_deref() else {
        return rsx! {
            div {
                style: "padding: 20px; text-align: center; color: {PALETTE.text_muted};",
                "No notes"
            }
        };
    };

    let window = page_window(notes, page(), (state.page_size)());
    let current_page = window.page;
    let page_count = window.page_count;
    let has_previous = window.has_previous();
    let has_next = window.has_next();
    let page_label = format!("Page {} of {}", current_page + 1, page_count);

    rsx! {
        div {
            class: "note-tab",
            style: "display: flex; flex-direction: column; gap: 8px; padding: 0 16px;",

            if window.items.is_empty() {
                div {
                    style: "padding: 20px; text-align: center; color: {PALETTE.text_muted};",
                    "No notes yet"
                }
            }

            for note in window.items.iter().cloned() {
                {
                    let note_id = note.id.clone();
                    let is_selected = selected_id.as_ref() == Some(&note_id);
                    let title = note.note.title_preview(40);
                    let preview = note.note.desc.lines().next().unwrap_or("").to_string();

                    rsx! {
                        NoteCard {
                            key: "{note_id}",
                            title,
                            preview,
                            is_selected,
                            onclick: move |_| {
                                state.dispatch(NotesAction::SetEditNote(Some(note.clone())));
                            },
                        }
                    }
                }
            }

            div {
                class: "note-pager",
                style: "
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    color: {PALETTE.text_secondary};
                    font-size: 13px;
                ",
                button {
                    disabled: !has_previous,
                    onclick: move |_| page.set(current_page.saturating_sub(1)),
                    "Previous"
                }
                span { "{page_label}" }
                button {
                    disabled: !has_next,
                    onclick: move |_| page.set(current_page + 1),
                    "Next"
                }
            }
        }
    }
}
