//! Note card component

use dioxus::prelude::*;

use crate::theme::PALETTE;

/// A single stored note rendered in the list tab.
#[component]
pub fn NoteCard(
    title: String,
    preview: String,
    is_selected: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let bg = if is_selected {
        PALETTE.card_body
    } else {
        PALETTE.bg_secondary
    };
    let border_left = if is_selected {
        format!("3px solid {}", PALETTE.accent)
    } else {
        "3px solid transparent".to_string()
    };

    rsx! {
        div {
            class: if is_selected { "note-item selected" } else { "note-item" },
            style: "
                border: 1px solid {PALETTE.border};
                border-left: {border_left};
                border-radius: 6px;
                padding: 12px 16px;
                cursor: pointer;
                background: {bg};
                transition: background 0.15s;
            ",
            onclick: move |evt| onclick.call(evt),

            div {
                class: "note-title",
                style: "
                    font-weight: 600;
                    margin-bottom: 4px;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    text-decoration: underline;
                ",
                "{title}"
            }

            div {
                class: "note-preview",
                style: "
                    font-size: 12px;
                    color: {PALETTE.text_secondary};
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{preview}"
            }
        }
    }
}
