//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{DropTargets, NoteEditor, NoteList};
use crate::theme::PALETTE;

/// Two columns: the note list tab on the left, drop targets and the
/// draggable card on the right
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",
            style: "
                display: grid;
                grid-template-columns: 1fr 1fr;
                height: 100%;
            ",

            section {
                class: "list-section",
                style: "width: 100%; overflow-y: auto;",
                h1 {
                    style: "text-align: center; font-size: 24px; margin: 8px 0;",
                    "To Do List"
                }
                NoteList {}
            }

            section {
                class: "editor-section",
                style: "
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 8px;
                    overflow: hidden;
                    border-left: 1px solid {PALETTE.border};
                ",
                DropTargets {}
                NoteEditor {}
            }
        }
    }
}
