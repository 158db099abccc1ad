//! Draggable note card editor

use dioxus::prelude::*;

use supertodo_core::state::{EditorField, NotesAction, PendingRequest};

use crate::state::AppState;
use crate::theme::{CARD_TRANSITION_SECS, DRAG_SCALE, PALETTE};

/// Sticky-note card with title and description fields.
///
/// The header bar is the drag handle; dropping it on a target in
/// `DropTargets` saves or deletes the note shown here.
#[component]
pub fn NoteEditor() -> Element {
    let state = use_context::<AppState>();
    let mut dragging = use_signal(|| false);

    let interaction = state.interaction.read();
    let title = interaction.active_title().to_string();
    let desc = interaction.active_desc().to_string();
    let animate = interaction.animate;
    let status = match &interaction.pending {
        Some(PendingRequest::Create) => "Saving...",
        Some(PendingRequest::Update(_)) => "Updating...",
        Some(PendingRequest::Remove(_)) => "Deleting...",
        None if interaction.is_editing_existing() => "Editing",
        None => "",
    };
    drop(interaction);

    let drag_scale = if dragging() { DRAG_SCALE } else { 1.0 };
    let scale = animate.scale() * drag_scale;
    let opacity = animate.opacity();

    let on_title = move |evt: Event<FormData>| {
        state.dispatch(NotesAction::EditField {
            field: EditorField::Title,
            value: evt.value(),
        });
    };

    let on_desc = move |evt: Event<FormData>| {
        state.dispatch(NotesAction::EditField {
            field: EditorField::Desc,
            value: evt.value(),
        });
    };

    rsx! {
        div {
            class: "note-card",
            style: "
                margin-top: 160px;
                width: 240px;
                transform: scale({scale});
                opacity: {opacity};
                transition: transform {CARD_TRANSITION_SECS}s, opacity {CARD_TRANSITION_SECS}s;
                background: {PALETTE.card_body};
                color: {PALETTE.card_text};
                font-weight: 600;
                border-radius: 6px;
                display: flex;
                flex-direction: column;
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
            ",

            div {
                class: "note-card-handle",
                draggable: "true",
                style: "
                    height: 40px;
                    background: {PALETTE.card_header};
                    border-radius: 6px 6px 0 0;
                    cursor: grab;
                    display: flex;
                    align-items: center;
                    justify-content: flex-end;
                    padding: 0 8px;
                    font-size: 11px;
                    font-weight: 500;
                ",
                ondragstart: move |_: Event<DragData>| dragging.set(true),
                ondragend: move |_: Event<DragData>| {
                    dragging.set(false);
                    state.dispatch(NotesAction::DragEnded);
                },
                "{status}"
            }

            textarea {
                name: "title",
                placeholder: "Title",
                style: "
                    height: 40px;
                    padding: 8px;
                    border: none;
                    resize: none;
                    background: {PALETTE.card_body};
                    text-decoration: underline;
                    font: inherit;
                ",
                value: "{title}",
                oninput: on_title,
            }

            textarea {
                name: "desc",
                placeholder: "Description",
                style: "
                    height: 160px;
                    padding: 8px;
                    border: none;
                    resize: none;
                    background: {PALETTE.card_body};
                    border-radius: 0 0 6px 6px;
                    font: inherit;
                ",
                value: "{desc}",
                oninput: on_desc,
            }
        }
    }
}
