//! Save and delete drop targets for the note card

use dioxus::prelude::*;

use supertodo_core::gesture::DropZone;

use crate::state::AppState;
use crate::theme::PALETTE;

/// Row of drop targets above the card, plus the (inert) private marker
#[component]
pub fn DropTargets() -> Element {
    rsx! {
        div {
            class: "drop-targets",
            style: "display: flex; gap: 16px; margin-top: 16px; z-index: 50;",
            DropTarget { zone: DropZone::Delete }
            DropTarget { zone: DropZone::Save }
            div {
                class: "private-marker",
                title: "Private",
                style: "width: 48px; height: 48px; color: {PALETTE.text_muted};",
                EyeOffIcon {}
            }
        }
    }
}

/// One zone the card can be dropped on
#[component]
fn DropTarget(zone: DropZone) -> Element {
    let state = use_context::<AppState>();
    let mut hovered = use_signal(|| false);

    let color = match (zone, hovered()) {
        (DropZone::Save, true) => PALETTE.accent,
        (DropZone::Delete, true) => PALETTE.danger,
        (_, false) => PALETTE.text_primary,
    };
    let scale = if hovered() { 1.2 } else { 1.0 };

    rsx! {
        div {
            id: zone.element_id(),
            title: zone.label(),
            style: "
                width: 48px;
                height: 48px;
                color: {color};
                transform: scale({scale});
                transition: transform 0.15s, color 0.15s;
            ",
            ondragenter: move |evt: Event<DragData>| {
                evt.prevent_default();
                hovered.set(true);
            },
            ondragover: move |evt: Event<DragData>| {
                evt.prevent_default();
            },
            ondragleave: move |_: Event<DragData>| hovered.set(false),
            ondrop: move |evt: Event<DragData>| {
                evt.prevent_default();
                hovered.set(false);
                tracing::debug!("Card dropped on {}", zone);
                state.drop_card(Some(zone));
            },

            match zone {
                DropZone::Save => rsx! { SaveIcon {} },
                DropZone::Delete => rsx! { CloseIcon {} },
            }
        }
    }
}

#[component]
fn CloseIcon() -> Element {
    rsx! {
        svg {
            width: "48",
            height: "48",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[component]
fn SaveIcon() -> Element {
    rsx! {
        svg {
            width: "48",
            height: "48",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M15.2 3a2 2 0 0 1 1.4.6l3.8 3.8a2 2 0 0 1 .6 1.4V19a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z" }
            path { d: "M17 21v-7a1 1 0 0 0-1-1H8a1 1 0 0 0-1 1v7" }
            path { d: "M7 3v4a1 1 0 0 0 1 1h7" }
        }
    }
}

#[component]
fn EyeOffIcon() -> Element {
    rsx! {
        svg {
            width: "48",
            height: "48",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68" }
            path { d: "M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61" }
            path { d: "M9.88 9.88a3 3 0 1 0 4.24 4.24" }
            line { x1: "2", x2: "22", y1: "2", y2: "22" }
        }
    }
}
