//! Colors and timing shared by the desktop components

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub danger: &'static str,
    /// Sticky-note card body
    pub card_body: &'static str,
    /// Sticky-note card header (drag handle)
    pub card_header: &'static str,
    pub card_text: &'static str,
}

pub const PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f8f9fa",
    text_primary: "#1a1a1a",
    text_secondary: "#5f6368",
    text_muted: "#9aa0a6",
    border: "#dadce0",
    accent: "#16a34a",
    danger: "#dc2626",
    card_body: "#bbf7d0",
    card_header: "#86efac",
    card_text: "#000000",
};

/// Card animation duration in seconds
pub const CARD_TRANSITION_SECS: f32 = 0.5;

/// Card scale while it is being dragged
pub const DRAG_SCALE: f32 = 1.1;
