//! Harbor palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const TEAL: Color = Color::Rgb(94, 234, 212); // #5eead4
pub const AMBER: Color = Color::Rgb(251, 191, 36); // #fbbf24
pub const SUCCESS_GREEN: Color = Color::Rgb(74, 222, 128); // #4ade80
pub const ERROR_RED: Color = Color::Rgb(248, 113, 113); // #f87171

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(203, 213, 225); // #cbd5e1
pub const BORDER_GRAY: Color = Color::Rgb(100, 116, 139); // #64748b
pub const BG_HIGHLIGHT: Color = Color::Rgb(30, 41, 59); // #1e293b

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(TEAL).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(TEAL)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Normal body text.
pub fn text_style() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// De-emphasized text: placeholders, hints.
pub fn dim_style() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Successful result text.
pub fn success_style() -> Style {
    Style::default().fg(SUCCESS_GREEN)
}

/// Error / rejection text.
pub fn error_style() -> Style {
    Style::default().fg(ERROR_RED)
}

/// In-progress / loading text.
pub fn loading_style() -> Style {
    Style::default().fg(AMBER)
}

/// Active tab in the tab bar.
pub fn tab_active() -> Style {
    Style::default()
        .fg(TEAL)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Inactive tab in the tab bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(BORDER_GRAY)
}
