//! Result card — a titled container for arbitrary backend content.
//!
//! The caller decides what the content is (plain text, a formatted error
//! line, a structured dump); the card only frames it. Absent content
//! renders a fixed placeholder.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::theme;

const NO_DATA: &str = "No data received";

/// Render a titled card into `area`. `None` content shows the placeholder.
pub fn render(frame: &mut Frame, area: Rect, title: &str, content: Option<Text<'_>>) {
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_default());

    let body = match content {
        Some(text) => Paragraph::new(text),
        None => Paragraph::new(NO_DATA).style(theme::dim_style()),
    };

    frame.render_widget(body.block(block).wrap(Wrap { trim: false }), area);
}
