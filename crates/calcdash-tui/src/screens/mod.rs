//! One module per dashboard screen, plus rendering helpers they share.

use std::collections::HashMap;
use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tui_input::Input;

use calcdash_api::CalcClient;

use crate::component::Component;
use crate::screen::ScreenId;
use crate::theme;
use crate::tracker::Tracker;
use crate::widgets::result_card;

pub mod fibonacci;
pub mod greet;
pub mod overview;
pub mod stats;

/// Build every screen the app routes between, keyed by its tab id.
pub fn create_screens(client: &Arc<CalcClient>) -> HashMap<ScreenId, Box<dyn Component>> {
    let mut screens: HashMap<ScreenId, Box<dyn Component>> = HashMap::new();
    screens.insert(
        ScreenId::Overview,
        Box::new(overview::OverviewScreen::new(Arc::clone(client))),
    );
    screens.insert(
        ScreenId::Greet,
        Box::new(greet::GreetScreen::new(Arc::clone(client))),
    );
    screens.insert(
        ScreenId::Fibonacci,
        Box::new(fibonacci::FibonacciScreen::new(Arc::clone(client))),
    );
    screens.insert(
        ScreenId::Stats,
        Box::new(stats::StatsScreen::new(Arc::clone(client))),
    );
    screens
}

/// Render a single-line text field with a visible cursor when focused.
pub(crate) fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    field: &Input,
    focused: bool,
) {
    let width = usize::from(area.width.saturating_sub(2));
    let scroll = field.visual_scroll(width);
    let paragraph = Paragraph::new(field.value())
        .style(theme::text_style())
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if focused {
                    theme::border_focused()
                } else {
                    theme::border_default()
                }),
        );
    frame.render_widget(paragraph, area);

    if focused {
        frame.set_cursor_position((
            area.x + (field.visual_cursor().saturating_sub(scroll)) as u16 + 1,
            area.y + 1,
        ));
    }
}

/// Render the current state of one tracked request: spinner while in
/// flight, the error when it failed, otherwise the settled reply.
pub(crate) fn render_request_status<T>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    tracker: &Tracker<T>,
    spinner: &ThrobberState,
    detail: impl Fn(&T) -> Text<'static>,
) {
    if tracker.is_loading() {
        let throbber = Throbber::default()
            .label("Contacting service...")
            .style(theme::loading_style())
            .throbber_style(theme::loading_style());
        frame.render_stateful_widget(throbber, area, &mut spinner.clone());
        return;
    }

    if let Some(err) = tracker.error() {
        result_card::render(
            frame,
            area,
            title,
            Some(Text::styled(err.to_owned(), theme::error_style())),
        );
        return;
    }

    result_card::render(frame, area, title, tracker.data().map(detail));
}
