//! Stats screen — a comma-separated number list posted to
//! `/calculate-stats`.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use calcdash_api::{CalcClient, StatsReply, StatsSummary, input};

use crate::action::Action;
use crate::component::Component;
use crate::screens::{render_request_status, render_text_field};
use crate::theme;
use crate::tracker::Tracker;

pub struct StatsScreen {
    client: Arc<CalcClient>,
    action_tx: Option<UnboundedSender<Action>>,
    focused: bool,
    field: Input,
    tracker: Tracker<StatsReply>,
    notice: Option<String>,
    spinner: throbber_widgets_tui::ThrobberState,
}

impl StatsScreen {
    pub fn new(client: Arc<CalcClient>) -> Self {
        Self {
            client,
            action_tx: None,
            focused: false,
            field: Input::default(),
            tracker: Tracker::new(),
            notice: None,
            spinner: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    fn submit(&mut self) {
        if self.tracker.is_loading() {
            return;
        }

        let numbers = match input::parse_number_list(self.field.value()) {
            Ok(numbers) => numbers,
            Err(err) => {
                self.notice = Some(err.to_string());
                return;
            }
        };
        self.notice = None;

        let seq = self.tracker.begin();
        let client = Arc::clone(&self.client);
        let Some(tx) = self.action_tx.clone() else {
            return;
        };

        debug!(count = numbers.len(), seq, "submitting stats request");
        tokio::spawn(async move {
            let outcome = client
                .calculate_stats(&numbers)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(Action::StatsSettled { seq, outcome });
        });
    }
}

fn summary_text(summary: &StatsSummary) -> Text<'static> {
    Text::from(vec![
        Line::styled(format!("count    {}", summary.count), theme::text_style()),
        Line::styled(format!("sum      {}", summary.sum), theme::text_style()),
        Line::styled(
            format!("average  {}", summary.average),
            theme::text_style(),
        ),
        Line::styled(format!("min      {}", summary.min), theme::text_style()),
        Line::styled(format!("max      {}", summary.max), theme::text_style()),
    ])
}

impl Component for StatsScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(action_tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Enter => self.submit(),
            _ => {
                self.field.handle_event(&CrosstermEvent::Key(key));
            }
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::StatsSettled { seq, outcome } => {
                self.tracker.settle(*seq, outcome.clone());
            }
            Action::Tick => self.spinner.calc_next(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let outer = Block::default()
            .title(" Stats ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(7),
        ])
        .split(inner);

        render_text_field(
            frame,
            layout[0],
            " Numbers (comma-separated) ",
            &self.field,
            self.focused,
        );

        let hint = self
            .notice
            .as_deref()
            .unwrap_or("e.g. 1, 2.5, -3 (Enter to submit)");
        let hint_style = if self.notice.is_some() {
            theme::error_style()
        } else {
            theme::dim_style()
        };
        frame.render_widget(Paragraph::new(hint).style(hint_style), layout[1]);

        render_request_status(
            frame,
            layout[2],
            "Summary",
            &self.tracker,
            &self.spinner,
            |reply| match reply {
                StatsReply::Summary(summary) => summary_text(summary),
                StatsReply::Refused { reason } => Text::styled(
                    format!("Service declined: {reason}"),
                    theme::error_style(),
                ),
            },
        );
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn wants_text_input(&self) -> bool {
        true
    }
}
