//! Fibonacci screen — an index field bound to `GET /fibonacci?n=`.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Text;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use calcdash_api::{CalcClient, FibonacciReply, input};

use crate::action::Action;
use crate::component::Component;
use crate::screens::{render_request_status, render_text_field};
use crate::theme;
use crate::tracker::Tracker;

pub struct FibonacciScreen {
    client: Arc<CalcClient>,
    action_tx: Option<UnboundedSender<Action>>,
    focused: bool,
    field: Input,
    tracker: Tracker<FibonacciReply>,
    notice: Option<String>,
    spinner: throbber_widgets_tui::ThrobberState,
}

impl FibonacciScreen {
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

        // Non-numeric and negative indexes never reach the network.
        let n = match input::parse_index(self.field.value()) {
            Ok(n) => n,
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

        debug!(n, seq, "submitting fibonacci request");
        tokio::spawn(async move {
            let outcome = client.fibonacci(n).await.map_err(|e| e.to_string());
            let _ = tx.send(Action::FibonacciSettled { seq, outcome });
        });
    }
}

impl Component for FibonacciScreen {
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
            Action::FibonacciSettled { seq, outcome } => {
                self.tracker.settle(*seq, outcome.clone());
            }
            Action::Tick => self.spinner.calc_next(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let outer = Block::default()
            .title(" Fibonacci ")
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
            Constraint::Min(3),
        ])
        .split(inner);

        render_text_field(frame, layout[0], " Index n ", &self.field, self.focused);

        let hint = self
            .notice
            .as_deref()
            .unwrap_or("Enter a non-negative index, then Enter to submit");
        let hint_style = if self.notice.is_some() {
            theme::error_style()
        } else {
            theme::dim_style()
        };
        frame.render_widget(Paragraph::new(hint).style(hint_style), layout[1]);

        render_request_status(
            frame,
            layout[2],
            "Result",
            &self.tracker,
            &self.spinner,
            |reply| match reply {
                FibonacciReply::Computed { n, value } => Text::styled(
                    format!("fibonacci({n}) = {value}"),
                    theme::success_style(),
                ),
                FibonacciReply::Rejected { n, reason } => Text::styled(
                    format!("fibonacci({n}) rejected: {reason}"),
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
