//! Greet screen — one name field bound to `GET /greet/{name}`.

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

use calcdash_api::{CalcClient, GreetReply, input};

use crate::action::Action;
use crate::component::Component;
use crate::screens::{render_request_status, render_text_field};
use crate::theme;
use crate::tracker::Tracker;

pub struct GreetScreen {
    client: Arc<CalcClient>,
    action_tx: Option<UnboundedSender<Action>>,
    focused: bool,
    field: Input,
    tracker: Tracker<GreetReply>,
    /// Local validation notice; never involves the network.
    notice: Option<String>,
    spinner: throbber_widgets_tui::ThrobberState,
}

impl GreetScreen {
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

    /// Validate and, when the name passes, fire the request.
    fn submit(&mut self) {
        // Submit is disabled while a request is in flight.
        if self.tracker.is_loading() {
            return;
        }

        // Empty or whitespace-only names are a no-op with a notice.
        let Some(name) = input::normalize_name(self.field.value()) else {
            self.notice = Some("Enter a name first".into());
            return;
        };
        self.notice = None;

        let seq = self.tracker.begin();
        let name = name.to_owned();
        let client = Arc::clone(&self.client);
        let Some(tx) = self.action_tx.clone() else {
            return;
        };

        debug!(%name, seq, "submitting greet request");
        tokio::spawn(async move {
            let outcome = client.greet(&name).await.map_err(|e| e.to_string());
            let _ = tx.send(Action::GreetSettled { seq, outcome });
        });
    }
}

impl Component for GreetScreen {
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
            Action::GreetSettled { seq, outcome } => {
                self.tracker.settle(*seq, outcome.clone());
            }
            Action::Tick => self.spinner.calc_next(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let outer = Block::default()
            .title(" Greet ")
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
            Constraint::Length(3), // name field
            Constraint::Length(1), // notice / hint
            Constraint::Min(3),    // request status
        ])
        .split(inner);

        render_text_field(frame, layout[0], " Name ", &self.field, self.focused);

        let hint = self.notice.as_deref().unwrap_or("Enter to submit");
        let hint_style = if self.notice.is_some() {
            theme::error_style()
        } else {
            theme::dim_style()
        };
        frame.render_widget(Paragraph::new(hint).style(hint_style), layout[1]);

        render_request_status(
            frame,
            layout[2],
            "Greeting",
            &self.tracker,
            &self.spinner,
            |reply| match reply {
                GreetReply::Greeting { message } => {
                    Text::styled(message.clone(), theme::success_style())
                }
                GreetReply::Refused { reason } => Text::styled(
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
