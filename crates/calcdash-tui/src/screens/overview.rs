//! Overview screen — one aggregate fetch feeding five result cards.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Text;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use calcdash_api::{CalcClient, FibonacciReply, Overview};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::result_card;

pub struct OverviewScreen {
    client: Arc<CalcClient>,
    action_tx: Option<UnboundedSender<Action>>,
    focused: bool,
    /// The batch is all-or-nothing: either every card has data or the
    /// whole screen shows one error.
    data: Option<Arc<Overview>>,
    error: Option<String>,
    loading: bool,
    spinner: ThrobberState,
}

impl OverviewScreen {
    pub fn new(client: Arc<CalcClient>) -> Self {
        Self {
            client,
            action_tx: None,
            focused: false,
            data: None,
            error: None,
            loading: false,
            spinner: ThrobberState::default(),
        }
    }

    /// Kick off the fan-out batch; the result lands as an action.
    fn fetch(&mut self) {
        if self.loading {
            return;
        }
        self.loading = true;
        self.data = None;
        self.error = None;

        let client = Arc::clone(&self.client);
        let Some(tx) = self.action_tx.clone() else {
            return;
        };

        debug!("fetching overview batch");
        tokio::spawn(async move {
            let action = match client.overview().await {
                Ok(overview) => Action::OverviewLoaded(Arc::new(overview)),
                Err(err) => Action::OverviewFailed(err.to_string()),
            };
            let _ = tx.send(action);
        });
    }

    fn render_cards(frame: &mut Frame, area: Rect, overview: &Overview) {
        let rows = Layout::vertical([Constraint::Length(3), Constraint::Length(3)])
            .split(area);
        let top = Layout::horizontal([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[0]);
        let bottom =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[1]);

        result_card::render(
            frame,
            top[0],
            "Home",
            Some(Text::styled(overview.home.clone(), theme::text_style())),
        );
        result_card::render(
            frame,
            top[1],
            "Hello",
            Some(Text::styled(overview.hello.clone(), theme::text_style())),
        );
        result_card::render(
            frame,
            top[2],
            "Sum",
            Some(Text::styled(overview.sum.clone(), theme::text_style())),
        );
        result_card::render(
            frame,
            bottom[0],
            "Bubblesort",
            Some(Text::styled(
                format!(
                    "{:?} -> {:?}",
                    overview.bubblesort.original, overview.bubblesort.sorted
                ),
                theme::text_style(),
            )),
        );
        let fib = match &overview.fibonacci {
            FibonacciReply::Computed { n, value } => Text::styled(
                format!("fibonacci({n}) = {value}"),
                theme::text_style(),
            ),
            FibonacciReply::Rejected { n, reason } => Text::styled(
                format!("fibonacci({n}) rejected: {reason}"),
                theme::error_style(),
            ),
        };
        result_card::render(frame, bottom[1], "Fibonacci", Some(fib));
    }
}

impl Component for OverviewScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(action_tx);
        // One batch at startup populates every card.
        self.fetch();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('r') {
            self.fetch();
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::OverviewLoaded(overview) => {
                self.data = Some(Arc::clone(overview));
                self.error = None;
                self.loading = false;
            }
            Action::OverviewFailed(message) => {
                self.data = None;
                self.error = Some(message.clone());
                self.loading = false;
            }
            Action::Tick => self.spinner.calc_next(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let outer = Block::default()
            .title(" Overview ")
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

        let layout =
            Layout::vertical([Constraint::Min(6), Constraint::Length(1)]).split(inner);

        if self.loading {
            let throbber = Throbber::default()
                .label("Fetching overview...")
                .style(theme::loading_style())
                .throbber_style(theme::loading_style());
            frame.render_stateful_widget(throbber, layout[0], &mut self.spinner.clone());
        } else if let Some(err) = &self.error {
            frame.render_widget(
                Paragraph::new(format!("Overview failed: {err}"))
                    .style(theme::error_style()),
                layout[0],
            );
        } else if let Some(overview) = &self.data {
            Self::render_cards(frame, layout[0], overview);
        }

        frame.render_widget(
            Paragraph::new("r refresh").style(theme::dim_style()),
            layout[1],
        );
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
