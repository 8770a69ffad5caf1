//! Application core — event loop, screen management, action dispatch.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use calcdash_api::CalcClient;

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme;
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App {
    /// Base URL shown in the status bar.
    server: String,
    /// Current active screen.
    active_screen: ScreenId,
    /// All screen components, keyed by ScreenId.
    screens: HashMap<ScreenId, Box<dyn Component>>,
    /// Whether the app should keep running.
    running: bool,
    /// Help overlay visibility.
    help_visible: bool,
    /// Action sender — components can dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(client: Arc<CalcClient>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let server = client.base_url().to_string();
        let screens = create_screens(&client);

        Self {
            server,
            active_screen: ScreenId::Overview,
            screens,
            running: true,
            help_visible: false,
            action_tx,
            action_rx,
        }
    }

    /// Initialize all screen components with the action sender.
    fn init_screens(&mut self) -> Result<()> {
        for screen in self.screens.values_mut() {
            screen.init(self.action_tx.clone())?;
        }
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }
        Ok(())
    }

    /// Run the main event loop. This is the heart of the TUI.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.init_screens()?;

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// screen-specific keys go to the active screen component.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        // Ctrl+C and Tab cycling work everywhere, even inside a text field.
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Tab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.next())));
            }
            (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.prev())));
            }
            _ => {}
        }

        // The remaining globals would collide with typing, so they only
        // apply when the active screen has no text field.
        let typing = self
            .screens
            .get(&self.active_screen)
            .is_some_and(|s| s.wants_text_input());
        if !typing {
            match (key.modifiers, key.code) {
                (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
                (KeyModifiers::NONE, KeyCode::Char('?')) => {
                    return Ok(Some(Action::ToggleHelp));
                }
                (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='4')) => {
                    let n = c as u8 - b'0';
                    if let Some(screen) = ScreenId::from_number(n) {
                        return Ok(Some(Action::SwitchScreen(screen)));
                    }
                }
                _ => {}
            }
        }

        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }

        Ok(None)
    }

    /// Process a single action — update app state and propagate to screens.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::Resize(_, _) | Action::Render => {}

            Action::SwitchScreen(target) => {
                if *target != self.active_screen {
                    debug!("switching screen: {} -> {}", self.active_screen, target);
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(false);
                    }
                    self.active_screen = *target;
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(true);
                    }
                }
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            // Everything else goes to every screen: a request settling
            // while the user has tabbed away must still land.
            other => {
                let mut follow_ups = Vec::new();
                for screen in self.screens.values_mut() {
                    if let Some(follow_up) = screen.update(other)? {
                        follow_ups.push(follow_up);
                    }
                }
                for follow_up in follow_ups {
                    self.action_tx.send(follow_up)?;
                }
            }
        }

        Ok(())
    }

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::vertical([
            Constraint::Min(1),    // Screen content
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, layout[0]);
        }

        self.render_tab_bar(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let style = if id == self.active_screen {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(
                    format!(" {} {} ", id.number(), id.label()),
                    style,
                ))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", theme::dim_style()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );

        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.server.clone(), Style::default().fg(theme::TEAL)),
            Span::styled("  Tab next  ? help  Ctrl+C quit", theme::dim_style()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_width = 52u16.min(area.width.saturating_sub(4));
        let help_height = 14u16.min(area.height.saturating_sub(4));
        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;
        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_HIGHLIGHT)),
            help_area,
        );

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());
        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let key = |k: &str, desc: &str| {
            Line::from(vec![
                Span::styled(format!("  {k:<10}"), theme::text_style()),
                Span::styled(desc.to_owned(), theme::dim_style()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            key("Tab", "Next screen"),
            key("Shift+Tab", "Previous screen"),
            key("1-4", "Jump to screen (outside text fields)"),
            key("Enter", "Submit the active form"),
            key("r", "Refresh overview (on Overview)"),
            key("?", "This help (outside text fields)"),
            key("q", "Quit (outside text fields)"),
            key("Ctrl+C", "Quit from anywhere"),
            Line::from(""),
            Line::from(Span::styled(
                "                    Esc or ? to close",
                theme::dim_style(),
            )),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}
