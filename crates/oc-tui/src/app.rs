//! Application state and main UI controller

use std::io;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::{Frame, Terminal, backend::Backend};

use oc_core::action::{Command, InputMode};
use oc_core::{Frontend, GameState};

use crate::input::key_to_command;
use crate::widgets::{MapWidget, MessagesWidget, StatusWidget};

const BATTLE_PROMPT: &str = "Press A to attack";

/// Terminal front end: draws with ratatui, reads keys with crossterm
pub struct App<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> App<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Hand the terminal back for teardown
    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }
}

/// Render the UI: status bar, map, then messages
pub fn draw(frame: &mut Frame, state: &GameState, mode: InputMode) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                              // Status bar
            Constraint::Length(state.level.height() as u16 + 2), // Map + border
            Constraint::Min(3),                                 // Messages
        ])
        .split(frame.area());

    frame.render_widget(StatusWidget::new(state, mode), chunks[0]);
    frame.render_widget(MapWidget::new(&state.level), chunks[1]);

    let messages = MessagesWidget::new(&state.messages);
    let messages = match mode {
        InputMode::Battle => messages.prompt(BATTLE_PROMPT),
        InputMode::Explore => messages,
    };
    frame.render_widget(messages, chunks[2]);
}

impl<B: Backend> Frontend for App<B> {
    fn render(&mut self, state: &GameState, mode: InputMode) -> io::Result<()> {
        self.terminal.draw(|frame| draw(frame, state, mode))?;
        Ok(())
    }

    fn next_command(&mut self, mode: InputMode) -> io::Result<Command> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key_to_command(key, mode) {
                    Some(command) => return Ok(command),
                    None => tracing::trace!(?key, %mode, "unbound key"),
                }
            }
        }
    }

    fn pause(&mut self, pace: Duration) {
        thread::sleep(pace);
    }
}
