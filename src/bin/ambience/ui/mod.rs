//! TUI module for ambience
//!
//! Shows what is playing, the volume and a scope of the output.

mod scope;
mod status;

use ambience_dsp::GeneratorType;
use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use std::time::Duration;

use super::player::Player;
use scope::render_scope;
use status::{render_status, render_volume, AudioStats};

/// Samples kept for the scope
const SCOPE_LEN: usize = 1024;
const VOLUME_STEP: f32 = 0.05;

pub struct UiApp {
    player: Player,
    scope_rx: Consumer<f32>,
    scope: Vec<f32>,
    last_error: Option<String>,
    should_quit: bool,
}

impl UiApp {
    pub fn new(player: Player, scope_rx: Consumer<f32>) -> Self {
        Self {
            player,
            scope_rx,
            scope: vec![0.0; SCOPE_LEN],
            last_error: None,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_scope();
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    fn poll_scope(&mut self) {
        let before = self.scope.len();
        while let Ok(sample) = self.scope_rx.pop() {
            self.scope.push(sample);
        }
        if self.scope.len() > before && self.scope.len() > SCOPE_LEN {
            let excess = self.scope.len() - SCOPE_LEN;
            self.scope.drain(0..excess);
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.player.nudge_volume(VOLUME_STEP);
            }
            KeyCode::Down | KeyCode::Char('-') => {
                self.player.nudge_volume(-VOLUME_STEP);
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                let kind = GeneratorType::ALL[index];
                self.last_error = self.player.switch(kind).err().map(|err| {
                    log::error!("could not switch to {kind}: {err:#}");
                    format!("{err}")
                });
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Length(3), // Volume
                Constraint::Min(6),    // Scope
                Constraint::Length(1), // Help
            ])
            .split(frame.area());

        let stats = AudioStats::from_buffer(&self.scope);
        render_status(frame, chunks[0], &self.player, &stats);
        render_volume(frame, chunks[1], self.player.volume());
        render_scope(frame, chunks[2], &self.scope);

        let help = match &self.last_error {
            Some(err) => Paragraph::new(format!(" error: {err}"))
                .style(Style::default().fg(Color::Red)),
            None => Paragraph::new(
                " [Q] Quit  [↑/↓] Volume  [1] Noise  [2] Rain  [3] Forest  [4] Waves  [5] Lo-fi",
            )
            .style(Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(help, chunks[3]);
    }
}
