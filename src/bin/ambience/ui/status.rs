//! Status bar and volume gauge

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::player::Player;

/// Level of the most recent scope window
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

pub fn render_status(frame: &mut Frame, area: Rect, player: &Player, stats: &AudioStats) {
    let block = Block::default().title(" ambience ").borders(Borders::ALL);

    let (symbol, state, colour) = if player.is_running() {
        ("▶", "Playing", Color::Green)
    } else {
        ("■", "Stopped", Color::Yellow)
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {}  ", player.kind()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(format!("{symbol} {state}  "), Style::default().fg(colour)),
        Span::styled(
            format!("{:.1}kHz  ", player.sample_rate() / 1000.0),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", stats.peak, stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

pub fn render_volume(frame: &mut Frame, area: Rect, volume: f32) {
    let gauge = Gauge::default()
        .block(Block::default().title(" Volume ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(volume.clamp(0.0, 1.0) as f64)
        .label(format!("{:.0}%", volume * 100.0));
    frame.render_widget(gauge, area);
}
