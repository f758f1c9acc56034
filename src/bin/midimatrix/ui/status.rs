//! Status bar and channel legend

use midi_matrix::{layout::LayoutEngine, runtime::PipelineStats, MAX_CHANNELS};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the loop is doing right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Power-on color test, showing step `n`
    Startup(usize),
    Running,
    /// Reset feedback
    Flash,
}

/// Render the status bar
pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    engine: &LayoutEngine,
    stats: PipelineStats,
    brightness: u8,
    phase: Phase,
) {
    let block = Block::default().title(" midimatrix ").borders(Borders::ALL);

    let (phase_str, phase_color) = match phase {
        Phase::Startup(_) => ("● Self test", Color::Yellow),
        Phase::Running => ("▶ Running", Color::Green),
        Phase::Flash => ("✱ Reset", Color::Magenta),
    };

    let line = Line::from(vec![
        Span::styled(format!(" {phase_str}  "), Style::default().fg(phase_color)),
        Span::styled(
            format!(
                "Channels: {}/{}  ",
                engine.seen_channel_count(),
                MAX_CHANNELS
            ),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("Held: {}  ", engine.active_note_count()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Bytes: {}  Events: {}  ", stats.bytes, stats.events),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Brightness: {brightness}"),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render one line per seen channel: color swatch, index, note count
pub fn render_legend(frame: &mut Frame, area: Rect, engine: &LayoutEngine) {
    let block = Block::default().title(" Channels ").borders(Borders::ALL);

    let lines: Vec<Line> = engine
        .seen_channels()
        .map(|(index, channel)| {
            let rgb = channel.color();
            let region = channel.region();
            Line::from(vec![
                Span::styled(
                    "■ ",
                    Style::default().fg(Color::Rgb(rgb.r(), rgb.g(), rgb.b())),
                ),
                // MIDI channels are numbered from 1 on the front panel
                Span::raw(format!("ch {:2}  ", index + 1)),
                Span::styled(
                    format!(
                        "{:3} notes  {}x{}@{},{}",
                        channel.seen_note_count(),
                        region.w,
                        region.h,
                        region.x,
                        region.y
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
