//! Log pane - captures `log` records for display inside the TUI
//!
//! The terminal belongs to ratatui while the app runs, so records are kept
//! in memory and drawn in their own pane instead of going to stderr.

use std::{collections::VecDeque, sync::Mutex};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Records kept for display
const CAPACITY: usize = 200;

struct LogLine {
    level: Level,
    text: String,
}

struct PaneLogger {
    lines: Mutex<VecDeque<LogLine>>,
}

static LOGGER: PaneLogger = PaneLogger {
    lines: Mutex::new(VecDeque::new()),
};

/// Install the pane logger as the global `log` backend
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

impl Log for PaneLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == CAPACITY {
                lines.pop_front();
            }
            lines.push_back(LogLine {
                level: record.level(),
                text: record.args().to_string(),
            });
        }
    }

    fn flush(&self) {}
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Cyan,
        Level::Trace => Color::DarkGray,
    }
}

/// Render the most recent records that fit in `area`
pub fn render_log(frame: &mut Frame, area: Rect) {
    let block = Block::default().title(" Log ").borders(Borders::ALL);
    let visible = block.inner(area).height as usize;

    let lines: Vec<Line> = match LOGGER.lines.lock() {
        Ok(lines) => lines
            .iter()
            .skip(lines.len().saturating_sub(visible))
            .map(|line| {
                Line::from(vec![
                    Span::styled(
                        format!("{:5} ", line.level),
                        Style::default().fg(level_color(line.level)),
                    ),
                    Span::raw(line.text.clone()),
                ])
            })
            .collect(),
        Err(_) => Vec::new(),
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
