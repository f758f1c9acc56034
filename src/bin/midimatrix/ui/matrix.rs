//! Matrix widget - the simulated LED panel
//!
//! Plays the part of the strip driver: frames are "transmitted" to it via
//! [`DisplaySink`] and drawn as two-character blocks per LED.

use std::convert::Infallible;

use midi_matrix::{
    layout::Rgb,
    render::{DisplaySink, FrameBuffer},
};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Terminal columns per LED (keeps cells roughly square)
pub const CELL_WIDTH: u16 = 2;

/// The last frame shown, after brightness
pub struct TerminalMatrix {
    brightness: u8,
    shown: FrameBuffer,
}

impl TerminalMatrix {
    pub fn new(width: u16, height: u16, brightness: u8) -> Self {
        Self {
            brightness,
            shown: FrameBuffer::new(width, height),
        }
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Terminal size needed to show the whole panel, borders included
    pub fn outer_size(&self) -> (u16, u16) {
        (
            self.shown.width() * CELL_WIDTH + 2,
            self.shown.height() + 2,
        )
    }
}

impl DisplaySink for TerminalMatrix {
    type Error = Infallible;

    fn show(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
        self.shown = frame.scaled(self.brightness);
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r(), rgb.g(), rgb.b())
}

/// Render the panel
pub fn render_matrix(frame: &mut Frame, area: Rect, matrix: &TerminalMatrix) {
    let shown = &matrix.shown;
    let block = Block::default()
        .title(format!(" {}x{} ", shown.width(), shown.height()))
        .borders(Borders::ALL);

    let lines: Vec<Line> = (0..shown.height())
        .map(|y| {
            let spans: Vec<Span> = (0..shown.width())
                .map(|x| match shown.get(x, y) {
                    Some(rgb) if rgb != Rgb::BLACK => {
                        Span::styled("██", Style::default().fg(to_color(rgb)))
                    }
                    // Unlit LEDs stay visible as a faint grid
                    _ => Span::styled("··", Style::default().fg(Color::DarkGray)),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
