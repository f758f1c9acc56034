//! TUI module for midimatrix
//!
//! Runs the host loop: drain MIDI bytes, update the layout, render a frame
//! at the configured rate and show it on the simulated panel.

pub mod log_pane;
mod matrix;
mod status;

use std::time::{Duration, Instant};

use log::info;
use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use midi_matrix::{
    config::MatrixConfig,
    io::ByteSource,
    render::{DisplaySink, FrameBuffer, DIAGNOSTIC_SEQUENCE},
    runtime::Pipeline,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};

use log_pane::render_log;
use matrix::{render_matrix, TerminalMatrix};
use status::{render_legend, render_status, Phase};

/// Brightness change per key press (stands in for the potentiometer)
const BRIGHTNESS_STEP: u8 = 16;

/// Longest we wait for a key before draining input again
const INPUT_POLL: Duration = Duration::from_millis(2);

/// UI application state
pub struct UiApp<S> {
    /// Bytes in, layout out
    pipeline: Pipeline<S>,
    config: MatrixConfig,
    /// Frame being composed
    frame: FrameBuffer,
    /// Where composed frames are sent
    display: TerminalMatrix,
    phase: Phase,
    phase_started: Instant,
    last_frame: Option<Instant>,
    should_quit: bool,
}

impl<S: ByteSource> UiApp<S> {
    /// Create a new UI application
    pub fn new(pipeline: Pipeline<S>, config: MatrixConfig, startup: bool) -> Self {
        let phase = if startup {
            Phase::Startup(0)
        } else {
            Phase::Running
        };

        Self {
            pipeline,
            frame: FrameBuffer::new(config.width, config.height),
            display: TerminalMatrix::new(config.width, config.height, config.brightness),
            config,
            phase,
            phase_started: Instant::now(),
            last_frame: None,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            // The self test owns the panel; bytes wait in the ring buffer
            if let Phase::Startup(_) = self.phase {
                self.advance_startup();
            } else {
                self.pipeline.poll();
            }

            let now = Instant::now();
            let due = self
                .last_frame
                .map_or(true, |last| now - last >= self.config.frame_interval);
            if due {
                self.compose_frame(now);
                self.display
                    .show(&self.frame)
                    .unwrap_or_else(|never| match never {});
                terminal.draw(|frame| self.render(frame))?;
                self.last_frame = Some(now);
            }

            if event::poll(INPUT_POLL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn advance_startup(&mut self) {
        let Phase::Startup(step) = self.phase else {
            return;
        };

        if self.phase_started.elapsed() < self.config.startup_step {
            return;
        }

        let next = step + 1;
        self.phase_started = Instant::now();
        if next < DIAGNOSTIC_SEQUENCE.len() {
            self.phase = Phase::Startup(next);
        } else {
            info!("self test done, listening for MIDI");
            self.phase = Phase::Running;
        }
    }

    /// Fill `self.frame` for the current phase
    fn compose_frame(&mut self, now: Instant) {
        match self.phase {
            Phase::Startup(step) => self.frame.fill(DIAGNOSTIC_SEQUENCE[step]),
            Phase::Flash => {
                if now - self.phase_started >= self.config.reset_flash {
                    self.phase = Phase::Running;
                    self.frame.draw_layout(self.pipeline.engine());
                } else {
                    self.frame.draw_reset_flash();
                }
            }
            Phase::Running => self.frame.draw_layout(self.pipeline.engine()),
        }
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                info!("reset requested");
                self.pipeline.reset();
                self.phase = Phase::Flash;
                self.phase_started = Instant::now();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let b = self.display.brightness().saturating_add(BRIGHTNESS_STEP);
                self.display.set_brightness(b);
            }
            KeyCode::Char('-') => {
                let b = self.display.brightness().saturating_sub(BRIGHTNESS_STEP);
                self.display.set_brightness(b);
            }
            _ => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let (matrix_width, matrix_height) = self.display.outer_size();

        // Main layout: status, panel + legend, log, help
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // Status bar
                Constraint::Length(matrix_height), // Panel
                Constraint::Min(4),                // Log
                Constraint::Length(1),             // Help bar
            ])
            .split(area);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(matrix_width), Constraint::Min(20)])
            .split(rows[1]);

        render_status(
            frame,
            rows[0],
            self.pipeline.engine(),
            self.pipeline.stats(),
            self.display.brightness(),
            self.phase,
        );
        render_matrix(frame, middle[0], &self.display);
        render_legend(frame, middle[1], self.pipeline.engine());
        render_log(frame, rows[2]);

        let help = Paragraph::new(" [Q] Quit  [R] Reset  [+/-] Brightness")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, rows[3]);
    }
}
