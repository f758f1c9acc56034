//! midimatrix - MIDI-driven LED matrix, simulated in the terminal
//!
//! Run with: cargo run -- --input capture.mid.raw

mod app;
mod demo;
mod feed;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use midi_matrix::config::MatrixConfig;

use app::MidiMatrix;
use feed::Feed;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raw MIDI byte stream to replay ("-" reads stdin). Plays a built-in demo when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Matrix width in LEDs
    #[arg(long, default_value_t = midi_matrix::DEFAULT_WIDTH)]
    width: u16,

    /// Matrix height in LEDs
    #[arg(long, default_value_t = midi_matrix::DEFAULT_HEIGHT)]
    height: u16,

    /// Rows per physical panel
    #[arg(long, default_value_t = 8)]
    panel_rows: u16,

    /// Initial brightness (0-255)
    #[arg(short, long, default_value_t = 255)]
    brightness: u8,

    /// Frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Most verbose log level shown in the log pane
    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,

    /// Skip the power-on color test
    #[arg(long)]
    no_startup: bool,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    ui::log_pane::init(cli.log_level).wrap_err("failed to install logger")?;

    let config = MatrixConfig::new()
        .size(cli.width, cli.height)
        .panel_rows(cli.panel_rows)
        .brightness(cli.brightness)
        .fps(cli.fps);

    let feed = match cli.input {
        None => Feed::Demo,
        Some(path) => Feed::open(&path)?,
    };

    MidiMatrix::new(config)
        .feed(feed)
        .startup(!cli.no_startup)
        .run()
}
