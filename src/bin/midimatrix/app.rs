//! MidiMatrix - main application builder and runner

use color_eyre::eyre::Result as EyreResult;
use log::info;
use midi_matrix::{config::MatrixConfig, runtime::Pipeline};
use rtrb::RingBuffer;

use super::feed::Feed;
use super::ui::UiApp;

/// Bytes buffered between the feed thread and the UI loop.
/// About a second of MIDI at wire speed.
const RING_CAPACITY: usize = 4096;

/// Main application builder
pub struct MidiMatrix {
    config: MatrixConfig,
    feed: Feed,
    startup: bool,
}

impl MidiMatrix {
    /// Create a new instance playing the demo
    pub fn new(config: MatrixConfig) -> Self {
        Self {
            config,
            feed: Feed::Demo,
            startup: true,
        }
    }

    /// Set where MIDI bytes come from
    pub fn feed(mut self, feed: Feed) -> Self {
        self.feed = feed;
        self
    }

    /// Run the power-on color test first
    pub fn startup(mut self, enabled: bool) -> Self {
        self.startup = enabled;
        self
    }

    /// Run the application (takes over the terminal until quit)
    pub fn run(self) -> EyreResult<()> {
        let (tx, rx) = RingBuffer::<u8>::new(RING_CAPACITY);

        info!(
            "matrix {}x{} ({} LEDs), {} rows per panel",
            self.config.width,
            self.config.height,
            self.config.led_count(),
            self.config.panel_rows
        );

        // Detached: it notices the consumer going away and exits on its own
        let _feed = self.feed.spawn(tx)?;

        let pipeline = Pipeline::new(rx, &self.config);
        let mut app = UiApp::new(pipeline, self.config, self.startup);

        let mut terminal = ratatui::init();
        let result = app.run(&mut terminal);
        ratatui::restore();
        result
    }
}
