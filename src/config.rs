//! Matrix and host-loop settings.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Everything the host needs to drive one matrix.
///
/// Dimensions are read once when the engine is built; changing them later
/// has no effect on a running engine.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixConfig {
    /// Logical columns
    pub width: u16,
    /// Logical rows
    pub height: u16,
    /// Rows per physical panel (panels are stacked vertically)
    pub panel_rows: u16,
    /// Global brightness, 0-255
    pub brightness: u8,
    /// Minimum time between transmitted frames
    pub frame_interval: Duration,
    /// How long each startup diagnostic color is held
    pub startup_step: Duration,
    /// How long the reset flash stays up
    pub reset_flash: Duration,
}

impl MatrixConfig {
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            panel_rows: 8,
            brightness: 255,
            frame_interval: Duration::from_millis(16),
            startup_step: Duration::from_millis(500),
            reset_flash: Duration::from_millis(250),
        }
    }

    /// Set the logical matrix size
    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn panel_rows(mut self, rows: u16) -> Self {
        self.panel_rows = rows;
        self
    }

    pub fn brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set the frame rate (frames per second)
    pub fn fps(mut self, fps: u32) -> Self {
        self.frame_interval = Duration::from_secs(1) / fps.max(1);
        self
    }

    pub fn startup_step(mut self, step: Duration) -> Self {
        self.startup_step = step;
        self
    }

    pub fn reset_flash(mut self, flash: Duration) -> Self {
        self.reset_flash = flash;
        self
    }

    pub fn led_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self::new()
    }
}
