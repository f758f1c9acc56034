#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::MAX_CHANNELS;

/// 24-bit color, `0x00RRGGBB`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x000000);
    pub const RED: Rgb = Rgb(0xFF0000);
    pub const GREEN: Rgb = Rgb(0x00FF00);
    pub const BLUE: Rgb = Rgb(0x0000FF);
    pub const CYAN: Rgb = Rgb(0x00FFFF);

    pub const fn from_components(r: u8, g: u8, b: u8) -> Self {
        Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn b(self) -> u8 {
        self.0 as u8
    }

    /// Scale every component by `brightness / 256`.
    pub fn scaled(self, brightness: u8) -> Self {
        let scale = |c: u8| ((c as u16 * brightness as u16) >> 8) as u8;
        Self::from_components(scale(self.r()), scale(self.g()), scale(self.b()))
    }
}

/// One color per channel, spread around the hue wheel for the first twelve
/// and then a few earthy tones so neighbours stay distinguishable.
pub const CHANNEL_PALETTE: [Rgb; MAX_CHANNELS] = [
    Rgb(0xFF0000), // Red
    Rgb(0xFF8000), // Orange
    Rgb(0xFFFF00), // Yellow
    Rgb(0x80FF00), // Chartreuse
    Rgb(0x00FF00), // Green
    Rgb(0x00FF80), // Spring green
    Rgb(0x00FFFF), // Cyan
    Rgb(0x0080FF), // Azure
    Rgb(0x0000FF), // Blue
    Rgb(0x8000FF), // Violet
    Rgb(0xFF00FF), // Magenta
    Rgb(0xFF0080), // Rose
    Rgb(0x8B4513), // Saddle brown
    Rgb(0x008080), // Teal
    Rgb(0x800080), // Purple
    Rgb(0x708090), // Slate gray
];

/// Palette color for a channel index; `None` out of range.
pub fn channel_color(channel: usize) -> Option<Rgb> {
    CHANNEL_PALETTE.get(channel).copied()
}
