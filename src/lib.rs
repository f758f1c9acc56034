pub mod config;
pub mod io; // Serial byte input and MIDI decoding
pub mod layout; // Adaptive channel/note regions
pub mod render; // Frame buffers and display sinks
pub mod router;
pub mod runtime;

pub const MAX_CHANNELS: usize = 16;
pub const MAX_NOTES: usize = 128;

/// Two stacked 32x8 panels.
pub const DEFAULT_WIDTH: u16 = 32;
pub const DEFAULT_HEIGHT: u16 = 16;
