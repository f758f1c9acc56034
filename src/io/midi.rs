#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fully decoded message, as produced by [`MidiParser`](super::parser::MidiParser).
///
/// Only the messages the matrix reacts to are surfaced; everything else the
/// parser decodes is dropped on the floor.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiEvent {
    NoteOn { channel: u8, key: u8, velocity: u8 },
    NoteOff { channel: u8, key: u8 },
    /// Controller 123 on a channel. Routed as a note-off for every key.
    AllNotesOff { channel: u8 },
}

impl MidiEvent {
    pub fn channel(&self) -> u8 {
        match *self {
            MidiEvent::NoteOn { channel, .. }
            | MidiEvent::NoteOff { channel, .. }
            | MidiEvent::AllNotesOff { channel } => channel,
        }
    }
}

// Status nibbles (upper four bits of a channel voice status byte)
pub const NOTE_OFF: u8 = 0x80;
pub const NOTE_ON: u8 = 0x90;
pub const POLY_PRESSURE: u8 = 0xA0;
pub const CONTROL_CHANGE: u8 = 0xB0;
pub const PROGRAM_CHANGE: u8 = 0xC0;
pub const CHANNEL_PRESSURE: u8 = 0xD0;
pub const PITCH_BEND: u8 = 0xE0;

// System bytes
pub const SYSEX_START: u8 = 0xF0;
pub const SYSEX_END: u8 = 0xF7;
pub const TIMING_CLOCK: u8 = 0xF8;
pub const START: u8 = 0xFA;
pub const ACTIVE_SENSING: u8 = 0xFE;

/// Controller number for "All Notes Off"
pub const CC_ALL_NOTES_OFF: u8 = 123;

#[inline]
pub fn is_status(byte: u8) -> bool {
    byte & 0x80 != 0
}

#[inline]
pub fn message_type(status: u8) -> u8 {
    status & 0xF0
}

#[inline]
pub fn status_channel(status: u8) -> u8 {
    status & 0x0F
}

/// Number of data bytes that follow a channel voice status byte.
#[inline]
pub fn data_len(status: u8) -> usize {
    match message_type(status) {
        PROGRAM_CHANGE | CHANNEL_PRESSURE => 1,
        _ => 2,
    }
}
