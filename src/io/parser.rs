use log::trace;

use super::midi::{
    data_len, is_status, message_type, status_channel, MidiEvent, CC_ALL_NOTES_OFF,
    CONTROL_CHANGE, NOTE_OFF, NOTE_ON, SYSEX_END, SYSEX_START,
};

/*
Streaming MIDI Parser
=====================

MIDI arrives over a 31,250 baud serial line with no framing at all. The only
structure is the high bit: status bytes have it set, data bytes don't.

  status   0x80-0xEF  channel voice (type in upper nibble, channel in lower)
           0xF0       start of system exclusive
           0xF1-0xF7  system common (0xF7 also ends a SysEx block)
           0xF8-0xFF  real-time (clock, start, stop, active sensing...)
  data     0x00-0x7F


Running Status
--------------

Senders may omit a status byte when it repeats the previous one:

    0x90 0x40 0x7F  0x50 0x7F  0x54 0x7F
    ^^^^            (no 0x90)  (no 0x90)

So after a channel voice message completes we remember its status and
reuse it for any data byte that shows up while we're waiting for a status.
System exclusive and system common bytes cancel running status.


Real-Time Bytes
---------------

Real-time bytes may be injected anywhere, including between the two data
bytes of a note-on. They are single-byte messages and must not disturb the
message in flight, so they are dropped without touching state.


The State Machine
-----------------

    ┌────────────────┐  0x80-0xEF   ┌──────────────┐  data (2-byte type)  ┌──────────────┐
    │ AwaitingStatus │ ───────────→ │ AwaitingData1│ ───────────────────→ │ AwaitingData2│
    └────────────────┘              └──────────────┘                      └──────────────┘
       ↑    │   ↑  data (1-byte type) │                                       │ data
       │    │   └─────────────────────┘                                       │ (emit)
       │    │   └─────────────────────────────────────────────────────────────┘
       │    │ 0xF0
       │    ↓
    ┌───────────────────┐
    │ InSystemExclusive │  everything swallowed until 0xF7
    └───────────────────┘

Nothing here can fail. Unexpected bytes are discarded and the parser keeps
going from a sane state.
*/

/// Where the parser is within the current message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    AwaitingStatus,
    AwaitingData1,
    AwaitingData2,
    InSystemExclusive,
}

/// Byte-at-a-time MIDI decoder.
///
/// Holds only the bytes of the message currently in flight, so it can be fed
/// straight from a UART without any framing buffer.
#[derive(Debug, Clone)]
pub struct MidiParser {
    state: ParserState,
    running_status: Option<u8>,
    current_status: u8,
    data1: u8,
}

impl MidiParser {
    pub fn new() -> Self {
        Self {
            state: ParserState::AwaitingStatus,
            running_status: None,
            current_status: 0,
            data1: 0,
        }
    }

    /// Consume one byte, returning the event it completes (if any).
    pub fn feed(&mut self, byte: u8) -> Option<MidiEvent> {
        if self.state == ParserState::InSystemExclusive {
            if byte == SYSEX_END {
                self.state = ParserState::AwaitingStatus;
            }
            return None;
        }

        if is_status(byte) {
            self.handle_status(byte);
            return None;
        }

        self.handle_data(byte)
    }

    /// Feed a whole slice, calling `on_event` for every completed message.
    pub fn feed_all(&mut self, bytes: &[u8], mut on_event: impl FnMut(MidiEvent)) {
        for &byte in bytes {
            if let Some(event) = self.feed(byte) {
                on_event(event);
            }
        }
    }

    /// Drop any message in flight and forget running status.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn running_status(&self) -> Option<u8> {
        self.running_status
    }

    fn handle_status(&mut self, byte: u8) {
        match byte {
            SYSEX_START => {
                self.state = ParserState::InSystemExclusive;
                self.running_status = None;
            }
            // Real-time: leave the in-flight message alone
            0xF8..=0xFF => {}
            // System common
            0xF1..=0xF7 => {
                trace!("system common byte {byte:#04x}, running status cleared");
                self.state = ParserState::AwaitingStatus;
                self.running_status = None;
            }
            _ => {
                self.current_status = byte;
                self.running_status = Some(byte);
                self.state = ParserState::AwaitingData1;
            }
        }
    }

    fn handle_data(&mut self, byte: u8) -> Option<MidiEvent> {
        match self.state {
            ParserState::AwaitingStatus => match self.running_status {
                Some(status) => {
                    self.current_status = status;
                    self.accept_data1(byte)
                }
                None => {
                    trace!("stray data byte {byte:#04x} with no running status");
                    None
                }
            },
            ParserState::AwaitingData1 => self.accept_data1(byte),
            ParserState::AwaitingData2 => {
                self.state = ParserState::AwaitingStatus;
                self.dispatch(self.data1, byte)
            }
            // Handled in feed()
            ParserState::InSystemExclusive => None,
        }
    }

    fn accept_data1(&mut self, byte: u8) -> Option<MidiEvent> {
        self.data1 = byte;
        if data_len(self.current_status) == 1 {
            // Program change / channel pressure: complete, but nothing to route
            self.state = ParserState::AwaitingStatus;
        } else {
            self.state = ParserState::AwaitingData2;
        }
        None
    }

    fn dispatch(&self, data1: u8, data2: u8) -> Option<MidiEvent> {
        let channel = status_channel(self.current_status);

        match message_type(self.current_status) {
            NOTE_OFF => Some(MidiEvent::NoteOff { channel, key: data1 }),
            NOTE_ON if data2 == 0 => Some(MidiEvent::NoteOff { channel, key: data1 }),
            NOTE_ON => Some(MidiEvent::NoteOn {
                channel,
                key: data1,
                velocity: data2,
            }),
            CONTROL_CHANGE if data1 == CC_ALL_NOTES_OFF => Some(MidiEvent::AllNotesOff { channel }),
            _ => None,
        }
    }
}

impl Default for MidiParser {
    fn default() -> Self {
        Self::new()
    }
}
