//! Demo - a small looping performance as raw MIDI bytes
//!
//! Parts come in one bar at a time so the matrix can be watched splitting
//! itself up. The byte stream deliberately uses the awkward corners of the
//! protocol: running status, clock bytes in the middle of messages, SysEx
//! blocks, velocity-zero note-offs and All Notes Off.

use std::time::Duration;

/// Steps per bar (sixteenth notes)
const STEPS: usize = 16;

/// One instrument: a channel, a 16-step grid and how long notes ring
struct Part {
    channel: u8,
    /// Bar at which the part joins
    enters: usize,
    /// Steps a note is held for
    gate: usize,
    grid: [&'static [u8]; STEPS],
}

const NONE: &[u8] = &[];

#[rustfmt::skip]
const PARTS: [Part; 6] = [
    // Drums: kick, snare, hats
    Part {
        channel: 9,
        enters: 0,
        gate: 1,
        grid: [
            &[36, 42], NONE, &[42], NONE, &[38, 42], NONE, &[42], NONE,
            &[36, 42], NONE, &[36, 42], NONE, &[38, 42], NONE, &[42], &[46],
        ],
    },
    // Chords
    Part {
        channel: 0,
        enters: 1,
        gate: 7,
        grid: [
            &[60, 64, 67], NONE, NONE, NONE, NONE, NONE, NONE, NONE,
            &[57, 60, 64], NONE, NONE, NONE, NONE, NONE, NONE, NONE,
        ],
    },
    // Bass
    Part {
        channel: 1,
        enters: 2,
        gate: 2,
        grid: [
            &[36], NONE, NONE, &[36], NONE, NONE, &[43], NONE,
            &[33], NONE, NONE, &[33], NONE, NONE, &[40], &[43],
        ],
    },
    // Arpeggio
    Part {
        channel: 4,
        enters: 3,
        gate: 1,
        grid: [
            &[72], &[76], &[79], &[84], &[79], &[76], &[72], &[76],
            &[69], &[72], &[76], &[81], &[76], &[72], &[69], &[72],
        ],
    },
    // Pad
    Part {
        channel: 6,
        enters: 4,
        gate: 15,
        grid: [
            &[48, 55], NONE, NONE, NONE, NONE, NONE, NONE, NONE,
            NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE,
        ],
    },
    // Bells
    Part {
        channel: 12,
        enters: 5,
        gate: 3,
        grid: [
            NONE, NONE, &[96], NONE, NONE, NONE, NONE, NONE,
            NONE, NONE, &[91], NONE, NONE, NONE, &[93], NONE,
        ],
    },
];

/// Bars between All Notes Off sweeps
const SWEEP_EVERY: usize = 8;

/// GM System On, sent every few bars to exercise SysEx skipping
const GM_ON: [u8; 6] = [0xF0, 0x7E, 0x7F, 0x09, 0x01, 0xF7];

/// Step-by-step byte generator. Deterministic; loops forever.
pub struct DemoPerformance {
    step: usize,
    /// (release step, channel, key)
    held: Vec<(usize, u8, u8)>,
}

impl DemoPerformance {
    /// Sixteenth notes at 120 BPM
    pub const STEP: Duration = Duration::from_millis(125);

    pub fn new() -> Self {
        Self {
            step: 0,
            held: Vec::with_capacity(32),
        }
    }

    /// Append the bytes for the next step to `out`.
    pub fn step(&mut self, out: &mut Vec<u8>) {
        let step = self.step;
        let bar = step / STEPS;
        let pos = step % STEPS;

        if pos == 0 && bar % 4 == 3 {
            out.extend_from_slice(&GM_ON);
        }

        if pos == 0 && bar > 0 && bar % SWEEP_EVERY == 0 {
            self.sweep(out);
        }

        self.release_due(step, bar, out);

        for part in PARTS.iter().filter(|p| bar >= p.enters) {
            let keys = part.grid[pos];
            if keys.is_empty() {
                continue;
            }

            // One status byte, then running status for the rest of the chord.
            // A clock tick lands between status and data.
            out.push(0x90 | part.channel);
            out.push(0xF8);
            for &key in keys {
                out.extend_from_slice(&[key, velocity(pos)]);
                self.held.push((step + part.gate, part.channel, key));
            }
        }

        self.step += 1;
    }

    /// Release notes whose gate has run out. Alternates between real
    /// note-offs and velocity-zero note-ons from bar to bar.
    fn release_due(&mut self, step: usize, bar: usize, out: &mut Vec<u8>) {
        let status = if bar % 2 == 0 { 0x90 } else { 0x80 };
        let mut running = None;

        self.held.retain(|&(due, channel, key)| {
            if due > step {
                return true;
            }
            let byte = status | channel;
            if running != Some(byte) {
                out.push(byte);
                running = Some(byte);
            }
            out.extend_from_slice(&[key, 0]);
            false
        });
    }

    /// All Notes Off on every channel still holding something
    fn sweep(&mut self, out: &mut Vec<u8>) {
        let mut channels: Vec<u8> = self.held.iter().map(|&(_, ch, _)| ch).collect();
        channels.sort_unstable();
        channels.dedup();

        for channel in channels {
            out.extend_from_slice(&[0xB0 | channel, 123, 0]);
        }
        self.held.clear();
    }
}

impl Default for DemoPerformance {
    fn default() -> Self {
        Self::new()
    }
}

/// Accent the downbeats
fn velocity(pos: usize) -> u8 {
    if pos % 4 == 0 {
        110
    } else {
        80
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use midi_matrix::{
        config::MatrixConfig,
        io::{midi::MidiEvent, parser::MidiParser},
        layout::LayoutEngine,
        router::route,
    };

    fn play(steps: usize) -> (LayoutEngine, Vec<MidiEvent>) {
        let config = MatrixConfig::default();
        let mut engine = LayoutEngine::new(config.width, config.height);
        let mut parser = MidiParser::new();
        let mut demo = DemoPerformance::new();
        let mut events = Vec::new();
        let mut bytes = Vec::new();

        for _ in 0..steps {
            bytes.clear();
            demo.step(&mut bytes);
            parser.feed_all(&bytes, |e| {
                route(e, &mut engine);
                events.push(e);
            });
        }
        (engine, events)
    }

    #[test]
    fn parts_enter_one_bar_at_a_time() {
        let (engine, _) = play(STEPS);
        assert_eq!(engine.seen_channel_count(), 1);

        let (engine, _) = play(STEPS * 6);
        assert_eq!(engine.seen_channel_count(), PARTS.len());
    }

    #[test]
    fn every_note_on_survives_the_awkward_bytes() {
        let (_, events) = play(STEPS);
        let note_ons = events
            .iter()
            .filter(|e| matches!(e, MidiEvent::NoteOn { .. }))
            .count();
        let expected: usize = PARTS[0].grid.iter().map(|keys| keys.len()).sum();
        assert_eq!(note_ons, expected);
    }

    #[test]
    fn sweeps_send_all_notes_off() {
        let (_, events) = play(STEPS * SWEEP_EVERY + 1);
        assert!(events
            .iter()
            .any(|e| matches!(e, MidiEvent::AllNotesOff { .. })));
    }
}
