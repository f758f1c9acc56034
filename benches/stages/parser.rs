//! Benchmarks for the byte-level MIDI parser.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};
use midi_matrix::io::parser::MidiParser;

use crate::BATCH_SIZES;

/// Note-on/note-off pairs with explicit status bytes.
fn explicit_status(len: usize) -> Vec<u8> {
    (0..)
        .flat_map(|i: usize| {
            let channel = (i % 16) as u8;
            let key = (36 + i % 48) as u8;
            [0x90 | channel, key, 100, 0x80 | channel, key, 0]
        })
        .take(len)
        .collect()
}

/// One status byte, then data pairs only.
fn running_status(len: usize) -> Vec<u8> {
    let mut bytes = vec![0x90];
    bytes.extend(
        (0..)
            .flat_map(|i: usize| [(i % 128) as u8, if i % 2 == 0 { 90 } else { 0 }])
            .take(len - 1),
    );
    bytes
}

/// Notes interleaved with clock ticks and short SysEx blocks.
fn noisy(len: usize) -> Vec<u8> {
    (0..)
        .flat_map(|i: usize| {
            let key = (i % 128) as u8;
            [0x93, key, 0xF8, 64, 0xF0, 0x7E, 0x7F, 0x09, 0x01, 0xF7, 0xFE]
        })
        .take(len)
        .collect()
}

pub fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages/parser");

    for &size in BATCH_SIZES {
        group.throughput(Throughput::Bytes(size as u64));

        let streams = [
            ("explicit_status", explicit_status(size)),
            ("running_status", running_status(size)),
            ("realtime_sysex", noisy(size)),
        ];

        for (name, bytes) in &streams {
            let mut parser = MidiParser::new();
            group.bench_with_input(BenchmarkId::new(*name, size), bytes, |b, bytes| {
                b.iter(|| {
                    let mut events = 0usize;
                    parser.feed_all(black_box(bytes), |event| {
                        black_box(event);
                        events += 1;
                    });
                    events
                })
            });
        }
    }

    group.finish();
}
