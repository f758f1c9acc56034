use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};
use midi_matrix::{config::MatrixConfig, io::SliceSource, runtime::Pipeline};

use crate::BATCH_SIZES;

/// A single player: one channel, chords under running status.
fn keyboard(len: usize) -> Vec<u8> {
    let mut bytes = vec![0x90];
    let chords: [[u8; 3]; 4] = [[60, 64, 67], [57, 60, 64], [53, 57, 60], [55, 59, 62]];
    for chord in chords.iter().cycle() {
        if bytes.len() >= len {
            break;
        }
        for &key in chord {
            bytes.extend([key, 96]);
        }
        for &key in chord {
            bytes.extend([key, 0]);
        }
    }
    bytes.truncate(len);
    bytes
}

/// A sequencer sweeping all sixteen channels with clock ticks in between.
fn sequencer(len: usize) -> Vec<u8> {
    (0..)
        .flat_map(|i: usize| {
            let channel = (i % 16) as u8;
            let key = (24 + (i * 5) % 96) as u8;
            [0x90 | channel, key, 110, 0xF8, 0x80 | channel, key, 64]
        })
        .take(len)
        .collect()
}

pub fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/stream");
    let config = MatrixConfig::default();

    for &size in BATCH_SIZES {
        group.throughput(Throughput::Bytes(size as u64));

        for (name, bytes) in [("keyboard", keyboard(size)), ("sequencer", sequencer(size))] {
            group.bench_with_input(BenchmarkId::new(name, size), &bytes, |b, bytes| {
                b.iter(|| {
                    let mut pipeline = Pipeline::new(SliceSource::new(black_box(bytes)), &config);
                    black_box(pipeline.poll())
                })
            });
        }
    }

    group.finish();
}
