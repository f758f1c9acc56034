//! Benchmarks for tiling and the layout engine.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use midi_matrix::{
    layout::{tiling, LayoutEngine, Rect},
    MAX_CHANNELS, MAX_NOTES,
};

/// Engine with every channel seen and `notes` notes on each.
fn populated(notes: usize) -> LayoutEngine {
    let mut engine = LayoutEngine::default();
    for channel in 0..MAX_CHANNELS {
        engine.register_channel(channel);
        for note in 0..notes {
            engine.register_note(channel, note);
        }
    }
    engine
}

pub fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages/layout");
    let area = Rect::sized(32, 16);

    for &n in &[1usize, 16, MAX_NOTES] {
        let mut out = [Rect::EMPTY; MAX_NOTES];
        group.bench_with_input(BenchmarkId::new("tile", n), &n, |b, &n| {
            b.iter(|| tiling::tile(black_box(area), &mut out[..n]))
        });
    }

    // Worst case: 16 channels, all 128 notes each
    for &notes in &[0usize, 8, MAX_NOTES] {
        let mut engine = populated(notes);
        group.bench_with_input(BenchmarkId::new("recompute", notes), &notes, |b, _| {
            b.iter(|| {
                engine.recompute();
                black_box(&engine);
            })
        });
    }

    // Registering a whole channel map from scratch, as the first bars of a song do
    group.bench_function("register_all", |b| {
        b.iter(|| black_box(populated(black_box(16))))
    });

    // Flag flips only, the common case once a song is running
    let mut engine = populated(MAX_NOTES);
    group.bench_function("set_active", |b| {
        b.iter(|| {
            for note in 0..MAX_NOTES {
                engine.set_active(black_box(3), note, note % 2 == 0);
            }
        })
    });

    group.finish();
}
