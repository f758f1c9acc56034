//! Benchmarks for frame composition and chain encoding.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use midi_matrix::{
    layout::LayoutEngine,
    render::{ChainBuffer, DisplaySink, FrameBuffer, PanelWiring},
    MAX_CHANNELS,
};

pub fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages/render");

    // Every channel holding every fourth note
    let mut engine = LayoutEngine::default();
    for channel in 0..MAX_CHANNELS {
        engine.register_channel(channel);
        for note in (0..128).step_by(4) {
            engine.register_note(channel, note);
            engine.set_active(channel, note, true);
        }
    }

    let mut frame = FrameBuffer::new(32, 16);
    group.bench_function("draw_layout", |b| {
        b.iter(|| frame.draw_layout(black_box(&engine)))
    });

    group.bench_function("draw_reset_flash", |b| b.iter(|| frame.draw_reset_flash()));

    for &(width, height) in &[(32u16, 16u16), (64, 32)] {
        let leds = width as usize * height as usize;
        let mut frame = FrameBuffer::new(width, height);
        frame.draw_reset_flash();
        let mut sink = ChainBuffer::new(PanelWiring::new(width, height, 8), 200);

        group.bench_with_input(BenchmarkId::new("encode_grb", leds), &leds, |b, _| {
            b.iter(|| {
                let _ = sink.show(black_box(&frame));
                black_box(sink.words());
            })
        });
    }

    group.finish();
}
