//! Whole-pipeline benchmarks.
//!
//! Byte streams shaped like real keyboard and sequencer output, fed through
//! parser, router and layout the way the main loop does it.

mod stream;

pub use stream::bench_stream;
