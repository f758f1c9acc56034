//! Benchmarks for the individual stages.

mod layout;
mod parser;
mod render;

pub use layout::bench_layout;
pub use parser::bench_parser;
pub use render::bench_render;
