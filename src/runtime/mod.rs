//! Host-side glue: bytes in, layout updated.
//!
//! A [`Pipeline`] owns the parser and the layout engine and is polled from
//! the host loop:
//!
//! ```ignore
//! use midi_matrix::{config::MatrixConfig, render::FrameBuffer, runtime::Pipeline};
//!
//! let (tx, rx) = rtrb::RingBuffer::<u8>::new(1024);
//! let mut pipeline = Pipeline::new(rx, &MatrixConfig::default());
//! let mut frame = FrameBuffer::new(32, 16);
//!
//! loop {
//!     pipeline.poll();
//!     frame.draw_layout(pipeline.engine());
//!     // sink.show(&frame)?;
//! }
//! ```

mod pipeline;

pub use pipeline::{Pipeline, PipelineStats};
