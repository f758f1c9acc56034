//! Pipeline - one byte source feeding one layout

use log::trace;

use crate::{
    config::MatrixConfig,
    io::{parser::MidiParser, ByteSource},
    layout::LayoutEngine,
    router::route,
};

/// Running counters, mostly for status displays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Raw bytes pulled from the source
    pub bytes: u64,
    /// Decoded events applied to the layout
    pub events: u64,
}

/// Parser + router + layout engine driven by a [`ByteSource`]
pub struct Pipeline<S> {
    source: S,
    parser: MidiParser,
    engine: LayoutEngine,
    stats: PipelineStats,
}

impl<S: ByteSource> Pipeline<S> {
    /// Create a pipeline sized from `config`
    pub fn new(source: S, config: &MatrixConfig) -> Self {
        Self {
            source,
            parser: MidiParser::new(),
            engine: LayoutEngine::new(config.width, config.height),
            stats: PipelineStats::default(),
        }
    }

    /// Drain every byte currently available and apply the resulting events.
    ///
    /// Returns how many events were applied this call.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;

        while let Some(byte) = self.source.pop() {
            self.stats.bytes += 1;
            if let Some(event) = self.parser.feed(byte) {
                trace!("{event:?}");
                route(event, &mut self.engine);
                applied += 1;
            }
        }

        self.stats.events += applied as u64;
        applied
    }

    /// Clear the layout. The parser keeps its place in the byte stream.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Read-only view for render consumers
    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn stats(&self) -> PipelineStats {
        self.stats
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
