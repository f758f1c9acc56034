// Purpose - external interfaces: serial byte acquisition and MIDI decoding

pub mod midi;
pub mod parser;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// Pull-style byte input, polled once per loop iteration.
///
/// `pop` returns `None` once the currently buffered bytes are exhausted; the
/// caller drains it and moves on to rendering.
pub trait ByteSource {
    fn pop(&mut self) -> Option<u8>;

    /// Whether a byte is ready right now.
    fn is_readable(&self) -> bool;
}

#[cfg(feature = "rtrb")]
impl ByteSource for Consumer<u8> {
    fn pop(&mut self) -> Option<u8> {
        Consumer::pop(self).ok()
    }

    fn is_readable(&self) -> bool {
        !self.is_empty()
    }
}

/// Replays a fixed byte buffer. Handy for tests and offline captures.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

impl ByteSource for SliceSource<'_> {
    fn pop(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }

    fn is_readable(&self) -> bool {
        self.pos < self.bytes.len()
    }
}
