// Purpose: turning the layout into pixels and handing them to hardware

pub mod frame;
pub mod wiring;

pub use frame::{FrameBuffer, DIAGNOSTIC_SEQUENCE};
pub use wiring::{to_grb, PanelWiring};

/// Whatever actually lights the LEDs.
///
/// `show` transmits a complete frame and may block until the transfer is
/// done. The frame is logical (row-major); mapping to the physical chain is
/// the sink's job, usually via [`PanelWiring`].
pub trait DisplaySink {
    type Error;

    fn show(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error>;
}

/// Sink that serializes frames into a GRB word buffer in chain order.
///
/// This is what a DMA-driven strip driver would hand to its peripheral.
#[derive(Debug, Clone)]
pub struct ChainBuffer {
    wiring: PanelWiring,
    brightness: u8,
    words: Vec<u32>,
}

impl ChainBuffer {
    pub fn new(wiring: PanelWiring, brightness: u8) -> Self {
        Self {
            wiring,
            brightness,
            words: vec![0; wiring.led_count()],
        }
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Words from the last `show`, ready to shift out.
    pub fn words(&self) -> &[u32] {
        &self.words
    }
}

impl DisplaySink for ChainBuffer {
    type Error = std::convert::Infallible;

    fn show(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
        self.wiring.encode(frame, self.brightness, &mut self.words);
        Ok(())
    }
}
