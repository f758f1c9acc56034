use crate::layout::{LayoutEngine, Rect, Rgb, CHANNEL_PALETTE};

/// Logical pixel buffer, row-major, one `Rgb` per matrix cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::sized(self.width, self.height)
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Color at `(x, y)`, or `None` outside the frame.
    pub fn get(&self, x: u16, y: u16) -> Option<Rgb> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    /// Write one pixel. Coordinates outside the frame are ignored.
    pub fn set(&mut self, x: u16, y: u16, color: Rgb) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn clear(&mut self) {
        self.fill(Rgb::BLACK);
    }

    /// Paint a rectangle, clipped to the frame.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        for (x, y) in rect.cells() {
            self.set(x, y, color);
        }
    }

    /// Draw the current layout: every held note lights its region in the
    /// channel's color, everything else is black.
    pub fn draw_layout(&mut self, engine: &LayoutEngine) {
        self.clear();

        for (_, channel) in engine.seen_channels() {
            let color = channel.color();
            for (_, note) in channel.seen_notes() {
                if note.is_active() && !note.region().is_empty() {
                    self.fill_rect(note.region(), color);
                }
            }
        }
    }

    /// Multicolored pattern shown briefly after a reset.
    pub fn draw_reset_flash(&mut self) {
        let width = self.width as usize;
        for (i, pixel) in self.pixels.iter_mut().enumerate() {
            let (x, y) = (i % width, i / width);
            // Half brightness
            *pixel = CHANNEL_PALETTE[(x * 7 + y * 3) % CHANNEL_PALETTE.len()].scaled(128);
        }
    }

    /// Copy of the frame with every pixel scaled by `brightness / 256`.
    pub fn scaled(&self, brightness: u8) -> FrameBuffer {
        FrameBuffer {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|p| p.scaled(brightness)).collect(),
        }
    }
}

/// Colors cycled through by the power-on self test, in order.
pub const DIAGNOSTIC_SEQUENCE: [Rgb; 4] = [Rgb::RED, Rgb::GREEN, Rgb::BLUE, Rgb::CYAN];
