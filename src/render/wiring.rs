use super::frame::FrameBuffer;
use crate::layout::Rgb;

/*
Physical LED Ordering
=====================

The matrix is built from 8-row panels stacked vertically. Each panel is
wired column by column in a serpentine: even columns run top to bottom,
odd columns bottom to top. The chain enters the top panel at its top-right
corner and the next panel at its top-left, so alternate panels run in
opposite horizontal directions:

    Top panel (indices 0 .. w*rows)          Next panel (continues the chain)

    x:  0   1  ...  w-2  w-1                 x:  0   1  ...
        ↑   ↓        ↑    ↓ start                ↓   ↑
        ↑   ↓        ↑    ↓                      ↓   ↑
        .   .        .    .                      .   .

Logical coordinates stay row-major with (0, 0) top-left; only the output
stage cares about this map.
*/

/// Maps logical `(x, y)` to the LED's position in the data chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelWiring {
    width: u16,
    height: u16,
    panel_rows: u16,
}

impl PanelWiring {
    pub fn new(width: u16, height: u16, panel_rows: u16) -> Self {
        Self {
            width,
            height,
            panel_rows: panel_rows.max(1),
        }
    }

    pub fn led_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Chain index for a logical cell, `None` outside the matrix.
    pub fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let rows = self.panel_rows as usize;
        let panel = y as usize / rows;
        let local_y = y as usize % rows;
        let panel_base = panel * self.width as usize * rows;

        // Even panels enter from the right, odd panels from the left
        let column = if panel % 2 == 0 {
            (self.width - 1 - x) as usize
        } else {
            x as usize
        };

        let within = if column % 2 == 0 {
            local_y
        } else {
            rows - 1 - local_y
        };

        Some(panel_base + column * rows + within)
    }

    /// Serialize a frame into chain order as GRB words, applying brightness.
    pub fn encode(&self, frame: &FrameBuffer, brightness: u8, out: &mut [u32]) {
        out.fill(0);
        for y in 0..frame.height().min(self.height) {
            for x in 0..frame.width().min(self.width) {
                let (Some(i), Some(color)) = (self.index(x, y), frame.get(x, y)) else {
                    continue;
                };
                if let Some(slot) = out.get_mut(i) {
                    *slot = to_grb(color.scaled(brightness));
                }
            }
        }
    }
}

/// WS2812 strips expect green first: `0x00GGRRBB`.
pub fn to_grb(color: Rgb) -> u32 {
    ((color.g() as u32) << 16) | ((color.r() as u32) << 8) | color.b() as u32
}
