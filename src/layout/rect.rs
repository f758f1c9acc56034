#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in matrix cells. `(x, y)` is the top-left corner.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const EMPTY: Rect = Rect {
        x: 0,
        y: 0,
        w: 0,
        h: 0,
    };

    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle anchored at the origin.
    pub const fn sized(w: u16, h: u16) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    pub fn area(&self) -> u32 {
        self.w as u32 * self.h as u32
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn right(&self) -> u16 {
        self.x + self.w
    }

    pub fn bottom(&self) -> u16 {
        self.y + self.h
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16)> {
        let Rect { x, y, w, h } = *self;
        (y..y + h).flat_map(move |row| (x..x + w).map(move |col| (col, row)))
    }
}
