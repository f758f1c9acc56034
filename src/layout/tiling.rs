use super::rect::Rect;

/*
Recursive Binary Space Partitioning
===================================

Splits a rectangle into N tiles without knowing anything about the items
except how many there are and their order.

  n == 1   the item gets the whole rectangle
  n  > 1   cut the LONGER side (width wins ties) so that the first part
           holds k = n / 2 items and the second holds n - k, then recurse

The cut position is proportional to the item split, truncated:

    first  = side * k / n
    second = side - first

Example: 3 items on 32x16

    width >= height, k = 1, first = 32 * 1 / 3 = 10

    ┌──────────┬──────────────────────┐
    │          │           1          │  second part (22x16, 2 items)
    │    0     ├──────────────────────┤  height 16 < width 22 -> cut width
    │  10x16   │           ...        │  k = 1, first = 22 / 2 = 11
    └──────────┴──────────────────────┘

Cutting the long side keeps tiles close to square. Truncation pushes the
leftover cells into the second half at every level, so larger tiles drift
towards later items. The result depends only on (rectangle, n), which
keeps layouts stable from frame to frame.

Tiles always partition the input exactly: no gaps, no overlaps. If a side
is shorter than the number of items along it, some tiles come out with
zero width or height; they still "exist" but cover no cells.
*/

/// Partition `area` into `out.len()` tiles, written in item order.
///
/// Does nothing when `out` is empty.
pub fn tile(area: Rect, out: &mut [Rect]) {
    let n = out.len();
    if n == 0 {
        return;
    }

    if n == 1 {
        out[0] = area;
        return;
    }

    let k = n / 2;
    let (first, second) = split(area, k, n);
    let (left, right) = out.split_at_mut(k);

    tile(first, left);
    tile(second, right);
}

/// Allocating convenience wrapper around [`tile`].
pub fn tiles(area: Rect, n: usize) -> Vec<Rect> {
    let mut out = vec![Rect::EMPTY; n];
    tile(area, &mut out);
    out
}

/// Cut `area` along its longer side so the first part holds `k / n` of it.
fn split(area: Rect, k: usize, n: usize) -> (Rect, Rect) {
    let scaled = |side: u16| (side as u32 * k as u32 / n as u32) as u16;

    if area.w >= area.h {
        let w1 = scaled(area.w);
        (
            Rect::new(area.x, area.y, w1, area.h),
            Rect::new(area.x + w1, area.y, area.w - w1, area.h),
        )
    } else {
        let h1 = scaled(area.h);
        (
            Rect::new(area.x, area.y, area.w, h1),
            Rect::new(area.x, area.y + h1, area.w, area.h - h1),
        )
    }
}
