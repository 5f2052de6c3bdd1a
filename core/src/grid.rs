//! Tile grid abstraction and the unit-rectangle scanner.

use crate::rect::Rect;

/// Read-only view of a rectangular grid of cells.
///
/// Cell `(0, 0)` is the bottom-left cell; `y` grows upward.
///
/// Implementations must panic when `is_occupied` is asked about a cell outside
/// `[0, width) x [0, height)`. Such a call is a bug in the caller and must not
/// be clamped or silently answered with `false`.
pub trait TileGrid {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// Size of one cell in world units, `(width, height)`.
    fn cell_size(&self) -> (f32, f32);

    /// Whether the cell at `(x, y)` is solid.
    fn is_occupied(&self, x: u32, y: u32) -> bool;
}

impl<G: TileGrid + ?Sized> TileGrid for &G {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn cell_size(&self) -> (f32, f32) {
        (**self).cell_size()
    }

    fn is_occupied(&self, x: u32, y: u32) -> bool {
        (**self).is_occupied(x, y)
    }
}

/// Emits one cell-sized rectangle per occupied cell, in row-major order
/// (`y` ascending, then `x` ascending).
///
/// An empty or fully unoccupied grid yields an empty vector.
pub fn scan_unit_rects<G: TileGrid + ?Sized>(grid: &G) -> Vec<Rect> {
    let (cell_w, cell_h) = grid.cell_size();
    let mut rects = Vec::new();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.is_occupied(x, y) {
                rects.push(Rect::new(
                    x as f32 * cell_w,
                    y as f32 * cell_h,
                    cell_w,
                    cell_h,
                ));
            }
        }
    }

    rects
}

/// Counts occupied cells without building rectangles.
pub fn count_occupied<G: TileGrid + ?Sized>(grid: &G) -> usize {
    (0..grid.height())
        .map(|y| (0..grid.width()).filter(|&x| grid.is_occupied(x, y)).count())
        .sum()
}
