//! Collision geometry computed once from a tile grid.

use crate::body::{StaticBodyFactory, StaticBox};
use crate::grid::{TileGrid, scan_unit_rects};
use crate::merge::merge_rects;
use crate::rect::Rect;

/// Merged rectangle cover of a grid's occupied cells.
///
/// Built once and never updated. When the grid changes, build a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionGeometry {
    rects: Vec<Rect>,
    unit_rect_count: usize,
    cell_size: (f32, f32),
}

impl CollisionGeometry {
    /// Scans `grid` and merges its occupied cells.
    pub fn from_grid<G: TileGrid + ?Sized>(grid: &G) -> Self {
        let units = scan_unit_rects(grid);
        let rects = merge_rects(&units);

        if units.is_empty() {
            log::warn!(
                "Tile grid {}x{} has no occupied cells, no collision geometry",
                grid.width(),
                grid.height()
            );
        } else {
            log::debug!(
                "Collision geometry: {} tiles -> {} rects",
                units.len(),
                rects.len()
            );
        }

        Self {
            rects,
            unit_rect_count: units.len(),
            cell_size: grid.cell_size(),
        }
    }

    /// Merged rectangles in `(y, x)` order of their bottom-left corners.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Takes ownership of the merged rectangles.
    pub fn into_rects(self) -> Vec<Rect> {
        self.rects
    }

    /// Number of occupied cells that were scanned.
    pub fn unit_rect_count(&self) -> usize {
        self.unit_rect_count
    }

    pub fn cell_size(&self) -> (f32, f32) {
        self.cell_size
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Sum of the merged rectangle areas.
    pub fn total_area(&self) -> f32 {
        self.rects.iter().map(Rect::area).sum()
    }

    /// One box request per merged rectangle, same order as [`Self::rects`].
    pub fn static_boxes(&self) -> impl Iterator<Item = StaticBox> + '_ {
        self.rects.iter().map(StaticBox::from_rect)
    }

    /// Sends exactly one request per rectangle to `factory` and returns the
    /// handles in the same order.
    pub fn build_bodies<F: StaticBodyFactory>(&self, factory: &mut F) -> Vec<F::Handle> {
        self.static_boxes()
            .map(|request| factory.create_static_box(&request))
            .collect()
    }
}
