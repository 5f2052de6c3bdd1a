//! # Brickwork Core
//!
//! Turns the solid cells of a tile grid into a reduced set of axis-aligned
//! rectangles for static collision geometry.
//!
//! Pipeline: [`TileGrid`] → [`scan_unit_rects`] → [`merge_horizontal`] →
//! [`merge_vertical`] → [`StaticBodyFactory`].

pub mod body;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layer;
pub mod merge;
pub mod rect;

pub use body::{RecordingFactory, StaticBodyFactory, StaticBox};
pub use error::TileMapError;
pub use geometry::CollisionGeometry;
pub use grid::{TileGrid, count_occupied, scan_unit_rects};
pub use layer::{EMPTY_TILE, TileLayer, TileMap};
pub use merge::{merge_horizontal, merge_rects, merge_vertical};
pub use rect::Rect;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
