//! Error types for tile layer construction and lookup.

use thiserror::Error;

/// Errors that can occur while building or querying tile layers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TileMapError {
    /// The tile vector does not hold exactly `width * height` entries.
    #[error("layer `{layer}` expects {expected} tiles ({width}x{height}), got {actual}")]
    TileCountMismatch {
        layer: String,
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    /// Tile width or height is zero, negative or not finite.
    #[error("layer `{layer}` has invalid tile size {width}x{height}")]
    InvalidTileSize { layer: String, width: f32, height: f32 },
    /// Text art rows have different lengths.
    #[error("layer `{layer}` row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        layer: String,
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// Text art contains no rows.
    #[error("layer `{0}` art is empty")]
    EmptyArt(String),
    /// No layer at the requested index.
    #[error("layer index {index} out of range ({count} layers)")]
    LayerIndexOutOfRange { index: usize, count: usize },
    /// No layer with the requested name.
    #[error("no layer named `{0}`")]
    LayerNotFound(String),
}
