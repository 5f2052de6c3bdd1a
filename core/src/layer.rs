//! In-memory tile layers and multi-layer maps.
//!
//! A [`TileLayer`] stores one tile id per cell, `0` meaning "no tile". Any
//! non-zero id makes the cell solid for collision purposes. Parsing map files
//! is left to the caller; layers can be built directly, from text art, or
//! deserialized with serde.

use serde::{Deserialize, Serialize};

use crate::error::TileMapError;
use crate::grid::TileGrid;

/// Tile id for an empty cell.
pub const EMPTY_TILE: u32 = 0;

/// Single rectangular layer of tiles.
///
/// `tiles` is row-major with row 0 at the bottom of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTileLayer")]
pub struct TileLayer {
    name: String,
    width: u32,
    height: u32,
    tile_width: f32,
    tile_height: f32,
    tiles: Vec<u32>,
}

/// Unvalidated serde mirror of [`TileLayer`].
#[derive(Deserialize)]
struct RawTileLayer {
    name: String,
    width: u32,
    height: u32,
    tile_width: f32,
    tile_height: f32,
    tiles: Vec<u32>,
}

impl TryFrom<RawTileLayer> for TileLayer {
    type Error = TileMapError;

    fn try_from(raw: RawTileLayer) -> Result<Self, Self::Error> {
        TileLayer::new(
            raw.name,
            raw.width,
            raw.height,
            raw.tile_width,
            raw.tile_height,
            raw.tiles,
        )
    }
}

impl TileLayer {
    /// Creates a layer, checking the tile count and tile size.
    pub fn new(
        name: impl Into<String>,
        width: u32,
        height: u32,
        tile_width: f32,
        tile_height: f32,
        tiles: Vec<u32>,
    ) -> Result<Self, TileMapError> {
        let name = name.into();

        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(tile_width) || !valid(tile_height) {
            return Err(TileMapError::InvalidTileSize {
                layer: name,
                width: tile_width,
                height: tile_height,
            });
        }

        let expected = width as usize * height as usize;
        if tiles.len() != expected {
            return Err(TileMapError::TileCountMismatch {
                layer: name,
                width,
                height,
                expected,
                actual: tiles.len(),
            });
        }

        Ok(Self {
            name,
            width,
            height,
            tile_width,
            tile_height,
            tiles,
        })
    }

    /// Creates a layer with every cell empty.
    pub fn empty(
        name: impl Into<String>,
        width: u32,
        height: u32,
        tile_width: f32,
        tile_height: f32,
    ) -> Result<Self, TileMapError> {
        let tiles = vec![EMPTY_TILE; width as usize * height as usize];
        Self::new(name, width, height, tile_width, tile_height, tiles)
    }

    /// Builds a layer from text art.
    ///
    /// The first line is the *top* row, so the art reads the way the map
    /// looks. `.` and spaces are empty cells, any other character becomes
    /// tile id 1. Leading and trailing empty lines are ignored; every other
    /// line, including one made only of spaces, is a row and must have the
    /// same number of characters.
    pub fn from_ascii(
        name: impl Into<String>,
        tile_width: f32,
        tile_height: f32,
        art: &str,
    ) -> Result<Self, TileMapError> {
        let name = name.into();
        // A line of spaces is a row of empty cells, so only zero-length
        // lines count as padding.
        let lines: Vec<&str> = art
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .skip_while(|l| l.is_empty())
            .collect();
        let trailing_blank = lines.iter().rev().take_while(|l| l.is_empty()).count();
        let lines = &lines[..lines.len() - trailing_blank];

        let Some(first) = lines.first() else {
            return Err(TileMapError::EmptyArt(name));
        };
        let width = first.chars().count();

        let mut tiles = vec![EMPTY_TILE; width * lines.len()];
        for (row_from_top, line) in lines.iter().enumerate() {
            let actual = line.chars().count();
            if actual != width {
                return Err(TileMapError::RaggedRows {
                    layer: name,
                    row: row_from_top,
                    expected: width,
                    actual,
                });
            }
            let y = lines.len() - 1 - row_from_top;
            for (x, c) in line.chars().enumerate() {
                if c != '.' && c != ' ' {
                    tiles[y * width + x] = 1;
                }
            }
        }

        Self::new(
            name,
            width as u32,
            lines.len() as u32,
            tile_width,
            tile_height,
            tiles,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tile_width(&self) -> f32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> f32 {
        self.tile_height
    }

    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "tile ({x}, {y}) out of bounds for {}x{} layer `{}`",
            self.width,
            self.height,
            self.name
        );
        y as usize * self.width as usize + x as usize
    }

    /// Tile id at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the layer.
    pub fn tile(&self, x: u32, y: u32) -> u32 {
        self.tiles[self.index(x, y)]
    }

    /// Replaces the tile id at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the layer.
    pub fn set_tile(&mut self, x: u32, y: u32, id: u32) {
        let idx = self.index(x, y);
        self.tiles[idx] = id;
    }

    pub fn occupied_count(&self) -> usize {
        self.tiles.iter().filter(|&&id| id != EMPTY_TILE).count()
    }
}

impl TileGrid for TileLayer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cell_size(&self) -> (f32, f32) {
        (self.tile_width, self.tile_height)
    }

    fn is_occupied(&self, x: u32, y: u32) -> bool {
        self.tile(x, y) != EMPTY_TILE
    }
}

/// Ordered collection of tile layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TileMap {
    pub layers: Vec<TileLayer>,
}

impl TileMap {
    pub fn new(layers: Vec<TileLayer>) -> Self {
        Self { layers }
    }

    /// Layer at `index`, typically the collision layer of the map.
    pub fn layer(&self, index: usize) -> Result<&TileLayer, TileMapError> {
        self.layers
            .get(index)
            .ok_or(TileMapError::LayerIndexOutOfRange {
                index,
                count: self.layers.len(),
            })
    }

    /// First layer named `name`.
    pub fn layer_by_name(&self, name: &str) -> Result<&TileLayer, TileMapError> {
        self.layers
            .iter()
            .find(|l| l.name == name)
            .ok_or_else(|| TileMapError::LayerNotFound(name.to_string()))
    }
}
