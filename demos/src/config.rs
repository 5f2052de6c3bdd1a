//! Demo configuration loaded from TOML.
//!
//! Every section is optional; missing values fall back to the built-in level.

use std::path::Path;

use serde::Deserialize;

use crate::DemoError;

const DEFAULT_LEVEL: &str = "
#..................#
#..................#
#.....####.........#
#..............###.#
#..##..............#
####################
";

/// Top-level demo configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub world: WorldConfig,
    pub collider: ColliderConfig,
    pub map: MapConfig,
    pub ball: BallConfig,
}

/// Physics world settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Vertical gravity, negative is down.
    pub gravity: f32,
    /// Number of fixed simulation steps to run.
    pub steps: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: -10.0,
            steps: 240,
        }
    }
}

/// Material policy for the tile colliders.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColliderConfig {
    pub friction: f32,
    pub restitution: f32,
}

impl Default for ColliderConfig {
    fn default() -> Self {
        Self {
            friction: 0.8,
            restitution: 0.0,
        }
    }
}

/// Collision layer description.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub tile_width: f32,
    pub tile_height: f32,
    /// Text art, first line is the top row. `.` is empty.
    pub art: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_width: 1.0,
            tile_height: 1.0,
            art: DEFAULT_LEVEL.to_string(),
        }
    }
}

/// Test ball dropped onto the level.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            x: 10.5,
            y: 5.0,
            radius: 0.4,
        }
    }
}

/// Parses a config from TOML text.
pub fn parse_config(text: &str) -> Result<DemoConfig, DemoError> {
    Ok(toml::from_str(text)?)
}

/// Loads a config from a TOML file.
pub fn load_config(path: &Path) -> Result<DemoConfig, DemoError> {
    let content = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&content)
}
