//! # Brickwork Demos
//!
//! Headless scenes exercising the tile collision pipeline end to end.
//!
//! ## Available Demos
//!
//! - `collision_demo` - Builds static bodies from a tile layer and drops a ball on them

pub mod config;

use brickwork_core::{TileLayer, TileMapError};
use brickwork_physics::rapier2d::prelude::*;
use brickwork_physics::{CollisionMap, PhysicsWorld2D, StaticCollider2D};
use thiserror::Error;

use config::DemoConfig;

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors surfaced by the demo binaries.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("invalid map: {0}")]
    Map(#[from] TileMapError),
    #[error("ball body is missing from the physics world")]
    MissingBall,
}

/// Outcome of one demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub tiles: usize,
    pub bodies: usize,
    pub ball_position: (f32, f32),
}

/// Builds the configured level, drops the ball and steps the world.
pub fn run_collision_demo(config: &DemoConfig) -> Result<DemoReport, DemoError> {
    let layer = TileLayer::from_ascii(
        "collision",
        config.map.tile_width,
        config.map.tile_height,
        &config.map.art,
    )?;

    let mut world = PhysicsWorld2D::with_gravity(vector![0.0, config.world.gravity]);
    let policy = StaticCollider2D::default()
        .with_friction(config.collider.friction)
        .with_restitution(config.collider.restitution);
    let map = CollisionMap::build(&mut world, &layer, policy);

    for rect in map.geometry().rects() {
        log::debug!("  static box {rect}");
    }

    let ball = world.add_body(
        RigidBodyBuilder::dynamic()
            .translation(vector![config.ball.x, config.ball.y])
            .build(),
    );
    world.add_collider(ColliderBuilder::ball(config.ball.radius).build(), ball);

    for _ in 0..config.world.steps {
        world.step();
    }

    let ball_position = world.body_translation(ball).ok_or(DemoError::MissingBall)?;

    Ok(DemoReport {
        tiles: map.geometry().unit_rect_count(),
        bodies: map.bodies().len(),
        ball_position,
    })
}
