//! Physics integration with [rapier](https://rapier.rs/) for Brickwork tile maps.
//!
//! [`CollisionMap::build`] runs the core scan-and-merge pipeline on a tile
//! grid and creates one fixed cuboid body per merged rectangle in a
//! caller-owned [`PhysicsWorld2D`].

pub mod collider;
pub mod collision_map;
pub mod physics2d;

pub use collider::{RapierStaticBoxes, StaticCollider2D};
pub use collision_map::CollisionMap;
pub use physics2d::{Collider2DHandle, DEFAULT_GRAVITY, PhysicsWorld2D, RigidBody2DHandle};

// Re-export so downstream crates build bodies against the same rapier version.
pub use rapier2d;
