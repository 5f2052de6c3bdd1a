//! Static collision bodies for one tile layer.

use brickwork_core::{CollisionGeometry, TileGrid};

use crate::collider::{RapierStaticBoxes, StaticCollider2D};
use crate::physics2d::{PhysicsWorld2D, RigidBody2DHandle};

/// Merged collision geometry of a tile grid plus the physics bodies built
/// from it.
///
/// The map does not own the physics world. Bodies stay in the world until
/// [`CollisionMap::remove_from`] or [`CollisionMap::rebuild`] is called.
#[derive(Debug)]
pub struct CollisionMap {
    geometry: CollisionGeometry,
    bodies: Vec<RigidBody2DHandle>,
    policy: StaticCollider2D,
}

impl CollisionMap {
    /// Scans and merges `grid`, then adds one fixed box per merged rectangle
    /// to `world`.
    pub fn build<G: TileGrid + ?Sized>(
        world: &mut PhysicsWorld2D,
        grid: &G,
        policy: StaticCollider2D,
    ) -> Self {
        let geometry = CollisionGeometry::from_grid(grid);
        let bodies = geometry.build_bodies(&mut RapierStaticBoxes::new(world, policy));

        log::info!(
            "Built {} static bodies from {} tiles",
            bodies.len(),
            geometry.unit_rect_count()
        );

        Self {
            geometry,
            bodies,
            policy,
        }
    }

    /// Body handles in the same order as [`CollisionGeometry::rects`].
    pub fn bodies(&self) -> &[RigidBody2DHandle] {
        &self.bodies
    }

    pub fn geometry(&self) -> &CollisionGeometry {
        &self.geometry
    }

    pub fn policy(&self) -> StaticCollider2D {
        self.policy
    }

    /// Removes every body of this map from `world`.
    pub fn remove_from(&mut self, world: &mut PhysicsWorld2D) {
        let count = self.bodies.len();
        for handle in self.bodies.drain(..) {
            if !world.remove_body(handle) {
                log::warn!("Collision body {handle:?} was already removed");
            }
        }
        log::debug!("Removed {count} collision bodies");
    }

    /// Replaces the map with a fresh scan of `grid`.
    ///
    /// There is no incremental update: the old bodies are removed and the
    /// whole pipeline runs again with the same collider policy.
    pub fn rebuild<G: TileGrid + ?Sized>(&mut self, world: &mut PhysicsWorld2D, grid: &G) {
        self.remove_from(world);
        *self = Self::build(world, grid, self.policy);
    }
}
