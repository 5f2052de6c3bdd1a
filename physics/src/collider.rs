//! Static box colliders for merged tile rectangles.

use brickwork_core::{StaticBodyFactory, StaticBox};
use rapier2d::prelude::*;

use crate::physics2d::{PhysicsWorld2D, RigidBody2DHandle};

/// Material policy applied to every tile collider.
///
/// Defaults suit solid level geometry: grippy, no bounce, and no density
/// since fixed bodies never need mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticCollider2D {
    /// Friction coefficient.
    pub friction: f32,
    /// Restitution (bounciness, 0.0–1.0).
    pub restitution: f32,
    /// Mass density.
    pub density: f32,
    /// Whether this is a sensor/trigger (no contact forces).
    pub is_sensor: bool,
}

impl Default for StaticCollider2D {
    fn default() -> Self {
        Self {
            friction: 0.8,
            restitution: 0.0,
            density: 0.0,
            is_sensor: false,
        }
    }
}

impl StaticCollider2D {
    pub fn with_friction(mut self, v: f32) -> Self {
        self.friction = v;
        self
    }

    pub fn with_restitution(mut self, v: f32) -> Self {
        self.restitution = v;
        self
    }

    pub fn with_density(mut self, v: f32) -> Self {
        self.density = v;
        self
    }

    pub fn with_sensor(mut self, v: bool) -> Self {
        self.is_sensor = v;
        self
    }

    /// Cuboid collider with this policy and the request's half extents.
    pub(crate) fn to_collider(&self, request: &StaticBox) -> Collider {
        let (hx, hy) = request.half_extents;
        ColliderBuilder::cuboid(hx as Real, hy as Real)
            .friction(self.friction as Real)
            .restitution(self.restitution as Real)
            .density(self.density as Real)
            .sensor(self.is_sensor)
            .build()
    }
}

/// Fixed rigid body placed at the centre of `request`.
pub(crate) fn fixed_body_at(request: &StaticBox) -> RigidBody {
    let (cx, cy) = request.center;
    RigidBodyBuilder::fixed()
        .translation(vector![cx as Real, cy as Real])
        .build()
}

/// [`StaticBodyFactory`] that materializes box requests into a
/// [`PhysicsWorld2D`].
pub struct RapierStaticBoxes<'w> {
    world: &'w mut PhysicsWorld2D,
    policy: StaticCollider2D,
}

impl<'w> RapierStaticBoxes<'w> {
    pub fn new(world: &'w mut PhysicsWorld2D, policy: StaticCollider2D) -> Self {
        Self { world, policy }
    }
}

impl StaticBodyFactory for RapierStaticBoxes<'_> {
    type Handle = RigidBody2DHandle;

    fn create_static_box(&mut self, request: &StaticBox) -> RigidBody2DHandle {
        let body = self.world.add_body(fixed_body_at(request));
        self.world
            .add_collider(self.policy.to_collider(request), body);
        body
    }
}
