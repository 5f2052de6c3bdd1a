//! 2D physics world and handle types.
//!
//! Owns all rapier2d state. The world is always passed explicitly to whoever
//! needs to create or remove bodies; there is no process-wide instance.

use rapier2d::prelude::*;

/// Opaque handle to a rapier 2D rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RigidBody2DHandle(pub RigidBodyHandle);

/// Opaque handle to a rapier 2D collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Collider2DHandle(pub ColliderHandle);

/// Gravity used by [`PhysicsWorld2D::default`], in world units per second².
pub const DEFAULT_GRAVITY: Real = -9.81;

/// All rapier 2D physics state in one place.
pub struct PhysicsWorld2D {
    pub gravity: Vector<Real>,
    pub integration_parameters: IntegrationParameters,
    pub pipeline: PhysicsPipeline,
    pub island_manager: IslandManager,
    pub broad_phase: DefaultBroadPhase,
    pub narrow_phase: NarrowPhase,
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub impulse_joints: ImpulseJointSet,
    pub multibody_joints: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
}

impl Default for PhysicsWorld2D {
    fn default() -> Self {
        Self {
            gravity: vector![0.0, DEFAULT_GRAVITY],
            integration_parameters: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }
}

impl PhysicsWorld2D {
    /// Creates a new physics world with the given gravity.
    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        Self {
            gravity,
            ..Default::default()
        }
    }

    /// Steps the physics simulation by one timestep.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    /// Adds a rigid body and returns its handle.
    pub fn add_body(&mut self, body: RigidBody) -> RigidBody2DHandle {
        RigidBody2DHandle(self.bodies.insert(body))
    }

    /// Adds a collider attached to a rigid body and returns its handle.
    pub fn add_collider(&mut self, collider: Collider, parent: RigidBody2DHandle) -> Collider2DHandle {
        Collider2DHandle(
            self.colliders
                .insert_with_parent(collider, parent.0, &mut self.bodies),
        )
    }

    /// Removes a rigid body and all its attached colliders.
    ///
    /// Returns `false` if the handle was already gone.
    pub fn remove_body(&mut self, handle: RigidBody2DHandle) -> bool {
        self.bodies
            .remove(
                handle.0,
                &mut self.island_manager,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    /// Body behind `handle`, if it still exists.
    pub fn body(&self, handle: RigidBody2DHandle) -> Option<&RigidBody> {
        self.bodies.get(handle.0)
    }

    /// World-space translation of a body.
    pub fn body_translation(&self, handle: RigidBody2DHandle) -> Option<(Real, Real)> {
        self.bodies.get(handle.0).map(|b| {
            let t = b.translation();
            (t.x, t.y)
        })
    }
}
