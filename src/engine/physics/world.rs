use rapier2d::prelude::*;

use super::collision::{CollisionEvent as GameCollisionEvent, CollisionEventQueue};
use crate::engine::game_loop::FIXED_TIMESTEP;

/// Handle to identify rigid bodies
pub type RigidBodyHandle = rapier2d::prelude::RigidBodyHandle;

/// Handle to identify colliders
pub type ColliderHandle = rapier2d::prelude::ColliderHandle;

/// Standard downward gravity (m/s²)
pub const DEFAULT_GRAVITY: Real = -9.81;

/// Physics world that manages all physics simulation for one level
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,

    /// Events produced by the last step(s), drained by game logic
    collision_event_queue: CollisionEventQueue,
}

impl PhysicsWorld {
    /// Create a new physics world with standard gravity
    pub fn new() -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = FIXED_TIMESTEP;

        Self {
            gravity: Vector::new(0.0, DEFAULT_GRAVITY),
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            collision_event_queue: CollisionEventQueue::new(),
        }
    }

    /// Step the physics simulation forward by one timestep
    pub fn step(&mut self) {
        self.collision_event_queue.clear();

        let event_handler = &self.collision_event_queue;

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            event_handler,
        );
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set)
    }

    /// Remove a rigid body and all its attached colliders
    pub fn remove_rigid_body(&mut self, handle: RigidBodyHandle) {
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true, // remove attached colliders
        );
    }

    /// Get a reference to a rigid body
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Get a mutable reference to a rigid body
    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }

    /// Take all collision events produced since the last call
    pub fn drain_collision_events(&self) -> Vec<GameCollisionEvent> {
        self.collision_event_queue.drain()
    }

    /// Number of live rigid bodies
    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::body::presets;
    use super::super::collision::CollisionGroups;
    use super::*;

    #[test]
    fn test_default_gravity_and_timestep() {
        let world = PhysicsWorld::new();
        assert_eq!(world.gravity.y, DEFAULT_GRAVITY);
        assert_eq!(world.integration_parameters.dt, FIXED_TIMESTEP);
    }

    #[test]
    fn test_remove_body_removes_colliders() {
        let mut world = PhysicsWorld::new();
        let body = world.add_rigid_body(presets::fixed_body(0.0, 0.0));
        let collider = world.add_collider(
            presets::trigger_collider(CollisionGroups::Diamond, 0.5, 0.5),
            body,
        );

        world.remove_rigid_body(body);
        assert!(world.get_rigid_body(body).is_none());
        assert!(world.collider_set.get(collider).is_none());
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn test_falling_character_hits_ground() {
        let mut world = PhysicsWorld::new();
        let ground_body = world.add_rigid_body(presets::fixed_body(0.0, 0.0));
        let ground = world.add_collider(presets::ground_collider(10.0, 1.0), ground_body);
        let character_body = world.add_rigid_body(presets::character_body(0.0, 2.0));
        let character = world.add_collider(presets::character_collider(0.8, 1.0), character_body);

        let mut touched = false;
        for _ in 0..120 {
            world.step();
            touched |= world.drain_collision_events().iter().any(|event| {
                matches!(event, GameCollisionEvent::Started { .. })
                    && (event.colliders() == (ground, character)
                        || event.colliders() == (character, ground))
            });
        }

        assert!(touched, "Character should land on the ground");
        let y = world.get_rigid_body(character_body).unwrap().translation().y;
        assert!(y > 0.5 && y < 1.5, "Character should rest on top, got {y}");
    }
}
