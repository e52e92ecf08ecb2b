// Character entity: a movement controller bound to a physics body

use glam::Vec2;
use log::debug;

use crate::engine::physics::{presets, ColliderHandle, PhysicsWorld, RigidBodyHandle, Vector};

use super::config::CharacterConfig;
use super::movement::{MovementController, MovementInput};

/// A player-controlled character living in one level's physics world
#[derive(Debug)]
pub struct Character {
    /// Index of the player (and input slot) driving this character
    pub player_index: usize,
    pub body_handle: RigidBodyHandle,
    pub collider_handle: ColliderHandle,
    pub movement: MovementController,
}

impl Character {
    /// Create a character and add its body to the physics world
    pub fn spawn(
        player_index: usize,
        config: CharacterConfig,
        physics: &mut PhysicsWorld,
        spawn: Vec2,
    ) -> Self {
        let body_handle = physics.add_rigid_body(presets::character_body(spawn.x, spawn.y));
        let collider = presets::character_collider(config.body_size.x, config.body_size.y);
        let collider_handle = physics.add_collider(collider, body_handle);

        Self {
            player_index,
            body_handle,
            collider_handle,
            movement: MovementController::new(config),
        }
    }

    /// Run the movement controller for this frame and push the resulting
    /// velocity into the physics body
    pub fn update(&mut self, physics: &mut PhysicsWorld, input: MovementInput) {
        let Some(body) = physics.get_rigid_body_mut(self.body_handle) else {
            return;
        };

        let current = body.linvel();
        let previous_clip = self.movement.animation().clip_name();
        let velocity = self
            .movement
            .update(input, Vec2::new(current.x, current.y));
        body.set_linvel(Vector::new(velocity.x, velocity.y), true);

        let clip = self.movement.animation().clip_name();
        if clip != previous_clip {
            debug!("{} animation: {} -> {}", self.name(), previous_clip, clip);
        }
    }

    /// Body centre in world space
    pub fn position(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        physics.get_rigid_body(self.body_handle).map(|body| {
            let pos = body.translation();
            Vec2::new(pos.x, pos.y)
        })
    }

    /// Head centre in world space, mirrored by facing
    pub fn head_world_position(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        let head = self.movement.head_position();
        let sign = self.movement.facing().sign();
        self.position(physics)
            .map(|body| body + Vec2::new(head.x * sign, head.y))
    }

    pub fn name(&self) -> &'static str {
        self.movement.config().name
    }
}

#[cfg(test)]
mod tests {
    use super::super::config::FIREBOY;
    use super::super::state::Facing;
    use super::*;
    use approx::assert_relative_eq;

    fn velocity(character: &Character, physics: &PhysicsWorld) -> Vec2 {
        let vel = physics.get_rigid_body(character.body_handle).unwrap().linvel();
        Vec2::new(vel.x, vel.y)
    }

    #[test]
    fn test_spawn_places_body() {
        let mut physics = PhysicsWorld::new();
        let character = Character::spawn(0, FIREBOY, &mut physics, Vec2::new(2.0, 3.0));

        assert_eq!(character.position(&physics), Some(Vec2::new(2.0, 3.0)));
        assert_eq!(character.name(), "Fireboy");
    }

    #[test]
    fn test_update_sets_body_velocity() {
        let mut physics = PhysicsWorld::new();
        let mut character = Character::spawn(0, FIREBOY, &mut physics, Vec2::ZERO);
        character.update(
            &mut physics,
            MovementInput {
                axis: 1.0,
                ..Default::default()
            },
        );

        let velocity = velocity(&character, &physics);
        assert_relative_eq!(velocity.x, FIREBOY.speed);
    }

    #[test]
    fn test_jump_sets_body_velocity() {
        let mut physics = PhysicsWorld::new();
        let mut character = Character::spawn(0, FIREBOY, &mut physics, Vec2::ZERO);
        character.movement.on_collision_enter(true);
        character.update(
            &mut physics,
            MovementInput {
                axis: 1.0,
                jump_pressed: true,
                ..Default::default()
            },
        );

        let velocity = velocity(&character, &physics);
        assert_relative_eq!(velocity.x, FIREBOY.speed);
        assert_relative_eq!(velocity.y, FIREBOY.jump_velocity());
        assert_eq!(character.movement.animation().clip_name(), "jump");
    }

    #[test]
    fn test_head_mirrors_with_facing() {
        let mut physics = PhysicsWorld::new();
        let mut character = Character::spawn(0, FIREBOY, &mut physics, Vec2::ZERO);
        character.movement.on_collision_enter(true);
        character.update(
            &mut physics,
            MovementInput {
                axis: -1.0,
                ..Default::default()
            },
        );

        assert_eq!(character.movement.facing(), Facing::Left);
        let head = character.head_world_position(&physics).unwrap();
        let local = FIREBOY.rest_head_position + FIREBOY.running_head_offset;
        assert_relative_eq!(head.x, -local.x);
        assert_relative_eq!(head.y, local.y);
    }
}
