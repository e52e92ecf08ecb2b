// Movement controller: polled input -> velocity, head offset and animation flags

use glam::Vec2;

use super::config::CharacterConfig;
use super::state::{AnimationFlags, CharacterState, Facing};
use crate::engine::input::{Action, PlayerInput};

/// Axis values within this band count as "not moving"
pub const AXIS_DEADZONE: f32 = 0.01;

/// One frame of input for one character
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementInput {
    /// Horizontal axis sample, conventionally in [-1, 1]
    pub axis: f32,
    /// Jump key went down this frame
    pub jump_pressed: bool,
    /// Jump key went up this frame
    pub jump_released: bool,
}

impl MovementInput {
    /// Sample a player's input state
    pub fn from_player(input: &PlayerInput) -> Self {
        Self {
            axis: input.horizontal_axis(),
            jump_pressed: input.just_pressed(Action::Jump),
            jump_released: input.just_released(Action::Jump),
        }
    }
}

/// Per-character movement state machine
#[derive(Debug, Clone)]
pub struct MovementController {
    config: CharacterConfig,
    state: CharacterState,
    head_position: Vec2,
    animation: AnimationFlags,
}

impl MovementController {
    pub fn new(config: CharacterConfig) -> Self {
        Self {
            head_position: config.rest_head_position,
            config,
            state: CharacterState::default(),
            animation: AnimationFlags::default(),
        }
    }

    /// Run one frame. Takes the body's current velocity and returns the
    /// velocity to apply.
    pub fn update(&mut self, input: MovementInput, velocity: Vec2) -> Vec2 {
        let mut velocity = Vec2::new(input.axis * self.config.speed, velocity.y);

        if input.jump_pressed && self.state.can_jump() {
            velocity.y = self.config.jump_velocity();
            self.state.grounded = false;
            self.state.jump_released = false;
            self.set_head_offset(self.config.jumping_head_offset);
        }

        // Release latch, independent of landing
        if input.jump_released {
            self.state.jump_released = true;
        }

        self.update_direction(input.axis);

        self.animation = AnimationFlags {
            run: input.axis != 0.0,
            grounded: self.state.grounded,
        };

        velocity
    }

    /// Collision-enter notification. Only ground contacts land the character.
    pub fn on_collision_enter(&mut self, is_ground: bool) {
        if is_ground {
            self.state.grounded = true;
            self.reset_head();
        }
    }

    fn update_direction(&mut self, axis: f32) {
        let moving_offset = if self.state.grounded {
            self.config.running_head_offset
        } else {
            self.config.jumping_head_offset
        };

        if axis > AXIS_DEADZONE {
            self.state.facing = Facing::Right;
            self.set_head_offset(moving_offset);
        } else if axis < -AXIS_DEADZONE {
            self.state.facing = Facing::Left;
            self.set_head_offset(moving_offset);
        } else if self.state.grounded {
            self.reset_head();
        } else {
            self.set_head_offset(self.config.jumping_head_offset);
        }
    }

    fn set_head_offset(&mut self, offset: Vec2) {
        self.head_position = self.config.rest_head_position + offset;
    }

    fn reset_head(&mut self) {
        self.head_position = self.config.rest_head_position;
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    /// Head position relative to the body centre, before facing is applied
    pub fn head_position(&self) -> Vec2 {
        self.head_position
    }

    /// Flags from the last update
    pub fn animation(&self) -> AnimationFlags {
        self.animation
    }

    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::super::config::{FIREBOY, WATERGIRL};
    use super::*;
    use approx::assert_relative_eq;

    fn grounded_controller() -> MovementController {
        let mut controller = MovementController::new(FIREBOY);
        controller.on_collision_enter(true);
        controller
    }

    fn press_jump() -> MovementInput {
        MovementInput {
            jump_pressed: true,
            ..Default::default()
        }
    }

    fn release_jump() -> MovementInput {
        MovementInput {
            jump_released: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_horizontal_velocity_scales_with_axis() {
        let mut controller = grounded_controller();
        let input = MovementInput {
            axis: -0.5,
            ..Default::default()
        };

        let velocity = controller.update(input, Vec2::new(3.0, -2.0));
        assert_relative_eq!(velocity.x, -0.5 * FIREBOY.speed);
        assert_relative_eq!(velocity.y, -2.0);
    }

    #[test]
    fn test_jump_when_grounded() {
        let mut controller = grounded_controller();

        let velocity = controller.update(press_jump(), Vec2::ZERO);
        assert_relative_eq!(velocity.y, FIREBOY.speed * 1.6);
        assert!(!controller.state.grounded);
        assert!(!controller.state.jump_released);
    }

    #[test]
    fn test_no_jump_when_airborne() {
        let mut controller = MovementController::new(FIREBOY);

        let velocity = controller.update(press_jump(), Vec2::new(0.0, -1.0));
        assert_relative_eq!(velocity.y, -1.0);
    }

    #[test]
    fn test_held_key_jumps_once() {
        let mut controller = grounded_controller();
        controller.update(press_jump(), Vec2::ZERO);
        controller.on_collision_enter(true);

        // Landed, key still held: the next press edge is needed
        let velocity = controller.update(MovementInput::default(), Vec2::ZERO);
        assert_relative_eq!(velocity.y, 0.0);
        let velocity = controller.update(press_jump(), Vec2::ZERO);
        assert_relative_eq!(velocity.y, 0.0, epsilon = 1e-6);

        controller.update(release_jump(), Vec2::ZERO);
        let velocity = controller.update(press_jump(), Vec2::ZERO);
        assert_relative_eq!(velocity.y, FIREBOY.jump_velocity());
    }

    #[test]
    fn test_release_latch_is_independent_of_landing() {
        let mut controller = grounded_controller();
        controller.update(press_jump(), Vec2::ZERO);
        controller.update(release_jump(), Vec2::ZERO);

        assert!(controller.state.jump_released);
        assert!(!controller.state.grounded);
    }

    #[test]
    fn test_press_and_release_same_frame() {
        let mut controller = grounded_controller();
        let input = MovementInput {
            jump_pressed: true,
            jump_released: true,
            ..Default::default()
        };

        let velocity = controller.update(input, Vec2::ZERO);
        assert_relative_eq!(velocity.y, FIREBOY.jump_velocity());
        assert!(controller.state.jump_released);
    }

    #[test]
    fn test_only_ground_contacts_land() {
        let mut controller = MovementController::new(FIREBOY);
        controller.on_collision_enter(false);
        assert!(!controller.state.grounded);

        controller.on_collision_enter(true);
        assert!(controller.state.grounded);
    }

    #[test]
    fn test_deadzone_grounded_resets_head() {
        let mut controller = grounded_controller();
        controller.update(
            MovementInput {
                axis: 1.0,
                ..Default::default()
            },
            Vec2::ZERO,
        );

        for axis in [0.0, 0.01, -0.01, 0.005] {
            controller.update(
                MovementInput {
                    axis,
                    ..Default::default()
                },
                Vec2::ZERO,
            );
            assert_eq!(controller.head_position(), FIREBOY.rest_head_position);
        }
    }

    #[test]
    fn test_deadzone_airborne_holds_jumping_offset() {
        let mut controller = MovementController::new(WATERGIRL);

        for axis in [0.0, 0.01, -0.01] {
            controller.update(
                MovementInput {
                    axis,
                    ..Default::default()
                },
                Vec2::ZERO,
            );
            assert_eq!(
                controller.head_position(),
                WATERGIRL.rest_head_position + WATERGIRL.jumping_head_offset
            );
        }
    }

    #[test]
    fn test_running_offset_and_facing() {
        let mut controller = grounded_controller();
        controller.update(
            MovementInput {
                axis: -1.0,
                ..Default::default()
            },
            Vec2::ZERO,
        );

        assert_eq!(controller.facing(), Facing::Left);
        assert_eq!(
            controller.head_position(),
            FIREBOY.rest_head_position + FIREBOY.running_head_offset
        );

        // Deadzone keeps the last facing
        controller.update(MovementInput::default(), Vec2::ZERO);
        assert_eq!(controller.facing(), Facing::Left);
    }

    #[test]
    fn test_moving_while_airborne_uses_jumping_offset() {
        let mut controller = grounded_controller();
        controller.update(
            MovementInput {
                axis: 1.0,
                jump_pressed: true,
                ..Default::default()
            },
            Vec2::ZERO,
        );

        assert_eq!(controller.facing(), Facing::Right);
        assert_eq!(
            controller.head_position(),
            FIREBOY.rest_head_position + FIREBOY.jumping_head_offset
        );
    }

    #[test]
    fn test_landing_resets_head() {
        let mut controller = grounded_controller();
        controller.update(press_jump(), Vec2::ZERO);
        controller.on_collision_enter(true);

        assert_eq!(controller.head_position(), FIREBOY.rest_head_position);
    }

    #[test]
    fn test_animation_flags() {
        let mut controller = grounded_controller();
        controller.update(
            MovementInput {
                axis: 0.005,
                ..Default::default()
            },
            Vec2::ZERO,
        );

        // Any non-zero axis counts as running for the animator
        assert_eq!(
            controller.animation(),
            AnimationFlags {
                run: true,
                grounded: true
            }
        );
    }

    #[test]
    fn test_from_player_input() {
        let mut player = PlayerInput::new(0);
        player.press(Action::MoveRight);
        player.press(Action::Jump);

        let input = MovementInput::from_player(&player);
        assert_eq!(input.axis, 1.0);
        assert!(input.jump_pressed);
        assert!(!input.jump_released);
    }
}
