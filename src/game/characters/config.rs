// Character configuration - the two heroes differ only in data

use glam::{Vec2, Vec4};

use crate::engine::input::ControlScheme;

/// Static description of a playable character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterConfig {
    /// Display name
    pub name: &'static str,
    /// Keys driving the horizontal axis and the jump
    pub controls: ControlScheme,
    /// Horizontal speed (units/second); the jump impulse is derived from it
    pub speed: f32,
    /// Head offset from rest while running on the ground
    pub running_head_offset: Vec2,
    /// Head offset from rest while airborne
    pub jumping_head_offset: Vec2,
    /// Head position relative to the body centre when standing still
    pub rest_head_position: Vec2,
    /// Body collider size (width, height)
    pub body_size: Vec2,
    /// Head quad size
    pub head_size: Vec2,
    /// Draw colour (RGBA)
    pub color: Vec4,
}

/// Fireboy: arrow keys
pub const FIREBOY: CharacterConfig = CharacterConfig {
    name: "Fireboy",
    controls: ControlScheme::ARROWS,
    speed: 5.0,
    running_head_offset: Vec2::new(-0.2, -0.18),
    jumping_head_offset: Vec2::new(0.0, -0.1),
    rest_head_position: Vec2::new(0.0, 0.55),
    body_size: Vec2::new(0.6, 0.8),
    head_size: Vec2::new(0.7, 0.6),
    color: Vec4::new(0.95, 0.35, 0.1, 1.0),
};

/// Watergirl: A/D/W
pub const WATERGIRL: CharacterConfig = CharacterConfig {
    name: "Watergirl",
    controls: ControlScheme::WAD,
    speed: 5.0,
    running_head_offset: Vec2::new(-0.15, -0.03),
    jumping_head_offset: Vec2::new(0.0, -0.1),
    rest_head_position: Vec2::new(0.0, 0.55),
    body_size: Vec2::new(0.6, 0.8),
    head_size: Vec2::new(0.7, 0.6),
    color: Vec4::new(0.2, 0.6, 0.95, 1.0),
};

/// Both heroes, in player order
pub const HEROES: [CharacterConfig; 2] = [FIREBOY, WATERGIRL];

impl CharacterConfig {
    /// Vertical velocity applied when jumping
    pub fn jump_velocity(&self) -> f32 {
        self.speed * JUMP_MULTIPLIER
    }
}

/// Jump impulse as a multiple of horizontal speed
pub const JUMP_MULTIPLIER: f32 = 1.6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_velocity() {
        assert!((FIREBOY.jump_velocity() - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_heroes_use_distinct_controls() {
        assert_ne!(HEROES[0].controls, HEROES[1].controls);
    }

    #[test]
    fn test_heroes_share_jumping_offset() {
        assert_eq!(FIREBOY.jumping_head_offset, WATERGIRL.jumping_head_offset);
        assert_ne!(FIREBOY.running_head_offset, WATERGIRL.running_head_offset);
    }
}
