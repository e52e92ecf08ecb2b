// Character state owned by one movement controller

/// Direction the character is looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Horizontal mirror factor for rendering (1 = right, -1 = left)
    pub fn sign(&self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Grounded/airborne state plus the jump key latch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterState {
    /// Standing on something tagged as ground
    pub grounded: bool,
    /// The jump key has been released since the last jump
    pub jump_released: bool,
    pub facing: Facing,
}

impl Default for CharacterState {
    fn default() -> Self {
        // Spawned in the air; the first ground contact grounds the character
        Self {
            grounded: false,
            jump_released: true,
            facing: Facing::Right,
        }
    }
}

impl CharacterState {
    /// A jump may start this frame
    pub fn can_jump(&self) -> bool {
        self.grounded && self.jump_released
    }
}

/// Flags handed to the (external) animator every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationFlags {
    pub run: bool,
    pub grounded: bool,
}

impl AnimationFlags {
    /// Name of the clip an animator would play for these flags
    pub fn clip_name(&self) -> &'static str {
        match (self.grounded, self.run) {
            (true, false) => "idle",
            (true, true) => "run",
            (false, _) => "jump",
        }
    }
}
