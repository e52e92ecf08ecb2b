// Per-player input state management

use super::action::Action;
use std::collections::HashSet;

/// Input state for a single player (or the global pseudo-player)
#[derive(Debug)]
pub struct PlayerInput {
    player_id: usize,

    /// Actions currently held down
    pressed: HashSet<Action>,

    /// Actions whose key went down this frame
    just_pressed: HashSet<Action>,

    /// Actions whose key went up this frame
    just_released: HashSet<Action>,
}

impl PlayerInput {
    /// Create a new player input state
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
        }
    }

    /// Get the player ID
    pub fn player_id(&self) -> usize {
        self.player_id
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Clear per-frame edges. Call once per frame after the frame has been simulated.
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Horizontal axis sample: -1.0 (left), 0.0, or 1.0 (right).
    /// Holding both directions cancels out.
    pub fn horizontal_axis(&self) -> f32 {
        let mut horizontal = 0.0;

        if self.is_pressed(Action::MoveLeft) {
            horizontal -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            horizontal += 1.0;
        }

        horizontal
    }
}
