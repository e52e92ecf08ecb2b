// Input manager - Main coordination system for all input

use super::action::{Action, ControlScheme, InputSource};
use super::config::InputConfigManager;
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Routes keyboard events to the players (and global actions) they are bound to
pub struct InputManager {
    config: InputConfigManager,
    players: Vec<PlayerInput>,
    global: PlayerInput,
}

impl InputManager {
    /// Create an input manager with one player per control scheme
    pub fn new(schemes: &[ControlScheme]) -> Self {
        let config = InputConfigManager::new(schemes);
        let players = (0..config.num_players()).map(PlayerInput::new).collect();

        Self {
            config,
            players,
            global: PlayerInput::new(usize::MAX),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(
                key_code,
                event.state == ElementState::Pressed,
                event.repeat,
            );
        }
    }

    /// Apply a single key transition. Auto-repeat presses are dropped.
    pub fn process_key(&mut self, key_code: KeyCode, pressed: bool, repeat: bool) {
        if pressed && repeat {
            return;
        }
        let source = InputSource::Keyboard(key_code);

        if let Some(action) = self.config.get_global_action(source) {
            apply(&mut self.global, action, pressed);
        }

        for player in &mut self.players {
            if let Some(action) = self.config.get_player_action(player.player_id(), source) {
                apply(player, action, pressed);
            }
        }
    }

    /// Clear per-frame edges for all players
    /// Call this once per frame after the frame has consumed the input
    pub fn update(&mut self) {
        for player in &mut self.players {
            player.update();
        }
        self.global.update();
    }

    /// Get input state for a specific player
    pub fn player(&self, player_id: usize) -> Option<&PlayerInput> {
        self.players.get(player_id)
    }

    /// Input state for global (non-player) actions
    pub fn global(&self) -> &PlayerInput {
        &self.global
    }

    /// Release every held action. Key-up events are not delivered while the
    /// window is unfocused, so this runs on focus loss.
    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.global.reset();
    }

    /// Get the number of players
    pub fn num_players(&self) -> usize {
        self.players.len()
    }
}

fn apply(input: &mut PlayerInput, action: Action, pressed: bool) {
    if pressed {
        input.press(action);
    } else {
        input.release(action);
    }
}
