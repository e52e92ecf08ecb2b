// Game action definitions and mappings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,

    // Meta actions
    Restart,
    Quit,
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

/// The three keys a character is driven with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlScheme {
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
}

impl ControlScheme {
    /// Arrow keys (Fireboy)
    pub const ARROWS: ControlScheme = ControlScheme {
        left: KeyCode::ArrowLeft,
        right: KeyCode::ArrowRight,
        jump: KeyCode::ArrowUp,
    };

    /// A/D/W (Watergirl)
    pub const WAD: ControlScheme = ControlScheme {
        left: KeyCode::KeyA,
        right: KeyCode::KeyD,
        jump: KeyCode::KeyW,
    };

    /// Expand the scheme into source -> action bindings
    pub fn bindings(&self) -> Vec<(InputSource, Action)> {
        vec![
            (InputSource::Keyboard(self.left), Action::MoveLeft),
            (InputSource::Keyboard(self.right), Action::MoveRight),
            (InputSource::Keyboard(self.jump), Action::Jump),
        ]
    }
}

/// Global bindings (not player-specific)
pub fn global_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::Keyboard(KeyCode::KeyR), Action::Restart),
        (InputSource::Keyboard(KeyCode::Escape), Action::Quit),
    ]
}
