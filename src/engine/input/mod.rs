// Input handling system
//
// Keyboard input for two players sharing one keyboard, plus a handful of
// global actions (restart, quit).
//
// ## Architecture
//
// - `action`: Game actions, control schemes and global bindings
// - `player`: Per-player pressed / just-pressed / just-released state
// - `config`: Key bindings per player and for global actions
// - `manager`: Routes winit key events to players
//
// ## Usage Example
//
// ```rust
// use engine::input::{Action, ControlScheme, InputManager};
//
// let mut input_manager = InputManager::new(&[ControlScheme::ARROWS, ControlScheme::WAD]);
//
// // In your event loop, process keyboard events
// input_manager.process_keyboard_event(&key_event);
//
// // Simulate the frame, then clear the per-frame edges
// if let Some(player) = input_manager.player(0) {
//     let axis = player.horizontal_axis();
//     let jump = player.just_pressed(Action::Jump);
// }
// input_manager.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

pub use action::{Action, ControlScheme};
pub use manager::InputManager;
pub use player::PlayerInput;
