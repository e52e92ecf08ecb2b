// Character system
//
// - Static per-hero configuration (controls, speed, head offsets)
// - Character state (grounded, jump latch, facing)
// - Movement controller turning input into velocity
// - Character entity binding a controller to a physics body

pub mod character;
pub mod config;
pub mod movement;
pub mod state;

pub use character::Character;
pub use config::{CharacterConfig, HEROES};
pub use movement::MovementInput;
