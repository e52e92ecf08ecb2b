// Game layer: characters, levels, the level timer and the running session

pub mod characters;
pub mod level;
pub mod session;
pub mod timer;

pub use session::Session;
