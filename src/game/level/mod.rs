// Levels: layouts, triggers, progression and scene loading

pub mod coordinator;
pub mod layout;
pub mod levels;
pub mod scene;
pub mod triggers;

pub use coordinator::{LevelCoordinator, SceneRequest};
pub use layout::{LevelLayout, LiquidPool, Rect};
pub use levels::LEVELS;
pub use scene::SceneManager;
pub use triggers::{Diamond, Door, Liquid};

/// Level loading errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("Unknown level: {0}")]
    UnknownLevel(String),

    #[error("Level index {index} out of range ({count} levels)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("No levels registered")]
    NoLevels,
}
