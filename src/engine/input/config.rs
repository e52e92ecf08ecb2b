// Input configuration: key bindings per player plus the global bindings

use super::action::{Action, ControlScheme, InputSource};
use std::collections::HashMap;

/// Input configuration for a single player
/// Maps input sources (keys) to game actions
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Create a configuration from a list of bindings.
    /// A source listed twice keeps its last action.
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }
}

/// Manager for all player input configurations
#[derive(Debug)]
pub struct InputConfigManager {
    /// Configurations for each player
    configs: Vec<InputConfig>,

    /// Global bindings (not player-specific)
    global_config: InputConfig,
}

impl InputConfigManager {
    /// Create a config manager with one player per control scheme
    pub fn new(schemes: &[ControlScheme]) -> Self {
        let configs = schemes
            .iter()
            .map(|scheme| InputConfig::from_bindings(scheme.bindings()))
            .collect();

        Self {
            configs,
            global_config: InputConfig::from_bindings(super::action::global_bindings()),
        }
    }

    /// Number of configured players
    pub fn num_players(&self) -> usize {
        self.configs.len()
    }

    /// Get the action for a source bound to a specific player
    pub fn get_player_action(&self, player_id: usize, source: InputSource) -> Option<Action> {
        self.configs
            .get(player_id)
            .and_then(|config| config.get_action(source))
    }

    /// Get the global action for a source
    pub fn get_global_action(&self, source: InputSource) -> Option<Action> {
        self.global_config.get_action(source)
    }
}
