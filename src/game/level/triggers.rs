// Trigger entities: exit doors, hazardous liquids, collectible diamonds

use log::debug;

use super::coordinator::LevelCoordinator;

/// Exit door. The occupied flag keeps enter/exit calls to the coordinator paired.
#[derive(Debug, Default)]
pub struct Door {
    occupied: bool,
}

impl Door {
    pub fn new() -> Self {
        Self::default()
    }

    /// A character started overlapping the door
    pub fn on_enter(&mut self, coordinator: &mut LevelCoordinator) {
        if !self.occupied {
            self.occupied = true;
            coordinator.door_entered();
        }
    }

    /// A character stopped overlapping the door
    pub fn on_exit(&mut self, coordinator: &mut LevelCoordinator) {
        if self.occupied {
            self.occupied = false;
            coordinator.door_exited();
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }
}

/// Lava, water or poison: touching it restarts the level
#[derive(Debug, Default)]
pub struct Liquid;

impl Liquid {
    pub fn on_enter(&self, coordinator: &mut LevelCoordinator) {
        debug!("Character fell into liquid");
        coordinator.restart_level();
    }
}

/// Collectible diamond
#[derive(Debug, Default)]
pub struct Diamond {
    collected: bool,
}

impl Diamond {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the diamond collected. Returns true only for the first contact.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }
}
