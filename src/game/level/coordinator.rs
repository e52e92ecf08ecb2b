// Level progression: door occupancy and scene transition requests

use log::{debug, info, warn};

/// Doors that must be occupied at the same time to finish a level
pub const REQUIRED_DOORS: u32 = 2;

/// A scene transition the session should perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneRequest {
    /// Reload the active level
    Restart,
    /// Load the level after the active one
    Next,
    /// Load a level by name
    Named(String),
}

/// Tracks simultaneous door occupancy and queues scene transitions.
///
/// One coordinator exists per running session; doors and liquids receive it
/// by `&mut` when their collision events are dispatched.
#[derive(Debug, Default)]
pub struct LevelCoordinator {
    doors_occupied: u32,
    requests: Vec<SceneRequest>,
}

impl LevelCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A door became occupied. Reaching [`REQUIRED_DOORS`] queues the next level.
    pub fn door_entered(&mut self) {
        if self.doors_occupied >= REQUIRED_DOORS {
            warn!(
                "Door entered with {} doors already occupied, ignoring",
                self.doors_occupied
            );
            return;
        }

        self.doors_occupied += 1;
        debug!("Doors occupied: {}", self.doors_occupied);

        if self.doors_occupied == REQUIRED_DOORS {
            info!("Both doors occupied, advancing");
            self.next_level();
        }
    }

    /// A door stopped being occupied
    pub fn door_exited(&mut self) {
        if self.doors_occupied == 0 {
            warn!("Door exited with no door occupied, ignoring");
            return;
        }

        self.doors_occupied -= 1;
        debug!("Doors occupied: {}", self.doors_occupied);
    }

    /// Reload the active level
    pub fn restart_level(&mut self) {
        self.requests.push(SceneRequest::Restart);
    }

    /// Load the level after the active one
    pub fn next_level(&mut self) {
        self.requests.push(SceneRequest::Next);
    }

    /// Load a level by name
    pub fn load_scene(&mut self, name: impl Into<String>) {
        self.requests.push(SceneRequest::Named(name.into()));
    }

    /// Take every queued request, oldest first
    pub fn drain_requests(&mut self) -> Vec<SceneRequest> {
        std::mem::take(&mut self.requests)
    }

    pub fn has_pending_requests(&self) -> bool {
        !self.requests.is_empty()
    }

    /// Forget door occupancy; called whenever a level (and its doors) is rebuilt
    pub fn reset(&mut self) {
        self.doors_occupied = 0;
    }

    pub fn doors_occupied(&self) -> u32 {
        self.doors_occupied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_next(requests: &[SceneRequest]) -> usize {
        requests
            .iter()
            .filter(|r| **r == SceneRequest::Next)
            .count()
    }

    #[test]
    fn test_one_door_does_not_advance() {
        let mut coordinator = LevelCoordinator::new();
        coordinator.door_entered();

        assert_eq!(coordinator.doors_occupied(), 1);
        assert!(!coordinator.has_pending_requests());
    }

    #[test]
    fn test_second_door_advances_once() {
        let mut coordinator = LevelCoordinator::new();
        coordinator.door_entered();
        coordinator.door_entered();

        assert_eq!(coordinator.doors_occupied(), 2);
        assert_eq!(coordinator.drain_requests(), vec![SceneRequest::Next]);
    }

    #[test]
    fn test_shuffling_before_reload_advances_again_only_on_new_edge() {
        let mut coordinator = LevelCoordinator::new();
        coordinator.door_entered();
        coordinator.door_entered();
        coordinator.door_exited();
        coordinator.door_exited();
        coordinator.door_entered();

        let requests = coordinator.drain_requests();
        assert_eq!(count_next(&requests), 1);
        assert!(coordinator.doors_occupied() <= REQUIRED_DOORS);
    }

    #[test]
    fn test_counter_never_negative() {
        let mut coordinator = LevelCoordinator::new();
        coordinator.door_exited();
        assert_eq!(coordinator.doors_occupied(), 0);

        coordinator.door_entered();
        coordinator.door_exited();
        coordinator.door_exited();
        assert_eq!(coordinator.doors_occupied(), 0);
    }

    #[test]
    fn test_counter_never_exceeds_required() {
        let mut coordinator = LevelCoordinator::new();
        for _ in 0..4 {
            coordinator.door_entered();
        }

        assert_eq!(coordinator.doors_occupied(), REQUIRED_DOORS);
        assert_eq!(count_next(&coordinator.drain_requests()), 1);
    }

    #[test]
    fn test_restart_is_repeatable() {
        let mut coordinator = LevelCoordinator::new();
        coordinator.restart_level();
        coordinator.restart_level();

        assert_eq!(
            coordinator.drain_requests(),
            vec![SceneRequest::Restart, SceneRequest::Restart]
        );
        assert!(!coordinator.has_pending_requests());
    }

    #[test]
    fn test_load_scene_by_name() {
        let mut coordinator = LevelCoordinator::new();
        coordinator.load_scene("Level 2");

        assert_eq!(
            coordinator.drain_requests(),
            vec![SceneRequest::Named("Level 2".to_string())]
        );
    }

    #[test]
    fn test_reset_clears_occupancy() {
        let mut coordinator = LevelCoordinator::new();
        coordinator.door_entered();
        coordinator.restart_level();
        coordinator.reset();

        assert_eq!(coordinator.doors_occupied(), 0);
        // Pending requests survive a reset
        assert!(coordinator.has_pending_requests());
    }
}
