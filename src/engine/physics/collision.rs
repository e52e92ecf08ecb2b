use rapier2d::prelude::*;
use std::sync::{Arc, Mutex};

/// Collision groups for filtering what objects can interact with each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Player characters
    Character = 0b0000_0001,

    /// Floors, walls and ceilings (the "ground" category)
    Ground = 0b0000_0010,

    /// Exit doors (sensor)
    Door = 0b0000_0100,

    /// Lava, water, poison pools (sensor)
    Liquid = 0b0000_1000,

    /// Collectible diamonds (sensor)
    Diamond = 0b0001_0000,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // Characters pass through each other
            CollisionGroups::Character => Group::from_bits_truncate(
                CollisionGroups::Ground as u32
                    | CollisionGroups::Door as u32
                    | CollisionGroups::Liquid as u32
                    | CollisionGroups::Diamond as u32,
            ),

            CollisionGroups::Ground => Group::from_bits_truncate(CollisionGroups::Character as u32),

            // Triggers only ever report characters
            CollisionGroups::Door | CollisionGroups::Liquid | CollisionGroups::Diamond => {
                Group::from_bits_truncate(CollisionGroups::Character as u32)
            }
        };

        InteractionGroups::new(memberships, filter)
    }
}

/// Collision event handed to game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    /// Two colliders started touching (or overlapping, for sensors)
    Started {
        collider1: ColliderHandle,
        collider2: ColliderHandle,
    },

    /// Two colliders stopped touching
    Stopped {
        collider1: ColliderHandle,
        collider2: ColliderHandle,
    },
}

impl CollisionEvent {
    /// The two colliders involved
    pub fn colliders(&self) -> (ColliderHandle, ColliderHandle) {
        match *self {
            Self::Started {
                collider1,
                collider2,
            }
            | Self::Stopped {
                collider1,
                collider2,
            } => (collider1, collider2),
        }
    }
}

/// Queue for storing collision events during a physics step
///
/// Rapier requires the handler to be `Send + Sync`, hence the mutex even
/// though the game runs on one thread.
pub struct CollisionEventQueue {
    events: Arc<Mutex<Vec<CollisionEvent>>>,
}

impl CollisionEventQueue {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::with_capacity(32))),
        }
    }

    /// Clear all events (call at start of physics step)
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    /// Take all collision events collected since the last drain
    pub fn drain(&self) -> Vec<CollisionEvent> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }

    fn push(&self, event: CollisionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Default for CollisionEventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for CollisionEventQueue {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: rapier2d::prelude::CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        match event {
            rapier2d::prelude::CollisionEvent::Started(h1, h2, _flags) => {
                self.push(CollisionEvent::Started {
                    collider1: h1,
                    collider2: h2,
                });
            }
            rapier2d::prelude::CollisionEvent::Stopped(h1, h2, _flags) => {
                self.push(CollisionEvent::Stopped {
                    collider1: h1,
                    collider2: h2,
                });
            }
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CollisionGroups; 5] = [
        CollisionGroups::Character,
        CollisionGroups::Ground,
        CollisionGroups::Door,
        CollisionGroups::Liquid,
        CollisionGroups::Diamond,
    ];

    #[test]
    fn test_collision_groups_bits() {
        for (i, group1) in ALL.iter().enumerate() {
            for (j, group2) in ALL.iter().enumerate() {
                if i != j {
                    assert_ne!(
                        *group1 as u32, *group2 as u32,
                        "Groups must have unique bits"
                    );
                }
            }
        }
    }

    #[test]
    fn test_character_doesnt_collide_with_character() {
        let groups = CollisionGroups::Character.to_interaction_groups();
        assert!(!groups.filter.contains(groups.memberships));
    }

    #[test]
    fn test_triggers_only_see_characters() {
        let character = Group::from_bits_truncate(CollisionGroups::Character as u32);
        for trigger in [
            CollisionGroups::Door,
            CollisionGroups::Liquid,
            CollisionGroups::Diamond,
        ] {
            let groups = trigger.to_interaction_groups();
            assert_eq!(groups.filter, character);
        }
    }

    #[test]
    fn test_drain_empties_queue() {
        let queue = CollisionEventQueue::new();
        let event = CollisionEvent::Started {
            collider1: ColliderHandle::from_raw_parts(0, 0),
            collider2: ColliderHandle::from_raw_parts(1, 0),
        };
        queue.push(event);

        assert_eq!(queue.drain(), vec![event]);
        assert!(queue.drain().is_empty());
    }
}
