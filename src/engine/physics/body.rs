use super::collision::CollisionGroups;
use rapier2d::prelude::*;

pub use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

/// Builder for creating rigid bodies with common configurations
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    gravity_scale: Real,
    linear_damping: Real,
    can_sleep: bool,
    locked_axes: LockedAxes,
}

impl BodyBuilder {
    /// Create a new dynamic body (affected by forces and collisions)
    pub fn new_dynamic() -> Self {
        Self {
            body_type: RigidBodyType::Dynamic,
            position: Isometry::identity(),
            gravity_scale: 1.0,
            linear_damping: 0.0,
            can_sleep: true,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Create a new fixed (static) body (completely immovable)
    pub fn new_fixed() -> Self {
        Self {
            body_type: RigidBodyType::Fixed,
            position: Isometry::identity(),
            gravity_scale: 0.0,
            linear_damping: 0.0,
            can_sleep: false,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.position = Isometry::translation(x, y);
        self
    }

    /// Set the gravity scale (1.0 = normal gravity, 0.0 = no gravity)
    pub fn gravity_scale(mut self, scale: Real) -> Self {
        self.gravity_scale = scale;
        self
    }

    /// Set linear damping (air resistance)
    pub fn linear_damping(mut self, damping: Real) -> Self {
        self.linear_damping = damping;
        self
    }

    /// Set whether the body can sleep when inactive
    pub fn can_sleep(mut self, can_sleep: bool) -> Self {
        self.can_sleep = can_sleep;
        self
    }

    /// Lock rotation (characters stay upright)
    pub fn lock_rotation(mut self) -> Self {
        self.locked_axes = LockedAxes::ROTATION_LOCKED;
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .gravity_scale(self.gravity_scale)
            .linear_damping(self.linear_damping)
            .can_sleep(self.can_sleep)
            .locked_axes(self.locked_axes)
            .build()
    }
}

/// Builder for creating colliders with common configurations
pub struct ColliderBuilder2D {
    shape: SharedShape,
    collision_groups: CollisionGroups,
    is_sensor: bool,
    friction: Real,
    restitution: Real,
    density: Real,
}

impl ColliderBuilder2D {
    /// Create a box-shaped collider
    pub fn box_shape(half_width: Real, half_height: Real) -> Self {
        Self {
            shape: SharedShape::cuboid(half_width, half_height),
            collision_groups: CollisionGroups::Ground,
            is_sensor: false,
            friction: 0.5,
            restitution: 0.0,
            density: 1.0,
        }
    }

    /// Set the collision groups for filtering
    pub fn collision_groups(mut self, groups: CollisionGroups) -> Self {
        self.collision_groups = groups;
        self
    }

    /// Make this a sensor (detects overlaps but doesn't cause physical response)
    pub fn sensor(mut self, is_sensor: bool) -> Self {
        self.is_sensor = is_sensor;
        self
    }

    /// Set friction coefficient (0.0 = no friction, 1.0 = high friction)
    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    /// Set restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub fn restitution(mut self, restitution: Real) -> Self {
        self.restitution = restitution;
        self
    }

    /// Set density (mass will be calculated from shape volume)
    pub fn density(mut self, density: Real) -> Self {
        self.density = density;
        self
    }

    /// Build the collider. Collision events are always enabled; the game
    /// relies on them for grounding and triggers.
    pub fn build(self) -> Collider {
        ColliderBuilder::new(self.shape)
            .collision_groups(self.collision_groups.to_interaction_groups())
            .sensor(self.is_sensor)
            .friction(self.friction)
            .restitution(self.restitution)
            .density(self.density)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build()
    }
}

/// Common rigid body configurations for level entities
pub mod presets {
    use super::*;

    /// Gravity multiplier for characters, snappier than real-world falls
    pub const CHARACTER_GRAVITY_SCALE: Real = 2.0;

    /// Create a character body (dynamic, rotation locked, never sleeps)
    pub fn character_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_dynamic()
            .position(x, y)
            .lock_rotation()
            .gravity_scale(CHARACTER_GRAVITY_SCALE)
            .can_sleep(false)
            .build()
    }

    /// Create a character collider
    pub fn character_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .collision_groups(CollisionGroups::Character)
            .friction(0.0) // No friction so characters don't stick to walls
            .restitution(0.0)
            .density(1.0)
            .build()
    }

    /// Create a static body for ground blocks and triggers
    pub fn fixed_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_fixed().position(x, y).build()
    }

    /// Create a ground collider (floors, walls, ceilings)
    pub fn ground_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .collision_groups(CollisionGroups::Ground)
            .friction(0.3)
            .restitution(0.0)
            .build()
    }

    /// Create a trigger collider for doors, liquids and diamonds
    pub fn trigger_collider(group: CollisionGroups, width: Real, height: Real) -> Collider {
        ColliderBuilder2D::box_shape(width / 2.0, height / 2.0)
            .collision_groups(group)
            .sensor(true)
            .build()
    }
}
