//! Kinematic body component.
//!
//! Stores a velocity consumed by
//! [`movement_system`](crate::systems::movement::movement_system). Input
//! systems write the velocity; nothing else here simulates physics.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Velocity in world units per second.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl RigidBody {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marks an entity driven by keyboard input, moving at `speed` px/s.
#[derive(Component, Clone, Copy, Debug)]
pub struct PlayerControlled {
    pub speed: f32,
}

impl PlayerControlled {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}
