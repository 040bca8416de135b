//! Data-driven room layout.
//!
//! A [`RoomLayout`] lists the rooms of a level and where the player starts. It
//! is read from JSON and turned into entities with [`RoomLayout::spawn`].
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "rooms": [
//!     { "x": 0, "y": 0, "width": 800, "height": 480 },
//!     { "x": 800, "y": 0, "width": 300, "height": 200 }
//!   ],
//!   "player": { "x": 100, "y": 100, "width": 16, "height": 16, "speed": 180 }
//! }
//! ```

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::cameratarget::CameraTarget;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::{PlayerControlled, RigidBody};
use crate::components::room::Room;
use crate::resources::cameraconfig::ConfigError;

/// Player spawn settings.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PlayerSpawn {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_player_size")]
    pub width: f32,
    #[serde(default = "default_player_size")]
    pub height: f32,
    #[serde(default = "default_player_speed")]
    pub speed: f32,
}

fn default_player_size() -> f32 {
    16.0
}

fn default_player_speed() -> f32 {
    180.0
}

/// Rooms plus the player start.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoomLayout {
    pub rooms: Vec<Room>,
    pub player: PlayerSpawn,
}

impl RoomLayout {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let layout: RoomLayout = serde_json::from_str(&content)?;
        info!(
            "Loaded {} rooms from {}",
            layout.rooms.len(),
            path.as_ref().display()
        );
        Ok(layout)
    }

    /// Load `path`, falling back to [`default_layout`](Self::default_layout).
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load_from_file(path.as_ref()).unwrap_or_else(|e| {
            warn!(
                "Could not load room layout {}: {}. Using built-in layout.",
                path.as_ref().display(),
                e
            );
            Self::default_layout()
        })
    }

    /// A small level mixing wide, tall and undersized rooms.
    pub fn default_layout() -> Self {
        Self {
            rooms: vec![
                Room::new(0.0, 0.0, 800.0, 480.0),
                Room::new(800.0, 0.0, 300.0, 200.0),
                Room::new(800.0, 200.0, 400.0, 960.0),
                Room::new(0.0, 480.0, 800.0, 240.0),
                Room::new(-100.0, 720.0, 900.0, 440.0),
            ],
            player: PlayerSpawn {
                x: 100.0,
                y: 100.0,
                width: default_player_size(),
                height: default_player_size(),
                speed: default_player_speed(),
            },
        }
    }

    /// Spawn one entity per room and the player. Returns the player entity.
    pub fn spawn(&self, world: &mut World) -> Entity {
        for room in &self.rooms {
            world.spawn(*room);
        }
        world
            .spawn((
                MapPosition {
                    pos: Vector2 {
                        x: self.player.x,
                        y: self.player.y,
                    },
                },
                CameraTarget::new(self.player.width, self.player.height),
                RigidBody::new(),
                PlayerControlled::new(self.player.speed),
            ))
            .id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_defaults() {
        let json = r#"{
            "rooms": [{ "x": 0, "y": 0, "width": 800, "height": 480 }],
            "player": { "x": 10, "y": 20 }
        }"#;
        let layout: RoomLayout = serde_json::from_str(json).unwrap();
        assert_eq!(layout.rooms, vec![Room::new(0.0, 0.0, 800.0, 480.0)]);
        assert_eq!(layout.player.width, 16.0);
        assert_eq!(layout.player.speed, 180.0);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let layout = RoomLayout::load_or_default("./no/such/rooms.json");
        assert_eq!(layout, RoomLayout::default_layout());
    }

    #[test]
    fn test_spawn_creates_rooms_and_player() {
        let mut world = World::new();
        let layout = RoomLayout::default_layout();
        let player = layout.spawn(&mut world);

        let mut rooms = world.query::<&Room>();
        assert_eq!(rooms.iter(&world).count(), layout.rooms.len());
        assert!(world.get::<CameraTarget>(player).is_some());
        assert_eq!(world.get::<MapPosition>(player).unwrap().pos.x, 100.0);
    }
}
