//! Room bounds component.
//!
//! A [`Room`] is an axis-aligned rectangle in world pixels that constrains the
//! [`RoomCamera`](crate::resources::roomcamera::RoomCamera). Rooms live on
//! their own entities; the entity is the room's identity, the component only
//! carries its bounds. See [`RoomRef`] for how the two travel together.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::{Rectangle, Vector2};
use serde::{Deserialize, Serialize};

/// Axis-aligned room bounds in world pixel coordinates.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Room {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Point containment. The left/top edges are inclusive, the right/bottom
    /// edges exclusive, so a point on a shared wall belongs to one room only.
    pub fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    pub fn as_rectangle(&self) -> Rectangle {
        Rectangle {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

impl From<Rectangle> for Room {
    fn from(r: Rectangle) -> Self {
        Self::new(r.x, r.y, r.width, r.height)
    }
}

/// A room as handed to the camera: identity plus the bounds read this frame.
///
/// Two `RoomRef`s denote the same room only when their `id`s match. Bounds are
/// never compared, so two distinct room entities sharing the same rectangle are
/// still different rooms.
#[derive(Debug, Clone, Copy)]
pub struct RoomRef {
    pub id: Entity,
    pub bounds: Room,
}

impl RoomRef {
    pub fn new(id: Entity, bounds: Room) -> Self {
        Self { id, bounds }
    }

    /// Identity comparison.
    pub fn is_same_room(&self, other: &RoomRef) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn test_room_edges() {
        let room = Room::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(room.right(), 110.0);
        assert_eq!(room.bottom(), 70.0);
    }

    #[test]
    fn test_contains_point_edges() {
        let room = Room::new(0.0, 0.0, 100.0, 100.0);
        assert!(room.contains_point(Vector2 { x: 0.0, y: 0.0 }));
        assert!(room.contains_point(Vector2 { x: 99.9, y: 50.0 }));
        assert!(!room.contains_point(Vector2 { x: 100.0, y: 50.0 }));
        assert!(!room.contains_point(Vector2 { x: 50.0, y: -0.1 }));
    }

    #[test]
    fn test_room_from_rectangle() {
        let r = Rectangle {
            x: 1.0,
            y: 2.0,
            width: 3.0,
            height: 4.0,
        };
        assert_eq!(Room::from(r), Room::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Room::from(r).as_rectangle().width, 3.0);
    }

    #[test]
    fn test_roomref_identity_ignores_bounds() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let bounds = Room::new(0.0, 0.0, 800.0, 480.0);

        let first = RoomRef::new(a, bounds);
        let twin = RoomRef::new(b, bounds);
        let moved = RoomRef::new(a, Room::new(5.0, 5.0, 10.0, 10.0));

        assert!(!first.is_same_room(&twin));
        assert!(first.is_same_room(&moved));
    }
}
