//! Camera target component.
//!
//! Marks the entity the [`RoomCamera`](crate::resources::roomcamera::RoomCamera)
//! follows and describes its footprint relative to its
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// The followed entity's rectangle, relative to its position.
///
/// When several entities carry this component, the lowest entity is followed.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub size: Vector2,
    pub offset: Vector2,
}

impl CameraTarget {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2 {
                x: width,
                y: height,
            },
            offset: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// World-space rectangle of the target for an entity at `position`.
    pub fn rect(&self, position: Vector2) -> Rectangle {
        Rectangle {
            x: position.x + self.offset.x,
            y: position.y + self.offset.y,
            width: self.size.x,
            height: self.size.y,
        }
    }

    /// Centre of [`rect`](Self::rect), used to decide which room the target is in.
    pub fn center(&self, position: Vector2) -> Vector2 {
        let r = self.rect(position);
        Vector2 {
            x: r.x + r.width * 0.5,
            y: r.y + r.height * 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_without_offset() {
        let t = CameraTarget::new(16.0, 16.0);
        let r = t.rect(Vector2 { x: 100.0, y: 50.0 });
        assert_eq!((r.x, r.y, r.width, r.height), (100.0, 50.0, 16.0, 16.0));
    }

    #[test]
    fn test_rect_and_center_with_offset() {
        let t = CameraTarget::new(16.0, 32.0).with_offset(Vector2 { x: -8.0, y: -32.0 });
        let pos = Vector2 { x: 100.0, y: 100.0 };
        let r = t.rect(pos);
        assert_eq!((r.x, r.y), (92.0, 68.0));
        let c = t.center(pos);
        assert_eq!((c.x, c.y), (100.0, 84.0));
    }
}
