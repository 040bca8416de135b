//! Room camera systems.
//!
//! - [`room_camera_follow_system`] – works out which room the
//!   [`CameraTarget`] is in and hands both to [`RoomCamera::follow`]
//! - [`room_camera_pan_system`] – advances pans and room transitions with the
//!   frame delta from [`WorldTime`]
//!
//! Run the pan system after the follow system so a transition started this
//! frame already moves this frame.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::cameratarget::CameraTarget;
use crate::components::mapposition::MapPosition;
use crate::components::room::{Room, RoomRef};
use crate::resources::roomcamera::RoomCamera;
use crate::resources::worldtime::WorldTime;

/// Room containing `point`. When rooms overlap the lowest entity wins.
pub fn find_room<'a>(
    rooms: impl IntoIterator<Item = (Entity, &'a Room)>,
    point: Vector2,
) -> Option<RoomRef> {
    rooms
        .into_iter()
        .filter(|(_, room)| room.contains_point(point))
        .min_by_key(|(entity, _)| *entity)
        .map(|(entity, room)| RoomRef::new(entity, *room))
}

/// Follow the [`CameraTarget`] with the lowest entity through the rooms.
///
/// A target outside every room passes `None`, which leaves the camera where
/// it is.
pub fn room_camera_follow_system(
    camera: Option<ResMut<RoomCamera>>,
    targets: Query<(Entity, &MapPosition, &CameraTarget)>,
    rooms: Query<(Entity, &Room)>,
) {
    let Some(mut camera) = camera else {
        return;
    };
    let Some((_, position, target)) = targets.iter().min_by_key(|(entity, _, _)| *entity) else {
        return;
    };

    let room = find_room(rooms.iter(), target.center(position.pos));
    camera.follow(target.rect(position.pos), room);
}

/// Advance the camera's pan by this frame's delta.
pub fn room_camera_pan_system(camera: Option<ResMut<RoomCamera>>, time: Res<WorldTime>) {
    let Some(mut camera) = camera else {
        return;
    };
    camera.update(time.delta);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_room_prefers_lowest_entity_on_overlap() {
        let mut world = World::new();
        let a = world.spawn(Room::new(0.0, 0.0, 100.0, 100.0)).id();
        let b = world.spawn(Room::new(50.0, 0.0, 100.0, 100.0)).id();

        let mut q = world.query::<(Entity, &Room)>();
        let hit = find_room(q.iter(&world), Vector2 { x: 75.0, y: 10.0 });
        assert_eq!(hit.map(|r| r.id), Some(a.min(b)));

        let hit = find_room(q.iter(&world), Vector2 { x: 125.0, y: 10.0 });
        assert_eq!(hit.map(|r| r.id), Some(b));

        assert!(find_room(q.iter(&world), Vector2 { x: -5.0, y: 10.0 }).is_none());
    }
}
