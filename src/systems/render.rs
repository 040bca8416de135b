use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::cameratarget::CameraTarget;
use crate::components::mapposition::MapPosition;
use crate::components::room::Room;
use crate::resources::roomcamera::{CameraState, RoomCamera};
use crate::transform::RlglTransform;

const ROOM_COLORS: [Color; 4] = [
    Color::DARKBLUE,
    Color::DARKGREEN,
    Color::DARKPURPLE,
    Color::DARKBROWN,
];

/// Draw rooms and camera targets through the room camera's transform.
///
/// Must be called inside a drawing scope; `d` only proves that.
pub fn render_world(world: &mut World, d: &mut RaylibDrawHandle) {
    d.clear_background(Color::BLACK);

    let Some(camera) = world.get_resource::<RoomCamera>().cloned() else {
        return;
    };
    let current = camera.current_room().map(|r| r.id);

    let mut rlgl = RlglTransform;
    camera.apply(&mut rlgl);

    let mut rooms = world.query::<(Entity, &Room)>();
    for (i, (entity, room)) in rooms.iter(world).enumerate() {
        let color = ROOM_COLORS[i % ROOM_COLORS.len()];
        let rect = room.as_rectangle();
        if Some(entity) == current {
            d.draw_rectangle_rec(rect, color.fade(0.35));
        }
        d.draw_rectangle_lines_ex(rect, 2.0, color);
    }

    let mut targets = world.query::<(&MapPosition, &CameraTarget)>();
    for (position, target) in targets.iter(world) {
        d.draw_rectangle_rec(target.rect(position.pos), Color::GOLD);
    }

    camera.reset(&mut rlgl);
}

/// Screen-space camera readout.
pub fn render_debug_ui(world: &World, d: &mut RaylibDrawHandle) {
    let Some(camera) = world.get_resource::<RoomCamera>() else {
        return;
    };
    let view = camera.view_rect();
    let mouse = camera.screen_to_world(d.get_mouse_position());
    let state = match camera.state() {
        CameraState::Idle => "idle".to_string(),
        CameraState::Panning => "panning".to_string(),
        CameraState::Transitioning { pending } => format!("-> room {:?}", pending.id),
    };

    let fps = d.get_fps();
    d.draw_text(&format!("FPS: {}", fps), 10, 10, 20, Color::RAYWHITE);
    d.draw_text(
        &format!(
            "Camera ({:.1}, {:.1}) {}x{} zoom {:.2} follow {}",
            view.x,
            view.y,
            view.width,
            view.height,
            camera.zoom(),
            camera.follow_axes()
        ),
        10,
        34,
        20,
        Color::RAYWHITE,
    );
    d.draw_text(&format!("State: {}", state), 10, 58, 20, Color::RAYWHITE);
    d.draw_text(
        &format!("Mouse world: ({:.1}, {:.1})", mouse.x, mouse.y),
        10,
        82,
        20,
        Color::RAYWHITE,
    );
}
