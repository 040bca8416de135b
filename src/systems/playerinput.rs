//! Keyboard-to-velocity controller.
//!
//! Reads [`InputState`] and sets the velocity of every
//! [`PlayerControlled`] entity. Diagonal movement keeps the same speed.
use bevy_ecs::prelude::*;

use crate::components::rigidbody::{PlayerControlled, RigidBody};
use crate::resources::input::InputState;

pub fn player_input_system(
    input: Res<InputState>,
    mut query: Query<(&PlayerControlled, &mut RigidBody)>,
) {
    let dir = input.direction();
    for (player, mut body) in query.iter_mut() {
        body.velocity.x = dir.x * player.speed;
        body.velocity.y = dir.y * player.speed;
    }
}
