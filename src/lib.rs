//! Room camera library.
//!
//! A 2D camera for room-based games: it follows a target inside rectangular
//! rooms, never shows anything outside the current room, and pans smoothly
//! when the target crosses into another room.
//!
//! The camera itself is [`resources::roomcamera::RoomCamera`]; the rest of the
//! crate wires it into a `bevy_ecs` world and a raylib window.

pub mod components;
pub mod resources;
pub mod systems;
pub mod transform;
