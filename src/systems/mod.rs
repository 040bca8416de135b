//! Systems.
//!
//! Submodules overview
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`playerinput`] – translate [`crate::resources::input::InputState`] into velocity
//! - [`render`] – draw rooms and targets through the camera using raylib
//! - [`roomcamera`] – feed the camera its target and room, advance pans
//! - [`time`] – update simulation time and delta

pub mod movement;
pub mod playerinput;
pub mod render;
pub mod roomcamera;
pub mod time;
