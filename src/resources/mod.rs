//! ECS resources made available to systems.
//!
//! Overview
//! - `cameraconfig` – INI-backed camera and window settings
//! - `input` – per-frame directional keyboard state
//! - `roomcamera` – the room-bounded camera and its transition state machine
//! - `roomlayout` – JSON room sets and the player spawn
//! - `screensize` – screen dimensions the camera zoom is derived from
//! - `worldtime` – simulation time and delta
pub mod cameraconfig;
pub mod input;
pub mod roomcamera;
pub mod roomlayout;
pub mod screensize;
pub mod worldtime;
