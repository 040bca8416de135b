//! ECS components for entities.
//!
//! Submodules overview:
//! - [`cameratarget`] – marks the entity the camera follows and its footprint
//! - [`mapposition`] – world-space position of an entity
//! - [`rigidbody`] – velocity, plus the keyboard-driven player marker
//! - [`room`] – room bounds and the identity-carrying [`room::RoomRef`]

pub mod cameratarget;
pub mod mapposition;
pub mod rigidbody;
pub mod room;
