//! Room-bounded 2D camera resource.
//!
//! [`RoomCamera`] frames a fixed-size viewport over a world split into
//! rectangular rooms. Each frame the caller:
//! 1. calls [`RoomCamera::follow`] with the followed rectangle and the room it
//!    is in, which either snaps the camera onto the target (clamped to the
//!    room) or, when the room changed, starts a room transition;
//! 2. calls [`RoomCamera::update`] with the frame delta to advance any pan;
//! 3. wraps world drawing in [`RoomCamera::apply`] / [`RoomCamera::reset`].
//!
//! Ordinary following never lags. Only room transitions and explicit
//! [`RoomCamera::set_target`] pans move the camera over time, at a constant
//! `pan_speed` per axis.
//!
//! Zoom is computed once from the [`ScreenSize`] passed at construction.

use std::fmt;
use std::str::FromStr;

use bevy_ecs::prelude::Resource;
use log::{debug, warn};
use raylib::prelude::{Rectangle, Vector2};
use thiserror::Error;

use crate::components::room::{Room, RoomRef};
use crate::resources::cameraconfig::CameraConfig;
use crate::resources::screensize::ScreenSize;
use crate::transform::TransformStack;

/// Distance in pixels under which a pan is considered finished on an axis.
pub const PAN_EPSILON: f32 = 0.1;

/// Construction errors. Runtime camera operations never fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CameraError {
    #[error(
        "invalid camera dimensions: viewport {viewport_width}x{viewport_height}, screen {screen_width}x{screen_height}"
    )]
    InvalidDimensions {
        viewport_width: f32,
        viewport_height: f32,
        screen_width: i32,
        screen_height: i32,
    },
    #[error("invalid pan speed {0} (must be finite and > 0)")]
    InvalidPanSpeed(f32),
    #[error("invalid follow axes mode '{0}' (expected horizontal, vertical, both or none)")]
    InvalidAxesMode(String),
}

/// Which axes [`RoomCamera::follow`] centres on the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowAxes {
    Horizontal,
    Vertical,
    #[default]
    Both,
    /// Following disabled on both axes. The camera still clamps to the room
    /// and still runs room transitions.
    Off,
}

impl FollowAxes {
    pub fn follows_x(self) -> bool {
        matches!(self, FollowAxes::Horizontal | FollowAxes::Both)
    }

    pub fn follows_y(self) -> bool {
        matches!(self, FollowAxes::Vertical | FollowAxes::Both)
    }

    /// Parse, degrading unknown modes to [`FollowAxes::Off`] with a warning.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|e| {
            warn!("{}; camera will not follow its target", e);
            FollowAxes::Off
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FollowAxes::Horizontal => "horizontal",
            FollowAxes::Vertical => "vertical",
            FollowAxes::Both => "both",
            FollowAxes::Off => "none",
        }
    }
}

impl FromStr for FollowAxes {
    type Err = CameraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "x" => Ok(FollowAxes::Horizontal),
            "vertical" | "y" => Ok(FollowAxes::Vertical),
            "both" | "xy" => Ok(FollowAxes::Both),
            "none" | "off" => Ok(FollowAxes::Off),
            _ => Err(CameraError::InvalidAxesMode(s.to_string())),
        }
    }
}

impl fmt::Display for FollowAxes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Motion state of the camera.
///
/// A room transition is a pan that also suspends target following and, once
/// the pan lands, makes `pending` the current room.
#[derive(Debug, Clone, Copy)]
pub enum CameraState {
    Idle,
    Panning,
    Transitioning { pending: RoomRef },
}

/// The room camera.
#[derive(Resource, Debug, Clone)]
pub struct RoomCamera {
    position: Vector2,
    target: Vector2,
    viewport: Vector2,
    zoom: f32,
    pan_speed: f32,
    follow_axes: FollowAxes,
    state: CameraState,
    current_room: Option<RoomRef>,
}

impl RoomCamera {
    /// Create a camera at the origin with no current room.
    ///
    /// `pan_speed` is in pixels per second and must be positive, otherwise a
    /// transition could never land. Zoom is the largest uniform scale that fits
    /// the viewport on `screen`.
    pub fn new(
        viewport_width: f32,
        viewport_height: f32,
        pan_speed: f32,
        follow_axes: FollowAxes,
        screen: ScreenSize,
    ) -> Result<Self, CameraError> {
        let dims_ok = viewport_width.is_finite()
            && viewport_height.is_finite()
            && viewport_width > 0.0
            && viewport_height > 0.0
            && screen.is_valid();
        if !dims_ok {
            return Err(CameraError::InvalidDimensions {
                viewport_width,
                viewport_height,
                screen_width: screen.w,
                screen_height: screen.h,
            });
        }
        if !pan_speed.is_finite() || pan_speed <= 0.0 {
            return Err(CameraError::InvalidPanSpeed(pan_speed));
        }

        let zoom = screen.fit_scale(viewport_width, viewport_height);
        debug!(
            "RoomCamera: viewport {}x{}, screen {}x{}, zoom {:.3}, pan_speed {}, follow {}",
            viewport_width, viewport_height, screen.w, screen.h, zoom, pan_speed, follow_axes
        );

        Ok(Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            target: Vector2 { x: 0.0, y: 0.0 },
            viewport: Vector2 {
                x: viewport_width,
                y: viewport_height,
            },
            zoom,
            pan_speed,
            follow_axes,
            state: CameraState::Idle,
            current_room: None,
        })
    }

    pub fn from_config(config: &CameraConfig, screen: ScreenSize) -> Result<Self, CameraError> {
        Self::new(
            config.viewport_width,
            config.viewport_height,
            config.pan_speed,
            config.follow_axes,
            screen,
        )
    }

    // ------------------------------------------------------------------
    // Following and clamping
    // ------------------------------------------------------------------

    /// Track `target` inside `room` for this frame.
    ///
    /// - `None` room: nothing happens.
    /// - A room whose identity differs from the current room starts a
    ///   transition (this includes the very first call).
    /// - While transitioning the target is ignored.
    /// - Otherwise the followed axes are centred on the target, the result is
    ///   clamped to the room and the camera snaps there.
    pub fn follow(&mut self, target: Rectangle, room: Option<RoomRef>) {
        let Some(room) = room else {
            return;
        };

        let changed = self
            .current_room
            .as_ref()
            .is_none_or(|current| !current.is_same_room(&room));
        if changed {
            self.start_room_transition(room);
        }

        if self.is_transitioning() {
            return;
        }

        let desired_x = if self.follow_axes.follows_x() {
            target.x + target.width / 2.0 - self.viewport.x / 2.0
        } else {
            self.position.x
        };
        let desired_y = if self.follow_axes.follows_y() {
            target.y + target.height / 2.0 - self.viewport.y / 2.0
        } else {
            self.position.y
        };

        let (x, y) = self.clamped_position(desired_x, desired_y, Some(&room.bounds));
        self.position = Vector2 { x, y };
    }

    /// Position closest to `(x, y)` that keeps the viewport inside `room`.
    ///
    /// On an axis where the room is no larger than the viewport, the viewport
    /// is centred on the room regardless of the input. Without a room the
    /// input is returned unchanged.
    pub fn clamped_position(&self, x: f32, y: f32, room: Option<&Room>) -> (f32, f32) {
        let Some(room) = room else {
            return (x, y);
        };
        (
            clamp_axis(x, room.x, room.width, self.viewport.x),
            clamp_axis(y, room.y, room.height, self.viewport.y),
        )
    }

    /// Move the camera into `room` instantly, without panning.
    pub fn clamp_to_room(&mut self, room: Option<&Room>) {
        if room.is_none() {
            return;
        }
        let (x, y) = self.clamped_position(self.position.x, self.position.y, room);
        self.position = Vector2 { x, y };
    }

    // ------------------------------------------------------------------
    // Transitions and panning
    // ------------------------------------------------------------------

    /// Begin panning into `room`, suspending target following until the pan
    /// lands.
    ///
    /// Horizontally the camera only moves as far as needed to bring the
    /// viewport inside the room (or centres on a narrow room). Vertically it
    /// goes to the top of a tall room, or centres on a short one.
    ///
    /// A transition already in flight is abandoned without completing.
    pub fn start_room_transition(&mut self, room: RoomRef) {
        match self.state {
            CameraState::Transitioning { pending } if pending.is_same_room(&room) => {}
            CameraState::Transitioning { pending } => {
                debug!(
                    "RoomCamera: abandoning transition to {:?} for {:?}",
                    pending.id, room.id
                );
            }
            _ => {
                debug!(
                    "RoomCamera: transition {:?} -> {:?}",
                    self.current_room.map(|r| r.id),
                    room.id
                );
            }
        }

        let bounds = room.bounds;
        let (vw, vh) = (self.viewport.x, self.viewport.y);
        let x = self.position.x;

        let target_x = if bounds.width <= vw {
            bounds.x + (bounds.width - vw) / 2.0
        } else if x < bounds.x {
            bounds.x
        } else if x + vw > bounds.right() {
            bounds.right() - vw
        } else {
            x
        };
        let target_y = if bounds.height <= vh {
            bounds.y + (bounds.height - vh) / 2.0
        } else {
            bounds.y
        };

        self.state = CameraState::Transitioning { pending: room };
        self.set_target(target_x, target_y);
    }

    /// Start panning towards `(x, y)`. Does not start or end a transition.
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = Vector2 { x, y };
        if !self.is_transitioning() {
            self.state = CameraState::Panning;
        }
    }

    /// Advance the current pan by `dt` seconds.
    ///
    /// Each axis moves independently by up to `pan_speed * dt` and never
    /// passes its target. Once both axes are within [`PAN_EPSILON`] the camera
    /// snaps exactly onto the target and the pan (and any transition) ends.
    /// Negative or non-finite deltas do not move the camera.
    pub fn update(&mut self, dt: f32) {
        if !self.is_panning() {
            return;
        }

        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let step = self.pan_speed * dt;
        self.position.x = approach(self.position.x, self.target.x, step);
        self.position.y = approach(self.position.y, self.target.y, step);

        if (self.target.x - self.position.x).abs() < PAN_EPSILON
            && (self.target.y - self.position.y).abs() < PAN_EPSILON
        {
            self.position = self.target;
            self.finish_pan();
        }
    }

    fn finish_pan(&mut self) {
        if let CameraState::Transitioning { pending } = self.state {
            debug!("RoomCamera: entered room {:?}", pending.id);
            self.current_room = Some(pending);
        }
        self.state = CameraState::Idle;
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Push the camera transform: scale by zoom, then translate by the
    /// negated position. Pair every call with [`reset`](Self::reset).
    pub fn apply<T: TransformStack + ?Sized>(&self, ctx: &mut T) {
        ctx.push();
        ctx.scale(self.zoom, self.zoom);
        ctx.translate(-self.position.x, -self.position.y);
    }

    /// Pop the transform pushed by [`apply`](Self::apply).
    pub fn reset<T: TransformStack + ?Sized>(&self, ctx: &mut T) {
        ctx.pop();
    }

    /// Inverse of the [`apply`](Self::apply) transform.
    pub fn screen_to_world(&self, point: Vector2) -> Vector2 {
        Vector2 {
            x: point.x / self.zoom + self.position.x,
            y: point.y / self.zoom + self.position.y,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Top-left world position of the viewport.
    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// Destination of the last pan.
    pub fn target(&self) -> Vector2 {
        self.target
    }

    /// Viewport size in world pixels.
    pub fn viewport(&self) -> Vector2 {
        self.viewport
    }

    /// World rectangle currently framed.
    pub fn view_rect(&self) -> Rectangle {
        Rectangle {
            x: self.position.x,
            y: self.position.y,
            width: self.viewport.x,
            height: self.viewport.y,
        }
    }

    pub fn pan_speed(&self) -> f32 {
        self.pan_speed
    }

    pub fn follow_axes(&self) -> FollowAxes {
        self.follow_axes
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    pub fn is_panning(&self) -> bool {
        !matches!(self.state, CameraState::Idle)
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, CameraState::Transitioning { .. })
    }

    pub fn current_room(&self) -> Option<RoomRef> {
        self.current_room
    }

    /// Destination room of the transition in progress.
    pub fn pending_room(&self) -> Option<RoomRef> {
        match self.state {
            CameraState::Transitioning { pending } => Some(pending),
            _ => None,
        }
    }
}

fn clamp_axis(value: f32, origin: f32, size: f32, view: f32) -> f32 {
    if size <= view {
        origin + (size - view) / 2.0
    } else {
        // Not f32::clamp: rounding at large coordinates can put the upper
        // bound below `origin`, and the lower bound wins.
        value.min(origin + size - view).max(origin)
    }
}

fn approach(from: f32, to: f32, step: f32) -> f32 {
    if from < to {
        (from + step).min(to)
    } else {
        (from - step).max(to)
    }
}
