//! Stack-based 2D transform seam used by the camera.
//!
//! [`RoomCamera::apply`](crate::resources::roomcamera::RoomCamera::apply) and
//! [`RoomCamera::reset`](crate::resources::roomcamera::RoomCamera::reset) talk
//! to a [`TransformStack`] rather than to raylib directly:
//! - [`RlglTransform`] forwards to raylib's `rlgl` matrix stack and is what the
//!   render system uses inside a drawing scope.
//! - [`TransformLog`] records every call and keeps the camera testable without
//!   a window or GL context.

use raylib::ffi;

/// A 2D affine transform stack.
pub trait TransformStack {
    /// Save the current transform.
    fn push(&mut self);
    /// Restore the most recently saved transform.
    fn pop(&mut self);
    /// Post-multiply a scale.
    fn scale(&mut self, sx: f32, sy: f32);
    /// Post-multiply a translation.
    fn translate(&mut self, dx: f32, dy: f32);
}

/// raylib `rlgl` matrix stack.
///
/// Only valid between `begin_drawing` and the end of the draw handle's scope,
/// on the thread that owns the window.
#[derive(Debug, Default, Clone, Copy)]
pub struct RlglTransform;

impl TransformStack for RlglTransform {
    fn push(&mut self) {
        unsafe { ffi::rlPushMatrix() }
    }

    fn pop(&mut self) {
        unsafe { ffi::rlPopMatrix() }
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        unsafe { ffi::rlScalef(sx, sy, 1.0) }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        unsafe { ffi::rlTranslatef(dx, dy, 0.0) }
    }
}

/// One recorded [`TransformStack`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    Push,
    Pop,
    Scale(f32, f32),
    Translate(f32, f32),
}

/// Headless [`TransformStack`] that records calls and tracks nesting depth.
#[derive(Debug, Default, Clone)]
pub struct TransformLog {
    pub ops: Vec<TransformOp>,
    depth: usize,
    /// Number of `pop` calls made with nothing pushed.
    pub underflows: usize,
}

impl TransformLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current push/pop nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True when every push has a matching pop and no pop underflowed.
    pub fn is_balanced(&self) -> bool {
        self.depth == 0 && self.underflows == 0
    }
}

impl TransformStack for TransformLog {
    fn push(&mut self) {
        self.depth += 1;
        self.ops.push(TransformOp::Push);
    }

    fn pop(&mut self) {
        if self.depth == 0 {
            self.underflows += 1;
        } else {
            self.depth -= 1;
        }
        self.ops.push(TransformOp::Pop);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.ops.push(TransformOp::Scale(sx, sy));
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.ops.push(TransformOp::Translate(dx, dy));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_tracks_depth() {
        let mut log = TransformLog::new();
        log.push();
        log.push();
        assert_eq!(log.depth(), 2);
        log.pop();
        log.pop();
        assert!(log.is_balanced());
    }

    #[test]
    fn test_log_counts_underflow() {
        let mut log = TransformLog::new();
        log.pop();
        assert_eq!(log.underflows, 1);
        assert_eq!(log.depth(), 0);
        assert!(!log.is_balanced());
    }
}
