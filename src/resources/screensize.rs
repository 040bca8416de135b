//! Screen size resource.
//!
//! Stores the window dimensions in pixels, queried once at startup. The
//! camera derives its fixed zoom from this value and does not follow later
//! resizes.

use bevy_ecs::prelude::Resource;

/// Screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Largest uniform scale at which a `width` x `height` viewport fits on
    /// this screen.
    pub fn fit_scale(&self, width: f32, height: f32) -> f32 {
        (self.w as f32 / width).min(self.h as f32 / height)
    }

    pub fn is_valid(&self) -> bool {
        self.w > 0 && self.h > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_scale_limited_by_height() {
        let screen = ScreenSize::new(1280, 720);
        assert_eq!(screen.fit_scale(400.0, 240.0), 3.0);
    }

    #[test]
    fn test_fit_scale_limited_by_width() {
        let screen = ScreenSize::new(800, 1000);
        assert_eq!(screen.fit_scale(400.0, 240.0), 2.0);
    }

    #[test]
    fn test_is_valid() {
        assert!(ScreenSize::new(1, 1).is_valid());
        assert!(!ScreenSize::new(0, 720).is_valid());
        assert!(!ScreenSize::new(1280, -1).is_valid());
    }
}
