//! The drawing surface the animation presents frames to.

use crate::shape::Surface;

/// Base window title, shown before the first frame.
pub const TITLE: &str = "Spinning Top Motion";

/// Window title for a frame drawn at `velocity`.
pub fn frame_title(velocity: f64) -> String {
    format!("{} - Velocity: {:.2}", TITLE, velocity)
}

/// Fixed axis ranges of the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub x: (f32, f32),
    pub y: (f32, f32),
    pub z: (f32, f32),
}

impl AxisBounds {
    /// Centre of the bounding box.
    pub fn center(&self) -> glam::Vec3 {
        glam::Vec3::new(
            (self.x.0 + self.x.1) * 0.5,
            (self.y.0 + self.y.1) * 0.5,
            (self.z.0 + self.z.1) * 0.5,
        )
    }

    /// Whether `p` lies inside the box (inclusive).
    pub fn contains(&self, p: glam::Vec3) -> bool {
        (self.x.0..=self.x.1).contains(&p.x)
            && (self.y.0..=self.y.1).contains(&p.y)
            && (self.z.0..=self.z.1).contains(&p.z)
    }
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self {
            x: (-1.0, 1.0),
            y: (-1.0, 1.0),
            z: (0.0, 1.0),
        }
    }
}

/// Something a frame can be drawn on.
///
/// A call to [`render`](Canvas::render) replaces whatever was shown before:
/// clear, draw the axes and `surface`, and show `velocity` in the title.
/// Errors are not retried by the caller.
pub trait Canvas {
    type Error: std::error::Error + 'static;

    fn render(&mut self, surface: &Surface, velocity: f64) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_frame_title_two_decimals() {
        assert_eq!(frame_title(99.5), "Spinning Top Motion - Velocity: 99.50");
        assert_eq!(frame_title(0.0), "Spinning Top Motion - Velocity: 0.00");
        assert_eq!(frame_title(100.0), "Spinning Top Motion - Velocity: 100.00");
    }

    #[test]
    fn test_default_bounds() {
        let bounds = AxisBounds::default();
        assert_eq!(bounds.center(), Vec3::new(0.0, 0.0, 0.5));
        assert!(bounds.contains(Vec3::new(1.0, -1.0, 0.0)));
        assert!(!bounds.contains(Vec3::new(0.0, 0.0, -0.01)));
    }
}
