//! Fixed z-up camera looking at the scene.

use glam::{Mat4, Vec3};

/// Orbit-style camera with z pointing up.
pub struct Camera {
    /// Angle above the xy-plane in radians.
    pub elevation: f32,
    /// Angle around the z-axis in radians, measured from +x.
    pub azimuth: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
}

impl Camera {
    /// Camera looking at `target` from 30° elevation, -60° azimuth.
    pub fn new(target: Vec3) -> Self {
        Self {
            elevation: 30.0_f32.to_radians(),
            azimuth: (-60.0_f32).to_radians(),
            distance: 4.5,
            target,
            fov_y: 45.0_f32.to_radians(),
        }
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.elevation.cos() * self.azimuth.cos();
        let y = self.distance * self.elevation.cos() * self.azimuth.sin();
        let z = self.distance * self.elevation.sin();
        self.target + Vec3::new(x, y, z)
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Z)
    }

    /// Combined projection and view matrix for a viewport of `aspect`.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_y, aspect, 0.1, 100.0);
        proj * self.view_matrix()
    }
}
