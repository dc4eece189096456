//! Fixed precession/nutation rotation applied to the top each frame.

use glam::DMat3;

use crate::shape::Surface;

/// Precession angle about the z-axis, in radians.
pub const PRECESSION: f64 = 0.1;

/// Nutation angle about the y-axis, in radians.
pub const NUTATION: f64 = 0.05;

/// Composite rigid rotation: nutation about y, then precession about z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotator {
    matrix: DMat3,
}

impl Rotator {
    /// Build `Rz(precession) · Ry(nutation)`.
    pub fn new(precession: f64, nutation: f64) -> Self {
        let rz = DMat3::from_rotation_z(precession);
        let ry = DMat3::from_rotation_y(nutation);
        Self { matrix: rz * ry }
    }

    /// The composite matrix.
    pub fn matrix(&self) -> DMat3 {
        self.matrix
    }

    /// Rotate every point of `surface` in place.
    pub fn apply(&self, surface: &mut Surface) {
        for p in surface.points_mut() {
            *p = self.matrix * *p;
        }
    }
}

impl Default for Rotator {
    fn default() -> Self {
        Self::new(PRECESSION, NUTATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ParamGrid;
    use glam::DVec3;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_matrix_is_orthonormal() {
        let r = Rotator::default().matrix();
        assert!((r.determinant() - 1.0).abs() < EPS);

        let identity = r.transpose() * r;
        for (col, expected) in [DVec3::X, DVec3::Y, DVec3::Z].iter().enumerate() {
            assert!(identity.col(col).distance(*expected) < EPS);
        }
    }

    #[test]
    fn test_matrix_layout() {
        // Rz·Ry written out by hand.
        let (sz, cz) = PRECESSION.sin_cos();
        let (sy, cy) = NUTATION.sin_cos();
        let expected = DMat3::from_cols(
            DVec3::new(cz * cy, sz * cy, -sy),
            DVec3::new(-sz, cz, 0.0),
            DVec3::new(cz * sy, sz * sy, cy),
        );
        assert!(Rotator::default().matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn test_nutation_applied_before_precession() {
        // Ry moves +z toward +x; Rz then swings that offset around z.
        let p = Rotator::default().matrix() * DVec3::Z;
        let tilt = NUTATION.sin();
        assert!((p.x - tilt * PRECESSION.cos()).abs() < EPS);
        assert!((p.y - tilt * PRECESSION.sin()).abs() < EPS);
        assert!((p.z - NUTATION.cos()).abs() < EPS);
    }

    #[test]
    fn test_apply_preserves_norms() {
        let mut surface = ParamGrid::default().generate(100.0);
        let before: Vec<f64> = surface.points().iter().map(|p| p.length()).collect();

        Rotator::default().apply(&mut surface);

        for (p, norm) in surface.points().iter().zip(before) {
            assert!((p.length() - norm).abs() < EPS);
        }
    }

    #[test]
    fn test_zero_angles_are_identity() {
        let original = ParamGrid::default().generate(42.0);
        let mut surface = original.clone();
        Rotator::new(0.0, 0.0).apply(&mut surface);
        assert_eq!(surface, original);
    }
}
