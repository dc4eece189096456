//! Parametric surface of the spinning top.
//!
//! The top is a cone sampled on a fixed `(u, v)` grid:
//!
//! - `u` is the angle around the vertical axis, `0..=2π`
//! - `v` is the fraction from the base (`v = 0`, `z = 1`) to the apex
//!   (`v = 1`, `z = 0`)
//!
//! Only the horizontal extent depends on velocity. The grid never changes
//! shape during a run; regenerating a [`Surface`] only rewrites its points.

use glam::DVec3;

/// Number of angular samples around the cone.
pub const U_SAMPLES: usize = 50;

/// Number of samples from base to apex.
pub const V_SAMPLES: usize = 20;

/// Velocity at which the base radius is exactly 1.
pub const REFERENCE_VELOCITY: f64 = 100.0;

/// `count` evenly spaced values from `start` to `end`, both endpoints included.
fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    // Pin the last sample so the ring closes exactly at `end`.
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// The fixed `(u, v)` sampling of the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamGrid {
    u: Vec<f64>,
    v: Vec<f64>,
}

impl ParamGrid {
    /// Create a grid with `u_samples` angles over `0..=2π` and `v_samples`
    /// fractions over `0..=1`.
    pub fn new(u_samples: usize, v_samples: usize) -> Self {
        Self {
            u: linspace(0.0, std::f64::consts::TAU, u_samples),
            v: linspace(0.0, 1.0, v_samples),
        }
    }

    /// Angular samples (one per column).
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    /// Base-to-apex samples (one per row).
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// Number of rows (`v` samples).
    pub fn rows(&self) -> usize {
        self.v.len()
    }

    /// Number of columns (`u` samples).
    pub fn cols(&self) -> usize {
        self.u.len()
    }

    /// Generate the cone for `velocity`.
    ///
    /// ```text
    /// x = (1 - v) cos(u) · velocity / 100
    /// y = (1 - v) sin(u) · velocity / 100
    /// z = 1 - v
    /// ```
    ///
    /// Velocity is not clamped here; values above 100 widen the base past
    /// the unit circle.
    pub fn generate(&self, velocity: f64) -> Surface {
        let factor = velocity / REFERENCE_VELOCITY;
        let mut points = Vec::with_capacity(self.rows() * self.cols());

        for &v in &self.v {
            let height = 1.0 - v;
            let radius = height * factor;
            for &u in &self.u {
                let (sin, cos) = u.sin_cos();
                points.push(DVec3::new(radius * cos, radius * sin, height));
            }
        }

        Surface {
            rows: self.rows(),
            cols: self.cols(),
            points,
        }
    }
}

impl Default for ParamGrid {
    fn default() -> Self {
        Self::new(U_SAMPLES, V_SAMPLES)
    }
}

/// A `rows × cols` grid of 3D points, stored row-major (one row per `v`).
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    rows: usize,
    cols: usize,
    points: Vec<DVec3>,
}

impl Surface {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All points, row-major.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [DVec3] {
        &mut self.points
    }

    /// Point at grid cell (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    pub fn point(&self, row: usize, col: usize) -> DVec3 {
        assert!(row < self.rows && col < self.cols, "grid cell out of range");
        self.points[row * self.cols + col]
    }

    /// Points of one `v` row. Row 0 is the base ring, the last row the apex.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than [`rows`](Self::rows).
    pub fn row(&self, row: usize) -> &[DVec3] {
        assert!(row < self.rows, "row {} out of range for {} rows", row, self.rows);
        let start = row * self.cols;
        &self.points[start..start + self.cols]
    }

    /// Point positions narrowed to `f32` for upload to the GPU.
    pub fn vertex_positions(&self) -> Vec<[f32; 3]> {
        self.points
            .iter()
            .map(|p| p.as_vec3().to_array())
            .collect()
    }
}

/// Triangle-list indices covering a `rows × cols` grid, two triangles per cell.
pub fn triangle_indices(rows: usize, cols: usize) -> Vec<u32> {
    if rows < 2 || cols < 2 {
        return Vec::new();
    }

    let mut indices = Vec::with_capacity((rows - 1) * (cols - 1) * 6);
    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            let i0 = (r * cols + c) as u32;
            let i1 = i0 + 1;
            let i2 = i0 + cols as u32;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_grid_dimensions() {
        let grid = ParamGrid::default();
        assert_eq!(grid.cols(), 50);
        assert_eq!(grid.rows(), 20);

        let surface = grid.generate(100.0);
        assert_eq!(surface.rows(), 20);
        assert_eq!(surface.cols(), 50);
        assert_eq!(surface.points().len(), 1000);
    }

    #[test]
    fn test_linspace_includes_endpoints() {
        let grid = ParamGrid::default();
        assert_eq!(grid.u()[0], 0.0);
        assert_eq!(grid.u()[49], std::f64::consts::TAU);
        assert_eq!(grid.v()[0], 0.0);
        assert_eq!(grid.v()[19], 1.0);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.3, 1.0, 1), vec![0.3]);
    }

    #[test]
    fn test_radius_and_height_match_formula() {
        let grid = ParamGrid::default();
        for &velocity in &[100.0, 73.5, 12.0, 0.5] {
            let surface = grid.generate(velocity);
            for (row, &v) in grid.v().iter().enumerate() {
                let expected_radius = (1.0 - v) * velocity / 100.0;
                for p in surface.row(row) {
                    let r2 = p.x * p.x + p.y * p.y;
                    assert!((r2 - expected_radius * expected_radius).abs() < EPS);
                    assert!((p.z - (1.0 - v)).abs() < EPS);
                }
            }
        }
    }

    #[test]
    fn test_apex_is_invariant() {
        let grid = ParamGrid::default();
        for &velocity in &[100.0, 50.0, 0.0] {
            let surface = grid.generate(velocity);
            for p in surface.row(grid.rows() - 1) {
                assert!(p.x.abs() < EPS);
                assert!(p.y.abs() < EPS);
                assert!(p.z.abs() < EPS);
            }
        }
    }

    #[test]
    fn test_base_ring() {
        let surface = ParamGrid::default().generate(80.0);
        for p in surface.row(0) {
            assert_eq!(p.z, 1.0);
            assert!((p.truncate().length() - 0.8).abs() < EPS);
        }
    }

    #[test]
    fn test_seam_closes() {
        let surface = ParamGrid::default().generate(100.0);
        for row in 0..surface.rows() {
            let first = surface.point(row, 0);
            let last = surface.point(row, surface.cols() - 1);
            assert!(first.distance(last) < EPS);
        }
    }

    #[test]
    fn test_velocity_above_reference_widens() {
        let surface = ParamGrid::default().generate(150.0);
        assert!((surface.point(0, 0).x - 1.5).abs() < EPS);
    }

    #[test]
    fn test_triangle_indices() {
        let indices = triangle_indices(20, 50);
        assert_eq!(indices.len(), 19 * 49 * 6);
        assert!(indices.iter().all(|&i| i < 1000));
        assert_eq!(&indices[..6], &[0, 50, 1, 1, 50, 51]);

        assert!(triangle_indices(1, 50).is_empty());
        assert!(triangle_indices(20, 1).is_empty());
    }

    #[test]
    fn test_vertex_positions() {
        let surface = ParamGrid::new(4, 2).generate(100.0);
        let vertices = surface.vertex_positions();
        assert_eq!(vertices.len(), 8);
        assert_eq!(vertices[0], [1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_last_row_is_apex() {
        let surface = ParamGrid::default().generate(REFERENCE_VELOCITY);
        let apex = surface.row(surface.rows() - 1);
        assert_eq!(apex.len(), surface.cols());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_row_past_end_panics() {
        let surface = ParamGrid::default().generate(REFERENCE_VELOCITY);
        surface.row(surface.rows());
    }
}
