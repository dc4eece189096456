//! Axis box drawn behind the top.
//!
//! Twelve grey edges outline the axis bounds. The x, y and z axes are drawn
//! through the centre of the floor in red, green and blue. Tick values and
//! axis names sit just outside the edges facing the default camera.

use glam::Vec3;

use super::shader::LineVertex;
use crate::canvas::AxisBounds;

const EDGE_COLOR: [f32; 3] = [0.55, 0.55, 0.6];
const X_COLOR: [f32; 3] = [0.85, 0.2, 0.2];
const Y_COLOR: [f32; 3] = [0.2, 0.7, 0.25];
const Z_COLOR: [f32; 3] = [0.2, 0.3, 0.85];

/// Gap between an edge and its tick values, in world units.
const TICK_OFFSET: f32 = 0.12;
/// Gap between an edge and its axis name, in world units.
const NAME_OFFSET: f32 = 0.35;

/// A piece of text pinned to a point in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisAnchor {
    pub text: String,
    pub position: Vec3,
    /// Axis names are drawn larger than tick values.
    pub is_name: bool,
}

impl AxisAnchor {
    fn tick(value: f32, position: Vec3) -> Self {
        Self {
            text: tick_text(value),
            position,
            is_name: false,
        }
    }

    fn name(text: &str, position: Vec3) -> Self {
        Self {
            text: text.to_string(),
            position,
            is_name: true,
        }
    }
}

/// Tick value as shown next to an axis.
pub fn tick_text(value: f32) -> String {
    // Avoid printing "-0.0" for a centre tick.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.1}", value)
}

fn line(a: Vec3, b: Vec3, color: [f32; 3], out: &mut Vec<LineVertex>) {
    out.push(LineVertex {
        position: a.to_array(),
        color,
    });
    out.push(LineVertex {
        position: b.to_array(),
        color,
    });
}

/// Line-list vertices for the axis box of `bounds`.
pub fn axis_lines(bounds: &AxisBounds) -> Vec<LineVertex> {
    let (x0, x1) = bounds.x;
    let (y0, y1) = bounds.y;
    let (z0, z1) = bounds.z;
    let c = bounds.center();

    let corner = |i: u32| {
        Vec3::new(
            if i & 1 == 0 { x0 } else { x1 },
            if i & 2 == 0 { y0 } else { y1 },
            if i & 4 == 0 { z0 } else { z1 },
        )
    };

    let mut lines = Vec::with_capacity(30);

    // Each edge joins two corners that differ in exactly one bit.
    for i in 0..8u32 {
        for bit in [1u32, 2, 4] {
            if i & bit == 0 {
                line(corner(i), corner(i | bit), EDGE_COLOR, &mut lines);
            }
        }
    }

    line(Vec3::new(x0, c.y, z0), Vec3::new(x1, c.y, z0), X_COLOR, &mut lines);
    line(Vec3::new(c.x, y0, z0), Vec3::new(c.x, y1, z0), Y_COLOR, &mut lines);
    line(Vec3::new(c.x, c.y, z0), Vec3::new(c.x, c.y, z1), Z_COLOR, &mut lines);

    lines
}

/// Tick values (both ends and the middle of each range) and the names
/// "X axis", "Y axis", "Z axis" for `bounds`.
///
/// X ticks run along the `y = min, z = min` edge, Y ticks along the
/// `x = max, z = min` edge and Z ticks up the `x = min, y = min` edge.
pub fn label_anchors(bounds: &AxisBounds) -> Vec<AxisAnchor> {
    let (x0, x1) = bounds.x;
    let (y0, y1) = bounds.y;
    let (z0, z1) = bounds.z;
    let c = bounds.center();

    let mut anchors = Vec::with_capacity(12);

    for x in [x0, c.x, x1] {
        anchors.push(AxisAnchor::tick(x, Vec3::new(x, y0 - TICK_OFFSET, z0)));
    }
    anchors.push(AxisAnchor::name("X axis", Vec3::new(c.x, y0 - NAME_OFFSET, z0)));

    for y in [y0, c.y, y1] {
        anchors.push(AxisAnchor::tick(y, Vec3::new(x1 + TICK_OFFSET, y, z0)));
    }
    anchors.push(AxisAnchor::name("Y axis", Vec3::new(x1 + NAME_OFFSET, c.y, z0)));

    for z in [z0, c.z, z1] {
        anchors.push(AxisAnchor::tick(z, Vec3::new(x0 - TICK_OFFSET, y0, z)));
    }
    anchors.push(AxisAnchor::name("Z axis", Vec3::new(x0 - NAME_OFFSET, y0, c.z)));

    anchors
}
