use glam::{Mat4, Quat, Vec3};

/// The two lattice axes primitives are repeated along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// A straight segment between two points. Used both for wireframes and for
/// turtle output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl LineSegment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }

    pub fn transformed(&self, m: &Mat4) -> Self {
        Self {
            start: m.transform_point3(self.start),
            end: m.transform_point3(self.end),
        }
    }
}

/// Bake order used by the lattice: translate first, then rotate about the
/// world X axis.
#[inline]
pub fn translate_then_rotate_x(offset: Vec3, angle: f32) -> Mat4 {
    Mat4::from_quat(Quat::from_rotation_x(angle)) * Mat4::from_translation(offset)
}

/// Rotate `v` by `angle` radians about `axis` (normalised here).
#[inline]
pub fn rotate_about(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    Quat::from_axis_angle(axis.normalize(), angle) * v
}

/// Quantise a position so nearly-equal vertices share a key.
#[inline]
pub fn quantize(p: Vec3, precision: f32) -> [i64; 3] {
    [
        (p.x / precision).round() as i64,
        (p.y / precision).round() as i64,
        (p.z / precision).round() as i64,
    ]
}

pub fn approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() <= eps
}
