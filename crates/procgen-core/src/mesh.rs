//! Base primitive meshes and their edge outlines.
//!
//! Shapes are centred on the origin with their long axis along +Y, the same
//! frame the lattice transforms assume. Meshes are indexed triangle lists.

use std::collections::BTreeMap;
use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Mat4, Vec3};

use crate::config::{GeometryParams, ShapeKind};
use crate::math::{quantize, LineSegment};

/// Edges whose adjacent faces bend by more than this are outlined.
pub const EDGE_THRESHOLD_DEG: f32 = 1.0;

/// Positions closer than this are treated as the same vertex when merging
/// edges across seams.
const WELD_PRECISION: f32 = 1e-4;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |t| {
            [
                self.positions[t[0] as usize],
                self.positions[t[1] as usize],
                self.positions[t[2] as usize],
            ]
        })
    }

    /// Bake `m` into every position.
    pub fn transform(&mut self, m: &Mat4) {
        for p in &mut self.positions {
            *p = m.transform_point3(*p);
        }
    }

    pub fn transformed(&self, m: &Mat4) -> Self {
        let mut out = self.clone();
        out.transform(m);
        out
    }

    /// Axis-aligned bounds, `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(self.positions.iter().fold((first, first), |(lo, hi), p| {
            (lo.min(*p), hi.max(*p))
        }))
    }

    /// Outline of the mesh: boundary edges, plus shared edges whose two faces
    /// differ in normal by more than `threshold_deg`. Degenerate triangles are
    /// skipped and seam vertices are welded by position.
    pub fn edges(&self, threshold_deg: f32) -> Vec<LineSegment> {
        let threshold_dot = threshold_deg.to_radians().cos();
        let mut open: BTreeMap<([i64; 3], [i64; 3]), (Vec3, LineSegment)> = BTreeMap::new();
        let mut out = Vec::new();

        for [a, b, c] in self.triangles() {
            let n = (b - a).cross(c - a);
            if n.length_squared() <= 1e-12 {
                continue;
            }
            let n = n.normalize();
            for (p, q) in [(a, b), (b, c), (c, a)] {
                let kp = quantize(p, WELD_PRECISION);
                let kq = quantize(q, WELD_PRECISION);
                if kp == kq {
                    continue;
                }
                let key = if kp < kq { (kp, kq) } else { (kq, kp) };
                match open.remove(&key) {
                    Some((other, seg)) => {
                        if n.dot(other) <= threshold_dot {
                            out.push(seg);
                        }
                    }
                    None => {
                        open.insert(key, (n, LineSegment::new(p, q)));
                    }
                }
            }
        }

        out.extend(open.into_values().map(|(_, seg)| seg));
        out
    }
}

/// Base mesh for the shape selected in `params`.
pub fn base_mesh(params: &GeometryParams) -> Mesh {
    match params.shape {
        ShapeKind::Cylinder => cylinder(params.radius, params.extent, params.radial_segments),
        ShapeKind::Capsule => capsule(
            params.radius,
            params.extent,
            params.cap_subdivisions,
            params.radial_segments,
        ),
    }
}

/// Closed cylinder with one height segment.
pub fn cylinder(radius: f32, height: f32, radial_segments: u32) -> Mesh {
    let n = radial_segments.max(3);
    let half = height * 0.5;
    let mut mesh = Mesh::default();

    // side: two rings, seam duplicated
    for y in [half, -half] {
        for x in 0..=n {
            let theta = x as f32 / n as f32 * TAU;
            mesh.positions
                .push(Vec3::new(radius * theta.sin(), y, radius * theta.cos()));
        }
    }
    let row = n + 1;
    for x in 0..n {
        let a = x;
        let b = x + row;
        let c = x + row + 1;
        let d = x + 1;
        mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    for (y, top) in [(half, true), (-half, false)] {
        let center = mesh.positions.len() as u32;
        mesh.positions.push(Vec3::new(0.0, y, 0.0));
        let ring = center + 1;
        for x in 0..=n {
            let theta = x as f32 / n as f32 * TAU;
            mesh.positions
                .push(Vec3::new(radius * theta.sin(), y, radius * theta.cos()));
        }
        for x in 0..n {
            if top {
                mesh.indices.extend_from_slice(&[ring + x, ring + x + 1, center]);
            } else {
                mesh.indices.extend_from_slice(&[ring + x + 1, ring + x, center]);
            }
        }
    }

    mesh
}

/// Capsule: hemisphere, straight side of `length`, hemisphere. Total height is
/// `length + 2 * radius`.
pub fn capsule(radius: f32, length: f32, cap_subdivisions: u32, radial_segments: u32) -> Mesh {
    let caps = cap_subdivisions.max(1);
    let half = length * 0.5;

    let mut profile: Vec<(f32, f32)> = Vec::with_capacity(2 * (caps as usize + 1));
    for k in 0..=caps {
        let angle = -FRAC_PI_2 + FRAC_PI_2 * k as f32 / caps as f32;
        let x = if k == 0 { 0.0 } else { radius * angle.cos() };
        profile.push((x, -half + radius * angle.sin()));
    }
    for k in 0..=caps {
        let angle = FRAC_PI_2 * k as f32 / caps as f32;
        let x = if k == caps { 0.0 } else { radius * angle.cos() };
        profile.push((x, half + radius * angle.sin()));
    }

    lathe(&profile, radial_segments.max(3))
}

/// Revolve a `(radius, y)` profile around +Y.
fn lathe(profile: &[(f32, f32)], segments: u32) -> Mesh {
    let row = segments + 1;
    let mut mesh = Mesh::default();

    for &(x, y) in profile {
        for s in 0..=segments {
            let phi = s as f32 / segments as f32 * TAU;
            mesh.positions.push(Vec3::new(x * phi.sin(), y, x * phi.cos()));
        }
    }

    for p in 0..profile.len().saturating_sub(1) as u32 {
        for s in 0..segments {
            let a = p * row + s;
            let b = a + row;
            let c = b + 1;
            let d = a + 1;
            mesh.indices.extend_from_slice(&[a, d, b, b, d, c]);
        }
    }

    mesh
}
