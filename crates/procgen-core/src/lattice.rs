//! Lattice of repeated primitives.
//!
//! `count_x` primaries are laid out along X, each rotated about X by a linear
//! increment. Every primary is then cloned `count_y` times along Z with a
//! second increment compounding onto the primary's own transform. Each
//! primitive carries its baked mesh and an edge outline.

use glam::{Mat4, Vec3};
use log::{debug, info};

use crate::config::GeometryParams;
use crate::error::Result;
use crate::math::{translate_then_rotate_x, LineSegment};
use crate::mesh::{base_mesh, Mesh, EDGE_THRESHOLD_DEG};

/// Where a primitive sits in the lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Primary { i: u32 },
    Secondary { i: u32, j: u32 },
}

/// Transform of primary `i`: translate `2 r i` along X, then rotate about X by
/// `step_x * i`.
pub fn primary_transform(params: &GeometryParams, i: u32) -> Mat4 {
    let offset = Vec3::new(2.0 * params.radius * i as f32, 0.0, 0.0);
    translate_then_rotate_x(offset, params.step_x() * i as f32)
}

/// Transform of secondary `(i, j)`: primary `i`, then translate `2 r j` along
/// Z, then rotate about X by `step_y * j`.
/// At `j = 0` both terms vanish, so secondary `(i, 0)` lies exactly on
/// primary `i` and draws an overlapping copy of it.
pub fn secondary_transform(params: &GeometryParams, i: u32, j: u32) -> Mat4 {
    let offset = Vec3::new(0.0, 0.0, 2.0 * params.radius * j as f32);
    translate_then_rotate_x(offset, params.step_y() * j as f32) * primary_transform(params, i)
}

/// Every slot with its transform, primaries first, secondaries in `i`-major
/// order.
pub fn placements(params: &GeometryParams) -> Vec<(Slot, Mat4)> {
    let mut out = Vec::with_capacity(params.primitive_count());
    for i in 0..params.count_x {
        out.push((Slot::Primary { i }, primary_transform(params, i)));
    }
    for i in 0..params.count_x {
        for j in 0..params.count_y {
            out.push((Slot::Secondary { i, j }, secondary_transform(params, i, j)));
        }
    }
    out
}

#[derive(Clone, Debug)]
pub struct Primitive {
    /// Stable across in-place updates; reassigned on rebuild.
    pub id: u64,
    pub slot: Slot,
    pub transform: Mat4,
    pub mesh: Mesh,
    pub wireframe: Vec<LineSegment>,
}

impl Primitive {
    fn apply(&mut self, transform: Mat4, base: &Mesh, outline: &[LineSegment]) {
        self.transform = transform;
        self.mesh = base.transformed(&transform);
        self.wireframe = outline.iter().map(|s| s.transformed(&transform)).collect();
    }
}

/// What the last `sync` had to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    Rebuilt,
    UpdatedInPlace,
}

#[derive(Clone, Debug)]
pub struct Lattice {
    pub primaries: Vec<Primitive>,
    pub secondaries: Vec<Primitive>,
    count_x: u32,
    count_y: u32,
    next_id: u64,
}

impl Lattice {
    pub fn new(params: &GeometryParams) -> Result<Self> {
        let mut lattice = Self {
            primaries: Vec::new(),
            secondaries: Vec::new(),
            count_x: 0,
            count_y: 0,
            next_id: 0,
        };
        lattice.sync(params)?;
        Ok(lattice)
    }

    /// Re-derive every primitive from `params`. A change in either count
    /// discards everything and rebuilds; otherwise the existing primitives are
    /// updated in place and keep their ids.
    pub fn sync(&mut self, params: &GeometryParams) -> Result<SyncOutcome> {
        params.validate()?;

        let base = base_mesh(params);
        let outline = base.edges(EDGE_THRESHOLD_DEG);

        let outcome = if self.primaries.is_empty()
            || self.count_x != params.count_x
            || self.count_y != params.count_y
        {
            self.rebuild(params, &base, &outline);
            info!(
                "lattice rebuilt: {} x {} {:?}, {} primitives",
                params.count_x,
                params.count_y,
                params.shape,
                self.len()
            );
            SyncOutcome::Rebuilt
        } else {
            for (prim, (_, transform)) in self.iter_mut().zip(placements(params)) {
                prim.apply(transform, &base, &outline);
            }
            debug!("lattice updated in place, {} primitives", self.len());
            SyncOutcome::UpdatedInPlace
        };

        Ok(outcome)
    }

    fn rebuild(&mut self, params: &GeometryParams, base: &Mesh, outline: &[LineSegment]) {
        self.primaries.clear();
        self.secondaries.clear();
        for (slot, transform) in placements(params) {
            let mut prim = Primitive {
                id: self.next_id,
                slot,
                transform,
                mesh: Mesh::default(),
                wireframe: Vec::new(),
            };
            self.next_id += 1;
            prim.apply(transform, base, outline);
            match slot {
                Slot::Primary { .. } => self.primaries.push(prim),
                Slot::Secondary { .. } => self.secondaries.push(prim),
            }
        }
        self.count_x = params.count_x;
        self.count_y = params.count_y;
    }

    pub fn len(&self) -> usize {
        self.primaries.len() + self.secondaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Primaries then secondaries, matching `placements` order.
    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primaries.iter().chain(self.secondaries.iter())
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut Primitive> {
        self.primaries.iter_mut().chain(self.secondaries.iter_mut())
    }

    pub fn triangle_count(&self) -> usize {
        self.iter().map(|p| p.mesh.triangle_count()).sum()
    }

    pub fn wireframe_segment_count(&self) -> usize {
        self.iter().map(|p| p.wireframe.len()).sum()
    }
}
