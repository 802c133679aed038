use glam::Vec3;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{ProcgenError, Result};
use crate::math::Axis;

/// Upper bounds on every field that sizes an allocation.
pub const MAX_AXIS_COUNT: u32 = 64;
pub const MAX_RADIAL_SEGMENTS: u32 = 256;
pub const MAX_CAP_SUBDIVISIONS: u32 = 64;
/// Deepest tree a forest may grow. Draw symbols roughly quadruple per depth;
/// depth 8 is about 131k segments per tree.
pub const MAX_TREE_DEPTH: u32 = 8;
/// Placement strings double per depth.
pub const MAX_PLACEMENT_DEPTH: u32 = 24;

/// Base primitive the lattice repeats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Capsule,
    Cylinder,
}

impl ShapeKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "capsule" => Some(ShapeKind::Capsule),
            "cylinder" => Some(ShapeKind::Cylinder),
            _ => None,
        }
    }
}

/// Live parameters of the lattice scene. Rotations are in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometryParams {
    pub shape: ShapeKind,
    pub radius: f32,
    /// Straight length of a capsule, or full height of a cylinder.
    pub extent: f32,
    pub radial_segments: u32,
    /// Steps per hemisphere; capsules only.
    pub cap_subdivisions: u32,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub count_x: u32,
    pub count_y: u32,
}

impl GeometryParams {
    pub fn cylinder() -> Self {
        Self {
            shape: ShapeKind::Cylinder,
            radius: 5.0,
            extent: 20.0,
            radial_segments: 32,
            cap_subdivisions: 1,
            rotation_x: 45.0,
            rotation_y: 0.0,
            count_x: 2,
            count_y: 2,
        }
    }

    pub fn capsule() -> Self {
        Self {
            shape: ShapeKind::Capsule,
            radius: 10.0,
            extent: 10.0,
            radial_segments: 10,
            cap_subdivisions: 10,
            rotation_x: 0.0,
            rotation_y: 0.0,
            count_x: 1,
            count_y: 1,
        }
    }

    pub fn preset(shape: ShapeKind) -> Self {
        match shape {
            ShapeKind::Capsule => Self::capsule(),
            ShapeKind::Cylinder => Self::cylinder(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.count_x == 0 {
            return Err(ProcgenError::ZeroAxisCount { axis: Axis::X });
        }
        if self.count_y == 0 {
            return Err(ProcgenError::ZeroAxisCount { axis: Axis::Y });
        }
        if self.count_x > MAX_AXIS_COUNT {
            return Err(invalid("count_x", self.count_x as f32, "exceeds MAX_AXIS_COUNT"));
        }
        if self.count_y > MAX_AXIS_COUNT {
            return Err(invalid("count_y", self.count_y as f32, "exceeds MAX_AXIS_COUNT"));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(invalid("radius", self.radius, "must be positive"));
        }
        if !self.extent.is_finite() || self.extent < 0.0 {
            return Err(invalid("extent", self.extent, "must be non-negative"));
        }
        if self.radial_segments < 3 {
            return Err(invalid(
                "radial_segments",
                self.radial_segments as f32,
                "needs at least 3 segments",
            ));
        }
        if self.radial_segments > MAX_RADIAL_SEGMENTS {
            return Err(invalid(
                "radial_segments",
                self.radial_segments as f32,
                "exceeds MAX_RADIAL_SEGMENTS",
            ));
        }
        if self.cap_subdivisions > MAX_CAP_SUBDIVISIONS {
            return Err(invalid(
                "cap_subdivisions",
                self.cap_subdivisions as f32,
                "exceeds MAX_CAP_SUBDIVISIONS",
            ));
        }
        if self.shape == ShapeKind::Capsule && self.cap_subdivisions == 0 {
            return Err(invalid(
                "cap_subdivisions",
                0.0,
                "needs at least 1 subdivision",
            ));
        }
        if !self.rotation_x.is_finite() {
            return Err(invalid("rotation_x", self.rotation_x, "must be finite"));
        }
        if !self.rotation_y.is_finite() {
            return Err(invalid("rotation_y", self.rotation_y, "must be finite"));
        }
        Ok(())
    }

    /// Per-primitive rotation step along X, in radians.
    pub fn step_x(&self) -> f32 {
        self.rotation_x.to_radians() / self.count_x as f32
    }

    /// Per-primitive rotation step along Y, in radians. Always divided by the
    /// Y count, for both shapes.
    pub fn step_y(&self) -> f32 {
        self.rotation_y.to_radians() / self.count_y as f32
    }

    pub fn primitive_count(&self) -> usize {
        let x = self.count_x as usize;
        x + x * self.count_y as usize
    }

    /// Apply a GUI slider change. The value is clamped into the slider's range
    /// and snapped to its step before the params are re-validated.
    pub fn set_slider(&mut self, name: &str, value: f32) -> Result<()> {
        let slider = SLIDERS
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ProcgenError::UnknownParameter(name.to_string()))?;
        if !value.is_finite() {
            return Err(invalid(slider.name, value, "must be finite"));
        }
        let v = slider.snap(value);
        if v != value {
            warn!("slider {} value {} adjusted to {}", name, value, v);
        }

        let mut next = self.clone();
        match slider.name {
            "radius" => next.radius = v,
            "x" => next.count_x = v as u32,
            "y" => next.count_y = v as u32,
            "rotation_x" => next.rotation_x = v,
            "rotation_y" => next.rotation_y = v,
            "radial_segments" => next.radial_segments = v as u32,
            _ => return Err(ProcgenError::UnknownParameter(name.to_string())),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self::cylinder()
    }
}

fn invalid(name: &'static str, value: f32, reason: &'static str) -> ProcgenError {
    ProcgenError::InvalidParameter { name, value, reason }
}

/// One GUI slider bound to a `GeometryParams` field.
#[derive(Clone, Copy, Debug)]
pub struct Slider {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    /// `None` for continuous sliders.
    pub step: Option<f32>,
}

impl Slider {
    pub fn snap(&self, value: f32) -> f32 {
        let v = value.clamp(self.min, self.max);
        match self.step {
            Some(step) => (self.min + ((v - self.min) / step).round() * step).min(self.max),
            None => v,
        }
    }
}

pub const SLIDERS: &[Slider] = &[
    Slider { name: "radius", min: 5.0, max: 100.0, step: Some(1.0) },
    Slider { name: "x", min: 1.0, max: 10.0, step: Some(1.0) },
    Slider { name: "y", min: 1.0, max: 10.0, step: Some(1.0) },
    Slider { name: "rotation_x", min: 0.0, max: 270.0, step: None },
    Slider { name: "rotation_y", min: 0.0, max: 270.0, step: None },
    // integer field behind a continuous slider
    Slider { name: "radial_segments", min: 4.0, max: 50.0, step: Some(1.0) },
];

/// Layout and growth settings for the tree scene. Missing JSON fields fall
/// back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    /// Trees per side; each index plants one tree on each side.
    pub number_trees: u32,
    /// Rewrite depth of the first tree; each further tree grows one deeper.
    pub initial_tree_depth: u32,
    /// Placement depth of the first tree, counting the axiom as depth 1.
    pub initial_placement_depth: u32,
    pub ground_y: f32,
    pub step: Vec3,
    pub branch_angle: f32,
    pub branch_axis: Vec3,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            number_trees: 5,
            initial_tree_depth: 2,
            initial_placement_depth: 2,
            ground_y: -20.0,
            step: Vec3::new(0.0, 15.0, 0.0),
            branch_angle: std::f32::consts::PI / 7.0,
            branch_axis: Vec3::Z,
        }
    }
}

impl ForestConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects forests whose deepest tree or outermost placement would exceed
    /// the depth caps, and vectors that cannot drive the turtle.
    pub fn validate(&self) -> Result<()> {
        if self.number_trees > 0 {
            let last = self.number_trees - 1;
            let tree_depth = self.initial_tree_depth.checked_add(last).unwrap_or(u32::MAX);
            if tree_depth > MAX_TREE_DEPTH {
                return Err(invalid(
                    "number_trees",
                    self.number_trees as f32,
                    "deepest tree exceeds MAX_TREE_DEPTH",
                ));
            }
            let placement_depth = self
                .initial_placement_depth
                .checked_add(last)
                .unwrap_or(u32::MAX);
            if placement_depth > MAX_PLACEMENT_DEPTH {
                return Err(invalid(
                    "initial_placement_depth",
                    self.initial_placement_depth as f32,
                    "outermost placement exceeds MAX_PLACEMENT_DEPTH",
                ));
            }
        }
        if !self.ground_y.is_finite() {
            return Err(invalid("ground_y", self.ground_y, "must be finite"));
        }
        if !self.step.is_finite() {
            return Err(invalid("step", self.step.length(), "must be finite"));
        }
        if !self.branch_angle.is_finite() {
            return Err(invalid("branch_angle", self.branch_angle, "must be finite"));
        }
        if !self.branch_axis.is_finite() || self.branch_axis.length_squared() <= f32::EPSILON {
            return Err(invalid(
                "branch_axis",
                self.branch_axis.length(),
                "must be a finite non-zero vector",
            ));
        }
        Ok(())
    }
}

/// Static look of a scene: background and ground plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneStyle {
    pub background: [f32; 3],
    pub ground_y: f32,
    pub ground_size: f32,
    pub ground_opacity: f32,
}

impl SceneStyle {
    pub fn lattice() -> Self {
        Self {
            background: [0.0, 0.0, 0.0],
            ground_y: -200.0,
            ground_size: 2000.0,
            ground_opacity: 0.8,
        }
    }

    pub fn forest() -> Self {
        Self {
            background: [0.1, 0.1, 0.1],
            ground_y: -20.0,
            ground_size: 2000.0,
            ground_opacity: 0.5,
        }
    }
}
