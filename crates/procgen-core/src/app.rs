//! Application context and the per-frame hook.
//!
//! The host owns the actual renderer, composer and input handling. This module
//! keeps the state those need from us (viewport, camera, anti-aliasing
//! uniform) in one explicit struct instead of globals, and models the render
//! loop as a `FrameTick` called once per display refresh.

use glam::{Mat4, Vec2, Vec3};
use log::debug;

use crate::config::{ForestConfig, GeometryParams, SceneStyle};
use crate::error::{ProcgenError, Result};
use crate::forest::Forest;
use crate::lattice::{Lattice, SyncOutcome};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, pixel_ratio: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ProcgenError::InvalidViewport { width, height });
        }
        if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
            return Err(ProcgenError::InvalidParameter {
                name: "pixel_ratio",
                value: pixel_ratio,
                reason: "must be positive",
            });
        }
        Ok(Self {
            width,
            height,
            pixel_ratio,
        })
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            fov_y_deg: 75.0,
            aspect,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 50.0),
            target: Vec3::ZERO,
        }
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}

/// FXAA needs the size of one device pixel in UV units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FxaaPass {
    pub resolution: Vec2,
}

impl FxaaPass {
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            resolution: Vec2::new(
                1.0 / (viewport.width as f32 * viewport.pixel_ratio),
                1.0 / (viewport.height as f32 * viewport.pixel_ratio),
            ),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppContext {
    pub viewport: Viewport,
    pub camera: Camera,
    pub fxaa: FxaaPass,
    pub frame: u64,
}

impl AppContext {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            camera: Camera::new(viewport.aspect()),
            fxaa: FxaaPass::new(&viewport),
            viewport,
            frame: 0,
        }
    }

    /// Follow a host resize: new aspect, anti-aliasing pass rebuilt.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
        self.fxaa = FxaaPass::new(&viewport);
        debug!("resized to {}x{} @{}", viewport.width, viewport.height, viewport.pixel_ratio);
    }

    pub fn advance(&mut self) -> u64 {
        self.frame += 1;
        self.frame
    }
}

/// Called once per displayed frame, before the host draws.
pub trait FrameTick {
    fn tick(&mut self, ctx: &AppContext) -> Result<()>;
}

/// Lattice scene: params are edited live and the lattice follows each frame.
#[derive(Clone, Debug)]
pub struct LatticeApp {
    pub params: GeometryParams,
    pub lattice: Lattice,
    pub style: SceneStyle,
    pub last_sync: SyncOutcome,
}

impl LatticeApp {
    pub fn new(params: GeometryParams) -> Result<Self> {
        let lattice = Lattice::new(&params)?;
        Ok(Self {
            params,
            lattice,
            style: SceneStyle::lattice(),
            last_sync: SyncOutcome::Rebuilt,
        })
    }
}

impl FrameTick for LatticeApp {
    fn tick(&mut self, _ctx: &AppContext) -> Result<()> {
        self.last_sync = self.lattice.sync(&self.params)?;
        Ok(())
    }
}

/// Tree scene: generated once, static afterwards.
#[derive(Clone, Debug)]
pub struct ForestApp {
    pub config: ForestConfig,
    pub forest: Forest,
    pub style: SceneStyle,
}

impl ForestApp {
    pub fn new(config: ForestConfig) -> Result<Self> {
        let forest = Forest::generate(&config)?;
        Ok(Self {
            config,
            forest,
            style: SceneStyle::forest(),
        })
    }
}

impl FrameTick for ForestApp {
    fn tick(&mut self, ctx: &AppContext) -> Result<()> {
        if ctx.frame == 1 {
            debug!("forest first frame: {} segments", self.forest.segment_count());
        }
        Ok(())
    }
}
