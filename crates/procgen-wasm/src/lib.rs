use wasm_bindgen::prelude::*;

use procgen_core::app::{AppContext, ForestApp, FrameTick, LatticeApp, Viewport};
use procgen_core::config::{ForestConfig, GeometryParams, ShapeKind};
use procgen_core::math::LineSegment;

mod logger;

/// GPU-compatible vertex: 16 bytes. `tag` is the primitive index for meshes
/// and the tree index for forest lines.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub tag: f32,
}

impl GpuVertex {
    fn new(p: glam::Vec3, tag: f32) -> Self {
        Self {
            position: p.to_array(),
            tag,
        }
    }
}

fn push_segments<'a>(out: &mut Vec<GpuVertex>, segments: impl Iterator<Item = &'a LineSegment>, tag: f32) {
    for seg in segments {
        out.push(GpuVertex::new(seg.start, tag));
        out.push(GpuVertex::new(seg.end, tag));
    }
}

fn js_err(e: procgen_core::ProcgenError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    logger::init(log::LevelFilter::Info);
}

/// Capsule/cylinder lattice scene.
#[wasm_bindgen]
pub struct LatticeWorld {
    ctx: AppContext,
    app: LatticeApp,
    mesh_buffer: Vec<GpuVertex>,
    line_buffer: Vec<GpuVertex>,
}

#[wasm_bindgen]
impl LatticeWorld {
    /// `shape` is `"capsule"` or `"cylinder"`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixel_ratio: f32, shape: &str) -> Result<LatticeWorld, JsValue> {
        let shape = ShapeKind::from_name(shape)
            .ok_or_else(|| JsValue::from_str(&format!("unknown shape `{}`", shape)))?;
        let viewport = Viewport::new(width, height, pixel_ratio).map_err(js_err)?;
        let app = LatticeApp::new(GeometryParams::preset(shape)).map_err(js_err)?;

        web_sys::console::log_1(
            &format!("WASM LatticeWorld created: {} primitives", app.lattice.len()).into(),
        );

        let mut world = LatticeWorld {
            ctx: AppContext::new(viewport),
            app,
            mesh_buffer: Vec::new(),
            line_buffer: Vec::new(),
        };
        world.write_gpu_output();
        Ok(world)
    }

    /// Per-frame update. Returns the time spent in milliseconds.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> Result<f32, JsValue> {
        let start = js_sys::Date::now();
        self.ctx.advance();
        self.app.tick(&self.ctx).map_err(js_err)?;
        self.write_gpu_output();
        Ok((js_sys::Date::now() - start) as f32)
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32, pixel_ratio: f32) -> Result<(), JsValue> {
        let viewport = Viewport::new(width, height, pixel_ratio).map_err(js_err)?;
        self.ctx.resize(viewport);
        Ok(())
    }

    /// GUI slider binding; takes effect on the next tick.
    #[wasm_bindgen]
    pub fn set_param(&mut self, name: &str, value: f32) -> Result<(), JsValue> {
        self.app.params.set_slider(name, value).map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn set_params_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.app.params = GeometryParams::from_json(json).map_err(js_err)?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn params_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.app.params).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn get_mesh_buffer_ptr(&self) -> *const f32 {
        self.mesh_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_mesh_buffer_byte_length(&self) -> usize {
        bytemuck::cast_slice::<GpuVertex, u8>(&self.mesh_buffer).len()
    }

    #[wasm_bindgen]
    pub fn get_line_buffer_ptr(&self) -> *const f32 {
        self.line_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_line_buffer_byte_length(&self) -> usize {
        bytemuck::cast_slice::<GpuVertex, u8>(&self.line_buffer).len()
    }

    #[wasm_bindgen]
    pub fn primitive_count(&self) -> usize {
        self.app.lattice.len()
    }

    #[wasm_bindgen]
    pub fn projection_matrix(&self) -> Vec<f32> {
        self.ctx.camera.projection().to_cols_array().to_vec()
    }

    #[wasm_bindgen]
    pub fn view_matrix(&self) -> Vec<f32> {
        self.ctx.camera.view().to_cols_array().to_vec()
    }

    #[wasm_bindgen]
    pub fn fxaa_resolution(&self) -> Vec<f32> {
        self.ctx.fxaa.resolution.to_array().to_vec()
    }

    /// `[r, g, b, ground_y, ground_size, ground_opacity]`
    #[wasm_bindgen]
    pub fn scene_style(&self) -> Vec<f32> {
        let s = self.app.style;
        vec![
            s.background[0],
            s.background[1],
            s.background[2],
            s.ground_y,
            s.ground_size,
            s.ground_opacity,
        ]
    }
}

impl LatticeWorld {
    /// Triangles are unrolled so the host can draw without an index buffer.
    fn write_gpu_output(&mut self) {
        self.mesh_buffer.clear();
        self.line_buffer.clear();
        for (n, prim) in self.app.lattice.iter().enumerate() {
            let tag = n as f32;
            for tri in prim.mesh.triangles() {
                self.mesh_buffer
                    .extend(tri.iter().map(|p| GpuVertex::new(*p, tag)));
            }
            push_segments(&mut self.line_buffer, prim.wireframe.iter(), tag);
        }
    }
}

/// L-system forest scene. Geometry is fixed after construction.
#[wasm_bindgen]
pub struct ForestWorld {
    ctx: AppContext,
    app: ForestApp,
    line_buffer: Vec<GpuVertex>,
}

#[wasm_bindgen]
impl ForestWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixel_ratio: f32, number_trees: u32) -> Result<ForestWorld, JsValue> {
        let config = ForestConfig {
            number_trees,
            ..ForestConfig::default()
        };
        Self::build(width, height, pixel_ratio, config)
    }

    /// Construct from a JSON `ForestConfig`; missing fields take defaults.
    #[wasm_bindgen]
    pub fn from_config_json(width: u32, height: u32, pixel_ratio: f32, json: &str) -> Result<ForestWorld, JsValue> {
        let config = ForestConfig::from_json(json).map_err(js_err)?;
        Self::build(width, height, pixel_ratio, config)
    }

    #[wasm_bindgen]
    pub fn config_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.app.config).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn tick(&mut self) -> Result<(), JsValue> {
        self.ctx.advance();
        self.app.tick(&self.ctx).map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32, pixel_ratio: f32) -> Result<(), JsValue> {
        let viewport = Viewport::new(width, height, pixel_ratio).map_err(js_err)?;
        self.ctx.resize(viewport);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn get_line_buffer_ptr(&self) -> *const f32 {
        self.line_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_line_buffer_byte_length(&self) -> usize {
        bytemuck::cast_slice::<GpuVertex, u8>(&self.line_buffer).len()
    }

    #[wasm_bindgen]
    pub fn tree_count(&self) -> usize {
        self.app.forest.trees.len()
    }

    #[wasm_bindgen]
    pub fn segment_count(&self) -> usize {
        self.app.forest.segment_count()
    }

    #[wasm_bindgen]
    pub fn projection_matrix(&self) -> Vec<f32> {
        self.ctx.camera.projection().to_cols_array().to_vec()
    }

    #[wasm_bindgen]
    pub fn view_matrix(&self) -> Vec<f32> {
        self.ctx.camera.view().to_cols_array().to_vec()
    }

    #[wasm_bindgen]
    pub fn fxaa_resolution(&self) -> Vec<f32> {
        self.ctx.fxaa.resolution.to_array().to_vec()
    }

    /// `[r, g, b, ground_y, ground_size, ground_opacity]`
    #[wasm_bindgen]
    pub fn scene_style(&self) -> Vec<f32> {
        let s = self.app.style;
        vec![
            s.background[0],
            s.background[1],
            s.background[2],
            s.ground_y,
            s.ground_size,
            s.ground_opacity,
        ]
    }
}

impl ForestWorld {
    fn build(width: u32, height: u32, pixel_ratio: f32, config: ForestConfig) -> Result<ForestWorld, JsValue> {
        let viewport = Viewport::new(width, height, pixel_ratio).map_err(js_err)?;
        let app = ForestApp::new(config).map_err(js_err)?;

        web_sys::console::log_1(
            &format!(
                "WASM ForestWorld created: {} trees, {} segments",
                app.forest.trees.len(),
                app.forest.segment_count()
            )
            .into(),
        );

        let mut line_buffer = Vec::with_capacity(app.forest.segment_count() * 2);
        for (n, tree) in app.forest.trees.iter().enumerate() {
            push_segments(&mut line_buffer, tree.segments.iter(), n as f32);
        }

        Ok(ForestWorld {
            ctx: AppContext::new(viewport),
            app,
            line_buffer,
        })
    }
}
