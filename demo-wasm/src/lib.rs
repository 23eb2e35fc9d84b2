use drape::{
    Canvas, ClothConfig, ClothError, ClothMesh, ClothPreset, MeshRenderer, NoOpStepObserver,
    Pointer, Rgb, Tool, Vec2,
};
use wasm_bindgen::prelude::*;

fn to_js(err: ClothError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Collects draw calls into flat buffers the page can hand to a 2D context.
#[derive(Default)]
struct FrameBuffer {
    /// [x1, y1, x2, y2, x3, y3, r, g, b] per triangle
    triangles: Vec<f32>,
    /// [x1, y1, x2, y2, r, g, b] per line
    lines: Vec<f32>,
}

impl FrameBuffer {
    fn push_color(out: &mut Vec<f32>, color: Rgb) {
        out.extend_from_slice(&[color.r as f32, color.g as f32, color.b as f32]);
    }
}

// The simulation runs in f64; only the output buffers narrow to f32.
impl Canvas<f64> for FrameBuffer {
    fn fill_triangle(&mut self, vertices: [Vec2<f64>; 3], color: Rgb) {
        for v in vertices {
            self.triangles.push(v.x as f32);
            self.triangles.push(v.y as f32);
        }
        Self::push_color(&mut self.triangles, color);
    }

    fn draw_line(&mut self, from: Vec2<f64>, to: Vec2<f64>, color: Rgb) {
        self.lines
            .extend_from_slice(&[from.x as f32, from.y as f32, to.x as f32, to.y as f32]);
        Self::push_color(&mut self.lines, color);
    }
}

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DemoTool {
    Grab = 0,
    Cut = 1,
}

impl From<DemoTool> for Tool {
    fn from(tool: DemoTool) -> Self {
        match tool {
            DemoTool::Grab => Tool::Grab,
            DemoTool::Cut => Tool::Cut,
        }
    }
}

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    cloth: ClothMesh<f64>,
    pointer: Pointer,
    renderer: MeshRenderer<f64>,
    frame: FrameBuffer,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<ClothDemo, JsValue> {
        let config = ClothConfig::new().with_bounds(drape::Bounds::new(width, height));
        let cloth = ClothMesh::from_preset(ClothPreset::Sheet, config).map_err(to_js)?;
        Ok(ClothDemo {
            cloth,
            pointer: Pointer::default(),
            renderer: MeshRenderer::default(),
            frame: FrameBuffer::default(),
        })
    }

    pub fn load_sheet(&mut self) -> Result<(), JsValue> {
        self.load(ClothPreset::Sheet)
    }

    pub fn load_strip(&mut self) -> Result<(), JsValue> {
        self.load(ClothPreset::Strip)
    }

    fn load(&mut self, preset: ClothPreset) -> Result<(), JsValue> {
        self.cloth.load_preset(preset).map_err(to_js)?;
        self.pointer.reset();
        Ok(())
    }

    /// Advance one frame and redraw into the internal buffers.
    pub fn update(&mut self) {
        self.cloth.step(&mut NoOpStepObserver);
        self.frame.triangles.clear();
        self.frame.lines.clear();
        self.renderer.draw(&self.cloth, &mut self.frame);
    }

    pub fn set_tool(&mut self, tool: DemoTool) {
        self.pointer.set_tool(tool.into());
    }

    /// Returns whether the press grabbed a particle or cut a link.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        match self.pointer.press(&mut self.cloth, Vec2::new(x, y)) {
            drape::ToolOutcome::Grabbed(handle) => handle.is_some(),
            drape::ToolOutcome::Cut(severed) => severed,
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.moved(&mut self.cloth, Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self) {
        self.pointer.release();
    }

    /// Flat [x1, y1, x2, y2, x3, y3, r, g, b, ...] from the last update
    pub fn triangles(&self) -> Vec<f32> {
        self.frame.triangles.clone()
    }

    /// Flat [x1, y1, x2, y2, r, g, b, ...] from the last update, drawn when
    /// the cloth is a single row or column
    pub fn lines(&self) -> Vec<f32> {
        self.frame.lines.clone()
    }

    pub fn link_count(&self) -> usize {
        self.cloth.link_count()
    }

    pub fn particle_count(&self) -> usize {
        self.cloth.particle_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_buffer_narrows_only_at_output() {
        let cloth: ClothMesh<f64> = ClothMesh::new(2, 2, 10.0, ClothConfig::new()).unwrap();
        let renderer = MeshRenderer::default();
        let mut frame = FrameBuffer::default();
        let drawn = renderer.draw(&cloth, &mut frame);

        let reference: Vec<_> = renderer.triangles(&cloth).collect();
        assert_eq!(drawn, reference.len());
        assert_eq!(frame.triangles.len(), drawn * 9);
        for (chunk, tri) in frame.triangles.chunks(9).zip(&reference) {
            assert_eq!(chunk[0], tri.vertices[0].x as f32);
            assert_eq!(chunk[5], tri.vertices[2].y as f32);
            assert_eq!(&chunk[6..], &[tri.color.r as f32, tri.color.g as f32, tri.color.b as f32]);
        }
    }
}
