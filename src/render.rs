//! Turns cloth connectivity into draw calls on a host-provided canvas.

use crate::float::Float;
use crate::mesh::ClothMesh;
use crate::shading::{Lighting, Palette, Rgb, Shade};
use crate::topology::Face;
use crate::vec::Vec2;

/// Drawing surface supplied by the host (window, canvas, image buffer).
pub trait Canvas<F: Float> {
    fn fill_triangle(&mut self, vertices: [Vec2<F>; 3], color: Rgb);

    fn draw_line(&mut self, from: Vec2<F>, to: Vec2<F>, color: Rgb);
}

/// One face of the cloth, positioned and lit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShadedTriangle<F: Float> {
    pub row: usize,
    pub col: usize,
    pub vertices: [Vec2<F>; 3],
    pub base: Rgb,
    pub shade: Shade<F>,
    pub color: Rgb,
}

/// Renders a [`ClothMesh`] as lit triangles, or as a wireframe when the
/// grid has no cells.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MeshRenderer<F: Float> {
    pub lighting: Lighting<F>,
    pub palette: Palette,
}

impl<F: Float> MeshRenderer<F> {
    pub fn new(lighting: Lighting<F>, palette: Palette) -> Self {
        MeshRenderer { lighting, palette }
    }

    /// Every face whose edges are all linked, with its shading resolved.
    pub fn triangles<'a>(&'a self, mesh: &'a ClothMesh<F>) -> impl Iterator<Item = ShadedTriangle<F>> + 'a {
        let particles = mesh.particles();
        mesh.faces().map(move |Face { row, col, vertices }| {
            let vertices = vertices.map(|i| particles[i].pos);
            let base = self.palette.for_cell(row, col);
            let shade = self.lighting.shade(vertices);
            ShadedTriangle { row, col, vertices, base, shade, color: base.lit(shade) }
        })
    }

    /// Draw the cloth. Returns the number of primitives emitted.
    pub fn draw<C: Canvas<F>>(&self, mesh: &ClothMesh<F>, canvas: &mut C) -> usize {
        if !mesh.is_mesh_like() {
            return self.draw_wireframe(mesh, canvas);
        }
        let mut count = 0;
        for tri in self.triangles(mesh) {
            canvas.fill_triangle(tri.vertices, tri.color);
            count += 1;
        }
        count
    }

    /// Draw every active link as a line in the palette's odd color.
    pub fn draw_wireframe<C: Canvas<F>>(&self, mesh: &ClothMesh<F>, canvas: &mut C) -> usize {
        let particles = mesh.particles();
        for link in mesh.links() {
            let (a, b) = link.endpoints();
            canvas.draw_line(particles[a].pos, particles[b].pos, self.palette.odd);
        }
        mesh.link_count()
    }
}
