//! Flat per-triangle lighting for the cloth surface.

use crate::float::Float;
use crate::vec::Vec2;

/// Triangles with `|e1 x e2|` below this are treated as degenerate.
pub const DEGENERATE_AREA: f64 = 1e-6;

/// An 8-bit RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Scale by the diffuse term and add the specular highlight.
    ///
    /// Each term is truncated separately and the sum saturates at 255.
    pub fn lit<F: Float>(self, shade: Shade<F>) -> Rgb {
        let highlight = (255.0 * shade.specular.to_f64()) as u8;
        let channel = |c: u8| ((c as f64 * shade.diffuse.to_f64()) as u8).saturating_add(highlight);
        Rgb::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

/// Two alternating base colors laid out as a checkerboard over grid cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Cells with `(row + col)` even.
    pub even: Rgb,
    /// Cells with `(row + col)` odd.
    pub odd: Rgb,
}

impl Palette {
    pub fn for_cell(&self, row: usize, col: usize) -> Rgb {
        if (row + col) % 2 == 1 { self.odd } else { self.even }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            even: Rgb::new(130, 80, 200),
            odd: Rgb::new(158, 98, 204),
        }
    }
}

/// Lighting terms for one triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shade<F: Float> {
    /// Ambient plus Lambert term, in `[ambient, 1]`.
    pub diffuse: F,
    /// Phong highlight, in `[0, specular_intensity]`.
    pub specular: F,
}

/// A directional light over a 2D surface.
///
/// The "normal" of a screen-space triangle is the in-plane perpendicular of
/// its first edge, flipped by winding, which gives folds a light and a dark
/// side.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lighting<F: Float> {
    pub ambient: F,
    pub specular_intensity: F,
    pub shininess: F,
    /// Unit vector toward the light.
    pub light_dir: Vec2<F>,
    /// Unit vector toward the viewer.
    pub view_dir: Vec2<F>,
}

impl<F: Float> Lighting<F> {
    pub fn new() -> Self {
        Lighting {
            ambient: F::from_f64(0.3),
            specular_intensity: F::from_f64(0.4),
            shininess: F::from_f64(32.0),
            light_dir: Vec2::new(F::from_f64(0.707), F::from_f64(-0.707)).normalize(),
            view_dir: Vec2::new(F::zero(), -F::one()),
        }
    }

    pub fn with_ambient(mut self, ambient: F) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_specular_intensity(mut self, intensity: F) -> Self {
        self.specular_intensity = intensity;
        self
    }

    /// Set the light direction; it is normalized here.
    pub fn with_light_dir(mut self, dir: Vec2<F>) -> Self {
        self.light_dir = dir.normalize();
        self
    }

    pub fn shade(&self, [v1, v2, v3]: [Vec2<F>; 3]) -> Shade<F> {
        let e1 = v2 - v1;
        let e2 = v3 - v1;
        let cross = e1.cross(e2);

        if cross.is_near_zero(F::from_f64(DEGENERATE_AREA)) {
            return Shade { diffuse: self.ambient, specular: F::zero() };
        }

        let normal = if cross > F::zero() { e1.perp() } else { -e1.perp() };
        let normal = normal.normalize();
        let n_dot_l = normal.dot(self.light_dir);
        let lambert = n_dot_l.max(F::zero());

        let reflected = normal.scale(F::two() * n_dot_l) - self.light_dir;
        let specular = reflected.dot(self.view_dir).max(F::zero()).powf(self.shininess)
            * self.specular_intensity;

        Shade {
            diffuse: self.ambient + (F::one() - self.ambient) * lambert,
            specular,
        }
    }

    /// Shade a triangle and apply the result to `base`.
    pub fn color(&self, vertices: [Vec2<F>; 3], base: Rgb) -> Rgb {
        base.lit(self.shade(vertices))
    }
}

impl<F: Float> Default for Lighting<F> {
    fn default() -> Self {
        Self::new()
    }
}
