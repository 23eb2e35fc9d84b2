//! Tearable cloth: a particle grid joined by structural, shear and bend links.

use crate::config::ClothConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::link::{Link, LinkKind};
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::topology::{Adjacency, Face};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Opaque reference to one particle of a [`ClothMesh`].
///
/// A handle carries the build generation it was issued for. Every rebuild
/// starts a new generation, so a handle kept across a rebuild fails instead
/// of aliasing a particle of the new grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParticleHandle {
    index: usize,
    generation: u32,
}

impl ParticleHandle {
    pub fn index(self) -> usize {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// Built-in cloth shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClothPreset {
    /// 30 x 25 particles, spacing 12.
    Sheet,
    /// 45 x 8 particles, spacing 10.
    Strip,
}

impl ClothPreset {
    /// `(cols, rows, spacing)`.
    pub fn dimensions<F: Float>(self) -> (usize, usize, F) {
        match self {
            ClothPreset::Sheet => (30, 25, F::from_f64(12.0)),
            ClothPreset::Strip => (45, 8, F::from_f64(10.0)),
        }
    }
}

struct Layout<F: Float> {
    particles: AllocVec<Particle<F>>,
    links: AllocVec<Link<F>>,
    adjacency: Adjacency,
}

/// A cloth built from a grid of Verlet particles and breakable links.
///
/// Particle `(row, col)` has flat index `row * cols + col`. Links only ever
/// leave the mesh (by breaking or being cut) until the next rebuild.
pub struct ClothMesh<F: Float> {
    particles: AllocVec<Particle<F>>,
    links: AllocVec<Link<F>>,
    adjacency: Adjacency,
    cols: usize,
    rows: usize,
    spacing: F,
    config: ClothConfig<F>,
    rng: SmallRng,
    generation: u32,
}

impl<F: Float> ClothMesh<F> {
    /// Build a `cols` x `rows` cloth with `spacing` between neighbors.
    ///
    /// The grid is centered horizontally in the configured bounds with its
    /// top row at `config.top_margin`. Every `config.pin_stride`-th particle
    /// of the top row is fixed.
    ///
    /// Creates links per particle in row-major order:
    /// - Structural: left and upper neighbor
    /// - Shear: upper-left and upper-right diagonal
    /// - Bend: skip-one left and skip-one up
    pub fn new(cols: usize, rows: usize, spacing: F, config: ClothConfig<F>) -> Result<Self, ClothError> {
        config.validate()?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let layout = Self::layout(cols, rows, spacing, &config, &mut rng)?;
        Ok(ClothMesh {
            particles: layout.particles,
            links: layout.links,
            adjacency: layout.adjacency,
            cols,
            rows,
            spacing,
            config,
            rng,
            generation: 0,
        })
    }

    pub fn from_preset(preset: ClothPreset, config: ClothConfig<F>) -> Result<Self, ClothError> {
        let (cols, rows, spacing) = preset.dimensions();
        Self::new(cols, rows, spacing, config)
    }

    /// Discard the current cloth and build a fresh one.
    ///
    /// On error the existing cloth is left untouched. On success every
    /// previously issued [`ParticleHandle`] goes stale.
    pub fn rebuild(&mut self, cols: usize, rows: usize, spacing: F) -> Result<(), ClothError> {
        let layout = self
            .config
            .validate()
            .and_then(|()| Self::layout(cols, rows, spacing, &self.config, &mut self.rng))
            .inspect_err(|e| log::warn!("cloth rebuild rejected: {}", e))?;
        self.particles = layout.particles;
        self.links = layout.links;
        self.adjacency = layout.adjacency;
        self.cols = cols;
        self.rows = rows;
        self.spacing = spacing;
        self.generation = self.generation.wrapping_add(1);
        Ok(())
    }

    pub fn load_preset(&mut self, preset: ClothPreset) -> Result<(), ClothError> {
        let (cols, rows, spacing) = preset.dimensions();
        self.rebuild(cols, rows, spacing)
    }

    fn layout(
        cols: usize,
        rows: usize,
        spacing: F,
        config: &ClothConfig<F>,
        rng: &mut SmallRng,
    ) -> Result<Layout<F>, ClothError> {
        if cols == 0 || rows == 0 {
            return Err(ClothError::InvalidConfiguration { reason: "grid dimensions must be positive" });
        }
        if !(spacing > F::zero()) || !spacing.is_finite() {
            return Err(ClothError::InvalidConfiguration { reason: "spacing must be positive and finite" });
        }

        let span = F::from_f64((cols - 1) as f64) * spacing;
        let start_x = ((config.bounds.width - span) * F::half()).floor();
        let start_y = config.top_margin;

        let mut particles = AllocVec::with_capacity(cols * rows);
        let mut links = AllocVec::new();
        let mut adjacency = Adjacency::new(cols, rows);

        let mut connect = |a: usize, b: usize, kind: LinkKind, particles: &[Particle<F>]| {
            let link = Link::new(a, b, particles, kind, config.links.params(kind));
            adjacency.connect(a, b);
            links.push(link);
        };

        for row in 0..rows {
            for col in 0..cols {
                let x = start_x + F::from_f64(col as f64) * spacing;
                let y = start_y + F::from_f64(row as f64) * spacing;
                let pos = Vec2::new(x, y);

                let particle = if row == 0 && col % config.pin_stride == 0 {
                    Particle::fixed(pos, config.particle_mass)
                } else {
                    let jx: f64 = rng.gen_range(-1.0..1.0);
                    let jy: f64 = rng.gen_range(-1.0..1.0);
                    let offset = Vec2::new(F::from_f64(jx), F::from_f64(jy)).scale(config.jitter);
                    Particle::new(pos, config.particle_mass).with_jitter(offset)
                };
                particles.push(particle);

                let idx = row * cols + col;
                if col > 0 {
                    connect(idx - 1, idx, LinkKind::Structural, &particles);
                }
                if row > 0 {
                    connect(idx - cols, idx, LinkKind::Structural, &particles);
                }
                if row > 0 && col > 0 {
                    connect(idx - cols - 1, idx, LinkKind::Shear, &particles);
                }
                if row > 0 && col + 1 < cols {
                    connect(idx - cols + 1, idx, LinkKind::Shear, &particles);
                }
                if col > 1 {
                    connect(idx - 2, idx, LinkKind::Bend, &particles);
                }
                if row > 1 {
                    connect(idx - 2 * cols, idx, LinkKind::Bend, &particles);
                }
            }
        }

        log::debug!(
            "built cloth {}x{}: {} particles, {} links",
            cols,
            rows,
            particles.len(),
            links.len()
        );
        Ok(Layout { particles, links, adjacency })
    }

    /// Advance one frame: `config.iterations` substeps of link forces,
    /// integration and bounds.
    pub fn step<O: StepObserver + ?Sized>(&mut self, observer: &mut O) {
        for i in 0..self.config.iterations {
            let particles = &mut self.particles;
            let adjacency = &mut self.adjacency;
            self.links.retain_mut(|link| {
                if !link.apply(particles.as_mut_slice()) {
                    return true;
                }
                let (a, b) = link.endpoints();
                log::trace!("link {}-{} broke", a, b);
                adjacency.disconnect(a, b);
                observer.on_link_broken(a, b, link.kind());
                false
            });

            let (gravity, damping, max_velocity) =
                (self.config.gravity, self.config.damping, self.config.max_velocity);
            for p in self.particles.iter_mut() {
                p.integrate(gravity, damping, max_velocity);
            }

            self.config.bounds.constrain_all(&mut self.particles);
            observer.on_iteration(i);
        }

        observer.on_step_complete();
    }

    /// The particle closest to `point`, if any lies strictly within `radius`.
    ///
    /// Ties go to the first particle in row-major order. Fixed particles are
    /// candidates too; [`move_particle`](Self::move_particle) refuses them.
    pub fn find_nearest_particle(&self, point: Vec2<F>, radius: F) -> Option<ParticleHandle> {
        let limit = radius * radius;
        let mut best: Option<(usize, F)> = None;
        for (i, p) in self.particles.iter().enumerate() {
            let d = p.pos.distance_sq(point);
            if d < limit && best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| self.issue(i))
    }

    /// Remove every link passing strictly within `radius` of `point`.
    ///
    /// Returns whether anything was cut.
    pub fn sever_links_near(&mut self, point: Vec2<F>, radius: F) -> bool {
        let before = self.links.len();
        let particles = &self.particles;
        let adjacency = &mut self.adjacency;
        self.links.retain(|link| {
            if link.distance_to(point, particles) < radius {
                let (a, b) = link.endpoints();
                adjacency.disconnect(a, b);
                false
            } else {
                true
            }
        });

        let severed = before - self.links.len();
        if severed > 0 {
            log::debug!("cut {} links near ({:?}, {:?})", severed, point.x, point.y);
        }
        severed > 0
    }

    /// Drag a particle to `pos`.
    ///
    /// Returns `Ok(false)` without moving when the particle is fixed.
    pub fn move_particle(&mut self, handle: ParticleHandle, pos: Vec2<F>) -> Result<bool, ClothError> {
        let index = self.resolve(handle)?;
        Ok(self.particles[index].move_to(pos))
    }

    pub fn handle(&self, row: usize, col: usize) -> Option<ParticleHandle> {
        (row < self.rows && col < self.cols).then(|| self.issue(row * self.cols + col))
    }

    /// `None` for handles from another build or out of range.
    pub fn particle(&self, handle: ParticleHandle) -> Option<&Particle<F>> {
        self.resolve(handle).ok().map(|i| &self.particles[i])
    }

    /// Replace the configuration after validating it.
    ///
    /// Step settings apply from the next step, link and layout settings from
    /// the next rebuild. The seed only matters to [`new`](Self::new). An
    /// invalid config is rejected and the current one kept.
    pub fn set_config(&mut self, config: ClothConfig<F>) -> Result<(), ClothError> {
        config
            .validate()
            .inspect_err(|e| log::warn!("cloth config rejected: {}", e))?;
        self.config = config;
        Ok(())
    }

    /// Current build generation, bumped by every successful rebuild.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    fn issue(&self, index: usize) -> ParticleHandle {
        ParticleHandle { index, generation: self.generation }
    }

    fn resolve(&self, handle: ParticleHandle) -> Result<usize, ClothError> {
        if handle.generation != self.generation {
            return Err(ClothError::StaleHandle {
                generation: handle.generation,
                current: self.generation,
            });
        }
        let count = self.particles.len();
        if handle.index >= count {
            return Err(ClothError::ParticleOutOfBounds { index: handle.index, count });
        }
        Ok(handle.index)
    }

    pub fn particle_at(&self, row: usize, col: usize) -> Option<&Particle<F>> {
        self.handle(row, col).and_then(|h| self.particle(h))
    }

    /// Triangles whose three edges are still linked, in row-major cell order.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.adjacency.faces()
    }

    /// Whether the grid has cells to draw as triangles.
    pub fn is_mesh_like(&self) -> bool {
        self.rows > 1 && self.cols > 1
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn links(&self) -> &[Link<F>] { &self.links }
    pub fn config(&self) -> &ClothConfig<F> { &self.config }
    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn spacing(&self) -> F { self.spacing }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn link_count(&self) -> usize { self.links.len() }
}
