//! Simulation tunables for a cloth.

use crate::bounds::{Bounds, FloorResponse};
use crate::error::ClothError;
use crate::float::Float;
use crate::link::{LinkParams, LinkTable};
use crate::particle::DEFAULT_MAX_VELOCITY;

/// Everything a [`ClothMesh`](crate::mesh::ClothMesh) needs besides its grid size.
///
/// Values are per substep and in screen units (y grows downward).
///
/// # Builder Pattern
/// ```
/// use drape::config::ClothConfig;
///
/// let config: ClothConfig<f64> = ClothConfig::new()
///     .with_gravity(0.2)
///     .with_damping(0.98)
///     .with_iterations(8)
///     .with_seed(7);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClothConfig<F: Float> {
    /// Downward acceleration added to every loose particle each substep. Default: 0.15.
    pub gravity: F,
    /// Fraction of velocity kept per substep. Default: 0.99.
    pub damping: F,
    /// Substeps per [`step`](crate::mesh::ClothMesh::step). Default: 6.
    pub iterations: usize,
    /// Speed cap per substep. Default: 10.
    pub max_velocity: F,
    /// Mass of every particle. Default: 1.
    pub particle_mass: F,
    /// Largest initial offset of a loose particle's previous position, per axis. Default: 0.1.
    pub jitter: F,
    /// Seed for the jitter generator.
    pub seed: u64,
    /// Y coordinate of the top row. Default: 60.
    pub top_margin: F,
    /// Every `pin_stride`-th particle of the top row is fixed. Default: 3.
    pub pin_stride: usize,
    /// Stiffness and breaking threshold for each link class.
    pub links: LinkTable<F>,
    /// Walls and floor.
    pub bounds: Bounds<F>,
    /// Grab search radius. Default: 15.
    pub drag_radius: F,
    /// Cut radius. Default: 20.
    pub cut_radius: F,
}

impl<F: Float> ClothConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        ClothConfig {
            gravity: F::from_f64(0.15),
            damping: F::from_f64(0.99),
            iterations: 6,
            max_velocity: F::from_f64(DEFAULT_MAX_VELOCITY),
            particle_mass: F::one(),
            jitter: F::from_f64(0.1),
            seed: 0x5eed_c107,
            top_margin: F::from_f64(60.0),
            pin_stride: 3,
            links: LinkTable::default(),
            bounds: Bounds::default(),
            drag_radius: F::from_f64(15.0),
            cut_radius: F::from_f64(20.0),
        }
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the number of substeps per step (at least one).
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    pub fn with_max_velocity(mut self, max_velocity: F) -> Self {
        self.max_velocity = max_velocity;
        self
    }

    pub fn with_jitter(mut self, jitter: F) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_pin_stride(mut self, stride: usize) -> Self {
        self.pin_stride = stride;
        self
    }

    pub fn with_links(mut self, links: LinkTable<F>) -> Self {
        self.links = links;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds<F>) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_floor_response(mut self, response: FloorResponse) -> Self {
        self.bounds.floor_response = response;
        self
    }

    pub fn with_drag_radius(mut self, radius: F) -> Self {
        self.drag_radius = radius;
        self
    }

    pub fn with_cut_radius(mut self, radius: F) -> Self {
        self.cut_radius = radius;
        self
    }

    /// Reject values that would produce a degenerate or unstable cloth.
    pub fn validate(&self) -> Result<(), ClothError> {
        let invalid = |reason| Err(ClothError::InvalidConfiguration { reason });

        if self.iterations == 0 {
            return invalid("iterations must be at least 1");
        }
        if !(self.damping >= F::zero() && self.damping <= F::one()) {
            return invalid("damping must be in [0, 1]");
        }
        if !self.gravity.is_finite() {
            return invalid("gravity must be finite");
        }
        if !(self.max_velocity > F::zero()) || !self.max_velocity.is_finite() {
            return invalid("max velocity must be positive and finite");
        }
        if !(self.particle_mass > F::zero()) || !self.particle_mass.is_finite() {
            return invalid("particle mass must be positive and finite");
        }
        if !(self.jitter >= F::zero()) || !self.jitter.is_finite() {
            return invalid("jitter must be non-negative and finite");
        }
        if self.pin_stride == 0 {
            return invalid("pin stride must be at least 1");
        }
        if !(self.bounds.buffer >= F::zero()) {
            return invalid("bounds buffer must be non-negative");
        }
        if !(self.bounds.width > self.bounds.buffer * F::two()) || !(self.bounds.height > self.bounds.buffer) {
            return invalid("bounds are too small for their buffer");
        }
        for params in [self.links.structural, self.links.shear, self.links.bend] {
            check_link_params(params)?;
        }
        Ok(())
    }
}

fn check_link_params<F: Float>(params: LinkParams<F>) -> Result<(), ClothError> {
    if !(params.stiffness >= F::zero()) || !params.stiffness.is_finite() {
        return Err(ClothError::InvalidConfiguration { reason: "link stiffness must be non-negative and finite" });
    }
    if !(params.breaking_threshold > F::zero()) {
        return Err(ClothError::InvalidConfiguration { reason: "link breaking threshold must be positive" });
    }
    Ok(())
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
