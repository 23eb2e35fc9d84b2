//! Breakable Hookean links between cloth particles.

use crate::float::Float;
use crate::vec::Vec2;
use crate::particle::Particle;

/// Below this length a link applies no force.
pub const LINK_EPSILON: f64 = 1e-6;

/// Geometric role of a link in the cloth grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LinkKind {
    /// Direct horizontal or vertical neighbor; resists stretch.
    Structural,
    /// Diagonal neighbor; resists in-plane skew.
    Shear,
    /// Skip-one neighbor along a row or column; resists folding.
    Bend,
}

/// Stiffness and breaking multiplier for one class of link.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinkParams<F: Float> {
    pub stiffness: F,
    /// The link breaks once stretched past `rest_length * breaking_threshold`.
    pub breaking_threshold: F,
}

impl<F: Float> LinkParams<F> {
    pub fn new(stiffness: F, breaking_threshold: F) -> Self {
        LinkParams { stiffness, breaking_threshold }
    }
}

/// Per-class link parameters used when a cloth is built.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinkTable<F: Float> {
    pub structural: LinkParams<F>,
    pub shear: LinkParams<F>,
    pub bend: LinkParams<F>,
}

impl<F: Float> LinkTable<F> {
    pub fn params(&self, kind: LinkKind) -> LinkParams<F> {
        match kind {
            LinkKind::Structural => self.structural,
            LinkKind::Shear => self.shear,
            LinkKind::Bend => self.bend,
        }
    }
}

impl<F: Float> Default for LinkTable<F> {
    fn default() -> Self {
        LinkTable {
            structural: LinkParams::new(F::from_f64(0.25), F::from_f64(8.0)),
            shear: LinkParams::new(F::from_f64(0.08), F::from_f64(6.0)),
            bend: LinkParams::new(F::from_f64(0.03), F::from_f64(5.0)),
        }
    }
}

/// A spring between particles `a` and `b` of a particle arena.
///
/// Goes from active to broken exactly once; a broken link never touches
/// its endpoints again.
#[derive(Clone, Debug)]
pub struct Link<F: Float> {
    a: usize,
    b: usize,
    kind: LinkKind,
    rest_length: F,
    stiffness: F,
    max_stretch: F,
    broken: bool,
}

impl<F: Float> Link<F> {
    /// Link two particles, taking their current distance as the rest length.
    pub fn new(a: usize, b: usize, particles: &[Particle<F>], kind: LinkKind, params: LinkParams<F>) -> Self {
        let rest_length = particles[a].pos.distance(particles[b].pos);
        Link {
            a,
            b,
            kind,
            rest_length,
            stiffness: params.stiffness,
            max_stretch: rest_length * params.breaking_threshold,
            broken: false,
        }
    }

    /// Apply the spring force to both endpoints.
    ///
    /// Returns `true` when the link is inert and should be pruned: it was
    /// already broken, or it just broke because its length exceeded
    /// `max_stretch` (no force is applied in that case). Links shorter than
    /// [`LINK_EPSILON`] apply nothing and return `false`.
    pub fn apply(&mut self, particles: &mut [Particle<F>]) -> bool {
        if self.broken {
            return true;
        }

        let delta = particles[self.b].pos - particles[self.a].pos;
        let dist = delta.length();

        if dist > self.max_stretch {
            self.broken = true;
            return true;
        }
        if dist < F::from_f64(LINK_EPSILON) {
            return false;
        }

        let magnitude = (dist - self.rest_length) * self.stiffness;
        let force = delta.scale(magnitude / dist);
        particles[self.a].apply_force(force);
        particles[self.b].apply_force(-force);
        false
    }

    /// Distance from `point` to this link's segment.
    pub fn distance_to(&self, point: Vec2<F>, particles: &[Particle<F>]) -> F {
        point.distance_to_segment(particles[self.a].pos, particles[self.b].pos)
    }

    pub fn endpoints(&self) -> (usize, usize) { (self.a, self.b) }
    pub fn touches(&self, index: usize) -> bool { self.a == index || self.b == index }
    pub fn kind(&self) -> LinkKind { self.kind }
    pub fn rest_length(&self) -> F { self.rest_length }
    pub fn stiffness(&self) -> F { self.stiffness }
    pub fn max_stretch(&self) -> F { self.max_stretch }
    pub fn is_broken(&self) -> bool { self.broken }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn max_stretch_follows_threshold() {
        let particles = vec![
            Particle::new(Vec2::new(0.0f64, 0.0), 1.0),
            Particle::new(Vec2::new(3.0, 4.0), 1.0),
        ];
        let link = Link::new(0, 1, &particles, LinkKind::Shear, LinkParams::new(0.08, 6.0));
        assert_eq!(link.rest_length(), 5.0);
        assert_eq!(link.max_stretch(), 30.0);
        assert_eq!(link.kind(), LinkKind::Shear);
    }

    #[test]
    fn coincident_endpoints_apply_nothing() {
        let mut particles = vec![
            Particle::new(Vec2::new(0.0f64, 0.0), 1.0),
            Particle::new(Vec2::new(1.0, 0.0), 1.0),
        ];
        let mut link = Link::new(0, 1, &particles, LinkKind::Structural, LinkParams::new(0.25, 8.0));
        particles[1].pos = particles[0].pos;

        assert!(!link.apply(&mut particles));
        assert!(!link.is_broken());
        assert_eq!(particles[0].force, Vec2::zero());
        assert_eq!(particles[1].force, Vec2::zero());
    }

    #[test]
    fn compressed_link_pushes_apart() {
        let mut particles = vec![
            Particle::new(Vec2::new(0.0f64, 0.0), 1.0),
            Particle::new(Vec2::new(10.0, 0.0), 1.0),
        ];
        let mut link = Link::new(0, 1, &particles, LinkKind::Structural, LinkParams::new(0.5, 8.0));
        particles[1].pos = Vec2::new(8.0, 0.0);

        assert!(!link.apply(&mut particles));
        assert_eq!(particles[0].force.x, -1.0);
        assert_eq!(particles[1].force.x, 1.0);
    }

    #[test]
    fn default_table_matches_link_classes() {
        let table: LinkTable<f64> = LinkTable::default();
        assert_eq!(table.params(LinkKind::Structural), LinkParams::new(0.25, 8.0));
        assert_eq!(table.params(LinkKind::Shear), LinkParams::new(0.08, 6.0));
        assert_eq!(table.params(LinkKind::Bend), LinkParams::new(0.03, 5.0));
    }
}
