//! Verlet particles driven by accumulated spring forces.

use crate::float::Float;
use crate::vec::Vec2;

/// Default speed cap applied during integration.
pub const DEFAULT_MAX_VELOCITY: f64 = 10.0;

/// A cloth point mass with position history.
///
/// Velocity is implicit (`pos - prev_pos`). Forces accumulated through
/// [`apply_force`](Self::apply_force) are added straight onto that velocity
/// at the next [`integrate`](Self::integrate) and then cleared.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub force: Vec2<F>,
    pub mass: F,
    pub fixed: bool,
}

impl<F: Float> Particle<F> {
    pub fn new(pos: Vec2<F>, mass: F) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            force: Vec2::zero(),
            mass,
            fixed: false,
        }
    }

    /// A particle pinned in place for its whole lifetime.
    pub fn fixed(pos: Vec2<F>, mass: F) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            force: Vec2::zero(),
            mass,
            fixed: true,
        }
    }

    /// Offset the previous position so the particle starts with a small velocity.
    ///
    /// Fixed particles are returned unchanged.
    pub fn with_jitter(mut self, offset: Vec2<F>) -> Self {
        if !self.fixed {
            self.prev_pos = self.prev_pos + offset;
        }
        self
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        if !self.fixed {
            self.force = self.force + force;
        }
    }

    /// Advance one substep.
    ///
    /// `v = (pos - prev_pos) * damping + force`, where the force buffer has
    /// already received `gravity * mass` on the y axis. `v` is scaled down to
    /// `max_velocity` when longer, then `prev_pos = pos`, `pos += v`, and the
    /// force buffer is cleared.
    pub fn integrate(&mut self, gravity: F, damping: F, max_velocity: F) {
        if self.fixed {
            return;
        }
        self.force.y = self.force.y + gravity * self.mass;

        let mut velocity = (self.pos - self.prev_pos).scale(damping) + self.force;
        let speed = velocity.length();
        if speed > max_velocity {
            velocity = velocity.scale(max_velocity / speed);
        }

        self.prev_pos = self.pos;
        self.pos = self.pos + velocity;
        self.force = Vec2::zero();
    }

    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Drag the particle to `pos`. Fixed particles refuse and return `false`.
    ///
    /// Only the current position moves, so the drag distance becomes
    /// velocity on the next integration.
    pub fn move_to(&mut self, pos: Vec2<F>) -> bool {
        if self.fixed {
            return false;
        }
        self.pos = pos;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_scales_with_mass() {
        let mut light = Particle::new(Vec2::new(0.0f64, 0.0), 1.0);
        let mut heavy = Particle::new(Vec2::new(0.0f64, 0.0), 2.0);
        light.integrate(0.5, 1.0, 10.0);
        heavy.integrate(0.5, 1.0, 10.0);
        assert_eq!(light.pos.y, 0.5);
        assert_eq!(heavy.pos.y, 1.0);
    }

    #[test]
    fn damping_applies_to_delta_not_force() {
        let mut p = Particle::new(Vec2::new(10.0f64, 0.0), 1.0);
        p.prev_pos = Vec2::new(8.0, 0.0);
        p.apply_force(Vec2::new(1.0, 0.0));
        p.integrate(0.0, 0.5, 10.0);
        // 2 * 0.5 + 1
        assert_eq!(p.pos.x, 12.0);
        assert_eq!(p.prev_pos.x, 10.0);
    }

    #[test]
    fn jitter_skips_fixed_particles() {
        let offset = Vec2::new(0.25f64, -0.5);
        let pinned = Particle::fixed(Vec2::new(1.0f64, 1.0), 1.0).with_jitter(offset);
        assert_eq!(pinned.prev_pos, pinned.pos);

        let loose = Particle::new(Vec2::new(1.0f64, 1.0), 1.0).with_jitter(offset);
        assert_eq!(loose.pos, Vec2::new(1.0, 1.0));
        assert_eq!(loose.prev_pos, Vec2::new(1.25, 0.5));
    }

    #[test]
    fn move_to_keeps_previous_position() {
        let mut p = Particle::new(Vec2::new(0.0f64, 0.0), 1.0);
        assert!(p.move_to(Vec2::new(5.0, 5.0)));
        assert_eq!(p.prev_pos, Vec2::zero());
        assert_eq!(p.velocity_raw(), Vec2::new(5.0, 5.0));
    }
}
