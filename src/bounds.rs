//! Window bounds for cloth particles: side walls and a floor, no ceiling.

use crate::float::Float;
use crate::particle::Particle;

/// How a particle that hits the floor has its history rewritten.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FloorResponse {
    /// `prev.x = x + (y - prev.y) * floor_bounce`.
    ///
    /// Couples the vertical impact into horizontal velocity. This is the
    /// behavior the cloth's look was tuned against.
    #[default]
    CrossAxis,
    /// `prev.y = y + (y - prev.y) * floor_bounce`: a plain damped bounce.
    Vertical,
}

/// The box the cloth lives in.
///
/// Non-fixed particles are clamped to `x` in `[buffer, width - buffer]` and
/// `y <= height - buffer`. Clamping rewrites `prev_pos` so the particle
/// bounces back with part of its speed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<F: Float> {
    pub width: F,
    pub height: F,
    pub buffer: F,
    pub wall_bounce: F,
    pub floor_bounce: F,
    pub floor_response: FloorResponse,
}

impl<F: Float> Bounds<F> {
    pub fn new(width: F, height: F) -> Self {
        Bounds {
            width,
            height,
            buffer: F::from_f64(5.0),
            wall_bounce: F::from_f64(0.4),
            floor_bounce: F::from_f64(0.2),
            floor_response: FloorResponse::default(),
        }
    }

    pub fn with_buffer(mut self, buffer: F) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn with_floor_response(mut self, response: FloorResponse) -> Self {
        self.floor_response = response;
        self
    }

    pub fn min_x(&self) -> F { self.buffer }
    pub fn max_x(&self) -> F { self.width - self.buffer }
    pub fn floor(&self) -> F { self.height - self.buffer }

    /// Clamp one particle into the box. Fixed particles are left alone.
    pub fn constrain(&self, p: &mut Particle<F>) {
        if p.fixed {
            return;
        }

        if p.pos.x < self.min_x() {
            p.pos.x = self.min_x();
            p.prev_pos.x = p.pos.x + (p.pos.x - p.prev_pos.x) * self.wall_bounce;
        } else if p.pos.x > self.max_x() {
            p.pos.x = self.max_x();
            p.prev_pos.x = p.pos.x + (p.pos.x - p.prev_pos.x) * self.wall_bounce;
        }

        if p.pos.y > self.floor() {
            p.pos.y = self.floor();
            let impact = (p.pos.y - p.prev_pos.y) * self.floor_bounce;
            match self.floor_response {
                FloorResponse::CrossAxis => p.prev_pos.x = p.pos.x + impact,
                FloorResponse::Vertical => p.prev_pos.y = p.pos.y + impact,
            }
        }
    }

    pub fn constrain_all(&self, particles: &mut [Particle<F>]) {
        for p in particles.iter_mut() {
            self.constrain(p);
        }
    }
}

impl<F: Float> Default for Bounds<F> {
    fn default() -> Self {
        Self::new(F::from_f64(800.0), F::from_f64(800.0))
    }
}
