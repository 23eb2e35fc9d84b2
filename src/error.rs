//! Error types for cloth construction and particle access.

use core::fmt;

/// Errors surfaced by the cloth core.
///
/// Numeric trouble during a step (zero-length links, huge forces) is not an
/// error; it is absorbed by epsilon guards and the velocity clamp.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// The grid dimensions, spacing or a configuration value is unusable.
    InvalidConfiguration { reason: &'static str },
    /// Particle handle does not address the current grid.
    ParticleOutOfBounds { index: usize, count: usize },
    /// Particle handle was issued before the cloth was last rebuilt.
    StaleHandle { generation: u32, current: u32 },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidConfiguration { reason } => {
                write!(f, "invalid cloth configuration: {}", reason)
            }
            ClothError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            ClothError::StaleHandle { generation, current } => {
                write!(f, "particle handle from build {} used on build {}", generation, current)
            }
        }
    }
}

impl core::error::Error for ClothError {}
