//! Tearable 2D cloth for games.
//!
//! `drape` simulates a grid of Verlet particles held together by Hookean
//! links that snap when overstretched, and turns whatever is left of the
//! grid into lit triangles for the host to draw.
//!
//! # Features
//!
//! - **Verlet particles**: implicit velocity, per-substep damping and a speed cap
//! - **Breakable links**: structural, shear and bend classes with their own stiffness
//! - **Pointer tools**: grab-and-drag and cut, driven by plain `(x, y)` input
//! - **Flat shading**: per-triangle diffuse + specular on a two-tone weave
//! - **Backend-agnostic rendering**: implement [`Canvas`] for any surface
//! - **Observable**: Monitor steps and link breakage via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use drape::{ClothConfig, ClothMesh, ClothPreset, NoOpStepObserver, Pointer, Tool, Vec2};
//!
//! let mut cloth: ClothMesh<f64> = ClothMesh::from_preset(ClothPreset::Sheet, ClothConfig::new()).unwrap();
//! let mut pointer = Pointer::new(Tool::Cut);
//! pointer.press(&mut cloth, Vec2::new(400.0, 200.0));
//! cloth.step(&mut NoOpStepObserver);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod link;
pub mod bounds;
pub mod topology;
pub mod mesh;
pub mod shading;
pub mod render;
pub mod interaction;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use link::{Link, LinkKind, LinkParams, LinkTable};
pub use bounds::{Bounds, FloorResponse};
pub use topology::Face;
pub use mesh::{ClothMesh, ClothPreset, ParticleHandle};
pub use shading::{Lighting, Palette, Rgb, Shade};
pub use render::{Canvas, MeshRenderer, ShadedTriangle};
pub use interaction::{Pointer, Tool, ToolOutcome};
pub use config::ClothConfig;
pub use observer::{StepObserver, NoOpStepObserver, StepCounter};
pub use error::ClothError;
