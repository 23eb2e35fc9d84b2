//! Pointer tools: grabbing particles and cutting links.

use crate::float::Float;
use crate::mesh::{ClothMesh, ParticleHandle};
use crate::vec::Vec2;

/// What a pointer press does to the cloth.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Grab,
    Cut,
}

/// Result of applying a [`Tool`] at a point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Nearest particle within the drag radius, if any.
    Grabbed(Option<ParticleHandle>),
    /// Whether any link was severed.
    Cut(bool),
}

impl Tool {
    /// Apply the tool at `point` using the mesh's configured radii.
    pub fn apply<F: Float>(self, mesh: &mut ClothMesh<F>, point: Vec2<F>) -> ToolOutcome {
        match self {
            Tool::Grab => {
                let radius = mesh.config().drag_radius;
                ToolOutcome::Grabbed(mesh.find_nearest_particle(point, radius))
            }
            Tool::Cut => {
                let radius = mesh.config().cut_radius;
                ToolOutcome::Cut(mesh.sever_links_near(point, radius))
            }
        }
    }
}

/// Pointer state between press and release.
///
/// A grab holds on to the particle under the pointer and drags it along
/// with every move. Fixed particles can be grabbed but never move.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pointer {
    tool: Tool,
    held: Option<ParticleHandle>,
}

impl Pointer {
    pub fn new(tool: Tool) -> Self {
        Pointer { tool, held: None }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch tools, letting go of any held particle.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.held = None;
    }

    pub fn held(&self) -> Option<ParticleHandle> {
        self.held
    }

    pub fn press<F: Float>(&mut self, mesh: &mut ClothMesh<F>, point: Vec2<F>) -> ToolOutcome {
        let outcome = self.tool.apply(mesh, point);
        if let ToolOutcome::Grabbed(handle) = outcome {
            self.held = handle;
            self.drag(mesh, point);
        }
        outcome
    }

    /// Move the held particle to `point`. Returns whether anything moved.
    pub fn moved<F: Float>(&mut self, mesh: &mut ClothMesh<F>, point: Vec2<F>) -> bool {
        self.drag(mesh, point)
    }

    pub fn release(&mut self) {
        self.held = None;
    }

    /// Forget the held particle. Call after the mesh is rebuilt.
    pub fn reset(&mut self) {
        self.held = None;
    }

    fn drag<F: Float>(&mut self, mesh: &mut ClothMesh<F>, point: Vec2<F>) -> bool {
        let Some(handle) = self.held else {
            return false;
        };
        match mesh.move_particle(handle, point) {
            Ok(moved) => moved,
            Err(e) => {
                log::warn!("dropping held particle: {}", e);
                self.held = None;
                false
            }
        }
    }
}
