//! Scene export for the external 3D renderer
//!
//! The crate owns no GPU resources. Each frame the session is flattened into
//! per-instance model matrices that the host's renderer uploads as-is.

pub mod instance;

pub use instance::{InstanceKind, InstanceRaw, SceneSnapshot, colors};

/// Something that can draw a frame from a snapshot
pub trait Renderer {
    fn render(&mut self, scene: &SceneSnapshot);
}

/// Renderer that draws nothing (headless runs, tests)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _scene: &SceneSnapshot) {}
}
