// ABOUTME: GPU rendering for the split-pane demo.
// ABOUTME: Uses wgpu to draw solid-color pane and divider quads.

mod gpu;
mod quad_pipeline;
pub mod renderer;

pub use quad_pipeline::Quad;
pub use renderer::{RenderError, Renderer};
