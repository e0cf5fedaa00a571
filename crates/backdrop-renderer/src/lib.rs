//! # Backdrop Renderer
//!
//! Turns a recorded draw list into triangles and draws them with wgpu.

pub mod renderer;
pub mod tessellator;
pub mod vertex;

pub use renderer::*;
pub use tessellator::*;
pub use vertex::*;
