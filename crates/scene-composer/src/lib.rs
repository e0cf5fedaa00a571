//! # Scene Composer
//!
//! The decorative 3D scene behind the page: a fixed camera, wireframe
//! meshes, scroll and pointer driven animators, and the layers that put them
//! (and the 2D cursor and scroll overlays) on the frame scheduler.

pub mod animate;
pub mod camera;
pub mod composer;
pub mod mesh;
pub mod objects;
pub mod overlay;

pub use animate::*;
pub use camera::*;
pub use composer::*;
pub use mesh::*;
pub use overlay::*;
