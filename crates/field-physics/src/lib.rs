//! # Particle Field Physics
//!
//! The per-particle rules of the ambient background field: spawn ranges,
//! boundary reflection, pointer repulsion, damping, and the distance falloff
//! used for connective lines.

pub mod constants;
pub mod forces;
pub mod particle;

pub use constants::*;
pub use forces::*;
pub use particle::*;
