//! # Particle Field Simulation
//!
//! CPU simulation of the ambient background field and the frame layer that
//! mounts it on the scheduler.

pub mod layer;
pub mod params;
pub mod simulation;

pub use layer::*;
pub use params::*;
pub use simulation::*;
