//! The decorative objects of the scene

pub mod blocks;
pub mod geometry;
pub mod grid;
pub mod helix;
pub mod points;
pub mod ring;
pub mod torus;

pub use blocks::FloatingBlock;
pub use geometry::{shape_for_progress, FloatingGeometry, ShapeKind};
pub use grid::{wave_height, GridPlane};
pub use helix::Helix;
pub use points::PointCloud;
pub use ring::OrbitalRing;
pub use torus::FloatingTorus;
