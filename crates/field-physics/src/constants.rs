//! Tuning constants for the particle field
//!
//! All distances are in surface pixels and all rates are per frame.

/// Surface area (px²) per particle. Count is `floor(area / DENSITY_AREA)`.
pub const DENSITY_AREA: f32 = 15000.0;

/// Initial velocity components are uniform in `[-MAX_INITIAL_SPEED, MAX_INITIAL_SPEED]`
pub const MAX_INITIAL_SPEED: f32 = 0.15;

/// Particle radius range
pub const MIN_RADIUS: f32 = 0.5;
pub const MAX_RADIUS: f32 = 2.5;

/// Particle opacity range
pub const MIN_OPACITY: f32 = 0.1;
pub const MAX_OPACITY: f32 = 0.6;

/// Pointer repulsion reaches this far
pub const REPULSION_RADIUS: f32 = 100.0;

/// Impulse at zero distance; falls off linearly to 0 at `REPULSION_RADIUS`
pub const REPULSION_STRENGTH: f32 = 0.02;

/// Velocity multiplier applied every frame
pub const DAMPING: f32 = 0.99;

/// Particle pairs closer than this are connected
pub const LINK_DISTANCE: f32 = 120.0;
pub const LINK_OPACITY: f32 = 0.1;
pub const LINK_WIDTH: f32 = 0.5;

/// Particles closer than this to the pointer are connected to it
pub const POINTER_LINK_DISTANCE: f32 = 150.0;
pub const POINTER_LINK_OPACITY: f32 = 0.2;
pub const POINTER_LINK_WIDTH: f32 = 0.8;

/// Opacity of the whole field layer
pub const FIELD_OPACITY: f32 = 0.6;
