//! Field parameters for runtime tuning

use backdrop_core::{Color, ACCENT};
use field_physics::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    // Spawning
    /// Surface area (px²) per particle
    pub density_area: f32,
    pub max_initial_speed: f32,
    /// [min, max]
    pub radius_range: [f32; 2],
    /// [min, max]
    pub opacity_range: [f32; 2],

    // Motion
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    pub damping: f32,

    // Connections
    pub link_distance: f32,
    pub link_opacity: f32,
    pub link_width: f32,
    pub pointer_link_distance: f32,
    pub pointer_link_opacity: f32,
    pub pointer_link_width: f32,

    // Appearance
    pub color: Color,
    /// Opacity of the whole layer
    pub field_opacity: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            density_area: DENSITY_AREA,
            max_initial_speed: MAX_INITIAL_SPEED,
            radius_range: [MIN_RADIUS, MAX_RADIUS],
            opacity_range: [MIN_OPACITY, MAX_OPACITY],

            repulsion_radius: REPULSION_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            damping: DAMPING,

            link_distance: LINK_DISTANCE,
            link_opacity: LINK_OPACITY,
            link_width: LINK_WIDTH,
            pointer_link_distance: POINTER_LINK_DISTANCE,
            pointer_link_opacity: POINTER_LINK_OPACITY,
            pointer_link_width: POINTER_LINK_WIDTH,

            color: ACCENT,
            field_opacity: FIELD_OPACITY,
        }
    }
}
