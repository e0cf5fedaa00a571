//! Per-particle rules
//!
//! Each function is one step of the field update. They take their tuning
//! values as arguments so the simulator can expose them at runtime; the
//! defaults live in [`crate::constants`].

use crate::constants::*;
use crate::particle::Particle;
use glam::Vec2;

/// Number of particles for a surface: `floor(width * height / density_area)`.
pub fn particle_count(width: u32, height: u32, density_area: f32) -> usize {
    if density_area <= 0.0 {
        return 0;
    }
    let area = width as f64 * height as f64;
    (area / density_area as f64).floor() as usize
}

/// Reflect off the surface edges.
///
/// A velocity component is inverted when the particle is outside `[0, bounds]`
/// on that axis and still moving outward, so it flips exactly once per
/// crossing and the next integration step carries the particle back inside.
/// Returns true if any component flipped.
pub fn reflect(particle: &mut Particle, bounds: Vec2) -> bool {
    let position = particle.position();
    let mut velocity = particle.velocity();
    let mut flipped = false;

    if (position.x < 0.0 && velocity.x < 0.0) || (position.x > bounds.x && velocity.x > 0.0) {
        velocity.x = -velocity.x;
        flipped = true;
    }
    if (position.y < 0.0 && velocity.y < 0.0) || (position.y > bounds.y && velocity.y > 0.0) {
        velocity.y = -velocity.y;
        flipped = true;
    }

    if flipped {
        particle.set_velocity(velocity);
    }
    flipped
}

/// Impulse pushing a particle away from the pointer.
///
/// Magnitude is `(radius - d) / radius * strength` inside `radius`, zero
/// outside. A particle exactly on the pointer has no direction and gets none.
pub fn pointer_repulsion(position: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Vec2 {
    let delta = position - pointer;
    let distance = delta.length();
    if distance >= radius || distance <= f32::EPSILON {
        return Vec2::ZERO;
    }
    let force = (radius - distance) / radius;
    delta / distance * force * strength
}

pub fn damp(particle: &mut Particle, damping: f32) {
    particle.set_velocity(particle.velocity() * damping);
}

/// Linear falloff from `base_opacity` at distance 0 to 0 at `max_distance`.
pub fn link_falloff(distance: f32, max_distance: f32, base_opacity: f32) -> f32 {
    if max_distance <= 0.0 || distance >= max_distance {
        return 0.0;
    }
    base_opacity * (1.0 - distance.max(0.0) / max_distance)
}

/// Opacity of the line between two particles `distance` apart.
pub fn link_opacity(distance: f32) -> f32 {
    link_falloff(distance, LINK_DISTANCE, LINK_OPACITY)
}

/// Opacity of the line between a particle and the pointer.
pub fn pointer_link_opacity(distance: f32) -> f32 {
    link_falloff(distance, POINTER_LINK_DISTANCE, POINTER_LINK_OPACITY)
}
