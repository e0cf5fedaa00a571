//! Particle field simulator
//!
//! Owns every particle exclusively. The whole set is reallocated on resize;
//! between resizes the count never changes.

use crate::FieldParams;
use backdrop_core::{DrawSurface, Viewport};
use field_physics::{damp, link_falloff, particle_count, pointer_repulsion, reflect, Particle};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct ParticleField {
    params: FieldParams,
    particles: Vec<Particle>,
    bounds: Vec2,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: FieldParams) -> Self {
        Self::with_rng(params, StdRng::from_rng(&mut rand::rng()))
    }

    /// Deterministic layout for a given seed.
    pub fn with_seed(params: FieldParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    /// Start from an explicit particle set instead of a random one.
    pub fn with_particles(params: FieldParams, viewport: Viewport, particles: Vec<Particle>) -> Self {
        let mut field = Self::with_seed(params, 0);
        field.bounds = Vec2::new(viewport.width as f32, viewport.height as f32);
        field.particles = particles;
        field
    }

    fn with_rng(params: FieldParams, rng: StdRng) -> Self {
        Self {
            params,
            particles: Vec::new(),
            bounds: Vec2::ZERO,
            rng,
        }
    }

    /// Reallocate the particle set for a new surface size.
    pub fn resize(&mut self, viewport: Viewport) {
        self.bounds = Vec2::new(viewport.width as f32, viewport.height as f32);

        let count = particle_count(viewport.width, viewport.height, self.params.density_area);
        let [min_radius, max_radius] = self.params.radius_range;
        let [min_opacity, max_opacity] = self.params.opacity_range;
        let speed = self.params.max_initial_speed;

        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let position = Vec2::new(
                self.rng.random::<f32>() * self.bounds.x,
                self.rng.random::<f32>() * self.bounds.y,
            );
            let velocity = Vec2::new(
                (self.rng.random::<f32>() - 0.5) * 2.0 * speed,
                (self.rng.random::<f32>() - 0.5) * 2.0 * speed,
            );
            let radius = min_radius + self.rng.random::<f32>() * (max_radius - min_radius);
            let opacity = min_opacity + self.rng.random::<f32>() * (max_opacity - min_opacity);

            self.particles
                .push(Particle::new(position, velocity, radius, opacity));
        }

        log::info!(
            "Particle field resized to {}x{}: {} particles",
            viewport.width,
            viewport.height,
            count
        );
    }

    /// Advance one frame: integrate, reflect, repel from the pointer, damp.
    pub fn step(&mut self, pointer: Option<Vec2>) {
        let params = self.params;
        let bounds = self.bounds;

        for particle in &mut self.particles {
            particle.set_position(particle.position() + particle.velocity());

            reflect(particle, bounds);

            if let Some(pointer) = pointer {
                let impulse = pointer_repulsion(
                    particle.position(),
                    pointer,
                    params.repulsion_radius,
                    params.repulsion_strength,
                );
                particle.set_velocity(particle.velocity() + impulse);
            }

            damp(particle, params.damping);
        }
    }

    /// Draw particles, then particle-particle links, then pointer links.
    ///
    /// Links are checked for every unordered pair, O(N²). N is bounded by the
    /// density so this stays in the low hundreds on typical screens.
    pub fn draw(&self, surface: &mut dyn DrawSurface, pointer: Option<Vec2>) {
        let params = &self.params;

        for particle in &self.particles {
            surface.fill_circle(
                particle.position(),
                particle.radius,
                params.color.with_alpha(particle.opacity),
            );
        }

        for (i, a) in self.particles.iter().enumerate() {
            let a_pos = a.position();

            for b in &self.particles[i + 1..] {
                let b_pos = b.position();
                let distance = a_pos.distance(b_pos);
                if distance < params.link_distance {
                    let opacity = link_falloff(distance, params.link_distance, params.link_opacity);
                    surface.stroke_line(
                        a_pos,
                        b_pos,
                        params.link_width,
                        params.color.with_alpha(opacity),
                    );
                }
            }

            if let Some(pointer) = pointer {
                let distance = a_pos.distance(pointer);
                if distance < params.pointer_link_distance {
                    let opacity = link_falloff(
                        distance,
                        params.pointer_link_distance,
                        params.pointer_link_opacity,
                    );
                    surface.stroke_line(
                        a_pos,
                        pointer,
                        params.pointer_link_width,
                        params.color.with_alpha(opacity),
                    );
                }
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }
}
