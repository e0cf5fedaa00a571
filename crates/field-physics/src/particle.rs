//! Particle record for the background field

use glam::Vec2;

/// A point mass in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    /// Fixed at creation
    pub radius: f32,
    /// Fixed at creation
    pub opacity: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            position: position.to_array(),
            velocity: velocity.to_array(),
            radius,
            opacity,
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::from_array(self.position)
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::from_array(self.velocity)
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position.to_array();
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity.to_array();
    }

    pub fn speed(&self) -> f32 {
        self.velocity().length()
    }
}
