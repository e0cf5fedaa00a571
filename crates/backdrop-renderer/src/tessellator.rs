//! Draw list tessellation
//!
//! Circles become triangle fans and lines become quads. Colors are converted
//! to linear space here so the pipeline can write straight into an sRGB
//! surface.

use crate::vertex::Vertex;
use backdrop_core::{Color, DrawCommand, DrawList};
use glam::Vec2;
use std::f32::consts::TAU;

const MIN_CIRCLE_SEGMENTS: u32 = 8;
const MAX_CIRCLE_SEGMENTS: u32 = 64;

/// Lines thinner than this are drawn at this width with proportionally less alpha.
const HAIRLINE: f32 = 1.0;

/// Segments for a circle of `radius` pixels; more for larger circles.
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 2.0).ceil() as u32).clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS)
}

#[derive(Default)]
pub struct Tessellator {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl Tessellator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tessellate(&mut self, list: &DrawList) -> (&[Vertex], &[u32]) {
        self.vertices.clear();
        self.indices.clear();

        for command in list.commands() {
            match *command {
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => self.add_circle(center, radius, color),
                DrawCommand::Line {
                    from,
                    to,
                    width,
                    color,
                } => self.add_line(from, to, width, color),
            }
        }

        (&self.vertices, &self.indices)
    }

    fn add_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let color = color.to_linear();
        let segments = circle_segments(radius);
        let base = self.vertices.len() as u32;

        self.vertices.push(Vertex {
            pos: center.to_array(),
            color,
        });
        for i in 0..segments {
            let angle = i as f32 / segments as f32 * TAU;
            let rim = center + Vec2::from_angle(angle) * radius;
            self.vertices.push(Vertex {
                pos: rim.to_array(),
                color,
            });
        }
        for i in 0..segments {
            let next = (i + 1) % segments;
            self.indices
                .extend_from_slice(&[base, base + 1 + i, base + 1 + next]);
        }
    }

    fn add_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let direction = to - from;
        let length = direction.length();
        if length <= f32::EPSILON {
            return;
        }

        let (width, color) = if width < HAIRLINE {
            (HAIRLINE, color.fade(width / HAIRLINE))
        } else {
            (width, color)
        };
        let color = color.to_linear();
        let normal = direction.perp() / length * (width * 0.5);
        let base = self.vertices.len() as u32;

        for pos in [from + normal, from - normal, to - normal, to + normal] {
            self.vertices.push(Vertex {
                pos: pos.to_array(),
                color,
            });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}
