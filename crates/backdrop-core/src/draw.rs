//! Drawing surface abstraction
//!
//! Layers issue immediate-mode circle and line commands against a
//! [`DrawSurface`]. The GPU renderer consumes a recorded [`DrawList`]; tests
//! inspect one directly.

use crate::color::Color;
use crate::signals::Viewport;
use glam::Vec2;

/// A 2D target in pixel coordinates, origin top-left, +y down.
pub trait DrawSurface {
    fn size(&self) -> Viewport;
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
}

/// Records draw commands for one frame.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    size: Viewport,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(size: Viewport) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, size: Viewport) {
        self.size = size;
    }

    /// Drop last frame's commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => Some((from, to, width, color)),
            _ => None,
        })
    }
}

impl DrawSurface for DrawList {
    fn size(&self) -> Viewport {
        self.size
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        // Fully transparent or degenerate shapes cost vertices and show nothing
        if color.a <= 0.0 || radius <= 0.0 {
            return;
        }
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        if color.a <= 0.0 || width <= 0.0 {
            return;
        }
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }
}

/// Applies a uniform opacity to everything drawn through it, like CSS
/// `opacity` on a canvas element.
pub struct Faded<'a> {
    inner: &'a mut dyn DrawSurface,
    opacity: f32,
}

impl<'a> Faded<'a> {
    pub fn new(inner: &'a mut dyn DrawSurface, opacity: f32) -> Self {
        Self { inner, opacity }
    }
}

impl DrawSurface for Faded<'_> {
    fn size(&self) -> Viewport {
        self.inner.size()
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.inner
            .fill_circle(center, radius, color.fade(self.opacity));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.inner
            .stroke_line(from, to, width, color.fade(self.opacity));
    }
}
