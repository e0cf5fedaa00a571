//! Animatable objects
//!
//! Every decorative object is driven the same way: once per frame the
//! composer calls [`Animatable::update`] with the elapsed time and the shared
//! signals, then hands the returned [`ObjectState`] back to
//! [`Animatable::draw`].

use crate::camera::Projector;
use crate::mesh::Wireframe;
use backdrop_core::{Color, DrawSurface, Signals};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Per-frame lerp factor for smoothed rotations.
pub const ROTATION_SMOOTHING: f32 = 0.05;

/// Stroke width for plain wireframe edges, in pixels.
pub const EDGE_WIDTH: f32 = 1.0;

/// Transform and opacity of one object for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectState {
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    pub position: Vec3,
    pub scale: f32,
    pub opacity: f32,
}

impl Default for ObjectState {
    fn default() -> Self {
        Self {
            rotation: Vec3::ZERO,
            position: Vec3::ZERO,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl ObjectState {
    /// A state that draws nothing.
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Default::default()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn model_matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.position,
        )
    }
}

/// A decorative object in the 3D scene.
pub trait Animatable {
    fn label(&self) -> &'static str;

    /// Advance to `elapsed` seconds and return the state to draw.
    fn update(&mut self, elapsed: f32, signals: &Signals) -> ObjectState;

    /// Draw with the state returned by the last `update`.
    fn draw(&self, state: &ObjectState, projector: &Projector, surface: &mut dyn DrawSurface);
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Opacity that stays at zero below `threshold`, then grows as `progress * factor`.
pub fn fade_in(progress: f32, threshold: f32, factor: f32) -> f32 {
    if progress < threshold {
        0.0
    } else {
        progress * factor
    }
}

/// How wide to stroke projected edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    /// Constant width in pixels.
    Pixels(f32),
    /// Width in local units, scaled with the object and its depth.
    World(f32),
}

/// Project every vertex of `mesh` through `model` and stroke its edges.
///
/// Edges with an endpoint behind the camera are skipped.
pub fn draw_wireframe(
    mesh: &Wireframe,
    model: Mat4,
    stroke: Stroke,
    color: Color,
    projector: &Projector,
    surface: &mut dyn DrawSurface,
) {
    let scale = model.x_axis.truncate().length();
    let projected: Vec<_> = mesh
        .vertices
        .iter()
        .map(|v| projector.project(model.transform_point3(*v)))
        .collect();

    for [a, b] in &mesh.edges {
        let (Some(pa), Some(pb)) = (projected[*a as usize], projected[*b as usize]) else {
            continue;
        };
        let width = match stroke {
            Stroke::Pixels(width) => width,
            Stroke::World(width) => {
                width * scale * (pa.pixels_per_unit + pb.pixels_per_unit) * 0.5
            }
        };
        surface.stroke_line(pa.position, pb.position, width, color);
    }
}

/// Draw world-space spheres as discs whose radius follows perspective.
pub fn draw_spheres(
    centers: impl IntoIterator<Item = Vec3>,
    model: Mat4,
    radius: f32,
    color: Color,
    projector: &Projector,
    surface: &mut dyn DrawSurface,
) {
    let scale = model.x_axis.truncate().length();
    for center in centers {
        if let Some(p) = projector.project(model.transform_point3(center)) {
            surface.fill_circle(p.position, radius * scale * p.pixels_per_unit, color);
        }
    }
}

/// Screen-space bounding box of the visible vertices of a mesh.
pub fn projected_bounds(mesh: &Wireframe, model: Mat4, projector: &Projector) -> Option<[Vec2; 2]> {
    mesh.vertices
        .iter()
        .filter_map(|v| projector.project(model.transform_point3(*v)))
        .fold(None, |acc, p| match acc {
            None => Some([p.position, p.position]),
            Some([min, max]) => Some([min.min(p.position), max.max(p.position)]),
        })
}
