//! Camera and projection for the decorative scene
//!
//! The scene is drawn as wireframes onto the same 2D surface as the particle
//! field, so every vertex goes through [`Projector::project`].

use backdrop_core::Viewport;
use glam::{Mat4, Vec2, Vec3};

/// Fixed perspective camera
pub struct Camera {
    pub position: Vec3,
    pub aspect: f32,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera at (0, 0, 8) looking at the origin with a 60° vertical field of view.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 8.0),
            aspect: viewport.aspect(),
            fovy: 60.0_f32.to_radians(),
            znear: 0.1,
            zfar: 2000.0,
        }
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    /// Precompute the view-projection for one frame.
    pub fn projector(&self, viewport: Viewport) -> Projector {
        Projector {
            view_proj: self.build_view_projection_matrix(),
            viewport: Vec2::new(viewport.width as f32, viewport.height as f32),
            znear: self.znear,
            focal: 0.5 / (self.fovy * 0.5).tan(),
        }
    }
}

/// A projected vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Surface pixels, origin top-left
    pub position: Vec2,
    /// How many pixels one world unit spans at this depth
    pub pixels_per_unit: f32,
}

pub struct Projector {
    view_proj: Mat4,
    viewport: Vec2,
    znear: f32,
    focal: f32,
}

impl Projector {
    /// `None` for points behind the near plane.
    pub fn project(&self, world: Vec3) -> Option<Projected> {
        let clip = self.view_proj * world.extend(1.0);
        if clip.w < self.znear {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let position = Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        );
        Some(Projected {
            position,
            pixels_per_unit: self.focal * self.viewport.y / clip.w,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_center() {
        let viewport = Viewport::new(1200, 800);
        let projector = Camera::new(viewport).projector(viewport);
        let p = projector.project(Vec3::ZERO).unwrap();
        assert!(p.position.abs_diff_eq(Vec2::new(600.0, 400.0), 1e-3));
    }

    #[test]
    fn test_frustum_edge_projects_to_top() {
        let viewport = Viewport::new(1200, 800);
        let projector = Camera::new(viewport).projector(viewport);
        let half_height = 30.0_f32.to_radians().tan() * 8.0;
        let p = projector.project(Vec3::new(0.0, half_height, 0.0)).unwrap();
        assert!(p.position.y.abs() < 1e-2);
        // One unit spans half the viewport height divided by the half-height at depth 8
        assert!((p.pixels_per_unit - 400.0 / half_height).abs() < 1e-2);
    }

    #[test]
    fn test_points_behind_camera_are_culled() {
        let viewport = Viewport::new(100, 100);
        let projector = Camera::new(viewport).projector(viewport);
        assert!(projector.project(Vec3::new(0.0, 0.0, 9.0)).is_none());
    }
}
