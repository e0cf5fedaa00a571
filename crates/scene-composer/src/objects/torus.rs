use crate::animate::{draw_wireframe, Animatable, ObjectState, Stroke};
use crate::camera::Projector;
use crate::mesh::Wireframe;
use backdrop_core::{Color, DrawSurface, Signals, ACCENT};
use glam::Vec3;
use std::f32::consts::PI;

const RADIUS: f32 = 1.5;
const TUBE: f32 = 0.02;
const OPACITY: f32 = 0.3;

/// Thin torus drifting on the left side of the page.
pub struct FloatingTorus {
    mesh: Wireframe,
    color: Color,
}

impl FloatingTorus {
    pub fn new(color: Color) -> Self {
        Self {
            mesh: Wireframe::ring(RADIUS, 100),
            color,
        }
    }
}

impl Default for FloatingTorus {
    fn default() -> Self {
        Self::new(ACCENT)
    }
}

impl Animatable for FloatingTorus {
    fn label(&self) -> &'static str {
        "floating-torus"
    }

    fn update(&mut self, t: f32, signals: &Signals) -> ObjectState {
        let p = signals.scroll_progress;
        let pointer = signals.pointer_normalized;

        ObjectState {
            rotation: Vec3::new(t * 0.2 + p * PI, 0.0, t * 0.1 + pointer.x * 0.3),
            position: Vec3::new(
                -4.0 + pointer.x * 0.5,
                (t * 0.4).cos() * 0.5 - 2.0 + p * 4.0,
                -3.0,
            ),
            scale: 1.0 + p * 0.5,
            opacity: OPACITY,
        }
    }

    fn draw(&self, state: &ObjectState, projector: &Projector, surface: &mut dyn DrawSurface) {
        draw_wireframe(
            &self.mesh,
            state.model_matrix(),
            Stroke::World(TUBE * 2.0),
            self.color.with_alpha(state.opacity),
            projector,
            surface,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_torus_follows_scroll_and_pointer() {
        let mut torus = FloatingTorus::default();
        let signals = Signals {
            scroll_progress: 0.5,
            pointer_normalized: Vec2::new(1.0, 0.0),
            ..Default::default()
        };
        let state = torus.update(0.0, &signals);
        assert!((state.rotation.x - PI * 0.5).abs() < 1e-6);
        assert!((state.rotation.z - 0.3).abs() < 1e-6);
        assert!((state.position.x + 3.5).abs() < 1e-6);
        // cos(0) * 0.5 - 2 + 0.5 * 4
        assert!((state.position.y - 0.5).abs() < 1e-6);
        assert_eq!(state.position.z, -3.0);
        assert!((state.scale - 1.25).abs() < 1e-6);
        assert_eq!(state.opacity, 0.3);
    }
}
