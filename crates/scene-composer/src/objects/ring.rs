use crate::animate::{draw_wireframe, Animatable, ObjectState, Stroke};
use crate::camera::Projector;
use crate::mesh::Wireframe;
use backdrop_core::{Color, DrawSurface, Signals, ACCENT};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

const GROUP_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -5.0);
const TUBE: f32 = 0.015;
const TRAIL_TUBE: f32 = 0.05;
const TRAIL_OPACITY: f32 = 0.05;

/// A large ring spinning behind the content, with a faint wider trail.
///
/// Spin speed grows with scroll progress; tilt wobbles over time.
pub struct OrbitalRing {
    radius: f32,
    speed: f32,
    offset: f32,
    mesh: Wireframe,
    color: Color,
}

impl OrbitalRing {
    pub fn new(radius: f32, speed: f32, offset: f32, color: Color) -> Self {
        Self {
            radius,
            speed,
            offset,
            mesh: Wireframe::ring(radius, 100),
            color,
        }
    }

    /// The three rings of the default scene.
    pub fn defaults(color: Color) -> [Self; 3] {
        [
            Self::new(4.0, 0.1, 0.0, color),
            Self::new(5.0, -0.08, PI / 3.0, color),
            Self::new(6.0, 0.05, PI / 1.5, color),
        ]
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Angular speed around the ring axis at a scroll progress.
    pub fn dynamic_speed(&self, progress: f32) -> f32 {
        self.speed * (1.0 + progress * 3.0)
    }
}

impl Animatable for OrbitalRing {
    fn label(&self) -> &'static str {
        "orbital-ring"
    }

    fn update(&mut self, t: f32, signals: &Signals) -> ObjectState {
        let p = signals.scroll_progress;
        let pointer = signals.pointer_normalized;

        ObjectState {
            rotation: Vec3::new(
                FRAC_PI_2 + (t * 0.3 + self.offset).sin() * 0.3 + pointer.y * 0.2,
                0.0,
                t * self.dynamic_speed(p) + pointer.x * 0.1,
            ),
            position: GROUP_OFFSET,
            scale: 1.0 + p * 0.3,
            opacity: 0.2 + p * 0.15,
        }
    }

    fn draw(&self, state: &ObjectState, projector: &Projector, surface: &mut dyn DrawSurface) {
        let model = state.model_matrix();
        draw_wireframe(
            &self.mesh,
            model,
            Stroke::World(TRAIL_TUBE * 2.0),
            self.color.with_alpha(TRAIL_OPACITY),
            projector,
            surface,
        );
        draw_wireframe(
            &self.mesh,
            model,
            Stroke::World(TUBE * 2.0),
            self.color.with_alpha(state.opacity),
            projector,
            surface,
        );
    }
}

impl Default for OrbitalRing {
    fn default() -> Self {
        Self::new(4.0, 0.1, 0.0, ACCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use backdrop_core::{DrawList, Viewport};

    #[test]
    fn test_speed_grows_with_scroll() {
        let ring = OrbitalRing::default();
        assert!((ring.dynamic_speed(0.0) - 0.1).abs() < 1e-6);
        assert!((ring.dynamic_speed(1.0) - 0.4).abs() < 1e-6);

        let [_, reverse, _] = OrbitalRing::defaults(ACCENT);
        assert!(reverse.dynamic_speed(0.5) < 0.0);
        assert_eq!(reverse.radius(), 5.0);
    }

    #[test]
    fn test_ring_state() {
        let mut ring = OrbitalRing::default();
        let signals = Signals {
            scroll_progress: 1.0,
            ..Default::default()
        };
        let state = ring.update(10.0, &signals);
        assert!((state.rotation.z - 4.0).abs() < 1e-5);
        assert!((state.rotation.x - (FRAC_PI_2 + 3.0_f32.sin() * 0.3)).abs() < 1e-5);
        assert_eq!(state.position, Vec3::new(0.0, 0.0, -5.0));
        assert!((state.scale - 1.3).abs() < 1e-6);
        assert!((state.opacity - 0.35).abs() < 1e-6);
    }

    #[test]
    fn test_trail_drawn_under_ring() {
        let viewport = Viewport::new(1280, 720);
        let projector = Camera::new(viewport).projector(viewport);
        let mut ring = OrbitalRing::default();
        let state = ring.update(0.0, &Signals::default());

        let mut list = DrawList::new(viewport);
        ring.draw(&state, &projector, &mut list);
        let lines: Vec<_> = list.lines().collect();
        assert_eq!(lines.len(), 200);
        assert_eq!(lines[0].3.a, 0.05);
        assert!((lines[199].3.a - 0.2).abs() < 1e-6);
        assert!(lines[0].2 > lines[199].2);
    }
}
