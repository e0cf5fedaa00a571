use crate::animate::{draw_spheres, fade_in, Animatable, ObjectState};
use crate::camera::Projector;
use backdrop_core::{Color, DrawSurface, Signals, ACCENT, ACCENT_LIGHT};
use glam::Vec3;
use std::f32::consts::PI;

const PAIRS: usize = 40;
const STRAND_RADIUS: f32 = 1.5;
const SPHERE_RADIUS: f32 = 0.08;
const THRESHOLD: f32 = 0.1;

/// Double helix of sphere pairs that fades in once the page is scrolled.
pub struct Helix {
    strands: [Vec<Vec3>; 2],
    colors: [Color; 2],
}

impl Helix {
    pub fn new(colors: [Color; 2]) -> Self {
        let mut first = Vec::with_capacity(PAIRS);
        let mut second = Vec::with_capacity(PAIRS);
        for i in 0..PAIRS {
            let t = i as f32 / PAIRS as f32 * PI * 4.0;
            let y = i as f32 * 0.3 - 6.0;
            first.push(Vec3::new(t.cos() * STRAND_RADIUS, y, t.sin() * STRAND_RADIUS));
            second.push(Vec3::new(
                (t + PI).cos() * STRAND_RADIUS,
                y,
                (t + PI).sin() * STRAND_RADIUS,
            ));
        }
        Self {
            strands: [first, second],
            colors,
        }
    }

    pub fn strands(&self) -> &[Vec<Vec3>; 2] {
        &self.strands
    }
}

impl Default for Helix {
    fn default() -> Self {
        Self::new([ACCENT, ACCENT_LIGHT])
    }
}

impl Animatable for Helix {
    fn label(&self) -> &'static str {
        "helix"
    }

    fn update(&mut self, t: f32, signals: &Signals) -> ObjectState {
        let p = signals.scroll_progress;
        let opacity = fade_in(p, THRESHOLD, 0.4);
        if opacity <= 0.0 {
            return ObjectState::hidden();
        }

        ObjectState {
            rotation: Vec3::new(0.0, t * 0.2 + signals.pointer_normalized.x * 0.3, 0.0),
            position: Vec3::new(-5.0 + p * 2.0, p * 3.0, -3.0),
            scale: 1.0,
            opacity,
        }
    }

    fn draw(&self, state: &ObjectState, projector: &Projector, surface: &mut dyn DrawSurface) {
        let model = state.model_matrix();
        for (strand, color) in self.strands.iter().zip(self.colors) {
            draw_spheres(
                strand.iter().copied(),
                model,
                SPHERE_RADIUS,
                color.with_alpha(state.opacity),
                projector,
                surface,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use backdrop_core::{DrawList, Viewport};

    fn at(progress: f32) -> Signals {
        Signals {
            scroll_progress: progress,
            ..Default::default()
        }
    }

    #[test]
    fn test_strands_are_opposite() {
        let helix = Helix::default();
        let [a, b] = helix.strands();
        assert_eq!(a.len(), 40);
        for (p, q) in a.iter().zip(b) {
            assert!((p.x + q.x).abs() < 1e-5 && (p.z + q.z).abs() < 1e-5);
            assert_eq!(p.y, q.y);
        }
        assert_eq!(a[0].y, -6.0);
    }

    #[test]
    fn test_hidden_before_threshold() {
        let mut helix = Helix::default();
        assert!(!helix.update(1.0, &at(0.0)).is_visible());
        assert!(!helix.update(1.0, &at(0.099)).is_visible());

        let state = helix.update(1.0, &at(0.1));
        assert!((state.opacity - 0.04).abs() < 1e-6);
        let state = helix.update(1.0, &at(1.0));
        assert!((state.opacity - 0.4).abs() < 1e-6);
        assert_eq!(state.position, Vec3::new(-3.0, 3.0, -3.0));
    }

    #[test]
    fn test_draws_both_strands_in_their_colors() {
        let viewport = Viewport::new(1280, 720);
        let projector = Camera::new(viewport).projector(viewport);
        let mut helix = Helix::default();
        let state = helix.update(0.0, &at(0.5));

        let mut list = DrawList::new(viewport);
        helix.draw(&state, &projector, &mut list);
        let circles: Vec<_> = list.circles().collect();
        assert_eq!(circles.len(), 80);
        assert_eq!(circles[0].2, ACCENT.with_alpha(0.2));
        assert_eq!(circles[40].2, ACCENT_LIGHT.with_alpha(0.2));
    }
}
