use crate::animate::{draw_wireframe, fade_in, Animatable, ObjectState, Stroke, EDGE_WIDTH};
use crate::camera::Projector;
use crate::mesh::Wireframe;
use backdrop_core::{Color, DrawSurface, Signals, ACCENT};
use glam::Vec3;

const THRESHOLD: f32 = 0.2;

/// A thin slab that bobs in place, like a floating code card.
pub struct FloatingBlock {
    index: usize,
    base: Vec3,
    mesh: Wireframe,
    color: Color,
}

impl FloatingBlock {
    pub fn new(index: usize, position: Vec3, size: Vec3, color: Color) -> Self {
        Self {
            index,
            base: position,
            mesh: Wireframe::cuboid(size),
            color,
        }
    }

    /// The three cards of the default scene.
    pub fn defaults(color: Color) -> [Self; 3] {
        [
            Self::new(0, Vec3::new(4.0, 2.0, -4.0), Vec3::new(1.0, 0.6, 0.02), color),
            Self::new(1, Vec3::new(5.0, -1.0, -3.0), Vec3::new(0.8, 0.5, 0.02), color),
            Self::new(2, Vec3::new(3.5, 0.0, -5.0), Vec3::new(1.2, 0.7, 0.02), color),
        ]
    }
}

impl Animatable for FloatingBlock {
    fn label(&self) -> &'static str {
        "floating-block"
    }

    fn update(&mut self, t: f32, signals: &Signals) -> ObjectState {
        let opacity = fade_in(signals.scroll_progress, THRESHOLD, 0.3);
        if opacity <= 0.0 {
            return ObjectState::hidden();
        }

        let i = self.index as f32;
        ObjectState {
            rotation: Vec3::new((t * 0.3 + i).cos() * 0.05, (t * 0.5 + i).sin() * 0.1, 0.0),
            position: Vec3::new(self.base.x, self.base.y + (t + i).sin() * 0.2, self.base.z),
            scale: 1.0,
            opacity,
        }
    }

    fn draw(&self, state: &ObjectState, projector: &Projector, surface: &mut dyn DrawSurface) {
        draw_wireframe(
            &self.mesh,
            state.model_matrix(),
            Stroke::Pixels(EDGE_WIDTH),
            self.color.with_alpha(state.opacity),
            projector,
            surface,
        );
    }
}
