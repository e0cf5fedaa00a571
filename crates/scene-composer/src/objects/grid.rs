use crate::animate::{draw_wireframe, Animatable, ObjectState, Stroke, EDGE_WIDTH};
use crate::camera::Projector;
use crate::mesh::Wireframe;
use backdrop_core::{Color, DrawSurface, Signals, ACCENT};
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

const SIZE: f32 = 30.0;
const GRID_Y: f32 = -5.0;
const WAVE_Y: f32 = -5.1;
const WAVE_OPACITY: f32 = 0.02;

/// Wave height of the floor plane at `(x, z)` on the floor.
pub fn wave_height(x: f32, z: f32, t: f32, progress: f32) -> f32 {
    (x * 0.5 + t + progress * 5.0).sin() * (z * 0.5 + t).cos() * 0.3 * progress
}

/// Grid standing upright behind the scene, over a faint wave floor.
///
/// The grid lies in XZ and the `-PI/2` tilt stands it up facing the camera;
/// scrolling leans it back by up to 0.2 rad.
pub struct GridPlane {
    grid: Wireframe,
    flat: Wireframe,
    wave: Wireframe,
    color: Color,
}

impl GridPlane {
    pub fn new(color: Color) -> Self {
        let flat = Wireframe::plane(SIZE, 32);
        Self {
            grid: Wireframe::grid(SIZE, 30),
            wave: flat.clone(),
            flat,
            color,
        }
    }

    /// Wave surface vertices in local space as of the last update.
    pub fn wave(&self) -> &Wireframe {
        &self.wave
    }

    fn wave_model() -> Mat4 {
        Mat4::from_rotation_translation(
            Quat::from_rotation_x(-FRAC_PI_2),
            Vec3::new(0.0, WAVE_Y, 0.0),
        )
    }
}

impl Default for GridPlane {
    fn default() -> Self {
        Self::new(ACCENT)
    }
}

impl Animatable for GridPlane {
    fn label(&self) -> &'static str {
        "grid-plane"
    }

    fn update(&mut self, t: f32, signals: &Signals) -> ObjectState {
        let p = signals.scroll_progress;

        // Height goes along the plane normal (local z, world up once laid
        // flat). Writing it into local y as well would collapse every row
        // onto one line, leaving no surface to ripple.
        for (vertex, rest) in self.wave.vertices.iter_mut().zip(&self.flat.vertices) {
            vertex.z = wave_height(rest.x, -rest.y, t, p);
        }

        ObjectState {
            rotation: Vec3::new(-FRAC_PI_2 + p * 0.2, 0.0, 0.0),
            position: Vec3::new(0.0, GRID_Y, (t * (0.5 + p)) % 1.0),
            scale: 1.0,
            opacity: 0.08 + p * 0.05,
        }
    }

    fn draw(&self, state: &ObjectState, projector: &Projector, surface: &mut dyn DrawSurface) {
        draw_wireframe(
            &self.wave,
            Self::wave_model(),
            Stroke::Pixels(EDGE_WIDTH),
            self.color.with_alpha(WAVE_OPACITY),
            projector,
            surface,
        );
        draw_wireframe(
            &self.grid,
            state.model_matrix(),
            Stroke::Pixels(EDGE_WIDTH),
            self.color.with_alpha(state.opacity),
            projector,
            surface,
        );
    }
}
