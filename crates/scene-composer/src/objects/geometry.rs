use crate::animate::{draw_wireframe, lerp, Animatable, ObjectState, Stroke, EDGE_WIDTH, ROTATION_SMOOTHING};
use crate::camera::Projector;
use crate::mesh::Wireframe;
use backdrop_core::{Color, DrawSurface, Signals, ACCENT};
use glam::Vec3;

const GROUP_OFFSET: Vec3 = Vec3::new(3.0, 0.0, 0.0);

/// Which polyhedron the primary shape shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Icosahedron,
    Octahedron,
    Dodecahedron,
}

/// Shape for a scroll progress. Plain `<` comparisons, so a progress sitting
/// exactly on 0.33 or 0.66 already shows the next shape.
pub fn shape_for_progress(progress: f32) -> ShapeKind {
    if progress < 0.33 {
        ShapeKind::Icosahedron
    } else if progress < 0.66 {
        ShapeKind::Octahedron
    } else {
        ShapeKind::Dodecahedron
    }
}

/// The large polyhedron on the right of the hero section.
///
/// Rotation eases toward a time and pointer driven target; the shape swaps
/// as the page scrolls through each third.
pub struct FloatingGeometry {
    icosahedron: Wireframe,
    octahedron: Wireframe,
    dodecahedron: Wireframe,
    rotation: Vec3,
    shape: ShapeKind,
    fill_opacity: f32,
    color: Color,
}

impl FloatingGeometry {
    pub fn new(color: Color) -> Self {
        Self {
            icosahedron: Wireframe::icosahedron(2.5, 1),
            octahedron: Wireframe::octahedron(2.5),
            dodecahedron: Wireframe::dodecahedron(2.0),
            rotation: Vec3::ZERO,
            shape: ShapeKind::Icosahedron,
            fill_opacity: 0.0,
            color,
        }
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn mesh(&self) -> &Wireframe {
        match self.shape {
            ShapeKind::Icosahedron => &self.icosahedron,
            ShapeKind::Octahedron => &self.octahedron,
            ShapeKind::Dodecahedron => &self.dodecahedron,
        }
    }

    /// Opacity of the translucent body behind the edges.
    pub fn fill_opacity(&self) -> f32 {
        self.fill_opacity
    }
}

impl Default for FloatingGeometry {
    fn default() -> Self {
        Self::new(ACCENT)
    }
}

impl Animatable for FloatingGeometry {
    fn label(&self) -> &'static str {
        "floating-geometry"
    }

    fn update(&mut self, t: f32, signals: &Signals) -> ObjectState {
        let p = signals.scroll_progress;
        let pointer = signals.pointer_normalized;

        let shape = shape_for_progress(p);
        if shape != self.shape {
            log::debug!("Floating geometry switched to {:?} at progress {:.3}", shape, p);
            self.shape = shape;
        }

        let target_x = (t * 0.3).sin() * 0.2 + pointer.y * 0.5;
        let target_y = t * 0.15 + pointer.x * 0.5;
        self.rotation.x = lerp(self.rotation.x, target_x, ROTATION_SMOOTHING);
        self.rotation.y = lerp(self.rotation.y, target_y, ROTATION_SMOOTHING);
        self.fill_opacity = 0.05 + p * 0.05;

        ObjectState {
            rotation: self.rotation,
            position: GROUP_OFFSET + Vec3::new(0.0, (t * 0.5).sin() * 0.3, -2.0 + p * 3.0),
            scale: 1.0 + p * 0.3,
            opacity: 0.2 + p * 0.2,
        }
    }

    fn draw(&self, state: &ObjectState, projector: &Projector, surface: &mut dyn DrawSurface) {
        let model = state.model_matrix();

        // The body reads as a faint halo of heavier strokes under the edges
        draw_wireframe(
            self.mesh(),
            model,
            Stroke::Pixels(EDGE_WIDTH * 3.0),
            self.color.with_alpha(self.fill_opacity),
            projector,
            surface,
        );
        draw_wireframe(
            self.mesh(),
            model,
            Stroke::Pixels(EDGE_WIDTH),
            self.color.with_alpha(state.opacity),
            projector,
            surface,
        );
    }
}
