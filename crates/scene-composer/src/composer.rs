//! Scene composer
//!
//! Owns the camera and every decorative object, and drives them from one
//! frame layer.

use crate::animate::Animatable;
use crate::camera::Camera;
use crate::objects::{
    FloatingBlock, FloatingGeometry, FloatingTorus, GridPlane, Helix, OrbitalRing, PointCloud,
};
use backdrop_core::{
    Color, DrawSurface, FrameInput, HostEvent, Layer, Result, Signals, Viewport, ACCENT,
    ACCENT_LIGHT,
};

/// Scene parameters for runtime tuning
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneParams {
    /// Color of every shape
    pub accent: Color,
    /// Second helix strand
    pub highlight: Color,
    /// Fixed layout for the point cloud
    pub seed: Option<u64>,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            accent: ACCENT,
            highlight: ACCENT_LIGHT,
            seed: None,
        }
    }
}

pub struct SceneComposer {
    camera: Camera,
    objects: Vec<Box<dyn Animatable>>,
    drawn: usize,
}

impl SceneComposer {
    /// An empty scene.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            camera: Camera::new(viewport),
            objects: Vec::new(),
            drawn: 0,
        }
    }

    /// The full backdrop scene, drawn in the order the page declares it.
    pub fn with_default_scene(params: SceneParams, viewport: Viewport) -> Self {
        let mut scene = Self::new(viewport);
        let accent = params.accent;

        scene.push(FloatingGeometry::new(accent));
        scene.push(FloatingTorus::new(accent));
        scene.push(match params.seed {
            Some(seed) => PointCloud::with_seed(accent, seed),
            None => PointCloud::new(accent),
        });
        scene.push(GridPlane::new(accent));
        for ring in OrbitalRing::defaults(accent) {
            scene.push(ring);
        }
        scene.push(Helix::new([accent, params.highlight]));
        for block in FloatingBlock::defaults(accent) {
            scene.push(block);
        }
        scene
    }

    pub fn push<A: Animatable + 'static>(&mut self, object: A) {
        self.objects.push(Box::new(object));
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.objects.iter().map(|o| o.label())
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Objects drawn on the last frame.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Update every object, then draw the ones that are not fully transparent.
    pub fn render(&mut self, elapsed: f32, signals: &Signals, surface: &mut dyn DrawSurface) {
        let projector = self.camera.projector(signals.viewport);

        self.drawn = 0;
        for object in &mut self.objects {
            let state = object.update(elapsed, signals);
            if !state.is_visible() {
                continue;
            }
            object.draw(&state, &projector, surface);
            self.drawn += 1;
        }
    }
}

impl Layer for SceneComposer {
    fn label(&self) -> &'static str {
        "scene"
    }

    fn mount(&mut self, signals: &Signals) -> Result<()> {
        self.camera.resize(signals.viewport);
        log::info!("Scene mounted with {} objects", self.objects.len());
        Ok(())
    }

    fn on_event(&mut self, event: &HostEvent, _signals: &Signals) {
        if let HostEvent::Resized(viewport) = event {
            self.camera.resize(*viewport);
        }
    }

    fn frame(&mut self, input: &FrameInput<'_>, surface: &mut dyn DrawSurface) {
        if input.signals.viewport.is_empty() {
            return;
        }
        self.render(input.elapsed, input.signals, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_core::DrawList;

    fn signals(progress: f32) -> Signals {
        Signals {
            scroll_progress: progress,
            viewport: Viewport::new(1280, 720),
            ..Default::default()
        }
    }

    fn scene() -> SceneComposer {
        let params = SceneParams {
            seed: Some(5),
            ..Default::default()
        };
        SceneComposer::with_default_scene(params, Viewport::new(1280, 720))
    }

    #[test]
    fn test_default_scene_contents() {
        let scene = scene();
        assert_eq!(scene.len(), 11);
        let labels: Vec<_> = scene.labels().collect();
        assert_eq!(labels.iter().filter(|l| **l == "orbital-ring").count(), 3);
        assert_eq!(labels.iter().filter(|l| **l == "floating-block").count(), 3);
        assert_eq!(labels[0], "floating-geometry");
    }

    #[test]
    fn test_hidden_objects_are_skipped() {
        let mut scene = scene();
        let mut list = DrawList::new(Viewport::new(1280, 720));

        scene.render(0.0, &signals(0.0), &mut list);
        // Helix and the three blocks wait for scroll
        assert_eq!(scene.drawn(), 7);

        scene.render(0.0, &signals(0.15), &mut list);
        assert_eq!(scene.drawn(), 8);

        scene.render(0.0, &signals(0.5), &mut list);
        assert_eq!(scene.drawn(), 11);
    }

    #[test]
    fn test_zero_viewport_draws_nothing() {
        let mut scene = scene();
        let signals = Signals::default();
        let mut list = DrawList::new(signals.viewport);
        let input = FrameInput {
            elapsed: 1.0,
            frame: 0,
            signals: &signals,
        };
        scene.frame(&input, &mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_camera_follows_resize() {
        let mut scene = scene();
        let s = signals(0.0);
        scene.on_event(&HostEvent::Resized(Viewport::new(500, 1000)), &s);
        assert!((scene.camera().aspect - 0.5).abs() < 1e-6);
    }
}
