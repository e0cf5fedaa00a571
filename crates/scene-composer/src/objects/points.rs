use crate::animate::{draw_spheres, Animatable, ObjectState};
use crate::camera::Projector;
use backdrop_core::{Color, DrawSurface, Signals, ACCENT};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const COUNT: usize = 800;
const EXTENT: f32 = 20.0;

/// Cloud of small points filling the scene volume.
///
/// The cloud spreads out as the page scrolls and every point wobbles on its
/// own phase.
pub struct PointCloud {
    origins: Vec<Vec3>,
    positions: Vec<Vec3>,
    size: f32,
    color: Color,
}

impl PointCloud {
    pub fn new(color: Color) -> Self {
        Self::with_rng(color, &mut StdRng::from_rng(&mut rand::rng()))
    }

    pub fn with_seed(color: Color, seed: u64) -> Self {
        Self::with_rng(color, &mut StdRng::seed_from_u64(seed))
    }

    fn with_rng(color: Color, rng: &mut StdRng) -> Self {
        let origins: Vec<Vec3> = (0..COUNT)
            .map(|_| {
                Vec3::new(
                    (rng.random::<f32>() - 0.5) * EXTENT,
                    (rng.random::<f32>() - 0.5) * EXTENT,
                    (rng.random::<f32>() - 0.5) * EXTENT,
                )
            })
            .collect();
        Self {
            positions: origins.clone(),
            origins,
            size: 0.04,
            color,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn origins(&self) -> &[Vec3] {
        &self.origins
    }
}

impl Animatable for PointCloud {
    fn label(&self) -> &'static str {
        "point-cloud"
    }

    fn update(&mut self, t: f32, signals: &Signals) -> ObjectState {
        let p = signals.scroll_progress;
        let pointer = signals.pointer_normalized;
        let expansion = 1.0 + p * 0.5;

        for (i, (position, origin)) in self.positions.iter_mut().zip(&self.origins).enumerate() {
            let i = i as f32;
            *position = Vec3::new(
                origin.x * expansion + (t + i).sin() * 0.1,
                origin.y * expansion + (t + i * 0.5).cos() * 0.1,
                origin.z * expansion,
            );
        }
        self.size = 0.04 + p * 0.02;

        ObjectState {
            rotation: Vec3::new(t * 0.01 + pointer.y * 0.2, t * 0.02 + pointer.x * 0.2, 0.0),
            position: Vec3::ZERO,
            scale: 1.0,
            opacity: 0.4 + p * 0.2,
        }
    }

    fn draw(&self, state: &ObjectState, projector: &Projector, surface: &mut dyn DrawSurface) {
        // Point size is a diameter in world units
        draw_spheres(
            self.positions.iter().copied(),
            state.model_matrix(),
            self.size * 0.5,
            self.color.with_alpha(state.opacity),
            projector,
            surface,
        );
    }
}

impl Default for PointCloud {
    fn default() -> Self {
        Self::new(ACCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origins_fill_the_cube() {
        let cloud = PointCloud::with_seed(ACCENT, 11);
        assert_eq!(cloud.origins().len(), 800);
        for o in cloud.origins() {
            assert!(o.abs().max_element() <= 10.0);
        }
    }

    #[test]
    fn test_cloud_expands_with_scroll() {
        let mut cloud = PointCloud::with_seed(ACCENT, 11);
        let signals = Signals {
            scroll_progress: 1.0,
            ..Default::default()
        };
        let state = cloud.update(0.0, &signals);
        assert!((state.opacity - 0.6).abs() < 1e-6);

        for (i, (p, o)) in cloud.positions().iter().zip(cloud.origins()).enumerate() {
            let i = i as f32;
            assert!((p.x - (o.x * 1.5 + i.sin() * 0.1)).abs() < 1e-4);
            assert!((p.y - (o.y * 1.5 + (i * 0.5).cos() * 0.1)).abs() < 1e-4);
            assert!((p.z - o.z * 1.5).abs() < 1e-5);
        }
    }
}
