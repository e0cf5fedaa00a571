//! Scheduler layer for the particle field

use crate::{FieldParams, ParticleField};
use backdrop_core::{DrawSurface, Faded, FrameInput, HostEvent, Layer, Result, Signals};

pub struct FieldLayer {
    field: ParticleField,
}

impl FieldLayer {
    pub fn new(params: FieldParams) -> Self {
        Self {
            field: ParticleField::new(params),
        }
    }

    pub fn with_seed(params: FieldParams, seed: u64) -> Self {
        Self {
            field: ParticleField::with_seed(params, seed),
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}

impl Layer for FieldLayer {
    fn label(&self) -> &'static str {
        "particle-field"
    }

    fn mount(&mut self, signals: &Signals) -> Result<()> {
        if signals.viewport.is_empty() {
            log::warn!("Particle field mounted on a zero-sized surface; nothing to draw until resize");
        }
        self.field.resize(signals.viewport);
        Ok(())
    }

    fn on_event(&mut self, event: &HostEvent, _signals: &Signals) {
        if let HostEvent::Resized(viewport) = event {
            self.field.resize(*viewport);
        }
    }

    fn frame(&mut self, input: &FrameInput<'_>, surface: &mut dyn DrawSurface) {
        if self.field.is_empty() {
            return;
        }

        let pointer = input.signals.pointer;
        self.field.step(pointer);

        let opacity = self.field.params().field_opacity;
        let mut faded = Faded::new(surface, opacity);
        self.field.draw(&mut faded, pointer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_core::{DrawList, FrameScheduler, SignalSource, Viewport};

    #[test]
    fn test_layer_follows_resize_events() {
        let mut source = SignalSource::new(Viewport::new(800, 600), 3000);
        let mut scheduler = FrameScheduler::new();
        let _handle = scheduler
            .mount(
                FieldLayer::with_seed(FieldParams::default(), 1),
                &source.snapshot(),
            )
            .unwrap();

        let resize = HostEvent::Resized(Viewport::new(1500, 1000));
        source.apply(&resize);
        scheduler.dispatch(&resize, &source.snapshot());

        let mut list = DrawList::new(Viewport::new(1500, 1000));
        scheduler.run_frame(0.0, &source.snapshot(), &mut list);
        assert_eq!(list.circles().count(), 100);
    }

    #[test]
    fn test_layer_is_drawn_at_field_opacity() {
        let signals = SignalSource::new(Viewport::new(300, 300), 300).snapshot();
        let mut layer = FieldLayer::with_seed(FieldParams::default(), 3);
        layer.mount(&signals).unwrap();

        let mut list = DrawList::new(signals.viewport);
        let input = FrameInput {
            elapsed: 0.0,
            frame: 0,
            signals: &signals,
        };
        layer.frame(&input, &mut list);

        let opacities: Vec<f32> = layer.field().particles().iter().map(|p| p.opacity).collect();
        let drawn: Vec<f32> = list.circles().map(|c| c.2.a).collect();
        assert_eq!(drawn.len(), opacities.len());
        for (drawn, original) in drawn.iter().zip(opacities) {
            assert!((drawn - original * 0.6).abs() < 1e-6);
        }
    }

    #[test]
    fn test_zero_sized_mount_waits_for_resize() {
        let mut source = SignalSource::new(Viewport::new(0, 0), 0);
        let mut layer = FieldLayer::with_seed(FieldParams::default(), 3);
        assert!(layer.mount(&source.snapshot()).is_ok());

        let signals = source.snapshot();
        let mut list = DrawList::new(signals.viewport);
        let input = FrameInput {
            elapsed: 0.0,
            frame: 0,
            signals: &signals,
        };
        layer.frame(&input, &mut list);
        assert!(list.is_empty());

        let resize = HostEvent::Resized(Viewport::new(300, 300));
        source.apply(&resize);
        layer.on_event(&resize, &source.snapshot());
        let signals = source.snapshot();
        let mut list = DrawList::new(signals.viewport);
        let input = FrameInput {
            elapsed: 0.016,
            frame: 1,
            signals: &signals,
        };
        layer.frame(&input, &mut list);
        // floor(300 * 300 / 15000)
        assert_eq!(list.circles().count(), 6);
    }
}
