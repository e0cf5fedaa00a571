//! Page backdrop runtime
//!
//! Owns the signal source, the frame scheduler and one handle per mounted
//! layer. Host events go through [`Backdrop::handle`]; each display refresh
//! calls [`Backdrop::frame`] and draws the returned list.

use crate::config::BackdropConfig;
use backdrop_core::{
    DrawList, FrameHandle, FrameScheduler, HostEvent, Layer, SignalSource, Signals, Viewport,
};
use field_simulation::FieldLayer;
use scene_composer::{CursorGlow, SceneComposer, ScrollIndicator};
use std::time::Instant;

pub struct Backdrop {
    source: SignalSource,
    scheduler: FrameScheduler,
    handles: Vec<FrameHandle>,
    list: DrawList,
    start: Instant,
    config: BackdropConfig,
}

impl Backdrop {
    /// Mount every layer, back to front: scene, particle field, cursor glow,
    /// scroll indicator. A layer that fails to mount is skipped.
    pub fn new(config: &BackdropConfig, viewport: Viewport) -> Self {
        let source = SignalSource::new(viewport, config.document_height(viewport.height));
        let mut backdrop = Self {
            source,
            scheduler: FrameScheduler::new(),
            handles: Vec::new(),
            list: DrawList::new(viewport),
            start: Instant::now(),
            config: config.clone(),
        };

        backdrop.mount(SceneComposer::with_default_scene(config.scene, viewport));
        backdrop.mount(match config.seed {
            Some(seed) => FieldLayer::with_seed(config.field, seed),
            None => FieldLayer::new(config.field),
        });
        backdrop.mount(CursorGlow::default());
        backdrop.mount(ScrollIndicator::default());

        log::info!(
            "Backdrop ready: {} layers, document height {}px",
            backdrop.scheduler.layer_count(),
            backdrop.source.snapshot().document_height
        );
        backdrop
    }

    fn mount<L: Layer + 'static>(&mut self, layer: L) {
        let label = layer.label();
        match self.scheduler.mount(layer, &self.source.snapshot()) {
            Ok(handle) => self.handles.push(handle),
            Err(e) => log::warn!("Skipping layer '{}': {}", label, e),
        }
    }

    /// Apply a host event to the signals, then forward it to every layer.
    pub fn handle(&mut self, event: HostEvent) {
        match event {
            // The simulated document keeps the same number of pages, so its
            // height changes together with the viewport
            HostEvent::Resized(viewport) => {
                self.list.resize(viewport);
                self.source
                    .resize(viewport, self.config.document_height(viewport.height));
            }
            _ => self.source.apply(&event),
        }
        self.scheduler.dispatch(&event, &self.source.snapshot());
    }

    /// Run one frame of every layer into a fresh draw list.
    pub fn frame(&mut self) -> &DrawList {
        self.list.clear();
        let elapsed = self.start.elapsed().as_secs_f32();
        self.scheduler
            .run_frame(elapsed, &self.source.snapshot(), &mut self.list);
        &self.list
    }

    pub fn signals(&self) -> Signals {
        self.source.snapshot()
    }

    pub fn max_scroll(&self) -> u32 {
        self.source.max_scroll()
    }

    pub fn layer_count(&self) -> usize {
        self.scheduler.layer_count()
    }

    /// Cancel every layer and stop the scheduler.
    pub fn shutdown(&mut self) {
        for handle in self.handles.drain(..) {
            handle.cancel();
        }
        self.scheduler.shutdown();
        log::info!("Backdrop shut down after {} frames", self.scheduler.frame_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backdrop() -> Backdrop {
        let config = BackdropConfig {
            seed: Some(9),
            ..Default::default()
        };
        Backdrop::new(&config, Viewport::new(1200, 800))
    }

    #[test]
    fn test_mounts_all_layers() {
        assert_eq!(backdrop().layer_count(), 4);
    }

    #[test]
    fn test_resize_keeps_page_count() {
        let mut backdrop = backdrop();
        assert_eq!(backdrop.signals().document_height, 4000);
        backdrop.handle(HostEvent::Resized(Viewport::new(600, 400)));
        assert_eq!(backdrop.signals().document_height, 2000);
        assert_eq!(backdrop.max_scroll(), 1600);
    }

    #[test]
    fn test_growing_window_at_bottom_keeps_progress() {
        let mut backdrop = backdrop();
        backdrop.handle(HostEvent::Scrolled { offset: u32::MAX });
        assert_eq!(backdrop.signals().scroll_progress, 1.0);

        backdrop.handle(HostEvent::Resized(Viewport::new(1200, 1600)));
        let signals = backdrop.signals();
        assert_eq!(signals.document_height, 8000);
        assert_eq!(signals.scroll_offset, 6400);
        assert_eq!(signals.scroll_progress, 1.0);
    }

    #[test]
    fn test_frame_draws_into_fresh_list() {
        let mut backdrop = backdrop();
        let first = backdrop.frame().len();
        assert!(first > 0);
        // The list is cleared between frames rather than accumulating
        let second = backdrop.frame().len();
        assert!(second < first * 2);
    }

    #[test]
    fn test_shutdown_stops_drawing() {
        let mut backdrop = backdrop();
        backdrop.shutdown();
        assert_eq!(backdrop.layer_count(), 0);
        assert!(backdrop.frame().is_empty());
    }
}
