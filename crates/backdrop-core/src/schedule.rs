//! Frame scheduler
//!
//! Every visual component is a [`Layer`]: it listens to host events and gets
//! one `frame` call per display refresh. Mounting a layer returns a
//! [`FrameHandle`]; dropping or cancelling the handle deregisters both the
//! listener and the frame task before the next dispatch, and runs the layer's
//! `teardown` exactly once.

use crate::draw::DrawSurface;
use crate::error::{BackdropError, Result};
use crate::events::HostEvent;
use crate::signals::Signals;
use std::cell::Cell;
use std::rc::Rc;

/// Per-frame input shared by all layers.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    /// Seconds since the scheduler started.
    pub elapsed: f32,
    /// Index of this frame, starting at 0.
    pub frame: u64,
    pub signals: &'a Signals,
}

/// A mounted visual component.
pub trait Layer {
    fn label(&self) -> &'static str;

    /// Called once when mounted. An error aborts the mount and the layer is dropped.
    fn mount(&mut self, _signals: &Signals) -> Result<()> {
        Ok(())
    }

    /// Called for every host event, after the signal source has applied it.
    fn on_event(&mut self, _event: &HostEvent, _signals: &Signals) {}

    fn frame(&mut self, input: &FrameInput<'_>, surface: &mut dyn DrawSurface);

    fn teardown(&mut self) {}
}

/// Cancellation handle for a mounted layer.
///
/// The layer stays registered for as long as the handle is alive.
#[derive(Debug)]
pub struct FrameHandle {
    alive: Rc<Cell<bool>>,
}

impl FrameHandle {
    pub fn is_active(&self) -> bool {
        self.alive.get()
    }

    /// Deregister the layer. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

struct Slot {
    id: u64,
    alive: Rc<Cell<bool>>,
    layer: Box<dyn Layer>,
}

#[derive(Default)]
pub struct FrameScheduler {
    slots: Vec<Slot>,
    next_id: u64,
    frame: u64,
    shut_down: bool,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount<L: Layer + 'static>(&mut self, mut layer: L, signals: &Signals) -> Result<FrameHandle> {
        if self.shut_down {
            return Err(BackdropError::SchedulerUnavailable);
        }

        layer.mount(signals)?;

        let id = self.next_id;
        self.next_id += 1;
        let alive = Rc::new(Cell::new(true));

        log::info!("Mounted layer '{}' (id {})", layer.label(), id);
        self.slots.push(Slot {
            id,
            alive: alive.clone(),
            layer: Box::new(layer),
        });

        Ok(FrameHandle { alive })
    }

    /// Forward a host event to every live layer.
    pub fn dispatch(&mut self, event: &HostEvent, signals: &Signals) {
        self.prune();
        for slot in &mut self.slots {
            slot.layer.on_event(event, signals);
        }
    }

    /// Run one frame of every live layer, in mount order.
    pub fn run_frame(&mut self, elapsed: f32, signals: &Signals, surface: &mut dyn DrawSurface) {
        self.prune();
        let input = FrameInput {
            elapsed,
            frame: self.frame,
            signals,
        };
        for slot in &mut self.slots {
            slot.layer.frame(&input, surface);
        }
        self.frame += 1;
    }

    pub fn layer_count(&self) -> usize {
        self.slots.iter().filter(|s| s.alive.get()).count()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Tear down every layer and refuse further mounts.
    pub fn shutdown(&mut self) {
        for slot in &self.slots {
            slot.alive.set(false);
        }
        self.prune();
        self.shut_down = true;
    }

    fn prune(&mut self) {
        let mut i = 0;
        while i < self.slots.len() {
            if self.slots[i].alive.get() {
                i += 1;
                continue;
            }
            let mut slot = self.slots.remove(i);
            slot.layer.teardown();
            log::debug!("Unmounted layer '{}' (id {})", slot.layer.label(), slot.id);
        }
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        if !self.shut_down {
            self.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawList;
    use crate::signals::Viewport;

    #[derive(Default)]
    struct Counters {
        frames: Cell<u32>,
        events: Cell<u32>,
        teardowns: Cell<u32>,
    }

    struct CountingLayer {
        counters: Rc<Counters>,
        fail_mount: bool,
    }

    impl CountingLayer {
        fn new(counters: &Rc<Counters>) -> Self {
            Self {
                counters: counters.clone(),
                fail_mount: false,
            }
        }
    }

    impl Layer for CountingLayer {
        fn label(&self) -> &'static str {
            "counting"
        }

        fn mount(&mut self, _signals: &Signals) -> Result<()> {
            if self.fail_mount {
                return Err(BackdropError::SurfaceUnavailable("test".into()));
            }
            Ok(())
        }

        fn on_event(&mut self, _event: &HostEvent, _signals: &Signals) {
            self.counters.events.set(self.counters.events.get() + 1);
        }

        fn frame(&mut self, _input: &FrameInput<'_>, _surface: &mut dyn DrawSurface) {
            self.counters.frames.set(self.counters.frames.get() + 1);
        }

        fn teardown(&mut self) {
            self.counters.teardowns.set(self.counters.teardowns.get() + 1);
        }
    }

    #[test]
    fn test_mounted_layer_runs_every_frame() {
        let counters = Rc::new(Counters::default());
        let mut scheduler = FrameScheduler::new();
        let signals = Signals::default();
        let mut surface = DrawList::new(Viewport::new(10, 10));

        let handle = scheduler
            .mount(CountingLayer::new(&counters), &signals)
            .unwrap();
        assert!(handle.is_active());

        for i in 0..3 {
            scheduler.run_frame(i as f32, &signals, &mut surface);
        }
        scheduler.dispatch(&HostEvent::PointerLeft, &signals);

        assert_eq!(counters.frames.get(), 3);
        assert_eq!(counters.events.get(), 1);
        assert_eq!(scheduler.frame_count(), 3);
    }

    #[test]
    fn test_dropping_handle_stops_frames_and_events() {
        let counters = Rc::new(Counters::default());
        let mut scheduler = FrameScheduler::new();
        let signals = Signals::default();
        let mut surface = DrawList::new(Viewport::new(10, 10));

        let handle = scheduler
            .mount(CountingLayer::new(&counters), &signals)
            .unwrap();
        scheduler.run_frame(0.0, &signals, &mut surface);
        drop(handle);

        scheduler.run_frame(1.0, &signals, &mut surface);
        scheduler.dispatch(&HostEvent::PointerLeft, &signals);

        assert_eq!(counters.frames.get(), 1);
        assert_eq!(counters.events.get(), 0);
        assert_eq!(counters.teardowns.get(), 1);
        assert_eq!(scheduler.layer_count(), 0);
    }

    #[test]
    fn test_cancel_tears_down_once() {
        let counters = Rc::new(Counters::default());
        let mut scheduler = FrameScheduler::new();
        let signals = Signals::default();
        let mut surface = DrawList::new(Viewport::new(10, 10));

        let handle = scheduler
            .mount(CountingLayer::new(&counters), &signals)
            .unwrap();
        handle.cancel();
        scheduler.run_frame(0.0, &signals, &mut surface);
        scheduler.shutdown();

        assert_eq!(counters.frames.get(), 0);
        assert_eq!(counters.teardowns.get(), 1);
    }

    #[test]
    fn test_failed_mount_is_not_registered() {
        let counters = Rc::new(Counters::default());
        let mut scheduler = FrameScheduler::new();
        let signals = Signals::default();

        let mut layer = CountingLayer::new(&counters);
        layer.fail_mount = true;
        assert!(scheduler.mount(layer, &signals).is_err());
        assert_eq!(scheduler.layer_count(), 0);
    }

    #[test]
    fn test_shutdown_refuses_mounts() {
        let counters = Rc::new(Counters::default());
        let mut scheduler = FrameScheduler::new();
        let signals = Signals::default();

        let _handle = scheduler
            .mount(CountingLayer::new(&counters), &signals)
            .unwrap();
        scheduler.shutdown();
        assert_eq!(counters.teardowns.get(), 1);

        let result = scheduler.mount(CountingLayer::new(&counters), &signals);
        assert!(matches!(result, Err(BackdropError::SchedulerUnavailable)));
    }
}
