//! Scroll and pointer signals
//!
//! The single place where raw scroll offsets and pointer coordinates are
//! normalized. Layers never read host state directly; they receive a
//! [`Signals`] snapshot every frame.

use crate::events::HostEvent;
use glam::Vec2;

/// Viewport size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) * 0.5
    }

    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Read-only snapshot of the shared signals for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    /// Scroll offset in pixels, clamped to the scrollable range.
    pub scroll_offset: u32,
    /// Scroll offset normalized to [0, 1]. Zero when the document cannot scroll.
    pub scroll_progress: f32,
    /// Pointer relative to the viewport center in [-1, 1], +y up.
    pub pointer_normalized: Vec2,
    /// Last pointer position in pixels, `None` until the pointer has moved.
    pub pointer: Option<Vec2>,
    pub pointer_inside: bool,
    pub viewport: Viewport,
    pub document_height: u32,
}

impl Default for Signals {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            scroll_progress: 0.0,
            pointer_normalized: Vec2::ZERO,
            pointer: None,
            pointer_inside: false,
            viewport: Viewport::default(),
            document_height: 0,
        }
    }
}

/// Normalized scroll progress.
///
/// `offset / (document_height - viewport_height)`, or 0 when the document is
/// not taller than the viewport.
pub fn scroll_progress(offset: f32, document_height: f32, viewport_height: f32) -> f32 {
    let max_scroll = document_height - viewport_height;
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (offset / max_scroll).clamp(0.0, 1.0)
}

/// Map a pixel position to [-1, 1] on both axes with +y pointing up.
pub fn normalize_pointer(position: Vec2, viewport: Viewport) -> Vec2 {
    if viewport.is_empty() {
        return Vec2::ZERO;
    }
    let x = (position.x / viewport.width as f32) * 2.0 - 1.0;
    let y = -((position.y / viewport.height as f32) * 2.0 - 1.0);
    Vec2::new(x, y)
}

/// Owns the raw host state and recomputes the snapshot on every event.
pub struct SignalSource {
    viewport: Viewport,
    document_height: u32,
    scroll_offset: u32,
    pointer: Option<Vec2>,
    pointer_inside: bool,
    current: Signals,
}

impl SignalSource {
    pub fn new(viewport: Viewport, document_height: u32) -> Self {
        let mut source = Self {
            viewport,
            document_height,
            scroll_offset: 0,
            pointer: None,
            pointer_inside: false,
            current: Signals::default(),
        };
        source.recompute();
        source
    }

    /// Apply a host event. The snapshot is fully recomputed before this returns.
    pub fn apply(&mut self, event: &HostEvent) {
        match *event {
            HostEvent::PointerMoved { x, y } => {
                self.pointer = Some(Vec2::new(x, y));
                self.pointer_inside = true;
            }
            HostEvent::PointerEntered => self.pointer_inside = true,
            HostEvent::PointerLeft => self.pointer_inside = false,
            HostEvent::Scrolled { offset } => {
                self.scroll_offset = offset.min(self.max_scroll());
            }
            HostEvent::ScrolledBy { delta } => {
                let offset = (self.scroll_offset as f32 + delta).round();
                self.scroll_offset = (offset.max(0.0) as u32).min(self.max_scroll());
            }
            HostEvent::Resized(viewport) => self.resize(viewport, self.document_height),
            HostEvent::DocumentResized { height } => self.resize(self.viewport, height),
        }
        self.recompute();
    }

    /// Change the viewport and document height together.
    ///
    /// The offset is rescaled so scroll progress survives the change. Applying
    /// both at once keeps a taller viewport from collapsing the scrollable
    /// range against the old document height.
    pub fn resize(&mut self, viewport: Viewport, document_height: u32) {
        let progress = self.current.scroll_progress;
        self.viewport = viewport;
        self.document_height = document_height;
        let max_scroll = self.max_scroll();
        self.scroll_offset = ((progress * max_scroll as f32).round() as u32).min(max_scroll);
        self.recompute();
    }

    pub fn snapshot(&self) -> Signals {
        self.current
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Largest reachable scroll offset in pixels.
    pub fn max_scroll(&self) -> u32 {
        self.document_height.saturating_sub(self.viewport.height)
    }

    fn recompute(&mut self) {
        let pointer_normalized = self
            .pointer
            .map(|p| normalize_pointer(p, self.viewport))
            .unwrap_or(Vec2::ZERO);

        self.current = Signals {
            scroll_offset: self.scroll_offset,
            scroll_progress: scroll_progress(
                self.scroll_offset as f32,
                self.document_height as f32,
                self.viewport.height as f32,
            ),
            pointer_normalized,
            pointer: self.pointer,
            pointer_inside: self.pointer_inside,
            viewport: self.viewport,
            document_height: self.document_height,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn source() -> SignalSource {
        SignalSource::new(Viewport::new(800, 600), 3000)
    }

    #[test]
    fn test_pointer_center_maps_to_origin() {
        let n = normalize_pointer(Vec2::new(400.0, 300.0), Viewport::new(800, 600));
        assert!(n.abs_diff_eq(Vec2::ZERO, EPS));
    }

    #[test]
    fn test_pointer_corners() {
        let viewport = Viewport::new(800, 600);
        let top_left = normalize_pointer(Vec2::new(0.0, 0.0), viewport);
        let bottom_right = normalize_pointer(Vec2::new(800.0, 600.0), viewport);
        assert!(top_left.abs_diff_eq(Vec2::new(-1.0, 1.0), EPS));
        assert!(bottom_right.abs_diff_eq(Vec2::new(1.0, -1.0), EPS));
    }

    #[test]
    fn test_pointer_on_empty_viewport() {
        let n = normalize_pointer(Vec2::new(10.0, 10.0), Viewport::new(0, 0));
        assert_eq!(n, Vec2::ZERO);
    }

    #[test]
    fn test_scroll_progress_not_scrollable() {
        for offset in [0.0, 1.0, 250.0, 10_000.0] {
            assert_eq!(scroll_progress(offset, 600.0, 600.0), 0.0);
            assert_eq!(scroll_progress(offset, 400.0, 600.0), 0.0);
        }
    }

    #[test]
    fn test_scroll_progress_range() {
        assert_eq!(scroll_progress(0.0, 1600.0, 600.0), 0.0);
        assert!((scroll_progress(500.0, 1600.0, 600.0) - 0.5).abs() < EPS);
        assert_eq!(scroll_progress(1000.0, 1600.0, 600.0), 1.0);
    }

    #[test]
    fn test_source_scroll_is_clamped() {
        let mut source = source();
        source.apply(&HostEvent::Scrolled { offset: 100_000 });
        let s = source.snapshot();
        assert_eq!(s.scroll_offset, 2400);
        assert_eq!(s.scroll_progress, 1.0);

        source.apply(&HostEvent::ScrolledBy { delta: -5000.0 });
        assert_eq!(source.snapshot().scroll_offset, 0);
        assert_eq!(source.snapshot().scroll_progress, 0.0);
    }

    #[test]
    fn test_source_relative_scroll() {
        let mut source = source();
        source.apply(&HostEvent::ScrolledBy { delta: 600.0 });
        source.apply(&HostEvent::ScrolledBy { delta: 600.0 });
        let s = source.snapshot();
        assert_eq!(s.scroll_offset, 1200);
        assert!((s.scroll_progress - 0.5).abs() < EPS);
    }

    #[test]
    fn test_source_non_scrollable_document() {
        let mut source = SignalSource::new(Viewport::new(800, 600), 600);
        source.apply(&HostEvent::Scrolled { offset: 300 });
        assert_eq!(source.snapshot().scroll_progress, 0.0);
        assert_eq!(source.snapshot().scroll_offset, 0);
    }

    #[test]
    fn test_source_pointer_tracking() {
        let mut source = source();
        assert_eq!(source.snapshot().pointer, None);
        assert!(!source.snapshot().pointer_inside);

        source.apply(&HostEvent::PointerMoved { x: 800.0, y: 0.0 });
        let s = source.snapshot();
        assert_eq!(s.pointer, Some(Vec2::new(800.0, 0.0)));
        assert!(s.pointer_normalized.abs_diff_eq(Vec2::new(1.0, 1.0), EPS));
        assert!(s.pointer_inside);

        source.apply(&HostEvent::PointerLeft);
        assert!(!source.snapshot().pointer_inside);
    }

    #[test]
    fn test_resize_renormalizes_pointer() {
        let mut source = source();
        source.apply(&HostEvent::PointerMoved { x: 400.0, y: 300.0 });
        source.apply(&HostEvent::Resized(Viewport::new(1600, 1200)));
        let s = source.snapshot();
        assert!(s.pointer_normalized.abs_diff_eq(Vec2::new(-0.5, 0.5), EPS));
        assert_eq!(s.viewport, Viewport::new(1600, 1200));
    }

    #[test]
    fn test_document_shrink_keeps_progress() {
        let mut source = source();
        source.apply(&HostEvent::Scrolled { offset: 2000 });
        source.apply(&HostEvent::DocumentResized { height: 1000 });
        let s = source.snapshot();
        assert_eq!(s.scroll_offset, 333);
        assert!((s.scroll_progress - 333.0 / 400.0).abs() < EPS);
    }

    #[test]
    fn test_taller_viewport_at_bottom_stays_at_bottom() {
        let mut source = SignalSource::new(Viewport::new(1200, 800), 4000);
        source.apply(&HostEvent::Scrolled { offset: u32::MAX });
        assert_eq!(source.snapshot().scroll_progress, 1.0);

        source.resize(Viewport::new(1200, 1600), 8000);
        let s = source.snapshot();
        assert_eq!(s.scroll_offset, 6400);
        assert_eq!(s.scroll_progress, 1.0);
        assert_eq!(s.document_height, 8000);
    }

    #[test]
    fn test_resize_midway_keeps_progress() {
        let mut source = source();
        source.apply(&HostEvent::Scrolled { offset: 600 });
        source.apply(&HostEvent::Resized(Viewport::new(800, 1200)));
        let s = source.snapshot();
        assert_eq!(s.scroll_offset, 450);
        assert!((s.scroll_progress - 0.25).abs() < EPS);
    }
}
