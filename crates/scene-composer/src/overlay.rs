//! Screen-space overlays drawn above the scene: the cursor glow and the
//! scroll progress bar.

use backdrop_core::{Color, DrawSurface, FrameInput, HostEvent, Layer, Signals, ACCENT, MUTED};
use glam::Vec2;

const GLOW_RADIUS: f32 = 150.0;
const GLOW_RINGS: usize = 12;
const GLOW_OPACITY: f32 = 0.15;
const DOT_RADIUS: f32 = 4.0;
const BAR_HEIGHT: f32 = 2.0;

/// Soft glow and a small dot following the pointer.
pub struct CursorGlow {
    color: Color,
    visible: bool,
}

impl CursorGlow {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for CursorGlow {
    fn default() -> Self {
        Self::new(ACCENT)
    }
}

impl Layer for CursorGlow {
    fn label(&self) -> &'static str {
        "cursor-glow"
    }

    fn on_event(&mut self, event: &HostEvent, _signals: &Signals) {
        match event {
            HostEvent::PointerMoved { .. } | HostEvent::PointerEntered => self.visible = true,
            HostEvent::PointerLeft => self.visible = false,
            _ => {}
        }
    }

    fn frame(&mut self, input: &FrameInput<'_>, surface: &mut dyn DrawSurface) {
        let Some(pointer) = input.signals.pointer else {
            return;
        };
        if !self.visible || !input.signals.pointer_inside {
            return;
        }

        // Stacked discs approximate a radial gradient fading to the rim
        for i in 0..GLOW_RINGS {
            let k = (GLOW_RINGS - i) as f32 / GLOW_RINGS as f32;
            surface.fill_circle(
                pointer,
                GLOW_RADIUS * k,
                self.color.with_alpha(GLOW_OPACITY / GLOW_RINGS as f32),
            );
        }
        surface.fill_circle(pointer, DOT_RADIUS, self.color);
    }
}

/// Thin bar along the top edge whose width tracks scroll progress.
pub struct ScrollIndicator {
    color: Color,
    track: Color,
}

impl ScrollIndicator {
    pub fn new(color: Color, track: Color) -> Self {
        Self { color, track }
    }
}

impl Default for ScrollIndicator {
    fn default() -> Self {
        Self::new(ACCENT, MUTED)
    }
}

impl Layer for ScrollIndicator {
    fn label(&self) -> &'static str {
        "scroll-indicator"
    }

    fn frame(&mut self, input: &FrameInput<'_>, surface: &mut dyn DrawSurface) {
        let width = input.signals.viewport.width as f32;
        if width <= 0.0 {
            return;
        }
        let y = BAR_HEIGHT * 0.5;
        surface.stroke_line(Vec2::new(0.0, y), Vec2::new(width, y), BAR_HEIGHT, self.track);

        let filled = input.signals.scroll_progress * width;
        if filled > 0.0 {
            surface.stroke_line(Vec2::new(0.0, y), Vec2::new(filled, y), BAR_HEIGHT, self.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_core::{DrawList, SignalSource, Viewport};

    fn run(layer: &mut dyn Layer, signals: &Signals) -> DrawList {
        let mut list = DrawList::new(signals.viewport);
        let input = FrameInput {
            elapsed: 0.0,
            frame: 0,
            signals,
        };
        layer.frame(&input, &mut list);
        list
    }

    #[test]
    fn test_glow_follows_pointer_and_hides_on_leave() {
        let mut source = SignalSource::new(Viewport::new(800, 600), 600);
        let mut glow = CursorGlow::default();
        assert!(run(&mut glow, &source.snapshot()).is_empty());

        let moved = HostEvent::PointerMoved { x: 120.0, y: 80.0 };
        source.apply(&moved);
        glow.on_event(&moved, &source.snapshot());
        let list = run(&mut glow, &source.snapshot());
        assert_eq!(list.circles().count(), GLOW_RINGS + 1);
        let (center, radius, _) = list.circles().next().unwrap();
        assert_eq!(center, Vec2::new(120.0, 80.0));
        assert_eq!(radius, 150.0);
        let (_, dot, _) = list.circles().last().unwrap();
        // 8px dot
        assert_eq!(dot, 4.0);

        source.apply(&HostEvent::PointerLeft);
        glow.on_event(&HostEvent::PointerLeft, &source.snapshot());
        assert!(!glow.is_visible());
        assert!(run(&mut glow, &source.snapshot()).is_empty());
    }

    #[test]
    fn test_scroll_bar_width_tracks_progress() {
        let mut source = SignalSource::new(Viewport::new(1000, 500), 1500);
        let mut bar = ScrollIndicator::default();

        // Only the track at the top of the page
        assert_eq!(run(&mut bar, &source.snapshot()).lines().count(), 1);

        source.apply(&HostEvent::Scrolled { offset: 250 });
        let list = run(&mut bar, &source.snapshot());
        let lines: Vec<_> = list.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].1.x, 1000.0);
        assert!((lines[1].1.x - 250.0).abs() < 1e-3);
        assert_eq!(lines[1].2, 2.0);
    }
}
