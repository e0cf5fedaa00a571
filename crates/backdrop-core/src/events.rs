//! Host input events
//!
//! Window-system agnostic versions of the pointer, scroll and resize streams
//! the backdrop listens to. The binary translates winit events into these.

use crate::signals::Viewport;

/// A discrete input event delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Pointer moved to a position in logical pixels, relative to the top-left corner.
    PointerMoved { x: f32, y: f32 },
    /// Pointer entered the viewport.
    PointerEntered,
    /// Pointer left the viewport.
    PointerLeft,
    /// Absolute scroll offset in pixels.
    Scrolled { offset: u32 },
    /// Relative scroll (wheel/touchpad) in pixels. Positive scrolls down the page.
    ScrolledBy { delta: f32 },
    /// Viewport changed size.
    Resized(Viewport),
    /// The document's total height changed.
    DocumentResized { height: u32 },
}
