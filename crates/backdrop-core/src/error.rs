//! Error types for the backdrop.
//!
//! Every failure here is an environment problem. Callers log it and render
//! nothing; none of these should ever reach the page content.

/// Errors raised while setting up or driving backdrop layers.
#[derive(Debug, thiserror::Error)]
pub enum BackdropError {
    /// No drawing context could be obtained for the surface.
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    /// The surface exists but has no pixels to draw into.
    #[error("drawing surface has zero area ({width}x{height})")]
    ZeroSizedSurface { width: u32, height: u32 },
    /// The frame scheduler was shut down and accepts no new layers.
    #[error("frame scheduler unavailable")]
    SchedulerUnavailable,
    /// The GPU device or surface could not be created or configured.
    #[error("gpu error: {0}")]
    Gpu(String),
}

pub type Result<T> = std::result::Result<T, BackdropError>;
