//! # Backdrop Core
//!
//! Shared plumbing for the animated page backdrop: the scroll/pointer signal
//! source, host events, the frame scheduler that drives every layer, and the
//! drawing surface abstraction layers render into.

pub mod color;
pub mod draw;
pub mod error;
pub mod events;
pub mod schedule;
pub mod signals;

pub use color::*;
pub use draw::*;
pub use error::*;
pub use events::*;
pub use schedule::*;
pub use signals::*;
