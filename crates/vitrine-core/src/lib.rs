//! Core runtime for Vitrine: a single-threaded, frame-driven scheduler plus
//! the input primitives shared by every presentation driver.
//!
//! The embedder owns a [`Runtime`] and pumps it once per rendering frame;
//! everything else (animations, the carousel track, marquees, timers)
//! registers one-shot frame callbacks through a [`FrameClock`] and
//! re-registers from inside its own callback while it has work to do.

mod frame_clock;
mod input;
mod runtime;
mod timer;
mod viewport;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use input::{PointerEvent, ResizeEvent, ScrollEvent};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle};
pub use timer::Timer;
pub use viewport::{ViewportClass, NARROW_BREAKPOINT};
