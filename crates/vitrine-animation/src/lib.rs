//! Animation primitives for Vitrine: easing curves, tween specs, staggered
//! multi-unit timelines and per-frame velocity decay.
//!
//! Everything here is sampled, not scheduled: timelines and decay are pure
//! state machines advanced by whoever owns the frame loop. Frame
//! registration lives with the drivers in `vitrine-foundation`.

mod decay;
mod easing;
mod spec;
mod timeline;

pub use decay::ExponentialDecay;
pub use easing::Easing;
pub use spec::{Stagger, TweenSpec};
pub use timeline::{presets, Property, PropertyTrack, Timeline, UnitSample};
