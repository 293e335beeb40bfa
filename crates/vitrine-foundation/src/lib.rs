//! Interaction drivers for Vitrine.
//!
//! This crate holds the pieces that react to input and scroll geometry:
//! the looping carousel track (drag, momentum, auto-scroll), marquee
//! bands, the scroll-driven hero text effect, once-only entrance triggers
//! and phrase segmentation. Frame scheduling is always borrowed from
//! `vitrine-core`; tween sampling from `vitrine-animation`.

pub mod gesture_constants;
pub mod hero;
pub mod marquee;
pub mod text;
pub mod track;
pub mod visibility;
