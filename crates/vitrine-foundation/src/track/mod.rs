//! The looping carousel track: positioner state machine and parallax
//! geometry.

pub mod parallax;
mod positioner;

pub use positioner::{
    wrap_offset, LoopingTrack, PanelTarget, TrackHost, TrackMode, CLONE_SETS,
};
