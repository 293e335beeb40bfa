//! Shared gesture and motion constants.
//!
//! These values are in logical pixels (or pixels per frame where noted) and
//! are matched between the click and drag paths so a gesture that scrolls
//! the track can never also fire a click on release.

/// Click-vs-drag slop in logical pixels.
///
/// A pointer that stays within this distance of its press position on both
/// axes counts as a click on release; moving past it on either axis turns
/// the gesture into a drag and suppresses the click.
pub const DRAG_THRESHOLD: f32 = 5.0;

/// Per-frame momentum multiplier applied after a desktop drag release.
pub const MOMENTUM_DECAY: f32 = 0.95;

/// Momentum velocities below this magnitude (pixels per frame) stop the
/// decay loop.
pub const MOMENTUM_REST: f32 = 0.1;

/// Auto-scroll speed in pixels per frame on narrow viewports. Applied
/// signed; the resting default direction is leftward (negative).
pub const AUTO_SCROLL_SPEED: f32 = 0.8;

/// Maximum parallax image shift, in percent of item width, at the viewport
/// edges.
pub const MAX_PARALLAX: f32 = 25.0;
