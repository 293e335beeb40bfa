//! Per-item parallax geometry.
//!
//! Each rendered item carries an image that is re-centered against the
//! item as the track moves: the further the item sits from the viewport
//! center, the further its image shifts toward the viewport, exposing the
//! leading edge. Pure geometry; no state.

use crate::gesture_constants::MAX_PARALLAX;

/// Shift that centers an image inside its item (the `translateX(-50%)`
/// baseline).
pub const BASE_SHIFT_PERCENT: f32 = -50.0;

/// Image shift for the rendered item at `item_index`, in percent of the
/// image width.
///
/// The item's center is normalized against the half-viewport into
/// `[-1, 1]` (clamped, which bounds the shift magnitude) and scaled by
/// [`MAX_PARALLAX`] around the centering baseline. A non-positive viewport
/// width yields the baseline.
pub fn item_shift_percent(
    item_index: usize,
    track_offset: f32,
    item_width: f32,
    viewport_width: f32,
) -> f32 {
    if viewport_width <= 0.0 {
        return BASE_SHIFT_PERCENT;
    }
    let item_center = track_offset + (item_index as f32 + 0.5) * item_width;
    let viewport_center = viewport_width / 2.0;
    let normalized = ((item_center - viewport_center) / viewport_center).clamp(-1.0, 1.0);
    BASE_SHIFT_PERCENT - normalized * MAX_PARALLAX
}
