//! Input event types consumed by the presentation drivers.
//!
//! Events carry plain geometry; the embedder translates whatever its
//! platform delivers (mouse, touch, synthetic scripts) into these before
//! feeding them in. Mouse and touch collapse into one pointer stream.

/// A pointer interaction. Coordinates are page-relative logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Press. `target` identifies the rendered item under the pointer,
    /// when the embedder knows it.
    Down {
        x: f32,
        y: f32,
        target: Option<usize>,
    },
    Move {
        x: f32,
        y: f32,
    },
    Up,
}

/// Vertical page scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub y: f32,
}

/// Viewport size change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeEvent {
    pub width: f32,
    pub height: f32,
}
