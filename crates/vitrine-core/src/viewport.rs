//! Narrow/wide viewport classification.
//!
//! A handful of behaviors switch on this class: the hero phrase layout,
//! carousel release behavior (momentum vs auto-scroll) and marquee modes.
//! Reclassification happens only on resize events.

/// Width at or below which a viewport is classified [`ViewportClass::Narrow`].
pub const NARROW_BREAKPOINT: f32 = 640.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Phone-sized layout (`width <= 640`).
    Narrow,
    /// Desktop layout.
    Wide,
}

impl ViewportClass {
    pub fn classify(width: f32) -> Self {
        if width <= NARROW_BREAKPOINT {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == ViewportClass::Narrow
    }
}
