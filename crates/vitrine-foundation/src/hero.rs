//! Scroll-driven hero text effects.
//!
//! As the page scrolls through the hero section, each character lifts away
//! with a per-character stagger, the container fades out near the end of
//! the travel, and the scroll indicator fades within the first hundred
//! pixels. All pure functions of the scroll position; the embedder calls
//! these from its scroll handler and applies the results.

/// Fraction of the scroll travel over which the per-character stagger is
/// spread.
pub const SCROLL_THRESHOLD: f32 = 0.7;

/// Maximum upward character travel in logical pixels.
pub const MAX_TRANSLATION_Y: f32 = 300.0;

/// Scroll ratio past which the hero container starts fading out.
pub const FADE_OUT_START: f32 = 0.85;

/// Scroll distance over which the scroll indicator fades to nothing.
pub const INDICATOR_FADE_DISTANCE: f32 = 100.0;

/// Container-level values sampled per scroll update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    pub container_opacity: f32,
    pub indicator_opacity: f32,
}

/// Staggered hero parallax over `unit_count` characters.
#[derive(Debug, Clone, Copy)]
pub struct HeroScrollEffect {
    scroll_height: f32,
    unit_count: usize,
}

impl HeroScrollEffect {
    /// `scroll_height` is the travel over which the effect completes,
    /// normally the viewport height.
    pub fn new(scroll_height: f32, unit_count: usize) -> Self {
        Self {
            scroll_height,
            unit_count,
        }
    }

    /// Update the travel on resize.
    pub fn set_scroll_height(&mut self, scroll_height: f32) {
        self.scroll_height = scroll_height;
    }

    pub fn unit_count(&self) -> usize {
        self.unit_count
    }

    /// Scroll progress in `[0, 1]`; 0 for degenerate heights.
    pub fn scroll_ratio(&self, scroll_y: f32) -> f32 {
        if self.scroll_height <= 0.0 {
            return 0.0;
        }
        (scroll_y / self.scroll_height).clamp(0.0, 1.0)
    }

    /// Vertical offset of character `unit` (negative = upward). Later
    /// characters wait for the scroll ratio to reach their share of
    /// [`SCROLL_THRESHOLD`] before lifting, then catch up over the
    /// remaining travel.
    pub fn unit_lift(&self, unit: usize, scroll_y: f32) -> f32 {
        if self.unit_count == 0 {
            return 0.0;
        }
        let ratio = self.scroll_ratio(scroll_y);
        let delay = (unit as f32 / self.unit_count as f32) * SCROLL_THRESHOLD;
        let progress = ((ratio - delay) / (1.0 - delay)).clamp(0.0, 1.0);
        -(progress * MAX_TRANSLATION_Y)
    }

    /// Lift for every unit, in stagger order.
    pub fn unit_lifts(&self, scroll_y: f32) -> Vec<f32> {
        (0..self.unit_count)
            .map(|unit| self.unit_lift(unit, scroll_y))
            .collect()
    }

    pub fn container_opacity(&self, scroll_y: f32) -> f32 {
        let ratio = self.scroll_ratio(scroll_y);
        if ratio <= FADE_OUT_START {
            return 1.0;
        }
        let fade = (ratio - FADE_OUT_START) / (1.0 - FADE_OUT_START);
        (1.0 - fade).clamp(0.0, 1.0)
    }

    pub fn indicator_opacity(scroll_y: f32) -> f32 {
        (1.0 - scroll_y / INDICATOR_FADE_DISTANCE).clamp(0.0, 1.0)
    }

    pub fn sample(&self, scroll_y: f32) -> HeroFrame {
        HeroFrame {
            container_opacity: self.container_opacity(scroll_y),
            indicator_opacity: Self::indicator_opacity(scroll_y),
        }
    }
}
