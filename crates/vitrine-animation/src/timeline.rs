//! Staggered multi-unit timelines.
//!
//! A [`Timeline`] animates one or two scalar properties across an ordered
//! set of units (typically the characters of a phrase or the panels of a
//! section). Each unit runs the same tween, offset by its staggered delay.
//! Sampling is pure: the timeline holds no per-frame registration of its
//! own; an orchestrator samples it from whatever frame loop it already
//! runs.

use smallvec::SmallVec;

use crate::easing::Easing;
use crate::spec::{Stagger, TweenSpec};

/// Animated property of a unit's visual transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    TranslateX,
    TranslateY,
    Opacity,
}

/// One property animated over `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyTrack {
    pub property: Property,
    pub from: f32,
    pub to: f32,
}

impl PropertyTrack {
    pub fn new(property: Property, from: f32, to: f32) -> Self {
        Self { property, from, to }
    }

    fn sample(&self, eased: f32) -> (Property, f32) {
        (self.property, self.from + (self.to - self.from) * eased)
    }
}

/// Sampled property values for a single unit.
pub type UnitSample = SmallVec<[(Property, f32); 2]>;

/// A staggered tween across `unit_count` ordered units.
pub struct Timeline {
    spec: TweenSpec,
    stagger: Stagger,
    tracks: SmallVec<[PropertyTrack; 2]>,
    unit_count: usize,
    start_millis: Option<u64>,
    finished_reported: bool,
}

impl Timeline {
    pub fn new(unit_count: usize, spec: TweenSpec, stagger: Stagger) -> Self {
        Self {
            spec,
            stagger,
            tracks: SmallVec::new(),
            unit_count,
            start_millis: None,
            finished_reported: false,
        }
    }

    pub fn track(mut self, property: Property, from: f32, to: f32) -> Self {
        self.tracks.push(PropertyTrack::new(property, from, to));
        self
    }

    pub fn unit_count(&self) -> usize {
        self.unit_count
    }

    /// Start (or restart) the timeline at `now_millis`.
    pub fn start(&mut self, now_millis: u64) {
        self.start_millis = Some(now_millis);
        self.finished_reported = false;
        log::debug!(
            "timeline started: {} unit(s), {}ms + {}ms/unit",
            self.unit_count,
            self.spec.duration_millis,
            self.stagger.step_millis
        );
    }

    pub fn is_started(&self) -> bool {
        self.start_millis.is_some()
    }

    /// Eased progress of `unit` at `now_millis`: 0 before its staggered
    /// window opens, 1 after it closes.
    pub fn progress_for(&self, now_millis: u64, unit: usize) -> f32 {
        let Some(start) = self.start_millis else {
            return 0.0;
        };
        let window_start =
            start + self.spec.delay_millis + self.stagger.delay_for(unit);
        if now_millis < window_start {
            return 0.0;
        }
        let duration = self.spec.duration_millis.max(1);
        let elapsed = now_millis - window_start;
        let linear = (elapsed as f32 / duration as f32).min(1.0);
        self.spec.easing.transform(linear)
    }

    /// Sample every track for `unit` at `now_millis`.
    pub fn sample_unit(&self, now_millis: u64, unit: usize) -> UnitSample {
        let eased = self.progress_for(now_millis, unit);
        self.tracks.iter().map(|t| t.sample(eased)).collect()
    }

    /// Sample all units.
    pub fn sample(&self, now_millis: u64) -> Vec<UnitSample> {
        (0..self.unit_count)
            .map(|unit| self.sample_unit(now_millis, unit))
            .collect()
    }

    /// True once the last unit's window has closed. Empty timelines are
    /// finished as soon as they start.
    pub fn is_finished(&self, now_millis: u64) -> bool {
        let Some(start) = self.start_millis else {
            return false;
        };
        if self.unit_count == 0 {
            return true;
        }
        let last_delay = self.stagger.delay_for(self.unit_count - 1);
        let end = start + self.spec.delay_millis + last_delay + self.spec.duration_millis;
        now_millis >= end
    }

    /// Report the finished edge exactly once. Restarting the timeline
    /// re-arms the edge.
    pub fn poll_finished(&mut self, now_millis: u64) -> bool {
        if self.finished_reported || !self.is_finished(now_millis) {
            return false;
        }
        self.finished_reported = true;
        true
    }
}

/// The entrance timelines the presentation layer uses, kept together so
/// callers share one vocabulary instead of re-deriving the numbers.
pub mod presets {
    use super::*;

    /// Hero/contact-title entrance: drop in from above with an exponential
    /// settle (translateY -100 -> 0, OutExpo, 1400 ms, 30 ms stagger).
    pub fn title_drop_in(unit_count: usize) -> Timeline {
        Timeline::new(
            unit_count,
            TweenSpec::tween(1400, Easing::OutExpo),
            Stagger::per_index(30),
        )
        .track(Property::TranslateY, -100.0, 0.0)
        .track(Property::Opacity, 0.0, 1.0)
    }

    /// Fast left-to-right title reveal (translateX -50 -> 0, OutQuad,
    /// 600 ms, 15 ms stagger).
    pub fn title_slide_in(unit_count: usize) -> Timeline {
        Timeline::new(
            unit_count,
            TweenSpec::tween(600, Easing::OutQuad),
            Stagger::per_index(15),
        )
        .track(Property::TranslateX, -50.0, 0.0)
        .track(Property::Opacity, 0.0, 1.0)
    }

    /// Slow body-text reveal (opacity, InOutQuad, 2250 ms, 25 ms stagger
    /// starting from index 1).
    pub fn body_fade_in(unit_count: usize) -> Timeline {
        Timeline::new(
            unit_count,
            TweenSpec::tween(2250, Easing::InOutQuad),
            Stagger::per_index_from_one(25),
        )
        .track(Property::Opacity, 0.0, 1.0)
    }

    /// Quick non-staggered fade out (linear, 250 ms).
    pub fn fade_out(unit_count: usize) -> Timeline {
        Timeline::new(unit_count, TweenSpec::linear(250), Stagger::none())
            .track(Property::Opacity, 1.0, 0.0)
    }
}

#[cfg(test)]
#[path = "tests/timeline_tests.rs"]
mod tests;
