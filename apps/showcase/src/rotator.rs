//! The click-to-cycle highlight panel.
//!
//! A click fades the current title and body out quickly and without
//! stagger, swaps the content while invisible, then runs two parallel
//! staggered fade-ins: a fast left-to-right slide for the title and a slow
//! character reveal for the body.

use vitrine_animation::{presets, Timeline};
use vitrine_foundation::text::{segment_chars, CharUnit};

use crate::content::RotatingEntry;

enum Phase {
    Resting,
    FadingOut { next_index: usize, timeline: Timeline },
    FadingIn { title: Timeline, body: Timeline },
}

pub struct ContentRotator {
    entries: Vec<RotatingEntry>,
    index: usize,
    phase: Phase,
    title_units: Vec<CharUnit>,
    body_units: Vec<CharUnit>,
}

impl ContentRotator {
    pub fn new(entries: Vec<RotatingEntry>) -> Self {
        let (title_units, body_units) = match entries.first() {
            Some(entry) => (segment_chars(&entry.title), segment_chars(&entry.body)),
            None => (Vec::new(), Vec::new()),
        };
        Self {
            entries,
            index: 0,
            phase: Phase::Resting,
            title_units,
            body_units,
        }
    }

    pub fn current(&self) -> Option<&RotatingEntry> {
        self.entries.get(self.index)
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn title_units(&self) -> &[CharUnit] {
        &self.title_units
    }

    pub fn body_units(&self) -> &[CharUnit] {
        &self.body_units
    }

    pub fn is_resting(&self) -> bool {
        matches!(self.phase, Phase::Resting)
    }

    /// Handle a click on the panel. Ignored while a transition is already
    /// running.
    pub fn advance_click(&mut self, now_millis: u64) {
        if !self.is_resting() || self.entries.len() < 2 {
            return;
        }
        let next_index = (self.index + 1) % self.entries.len();
        let mut timeline =
            presets::fade_out(self.title_units.len() + self.body_units.len());
        timeline.start(now_millis);
        log::info!(
            "rotating content: {} -> {}",
            self.entries[self.index].title,
            self.entries[next_index].title
        );
        self.phase = Phase::FadingOut {
            next_index,
            timeline,
        };
    }

    /// Advance the transition. Call once per frame.
    pub fn tick(&mut self, now_millis: u64) {
        match &mut self.phase {
            Phase::Resting => {}
            Phase::FadingOut {
                next_index,
                timeline,
            } => {
                if timeline.poll_finished(now_millis) {
                    // Swap while invisible, then reveal.
                    self.index = *next_index;
                    let entry = &self.entries[self.index];
                    self.title_units = segment_chars(&entry.title);
                    self.body_units = segment_chars(&entry.body);

                    let mut title = presets::title_slide_in(self.title_units.len());
                    let mut body = presets::body_fade_in(self.body_units.len());
                    title.start(now_millis);
                    body.start(now_millis);
                    self.phase = Phase::FadingIn { title, body };
                }
            }
            Phase::FadingIn { title, body } => {
                let title_done = title.is_finished(now_millis);
                let body_done = body.is_finished(now_millis);
                if title_done && body_done {
                    self.phase = Phase::Resting;
                }
            }
        }
    }

    /// Opacity of the whole panel's title at `now`, for logging. 1.0 while
    /// resting.
    pub fn title_progress(&self, now_millis: u64) -> f32 {
        match &self.phase {
            Phase::Resting => 1.0,
            Phase::FadingOut { timeline, .. } => 1.0 - timeline.progress_for(now_millis, 0),
            Phase::FadingIn { title, .. } => {
                let units = title.unit_count();
                if units == 0 {
                    return 1.0;
                }
                title.progress_for(now_millis, units - 1)
            }
        }
    }
}
