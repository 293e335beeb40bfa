use crate::easing::Easing;

/// Tween timing: duration, easing and an optional lead-in delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before the tween starts, in milliseconds.
    pub delay_millis: u64,
}

impl TweenSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::tween(300, Easing::OutQuad)
    }
}

/// Per-unit start delay for staggered timelines.
///
/// Unit `i` starts `base_millis + step_millis * (i + index_offset)` after
/// the timeline itself starts. `index_offset` covers the 1-based stagger
/// forms (`delay = step * (i + 1)`), `base_millis` the "start the whole
/// group late" forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stagger {
    pub step_millis: u64,
    pub base_millis: u64,
    pub index_offset: u64,
}

impl Stagger {
    /// `step * i`, the most common form.
    pub fn per_index(step_millis: u64) -> Self {
        Self {
            step_millis,
            base_millis: 0,
            index_offset: 0,
        }
    }

    /// `step * (i + 1)`.
    pub fn per_index_from_one(step_millis: u64) -> Self {
        Self {
            step_millis,
            base_millis: 0,
            index_offset: 1,
        }
    }

    pub fn with_base(mut self, base_millis: u64) -> Self {
        self.base_millis = base_millis;
        self
    }

    /// No stagger: every unit starts together.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn delay_for(&self, index: usize) -> u64 {
        self.base_millis + self.step_millis * (index as u64 + self.index_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_forms() {
        assert_eq!(Stagger::per_index(15).delay_for(0), 0);
        assert_eq!(Stagger::per_index(15).delay_for(4), 60);
        assert_eq!(Stagger::per_index_from_one(25).delay_for(0), 25);
        // links: 200 * (i + 1) + 800
        let links = Stagger::per_index_from_one(200).with_base(800);
        assert_eq!(links.delay_for(0), 1000);
        assert_eq!(links.delay_for(2), 1400);
        assert_eq!(Stagger::none().delay_for(7), 0);
    }

    #[test]
    fn tween_constructors() {
        let spec = TweenSpec::linear(250);
        assert_eq!(spec.easing, Easing::Linear);
        assert_eq!(spec.delay_millis, 0);
        let delayed = spec.with_delay(300);
        assert_eq!(delayed.delay_millis, 300);
        assert_eq!(delayed.duration_millis, 250);
    }
}
