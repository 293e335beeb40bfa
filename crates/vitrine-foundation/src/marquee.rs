//! Looping marquee bands.
//!
//! A band renders its logical content four times over and slides the strip
//! horizontally, wrapping the position into the half-open window
//! `[-2S, -S)` (S = width of one copy) so the loop never shows a seam.
//! Narrow viewports run bands continuously with directions alternating by
//! row; wide viewports run a band only while the pointer hovers it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use vitrine_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle};

/// Copies of the logical content a band renders.
pub const MARQUEE_COPIES: usize = 4;

/// Milliseconds to traverse one copy width in continuous (narrow) mode.
pub const CONTINUOUS_LOOP_MILLIS: u64 = 30_000;

/// Milliseconds to traverse one copy width in hover-driven (wide) mode.
pub const HOVER_LOOP_MILLIS: u64 = 25_000;

/// Wrap a band position into `[-2S, -S)`. No-op for non-positive widths.
pub fn wrap_band(mut position: f32, set_width: f32) -> f32 {
    if set_width <= 0.0 {
        return position;
    }
    while position < -2.0 * set_width {
        position += set_width;
    }
    while position >= -set_width {
        position -= set_width;
    }
    position
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BandMode {
    Continuous,
    HoverDriven,
}

struct BandInner {
    set_width: f32,
    position: f32,
    /// +1.0 advances rightward, -1.0 leftward.
    direction: f32,
    loop_millis: u64,
    running: bool,
    last_frame_millis: Option<u64>,
    mode: BandMode,
    runtime: RuntimeHandle,
    registration: Option<FrameCallbackRegistration>,
    on_position: Rc<dyn Fn(f32)>,
}

/// One marquee row.
pub struct MarqueeBand {
    inner: Rc<RefCell<BandInner>>,
}

impl MarqueeBand {
    /// Continuously scrolling band for narrow viewports. Direction
    /// alternates by row: even rows drift rightward from the deep end of
    /// the window, odd rows leftward.
    pub fn continuous(
        row_index: usize,
        set_width: f32,
        runtime: RuntimeHandle,
        on_position: Rc<dyn Fn(f32)>,
    ) -> Self {
        let rightward = row_index % 2 == 0;
        let band = Self::build(
            set_width,
            if rightward {
                -2.0 * set_width
            } else {
                -set_width
            },
            if rightward { 1.0 } else { -1.0 },
            CONTINUOUS_LOOP_MILLIS,
            BandMode::Continuous,
            runtime,
            on_position,
        );
        if set_width > 0.0 {
            band.inner.borrow_mut().running = true;
            Self::schedule(&band.inner);
        }
        band
    }

    /// Hover-driven band for wide viewports: at rest at position 0 until
    /// [`MarqueeBand::pointer_enter`].
    pub fn hover_driven(
        set_width: f32,
        runtime: RuntimeHandle,
        on_position: Rc<dyn Fn(f32)>,
    ) -> Self {
        Self::build(
            set_width,
            0.0,
            1.0,
            HOVER_LOOP_MILLIS,
            BandMode::HoverDriven,
            runtime,
            on_position,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        set_width: f32,
        position: f32,
        direction: f32,
        loop_millis: u64,
        mode: BandMode,
        runtime: RuntimeHandle,
        on_position: Rc<dyn Fn(f32)>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(BandInner {
                set_width,
                position,
                direction,
                loop_millis,
                running: false,
                last_frame_millis: None,
                mode,
                runtime,
                registration: None,
                on_position,
            })),
        }
    }

    pub fn position(&self) -> f32 {
        self.inner.borrow().position
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Start the hover loop from the deep end of the wrap window.
    /// No-op for continuous bands (they are always running).
    pub fn pointer_enter(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.mode != BandMode::HoverDriven || inner.set_width <= 0.0 {
                return;
            }
            inner.position = -2.0 * inner.set_width;
            inner.direction = 1.0;
            inner.running = true;
            inner.last_frame_millis = None;
        }
        Self::schedule(&self.inner);
    }

    /// Kill the hover loop and snap back to the resting position.
    pub fn pointer_leave(&self) {
        let emit = {
            let mut inner = self.inner.borrow_mut();
            if inner.mode != BandMode::HoverDriven || !inner.running {
                return;
            }
            inner.running = false;
            inner.last_frame_millis = None;
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.position = 0.0;
            inner.on_position.clone()
        };
        emit(0.0);
    }

    fn schedule(this: &Rc<RefCell<BandInner>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() || !inner.running {
                return;
            }
            FrameClock::new(inner.runtime.clone())
        };
        let weak: Weak<RefCell<BandInner>> = Rc::downgrade(this);
        let registration = clock.with_frame_millis(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<BandInner>>, frame_time_millis: u64) {
        let (emit, position) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if !inner.running {
                return;
            }
            let dt = match inner.last_frame_millis {
                Some(last) => frame_time_millis.saturating_sub(last),
                None => 0,
            };
            inner.last_frame_millis = Some(frame_time_millis);
            if dt > 0 {
                let advance =
                    inner.direction * inner.set_width * (dt as f32 / inner.loop_millis as f32);
                inner.position = wrap_band(inner.position + advance, inner.set_width);
            }
            (inner.on_position.clone(), inner.position)
        };
        emit(position);
        Self::schedule(this);
    }
}
