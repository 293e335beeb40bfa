//! The looping track positioner.
//!
//! Maintains the horizontal offset of a track whose items are rendered as
//! three contiguous clone sets, wraps the offset into one periodic window
//! to fake an infinite loop, and advances it under exactly one of three
//! drivers: an active drag, post-release momentum decay (wide viewports)
//! or constant-velocity auto-scroll (narrow viewports).
//!
//! Frame scheduling goes through the injected runtime; the positioner
//! keeps at most one live frame registration, and every mode transition
//! cancels the previous one before installing its own. Rendering goes
//! through a [`TrackHost`], which must not call back into the track
//! synchronously.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;
use vitrine_animation::ExponentialDecay;
use vitrine_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle, ViewportClass};

use crate::gesture_constants::{AUTO_SCROLL_SPEED, DRAG_THRESHOLD, MOMENTUM_DECAY, MOMENTUM_REST};
use crate::track::parallax;

/// The track renders this many contiguous copies of the logical item set.
pub const CLONE_SETS: usize = 3;

/// The track starts this far ahead of the middle clone set's origin.
const INITIAL_LEAD_IN: f32 = 300.0;

/// Rendering collaborator. Receives every offset mutation and the parallax
/// recomputation that follows it, plus click navigation.
pub trait TrackHost {
    fn set_track_offset(&self, x: f32);
    fn set_item_shift(&self, item_index: usize, shift_percent: f32);
    /// A true click (press and release without crossing the drag slop)
    /// landed on an item that carries a link.
    fn navigate(&self, url: &str);
    fn viewport_width(&self) -> f32;
}

/// Which driver currently owns the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackMode {
    Idle,
    Dragging,
    MomentumDecay,
    AutoScroll,
}

/// The item captured under the pointer at drag start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelTarget {
    pub index: usize,
    pub url: Option<String>,
}

/// Wrap `offset` into `[-2P, 0]` for period `P`.
///
/// Idempotent, and a no-op for non-positive periods (the zero-item guard).
pub fn wrap_offset(mut offset: f32, period: f32) -> f32 {
    if period <= 0.0 {
        return offset;
    }
    while offset < -2.0 * period {
        offset += period;
    }
    while offset > 0.0 {
        offset -= period;
    }
    offset
}

struct TrackInner {
    item_count: usize,
    item_width: f32,
    offset: f32,
    velocity: f32,
    auto_velocity: f32,
    mode: TrackMode,
    viewport: ViewportClass,
    decay: ExponentialDecay,
    /// Drag origin: `pointer_x - offset` at press, shifted with the offset
    /// whenever a wrap correction fires mid-drag.
    start_x: f32,
    press_x: f32,
    press_y: f32,
    has_moved: bool,
    target: Option<PanelTarget>,
    host: Rc<dyn TrackHost>,
    runtime: RuntimeHandle,
    registration: Option<FrameCallbackRegistration>,
}

impl TrackInner {
    fn period(&self) -> f32 {
        self.item_count as f32 * self.item_width
    }

    /// Wrap the offset in place, shifting the drag origin by the same
    /// correction while a drag is live so the next drag frame stays
    /// continuous.
    fn wrap_in_place(&mut self) {
        let period = self.period();
        if period <= 0.0 {
            return;
        }
        while self.offset < -2.0 * period {
            self.offset += period;
            if self.mode == TrackMode::Dragging {
                self.start_x -= period;
            }
        }
        while self.offset > 0.0 {
            self.offset -= period;
            if self.mode == TrackMode::Dragging {
                self.start_x += period;
            }
        }
    }

    fn cancel_registration(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
    }
}

enum ReleaseAction {
    Settle,
    Navigate(String),
    Momentum,
    AutoScroll,
}

/// A looping, draggable, self-advancing track of fixed-width items.
pub struct LoopingTrack {
    inner: Rc<RefCell<TrackInner>>,
}

impl LoopingTrack {
    /// Construct the track and render its initial position. On narrow
    /// viewports with at least one item the auto-scroll loop starts
    /// immediately.
    pub fn new(
        item_count: usize,
        item_width: f32,
        runtime: RuntimeHandle,
        host: Rc<dyn TrackHost>,
        viewport: ViewportClass,
    ) -> Self {
        let period = item_count as f32 * item_width;
        let offset = if period > 0.0 {
            wrap_offset(-period - INITIAL_LEAD_IN, period)
        } else {
            0.0
        };
        let inner = Rc::new(RefCell::new(TrackInner {
            item_count,
            item_width,
            offset,
            velocity: 0.0,
            auto_velocity: -AUTO_SCROLL_SPEED,
            mode: TrackMode::Idle,
            viewport,
            decay: ExponentialDecay::new(MOMENTUM_DECAY, MOMENTUM_REST),
            start_x: 0.0,
            press_x: 0.0,
            press_y: 0.0,
            has_moved: false,
            target: None,
            host,
            runtime,
            registration: None,
        }));
        let track = Self { inner };
        Self::render(&track.inner);
        if viewport.is_narrow() {
            track.sync_auto_scroll();
        }
        track
    }

    pub fn offset(&self) -> f32 {
        self.inner.borrow().offset
    }

    pub fn velocity(&self) -> f32 {
        self.inner.borrow().velocity
    }

    pub fn mode(&self) -> TrackMode {
        self.inner.borrow().mode
    }

    /// Width of one logical clone set.
    pub fn period(&self) -> f32 {
        self.inner.borrow().period()
    }

    /// Begin a drag at page position `(x, y)`, capturing the item under
    /// the pointer. Cancels whichever driver was running.
    pub fn begin_drag(&self, x: f32, y: f32, target: Option<PanelTarget>) {
        let mut inner = self.inner.borrow_mut();
        if inner.item_count == 0 {
            return;
        }
        inner.cancel_registration();
        inner.mode = TrackMode::Dragging;
        inner.start_x = x - inner.offset;
        inner.velocity = 0.0;
        inner.press_x = x;
        inner.press_y = y;
        inner.has_moved = false;
        inner.target = target;
        log::debug!("drag started at ({x}, {y})");
    }

    /// Advance the drag to page position `(x, y)`. No-op outside Dragging.
    pub fn update_drag(&self, x: f32, y: f32) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.mode != TrackMode::Dragging {
                return;
            }
            if (x - inner.press_x).abs() > DRAG_THRESHOLD
                || (y - inner.press_y).abs() > DRAG_THRESHOLD
            {
                inner.has_moved = true;
            }
            let new_offset = x - inner.start_x;
            inner.velocity = new_offset - inner.offset;
            inner.offset = new_offset;
            inner.wrap_in_place();
        }
        Self::render(&self.inner);
    }

    /// Release the drag.
    ///
    /// A release that never crossed the drag slop is a click: it emits a
    /// navigate signal when the captured item carries a link and settles
    /// to Idle without scheduling any frames. A moved release hands the
    /// offset to momentum decay (wide) or auto-scroll (narrow, signed by
    /// the drag direction).
    pub fn end_drag(&self) {
        let action = {
            let mut inner = self.inner.borrow_mut();
            if inner.mode != TrackMode::Dragging {
                return;
            }
            if !inner.has_moved {
                inner.mode = TrackMode::Idle;
                match inner.target.take().and_then(|t| t.url) {
                    Some(url) => ReleaseAction::Navigate(url),
                    None => ReleaseAction::Settle,
                }
            } else {
                inner.target = None;
                match inner.viewport {
                    ViewportClass::Wide => {
                        inner.mode = TrackMode::MomentumDecay;
                        ReleaseAction::Momentum
                    }
                    ViewportClass::Narrow => {
                        let velocity = inner.velocity;
                        inner.auto_velocity = if velocity.abs() > MOMENTUM_REST {
                            AUTO_SCROLL_SPEED.copysign(velocity)
                        } else {
                            -AUTO_SCROLL_SPEED
                        };
                        inner.mode = TrackMode::AutoScroll;
                        ReleaseAction::AutoScroll
                    }
                }
            }
        };

        match action {
            ReleaseAction::Settle => {}
            ReleaseAction::Navigate(url) => {
                log::debug!("click navigation to {url}");
                let host = self.inner.borrow().host.clone();
                host.navigate(&url);
            }
            ReleaseAction::Momentum | ReleaseAction::AutoScroll => Self::schedule(&self.inner),
        }
    }

    /// Reclassify the viewport and re-sync the auto-scroll driver:
    /// Wide cancels a running auto-scroll; Narrow starts it (at the
    /// default leftward speed) when the track is otherwise at rest.
    pub fn set_viewport_class(&self, class: ViewportClass) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.viewport = class;
        }
        self.sync_auto_scroll();
    }

    pub fn viewport_class(&self) -> ViewportClass {
        self.inner.borrow().viewport
    }

    fn sync_auto_scroll(&self) {
        let start = {
            let mut inner = self.inner.borrow_mut();
            match inner.viewport {
                ViewportClass::Wide => {
                    if inner.mode == TrackMode::AutoScroll {
                        inner.cancel_registration();
                        inner.mode = TrackMode::Idle;
                    }
                    false
                }
                ViewportClass::Narrow => {
                    if inner.mode == TrackMode::Idle && inner.item_count > 0 {
                        inner.auto_velocity = -AUTO_SCROLL_SPEED;
                        inner.mode = TrackMode::AutoScroll;
                        true
                    } else {
                        false
                    }
                }
            }
        };
        if start {
            Self::schedule(&self.inner);
        }
    }

    fn schedule(this: &Rc<RefCell<TrackInner>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            FrameClock::new(inner.runtime.clone())
        };
        let weak: Weak<RefCell<TrackInner>> = Rc::downgrade(this);
        let registration = clock.with_frame_millis(move |_time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<TrackInner>>) {
        let reschedule = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            match inner.mode {
                TrackMode::MomentumDecay => {
                    inner.velocity = inner.decay.step(inner.velocity);
                    inner.offset += inner.velocity;
                    inner.wrap_in_place();
                    if inner.decay.is_rest(inner.velocity) {
                        inner.mode = TrackMode::Idle;
                        log::debug!("momentum settled at offset {}", inner.offset);
                        Some(false)
                    } else {
                        Some(true)
                    }
                }
                TrackMode::AutoScroll => {
                    let auto_velocity = inner.auto_velocity;
                    inner.offset += auto_velocity;
                    inner.wrap_in_place();
                    Some(true)
                }
                // A cancelled driver's frame arriving late: nothing owns
                // the offset this frame.
                TrackMode::Idle | TrackMode::Dragging => None,
            }
        };

        let Some(reschedule) = reschedule else {
            return;
        };
        Self::render(this);
        if reschedule {
            Self::schedule(this);
        }
    }

    /// Push the current offset and a full parallax pass to the host.
    fn render(this: &Rc<RefCell<TrackInner>>) {
        let (host, offset, item_count, item_width) = {
            let inner = this.borrow();
            (
                inner.host.clone(),
                inner.offset,
                inner.item_count,
                inner.item_width,
            )
        };
        host.set_track_offset(offset);
        let viewport_width = host.viewport_width();
        let shifts: SmallVec<[f32; 12]> = (0..item_count * CLONE_SETS)
            .map(|item_index| {
                parallax::item_shift_percent(item_index, offset, item_width, viewport_width)
            })
            .collect();
        for (item_index, shift) in shifts.into_iter().enumerate() {
            host.set_item_shift(item_index, shift);
        }
    }
}
