//! One-shot deadline timers on the frame clock.
//!
//! There is no separate timer thread: a timer re-registers a frame callback
//! until the frame time reaches its deadline, then fires exactly once. This
//! gives timer actions the same single-threaded, frame-aligned execution as
//! every other driver in the crate.

use std::cell::RefCell;
use std::rc::Rc;

use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
use crate::runtime::RuntimeHandle;

type TimerAction = Box<dyn FnOnce()>;

struct TimerInner {
    runtime: RuntimeHandle,
    deadline_millis: u64,
    action: Option<TimerAction>,
    registration: Option<FrameCallbackRegistration>,
}

/// Handle to a scheduled one-shot action. Dropping the handle does NOT
/// cancel the timer (fire-and-forget is the common case); call
/// [`Timer::cancel`] to stop it. Cancelling twice is safe.
pub struct Timer {
    inner: Rc<RefCell<TimerInner>>,
}

impl Timer {
    /// Schedule `action` to run on the first frame at or past
    /// `now + delay_millis`.
    pub fn after(runtime: RuntimeHandle, delay_millis: u64, action: impl FnOnce() + 'static) -> Self {
        let deadline = runtime.now_millis() + delay_millis;
        let inner = Rc::new(RefCell::new(TimerInner {
            runtime,
            deadline_millis: deadline,
            action: Some(Box::new(action)),
            registration: None,
        }));
        Self::schedule(&inner);
        Self { inner }
    }

    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.action = None;
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
    }

    /// True until the action has fired or been cancelled.
    pub fn is_pending(&self) -> bool {
        self.inner.borrow().action.is_some()
    }

    fn schedule(this: &Rc<RefCell<TimerInner>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() || inner.action.is_none() {
                return;
            }
            FrameClock::new(inner.runtime.clone())
        };
        // The callback holds a strong reference: a pending timer stays
        // alive through the runtime's queue even after the handle is
        // dropped. Cancellation removes the registration, which releases
        // the callback and with it this reference.
        let strong = this.clone();
        let registration = clock.with_frame_millis(move |time| {
            Self::on_frame(&strong, time);
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<TimerInner>>, frame_time_millis: u64) {
        let action = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if frame_time_millis >= inner.deadline_millis {
                inner.action.take()
            } else {
                None
            }
        };

        match action {
            Some(action) => action(),
            None => Self::schedule(this),
        }
    }
}
