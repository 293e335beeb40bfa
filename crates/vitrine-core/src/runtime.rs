//! Single-threaded frame-callback runtime.
//!
//! The runtime owns a registry of one-shot frame callbacks. A host drives it
//! by calling [`Runtime::advance_to`] once per rendering frame; animation
//! drivers keep themselves alive by re-registering from inside their own
//! callback. At most one driver advances a given piece of state per frame,
//! so the only concurrency discipline needed is cancel-before-replace on
//! the registration handles.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Identifies a registered frame callback. Ids are never reused.
pub type FrameCallbackId = u64;

type FrameCallback = Box<dyn FnOnce(u64)>;

struct RuntimeInner {
    next_id: FrameCallbackId,
    callbacks: FxHashMap<FrameCallbackId, FrameCallback>,
    /// Registration order; drained in order on each advance.
    order: Vec<FrameCallbackId>,
    now_millis: u64,
    frames_advanced: u64,
}

impl RuntimeInner {
    fn new() -> Self {
        Self {
            next_id: 1,
            callbacks: FxHashMap::default(),
            order: Vec::new(),
            now_millis: 0,
            frames_advanced: 0,
        }
    }
}

/// Owning side of the runtime. The embedder holds this and pumps frames.
pub struct Runtime {
    inner: Rc<RefCell<RuntimeInner>>,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RuntimeInner::new())),
        }
    }

    /// Cheap cloneable handle for registering callbacks.
    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: self.inner.clone(),
        }
    }

    /// Advance the frame clock to `frame_time_millis` and run every callback
    /// that was registered before this tick began. Callbacks registered
    /// while the tick is running (rescheduling drivers) run on the next
    /// tick, never in the same one.
    pub fn advance_to(&self, frame_time_millis: u64) {
        let (time, batch) = {
            let mut inner = self.inner.borrow_mut();
            inner.now_millis = frame_time_millis;
            inner.frames_advanced += 1;

            let ids: SmallVec<[FrameCallbackId; 8]> = inner.order.drain(..).collect();
            let mut batch: SmallVec<[FrameCallback; 8]> = SmallVec::new();
            for id in ids {
                // Cancelled callbacks leave a hole in the order list.
                if let Some(cb) = inner.callbacks.remove(&id) {
                    batch.push(cb);
                }
            }
            (frame_time_millis, batch)
        };

        if !batch.is_empty() {
            log::trace!("frame {}ms: running {} callback(s)", time, batch.len());
        }
        for cb in batch {
            cb(time);
        }
    }

    /// Number of times `advance_to` has run. Exposed so tests can prove
    /// there is exactly one frame loop.
    pub fn frames_advanced(&self) -> u64 {
        self.inner.borrow().frames_advanced
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending_callbacks(&self) -> usize {
        self.inner.borrow().callbacks.len()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle onto the runtime. Clones refer to the same registry.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Rc<RefCell<RuntimeInner>>,
}

impl RuntimeHandle {
    /// Register a callback for the next frame. Returns `None` only if the
    /// registry is unavailable (kept as an `Option` so callers treat
    /// registration as fallible, matching the clock's inactive handles).
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.callbacks.insert(id, Box::new(callback));
        inner.order.push(id);
        Some(id)
    }

    /// Cancel a registered callback. Idempotent: unknown or already-fired
    /// ids are ignored.
    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut inner = self.inner.borrow_mut();
        inner.callbacks.remove(&id);
    }

    /// Current frame time in milliseconds.
    pub fn now_millis(&self) -> u64 {
        self.inner.borrow().now_millis
    }

    /// See [`Runtime::frames_advanced`].
    pub fn frames_advanced(&self) -> u64 {
        self.inner.borrow().frames_advanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn callbacks_run_once_in_registration_order() {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["a", "b", "c"] {
            let seen = seen.clone();
            handle.register_frame_callback(move |_| seen.borrow_mut().push(tag));
        }

        runtime.advance_to(16);
        assert_eq!(*seen.borrow(), vec!["a", "b", "c"]);

        // One-shot: a second advance runs nothing.
        runtime.advance_to(32);
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn reschedule_from_callback_runs_next_frame() {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let fired = Rc::new(Cell::new(0u32));

        let fired_outer = fired.clone();
        let handle_inner = handle.clone();
        handle.register_frame_callback(move |_| {
            fired_outer.set(fired_outer.get() + 1);
            let fired = fired_outer.clone();
            handle_inner.register_frame_callback(move |_| {
                fired.set(fired.get() + 1);
            });
        });

        runtime.advance_to(16);
        assert_eq!(fired.get(), 1, "inner callback must not run in the same tick");
        runtime.advance_to(32);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn cancel_is_idempotent() {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let fired = Rc::new(Cell::new(false));

        let fired_cb = fired.clone();
        let id = handle
            .register_frame_callback(move |_| fired_cb.set(true))
            .unwrap();
        handle.cancel_frame_callback(id);
        handle.cancel_frame_callback(id); // second cancel is a no-op
        handle.cancel_frame_callback(9999); // unknown id is a no-op

        runtime.advance_to(16);
        assert!(!fired.get());
    }

    #[test]
    fn frame_counter_increments_once_per_advance() {
        let runtime = Runtime::new();
        assert_eq!(runtime.frames_advanced(), 0);
        runtime.advance_to(16);
        runtime.advance_to(32);
        assert_eq!(runtime.frames_advanced(), 2);
    }
}
