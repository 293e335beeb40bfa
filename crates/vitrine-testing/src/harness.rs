use vitrine_core::{Runtime, RuntimeHandle};

/// Fixed frame cadence used by tests, in milliseconds.
pub const FRAME_INTERVAL_MILLIS: u64 = 16;

/// A [`Runtime`] plus a manual clock.
pub struct TestRuntime {
    runtime: Runtime,
    now_millis: u64,
}

impl TestRuntime {
    pub fn new() -> Self {
        Self {
            runtime: Runtime::new(),
            now_millis: 0,
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn now_millis(&self) -> u64 {
        self.now_millis
    }

    /// Pump `n` frames at the fixed cadence. Returns the runtime's total
    /// frame count afterward.
    pub fn advance_frames(&mut self, n: u64) -> u64 {
        for _ in 0..n {
            self.now_millis += FRAME_INTERVAL_MILLIS;
            self.runtime.advance_to(self.now_millis);
        }
        self.runtime.frames_advanced()
    }

    /// Pump whole frames until at least `millis` of clock time has passed.
    pub fn advance_by(&mut self, millis: u64) -> u64 {
        let frames = millis.div_ceil(FRAME_INTERVAL_MILLIS);
        self.advance_frames(frames)
    }

    pub fn frames_advanced(&self) -> u64 {
        self.runtime.frames_advanced()
    }

    /// Callbacks currently waiting for the next frame. A resting scene
    /// reports zero.
    pub fn pending_callbacks(&self) -> usize {
        self.runtime.pending_callbacks()
    }
}

impl Default for TestRuntime {
    fn default() -> Self {
        Self::new()
    }
}
