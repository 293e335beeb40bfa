//! Test utilities: a manual-clock runtime, a recording track host and a
//! pointer-gesture script driver.
//!
//! Production embedders pump the runtime from a real frame source; tests
//! pump it from [`TestRuntime::advance_frames`] at a fixed 16 ms cadence
//! and read the runtime's frame counter to prove that exactly one driver
//! is alive.

mod harness;
mod recording_host;
mod script;

pub use harness::{TestRuntime, FRAME_INTERVAL_MILLIS};
pub use recording_host::RecordingHost;
pub use script::{PointerScript, ScriptStep};
