//! Monotonic timing, in the style of `lbf::time`: a process-wide epoch and
//! elapsed-since helpers. No wasm target is in scope here, so this is a
//! thin wrapper over [`std::time::Instant`] rather than the teacher's
//! wasm/native split.

use std::sync::LazyLock;
use std::time::{Duration, Instant};

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

pub fn elapsed_since_epoch() -> Duration {
    EPOCH.elapsed()
}
