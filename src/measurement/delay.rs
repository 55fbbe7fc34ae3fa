//! Blocking delay primitive.

use std::time::Duration;

/// An opaque blocking wait.
///
/// Every wait fully occupies the processor until it returns; the harness
/// is deliberately single-threaded so that nothing can interleave with a
/// measured window. Implementations need only block for *at least* the
/// requested interval; the schedule's guarantees are lower bounds.
pub trait Delay {
    /// Block for at least `interval`.
    fn wait(&mut self, interval: Duration);
}

/// Wall-clock delay over [`std::thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HostDelay;

impl Delay for HostDelay {
    fn wait(&mut self, interval: Duration) {
        if !interval.is_zero() {
            std::thread::sleep(interval);
        }
    }
}
