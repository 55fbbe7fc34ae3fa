//! Sample driver: one phase of trigger-bracketed measured work.

use std::time::Duration;

use crate::adapter::{Decryptor, Status, STATUS_OK};
use crate::vector::TestVector;

use super::delay::Delay;
use super::trigger::TriggerLine;

/// Drives the trigger line, the delay source, and the decrypt adapter
/// through one unit of measured work at a time.
///
/// The sampler owns all three collaborators for the duration of a run, so
/// exclusive use of the trigger line and the serial reuse of the output
/// buffer are enforced by the borrow checker rather than by convention.
#[derive(Debug)]
pub struct Sampler<T, D, C> {
    trigger: T,
    delay: D,
    decryptor: C,
}

impl<T: TriggerLine, D: Delay, C: Decryptor> Sampler<T, D, C> {
    /// Create a sampler from its collaborators.
    pub fn new(trigger: T, delay: D, decryptor: C) -> Self {
        Self {
            trigger,
            delay,
            decryptor,
        }
    }

    /// Configure the trigger line as an output at the idle level.
    pub fn arm(&mut self) {
        self.trigger.arm();
    }

    /// Block with the line idle.
    ///
    /// Used for the boot settle and the pause between phases; the trigger
    /// stays lowered throughout, so capture equipment sees dead time.
    pub fn idle(&mut self, interval: Duration) {
        self.delay.wait(interval);
    }

    /// Run one isolated-mode phase.
    ///
    /// Each repetition is its own bracket: raise, one decryption into
    /// `plaintext`, lower, then an idle gap. External equipment re-arms
    /// during the gap and captures one clean trace per repetition, free of
    /// contamination from adjacent calls. The line is low for the whole
    /// gap, so the delay itself is never part of a trace.
    ///
    /// Returns the status of the phase's last call.
    pub fn isolated(
        &mut self,
        vector: &TestVector,
        samples: usize,
        gap: Duration,
        plaintext: &mut [u8],
    ) -> Status {
        let mut status = STATUS_OK;
        for _ in 0..samples {
            self.trigger.raise();
            status = self.decryptor.decrypt(vector, plaintext);
            self.trigger.lower();
            self.delay.wait(gap);
        }
        status
    }

    /// Run one continuous-mode phase.
    ///
    /// A single envelope spans the whole burst: raise once, `samples`
    /// back-to-back decryptions with no toggling or waiting in between,
    /// lower after the last call. This exposes the steady-state profile of
    /// the operation without per-call trigger overhead, for averaging
    /// across contiguous repetitions.
    ///
    /// Returns the status of the burst's last call.
    pub fn continuous(
        &mut self,
        vector: &TestVector,
        samples: usize,
        plaintext: &mut [u8],
    ) -> Status {
        self.trigger.raise();
        let mut status = STATUS_OK;
        for _ in 0..samples {
            status = self.decryptor.decrypt(vector, plaintext);
        }
        self.trigger.lower();
        status
    }
}
