//! Batch scheduler: sequences a full measurement run.

use std::time::Instant;

use tracing::{debug, info};

use crate::adapter::Decryptor;
use crate::config::Config;
use crate::error::HarnessError;
use crate::measurement::{Delay, Sampler, TriggerLine};
use crate::report::RunReport;
use crate::vector::TestVector;

/// Phase of a measurement run.
///
/// A run walks these states strictly forward; [`RunState::Done`] is
/// terminal. The harness never loops or restarts on its own; a fresh
/// capture window needs a fresh harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Waiting out the boot settle delay.
    Booting,
    /// Trigger armed and idle; sampling not yet started.
    Armed,
    /// Individually bracketed samples with idle gaps.
    IsolatedSampling,
    /// Line-idle pause between the two phases.
    InterphaseIdle,
    /// One envelope around the back-to-back burst.
    ContinuousSampling,
    /// Run complete; the report carries the final status.
    Done,
}

/// Owns the schedule, the fixed vector, the reusable output buffer, and
/// the sampler, and drives them through one complete run.
///
/// Construction validates the schedule, the vector shape, and the buffer
/// capacity once, so the run itself is straight-line: no retries, no
/// branching on intermediate failure, a fixed number of calls regardless
/// of status. The goal is a predictable-duration capture window, not
/// correctness verification.
#[derive(Debug)]
pub struct Harness<T, D, C> {
    config: Config,
    vector: TestVector,
    sampler: Sampler<T, D, C>,
    plaintext: Vec<u8>,
    state: RunState,
}

impl<T: TriggerLine, D: Delay, C: Decryptor> Harness<T, D, C> {
    /// Build a harness, validating configuration and vector.
    ///
    /// The plaintext buffer is allocated here, once, at the configured
    /// capacity; nothing reallocates it afterwards, so allocator activity
    /// cannot pollute the measured trace.
    pub fn new(
        config: Config,
        vector: TestVector,
        trigger: T,
        delay: D,
        decryptor: C,
    ) -> Result<Self, HarnessError> {
        config.validate()?;
        vector.validate()?;
        if config.buffer_capacity < vector.ciphertext.len() {
            return Err(HarnessError::BufferTooSmall {
                needed: vector.ciphertext.len(),
                capacity: config.buffer_capacity,
            });
        }

        let plaintext = vec![0u8; config.buffer_capacity];
        Ok(Self {
            config,
            vector,
            sampler: Sampler::new(trigger, delay, decryptor),
            plaintext,
            state: RunState::Booting,
        })
    }

    /// The configuration this harness runs.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The fixed vector every call decrypts.
    pub fn vector(&self) -> &TestVector {
        &self.vector
    }

    /// Current phase of the run.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// The reusable output buffer.
    ///
    /// After a successful run this holds the decrypted plaintext in its
    /// prefix; after a failed call its contents are unspecified.
    pub fn plaintext(&self) -> &[u8] {
        &self.plaintext
    }

    /// Execute the full measurement schedule.
    ///
    /// Settle, arm, isolated phase, inter-phase pause, continuous phase.
    /// Always runs to completion; the returned report carries the status
    /// of the final call, which is the harness's overall result.
    ///
    /// # Panics
    ///
    /// Panics if called again after a run has completed. `Done` is
    /// terminal; build a fresh harness for a fresh capture window.
    pub fn run(&mut self) -> RunReport {
        assert!(
            self.state != RunState::Done,
            "harness already completed its run"
        );
        let started = Instant::now();
        let samples = self.config.samples;

        // Construction leaves the harness in `Booting`; the settle wait is
        // that phase.
        self.sampler.idle(self.config.boot_settle);
        self.sampler.arm();
        self.transition(RunState::Armed);

        self.transition(RunState::IsolatedSampling);
        let isolated_status = self.sampler.isolated(
            &self.vector,
            samples,
            self.config.sample_gap,
            &mut self.plaintext,
        );
        debug!(isolated_status, samples, "isolated phase complete");

        self.transition(RunState::InterphaseIdle);
        self.sampler.idle(self.config.phase_pause);

        self.transition(RunState::ContinuousSampling);
        let status = self
            .sampler
            .continuous(&self.vector, samples, &mut self.plaintext);
        self.transition(RunState::Done);

        let elapsed = started.elapsed();
        info!(status, ?elapsed, "measurement run complete");

        RunReport {
            status,
            samples_per_phase: samples,
            isolated_calls: samples,
            continuous_calls: samples,
            elapsed,
            schedule_floor: self.config.schedule_floor(),
        }
    }

    fn transition(&mut self, next: RunState) {
        debug!(from = ?self.state, to = ?next, "phase transition");
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::STATUS_OK;
    use crate::helpers::{BusEvent, EventLog, StubDecryptor};
    use crate::vector::BUILTIN_VECTOR;

    fn protocol_harness(
        log: &EventLog,
        config: Config,
    ) -> Harness<
        crate::helpers::RecordingTrigger,
        crate::helpers::RecordingDelay,
        crate::helpers::RecordingDecryptor<StubDecryptor>,
    > {
        Harness::new(
            config,
            BUILTIN_VECTOR,
            log.trigger(),
            log.delay(),
            log.decryptor(StubDecryptor::succeeding()),
        )
        .expect("valid harness")
    }

    #[test]
    fn undersized_buffer_rejected_at_construction() {
        let log = EventLog::new();
        let config = Config::bench().buffer_capacity(16);
        let err = Harness::new(
            config,
            BUILTIN_VECTOR,
            log.trigger(),
            log.delay(),
            StubDecryptor::succeeding(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            HarnessError::BufferTooSmall {
                needed: 576,
                capacity: 16
            }
        );
    }

    #[test]
    fn run_reaches_done_with_final_status() {
        let log = EventLog::new();
        let mut harness = protocol_harness(&log, Config::bench().samples(2));

        assert_eq!(harness.state(), RunState::Booting);
        let report = harness.run();
        assert_eq!(harness.state(), RunState::Done);
        assert_eq!(report.status, STATUS_OK);
        assert_eq!(report.isolated_calls, 2);
        assert_eq!(report.continuous_calls, 2);
    }

    #[test]
    fn arm_happens_before_any_pulse() {
        let log = EventLog::new();
        let mut harness = protocol_harness(&log, Config::bench().samples(1));
        harness.run();

        let events = log.events();
        let armed = events
            .iter()
            .position(|e| *e == BusEvent::Armed)
            .expect("line armed");
        let first_pulse = events
            .iter()
            .position(|e| *e == BusEvent::Raised)
            .expect("at least one pulse");
        assert!(armed < first_pulse);
    }

    #[test]
    #[should_panic(expected = "already completed")]
    fn second_run_panics() {
        let log = EventLog::new();
        let mut harness = protocol_harness(&log, Config::bench().samples(1));
        harness.run();
        harness.run();
    }
}
