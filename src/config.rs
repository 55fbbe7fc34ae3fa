//! Configuration for the measurement schedule.

use std::time::Duration;

use crate::error::HarnessError;

/// Schedule parameters for a measurement run.
///
/// The defaults reproduce the hardware capture profile: 20 samples per
/// phase, a 3 s boot settle, 500 ms gaps between isolated samples, and a
/// 1 s pause before the continuous burst. All of it is compiled-in
/// configuration; nothing is re-read at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Decryptions per sampling phase.
    ///
    /// Both phases execute exactly this many calls; the run never stops
    /// early, so the capture window has a predictable length.
    pub samples: usize,

    /// Initial wait before the first trigger activity.
    ///
    /// Lets transient power draw from boot subside so it does not bleed
    /// into the first captured trace. Default: 3000 ms.
    pub boot_settle: Duration,

    /// Idle gap after each isolated sample, line lowered.
    ///
    /// Gives capture equipment time to re-arm between brackets.
    /// Default: 500 ms.
    pub sample_gap: Duration,

    /// Pause between the isolated and continuous phases, line lowered.
    ///
    /// Default: 1000 ms.
    pub phase_pause: Duration,

    /// Capacity of the reusable plaintext buffer in bytes.
    ///
    /// Allocated once at harness construction and never resized during a
    /// run, so allocator activity cannot show up in the trace. Must be at
    /// least the vector's ciphertext length; checked once when the harness
    /// is built. Default: 576, sized for the built-in vector.
    pub buffer_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            samples: 20,
            boot_settle: Duration::from_millis(3000),
            sample_gap: Duration::from_millis(500),
            phase_pause: Duration::from_millis(1000),
            buffer_capacity: 576,
        }
    }
}

impl Config {
    /// Create a configuration with the hardware capture defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with all delays zeroed.
    ///
    /// Same sample counts and sequencing, no wall-clock waits. Intended
    /// for CI and protocol tests where no capture equipment is listening.
    pub fn bench() -> Self {
        Self {
            boot_settle: Duration::ZERO,
            sample_gap: Duration::ZERO,
            phase_pause: Duration::ZERO,
            ..Default::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the decryptions per phase.
    pub fn samples(mut self, n: usize) -> Self {
        assert!(n > 0, "samples must be > 0");
        self.samples = n;
        self
    }

    /// Set the boot settle delay.
    pub fn boot_settle(mut self, interval: Duration) -> Self {
        self.boot_settle = interval;
        self
    }

    /// Set the gap between isolated samples.
    pub fn sample_gap(mut self, interval: Duration) -> Self {
        self.sample_gap = interval;
        self
    }

    /// Set the pause between the two phases.
    pub fn phase_pause(mut self, interval: Duration) -> Self {
        self.phase_pause = interval;
        self
    }

    /// Set the plaintext buffer capacity in bytes.
    pub fn buffer_capacity(mut self, bytes: usize) -> Self {
        assert!(bytes > 0, "buffer_capacity must be > 0");
        self.buffer_capacity = bytes;
        self
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// Lower bound on a run's wall-clock duration, excluding compute time.
    ///
    /// `boot_settle + samples * sample_gap + phase_pause`. External capture
    /// scheduling can rely on the run lasting at least this long.
    pub fn schedule_floor(&self) -> Duration {
        self.boot_settle + self.sample_gap * self.samples as u32 + self.phase_pause
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.samples == 0 {
            return Err(HarnessError::ZeroSamples);
        }
        Ok(())
    }
}
