//! Result of a completed measurement run.

use std::time::Duration;

use serde::Serialize;

use crate::adapter::{Status, STATUS_OK};

/// What a run executed and how it ended.
///
/// Only the final decryption's status survives the run; earlier statuses
/// are overwritten on purpose, since every call uses the same known-good
/// vector and the run never stops early. The call counts always equal the
/// configured sample count; they are reported so capture tooling can
/// cross-check trace segmentation against what actually executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Status of the last decryption in the continuous phase; the
    /// harness's overall result.
    pub status: Status,

    /// Configured decryptions per phase.
    pub samples_per_phase: usize,

    /// Decryptions executed in the isolated phase.
    pub isolated_calls: usize,

    /// Decryptions executed in the continuous phase.
    pub continuous_calls: usize,

    /// Measured wall-clock duration of the whole run.
    pub elapsed: Duration,

    /// Configured lower bound on the run duration, excluding compute time.
    pub schedule_floor: Duration,
}

impl RunReport {
    /// True when the final decryption verified its tag.
    ///
    /// With a known-good compiled-in vector, `false` points at an
    /// environment or data-integrity problem, not an expected condition.
    pub fn succeeded(&self) -> bool {
        self.status == STATUS_OK
    }
}
