//! # scopegate
//!
//! Drive a fixed AES-256-GCM decryption through a trigger-bracketed
//! measurement schedule so external instrumentation (an oscilloscope or
//! power analyzer) can segment and average power/timing traces of the
//! operation.
//!
//! The harness runs two sampling regimes over the same compiled-in test
//! vector:
//!
//! - **Isolated sampling**: each decryption is bracketed by its own trigger
//!   pulse, with the line idle during a configurable gap between
//!   repetitions. Capture equipment re-arms per pulse and records one clean
//!   trace per call.
//! - **Continuous sampling**: a single trigger envelope spans a back-to-back
//!   burst of decryptions with no gaps, exposing the steady-state profile
//!   for averaging.
//!
//! The cryptographic primitive, the trigger line, and the delay source are
//! all consumed through traits, so the same schedule runs against host
//! stand-ins in tests and against real peripherals on a target board.
//!
//! ## Common Pitfall: Work Inside the Bracket
//!
//! Everything executed between `raise` and `lower` lands in the captured
//! trace. Implementations of [`Decryptor`] must not log, allocate, or touch
//! peripherals; the provided [`GcmDecryptor`] decrypts in place into the
//! harness's preallocated buffer for exactly this reason.
//!
//! ## Quick Start
//!
//! ```no_run
//! use scopegate::{
//!     Config, GcmDecryptor, Harness, HostDelay, NullTrigger, BUILTIN_VECTOR,
//! };
//!
//! let mut harness = Harness::new(
//!     Config::default(),
//!     BUILTIN_VECTOR,
//!     NullTrigger,
//!     HostDelay,
//!     GcmDecryptor,
//! )?;
//!
//! let report = harness.run();
//! println!("final status: {}", report.status);
//! # Ok::<(), scopegate::HarnessError>(())
//! ```
//!
//! On a microcontroller target, swap [`NullTrigger`] and [`HostDelay`] for
//! implementations over the board's GPIO and timer peripherals; the schedule
//! and its return semantics are identical.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod adapter;
mod config;
mod error;
mod harness;
mod report;
mod vector;

// Functional modules
pub mod helpers;
pub mod measurement;
pub mod output;

// Re-exports for public API
pub use adapter::{Decryptor, GcmDecryptor, Status, STATUS_FAILED, STATUS_OK};
pub use config::Config;
pub use error::HarnessError;
pub use harness::{Harness, RunState};
pub use measurement::{Delay, HostDelay, NullTrigger, Sampler, TriggerLine};
pub use report::RunReport;
pub use vector::{TestVector, BUILTIN_VECTOR, KEY_LEN, NONCE_LEN, TAG_LEN};

/// Run the built-in vector through a default hosted harness.
///
/// This is the hosted analogue of a firmware boot entry: default schedule,
/// compiled-in vector, no trigger hardware, real wall-clock delays. The
/// returned report carries the status of the final decryption, which is the
/// harness's overall result.
pub fn run_builtin() -> Result<RunReport, HarnessError> {
    let mut harness = Harness::new(
        Config::default(),
        BUILTIN_VECTOR,
        NullTrigger,
        HostDelay,
        GcmDecryptor,
    )?;
    Ok(harness.run())
}
