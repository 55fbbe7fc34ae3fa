//! Recording test doubles for the harness's collaborators.
//!
//! A shared [`EventLog`] hands out trigger, delay, and decryptor stand-ins
//! that append to one ordered event stream. Tests (and anyone validating a
//! capture setup without hardware) replay a schedule against the doubles
//! and assert on the exact bracketing the instrumentation would have seen.
//!
//! Everything here is single-threaded by design, like the harness itself;
//! the log is shared through `Rc`, not across threads.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::adapter::{Decryptor, Status, STATUS_OK};
use crate::measurement::{Delay, TriggerLine};
use crate::vector::TestVector;

/// One observable action on the measurement bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    /// The trigger line was configured as an output, idle.
    Armed,
    /// The trigger line went active.
    Raised,
    /// The trigger line returned to idle.
    Lowered,
    /// The delay primitive blocked for the given interval.
    Waited(Duration),
    /// A decryption completed with the given status.
    Decrypted(Status),
}

/// Shared, ordered record of every bus event.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<BusEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn record(&self, event: BusEvent) {
        self.events.borrow_mut().push(event);
    }

    /// Snapshot the events recorded so far, in order.
    pub fn events(&self) -> Vec<BusEvent> {
        self.events.borrow().clone()
    }

    /// Number of `Raised` events seen so far.
    pub fn pulses(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, BusEvent::Raised))
            .count()
    }

    /// A trigger stand-in recording into this log.
    pub fn trigger(&self) -> RecordingTrigger {
        RecordingTrigger { log: self.clone() }
    }

    /// A delay stand-in recording into this log (it never sleeps).
    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay { log: self.clone() }
    }

    /// Wrap a decryptor so each call's status lands in this log.
    pub fn decryptor<C: Decryptor>(&self, inner: C) -> RecordingDecryptor<C> {
        RecordingDecryptor {
            log: self.clone(),
            inner,
        }
    }
}

/// Trigger line that records instead of driving a pin.
#[derive(Debug, Clone)]
pub struct RecordingTrigger {
    log: EventLog,
}

impl TriggerLine for RecordingTrigger {
    fn arm(&mut self) {
        self.log.record(BusEvent::Armed);
    }

    fn raise(&mut self) {
        self.log.record(BusEvent::Raised);
    }

    fn lower(&mut self) {
        self.log.record(BusEvent::Lowered);
    }
}

/// Delay source that records the requested interval and returns at once.
#[derive(Debug, Clone)]
pub struct RecordingDelay {
    log: EventLog,
}

impl Delay for RecordingDelay {
    fn wait(&mut self, interval: Duration) {
        self.log.record(BusEvent::Waited(interval));
    }
}

/// Decryptor wrapper that logs every call's status.
#[derive(Debug, Clone)]
pub struct RecordingDecryptor<C> {
    log: EventLog,
    inner: C,
}

impl<C: Decryptor> Decryptor for RecordingDecryptor<C> {
    fn decrypt(&self, vector: &TestVector, plaintext: &mut [u8]) -> Status {
        let status = self.inner.decrypt(vector, plaintext);
        self.log.record(BusEvent::Decrypted(status));
        status
    }
}

/// Decryptor that performs no cryptography and returns a fixed status.
///
/// For protocol tests that care about bracketing and sequencing, not about
/// AES.
#[derive(Debug, Clone, Copy)]
pub struct StubDecryptor {
    status: Status,
}

impl StubDecryptor {
    /// A stub whose every call reports success.
    pub fn succeeding() -> Self {
        Self { status: STATUS_OK }
    }

    /// A stub whose every call reports the given non-zero status.
    pub fn failing(status: Status) -> Self {
        debug_assert_ne!(status, STATUS_OK);
        Self { status }
    }
}

impl Decryptor for StubDecryptor {
    fn decrypt(&self, _vector: &TestVector, _plaintext: &mut [u8]) -> Status {
        self.status
    }
}
