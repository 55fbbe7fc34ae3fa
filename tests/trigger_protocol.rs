//! Protocol tests for trigger bracketing and schedule sequencing.
//!
//! These run the full schedule against recording stand-ins and assert on
//! the exact event stream external instrumentation would observe: one
//! pulse per isolated sample, one envelope around the continuous burst,
//! line idle during every wait.

use std::time::Duration;

use scopegate::helpers::{BusEvent, EventLog, StubDecryptor};
use scopegate::{Config, Harness, RunState, BUILTIN_VECTOR, STATUS_OK};

const SAMPLES: usize = 20;

fn capture_run(config: Config) -> (EventLog, scopegate::RunReport) {
    let log = EventLog::new();
    let mut harness = Harness::new(
        config,
        BUILTIN_VECTOR,
        log.trigger(),
        log.delay(),
        log.decryptor(StubDecryptor::succeeding()),
    )
    .expect("valid harness");
    let report = harness.run();
    assert_eq!(harness.state(), RunState::Done);
    (log, report)
}

#[test]
fn full_schedule_event_stream() {
    let settle = Duration::from_millis(3000);
    let gap = Duration::from_millis(500);
    let pause = Duration::from_millis(1000);
    let (log, report) = capture_run(Config::default());

    let mut expected = vec![BusEvent::Waited(settle), BusEvent::Armed];
    for _ in 0..SAMPLES {
        expected.extend([
            BusEvent::Raised,
            BusEvent::Decrypted(STATUS_OK),
            BusEvent::Lowered,
            BusEvent::Waited(gap),
        ]);
    }
    expected.push(BusEvent::Waited(pause));
    expected.push(BusEvent::Raised);
    expected.extend(std::iter::repeat(BusEvent::Decrypted(STATUS_OK)).take(SAMPLES));
    expected.push(BusEvent::Lowered);

    assert_eq!(log.events(), expected);
    assert_eq!(report.status, STATUS_OK);
}

#[test]
fn pulses_are_strictly_paired() {
    let (log, _) = capture_run(Config::default());

    // The line must alternate raise/lower; a second raise while active
    // would merge two capture windows.
    let mut active = false;
    let mut envelopes = 0usize;
    for event in log.events() {
        match event {
            BusEvent::Raised => {
                assert!(!active, "raise while line already active");
                active = true;
                envelopes += 1;
            }
            BusEvent::Lowered => {
                assert!(active, "lower while line already idle");
                active = false;
            }
            _ => {}
        }
    }
    assert!(!active, "line left active at end of run");
    assert_eq!(envelopes, SAMPLES + 1);
}

#[test]
fn line_is_idle_during_every_wait() {
    let (log, _) = capture_run(Config::default());

    let mut active = false;
    for event in log.events() {
        match event {
            BusEvent::Raised => active = true,
            BusEvent::Lowered => active = false,
            BusEvent::Waited(_) => {
                assert!(!active, "delay taken with the trigger line active")
            }
            _ => {}
        }
    }
}

#[test]
fn every_isolated_decrypt_sits_in_its_own_bracket() {
    let (log, _) = capture_run(Config::default());
    let events = log.events();

    // Isolated phase ends at the inter-phase pause, the only 1000 ms wait
    // in the default schedule.
    let pause_at = events
        .iter()
        .position(|e| *e == BusEvent::Waited(Duration::from_millis(1000)))
        .expect("inter-phase pause present");

    let isolated = &events[..pause_at];
    let decrypts = isolated
        .iter()
        .filter(|e| matches!(e, BusEvent::Decrypted(_)))
        .count();
    let mut brackets = 0usize;
    for window in isolated.windows(3) {
        if let [BusEvent::Raised, BusEvent::Decrypted(_), BusEvent::Lowered] = window {
            brackets += 1;
        }
    }
    // As many complete raise/decrypt/lower triples as decryptions: every
    // call sat inside its own bracket.
    assert_eq!(brackets, SAMPLES);
    assert_eq!(decrypts, SAMPLES);
}

#[test]
fn continuous_burst_has_no_internal_toggles_or_waits() {
    let (log, _) = capture_run(Config::default());
    let events = log.events();

    let last_raise = events
        .iter()
        .rposition(|e| *e == BusEvent::Raised)
        .expect("continuous envelope opens");
    let last_lower = events
        .iter()
        .rposition(|e| *e == BusEvent::Lowered)
        .expect("continuous envelope closes");
    assert!(last_raise < last_lower);

    let burst = &events[last_raise + 1..last_lower];
    assert_eq!(burst.len(), SAMPLES);
    assert!(burst
        .iter()
        .all(|e| matches!(e, BusEvent::Decrypted(_))));
}

#[test]
fn failing_vector_changes_nothing_about_the_schedule() {
    let log = EventLog::new();
    let mut harness = Harness::new(
        Config::default(),
        BUILTIN_VECTOR,
        log.trigger(),
        log.delay(),
        log.decryptor(StubDecryptor::failing(1)),
    )
    .expect("valid harness");
    let report = harness.run();

    // Failures are never retried and never end the run early.
    assert_eq!(report.status, 1);
    assert_eq!(log.pulses(), SAMPLES + 1);
    let decrypts = log
        .events()
        .iter()
        .filter(|e| matches!(e, BusEvent::Decrypted(_)))
        .count();
    assert_eq!(decrypts, SAMPLES * 2);
}
