//! Validation tests for harness construction.
//!
//! Everything the harness checks, it checks exactly once, before the first
//! trigger edge. These tests exercise those checks through the public API.

use scopegate::helpers::StubDecryptor;
use scopegate::{
    Config, Harness, HarnessError, HostDelay, NullTrigger, TestVector, BUILTIN_VECTOR,
};

fn build(config: Config, vector: TestVector) -> Result<(), HarnessError> {
    Harness::new(
        config,
        vector,
        NullTrigger,
        HostDelay,
        StubDecryptor::succeeding(),
    )
    .map(|_| ())
}

// =============================================================================
// SAMPLE COUNT
// =============================================================================

#[test]
fn zero_samples_rejected() {
    let mut config = Config::default();
    config.samples = 0;
    assert_eq!(build(config, BUILTIN_VECTOR), Err(HarnessError::ZeroSamples));
}

#[test]
fn one_sample_valid() {
    assert!(build(Config::bench().samples(1), BUILTIN_VECTOR).is_ok());
}

#[test]
#[should_panic(expected = "samples must be > 0")]
fn samples_zero_panics_in_builder() {
    let _ = Config::new().samples(0);
}

// =============================================================================
// VECTOR SHAPE
// =============================================================================

#[test]
fn short_key_rejected() {
    let vector = TestVector {
        key: &[0u8; 24],
        ..BUILTIN_VECTOR
    };
    assert_eq!(
        build(Config::bench(), vector),
        Err(HarnessError::BadKeyLength(24))
    );
}

#[test]
fn long_nonce_rejected() {
    let vector = TestVector {
        nonce: &[0u8; 13],
        ..BUILTIN_VECTOR
    };
    assert_eq!(
        build(Config::bench(), vector),
        Err(HarnessError::BadNonceLength(13))
    );
}

#[test]
fn short_tag_rejected() {
    let vector = TestVector {
        tag: &[0u8; 8],
        ..BUILTIN_VECTOR
    };
    assert_eq!(
        build(Config::bench(), vector),
        Err(HarnessError::BadTagLength(8))
    );
}

#[test]
fn empty_ciphertext_rejected() {
    let vector = TestVector {
        ciphertext: &[],
        ..BUILTIN_VECTOR
    };
    assert_eq!(
        build(Config::bench(), vector),
        Err(HarnessError::EmptyCiphertext)
    );
}

#[test]
fn empty_associated_data_is_fine() {
    // AAD may legitimately be empty; only the tag decides authenticity.
    let vector = TestVector {
        associated_data: &[],
        ..BUILTIN_VECTOR
    };
    assert!(build(Config::bench(), vector).is_ok());
}

// =============================================================================
// BUFFER CAPACITY
// =============================================================================

#[test]
fn buffer_smaller_than_ciphertext_rejected() {
    assert_eq!(
        build(Config::bench().buffer_capacity(575), BUILTIN_VECTOR),
        Err(HarnessError::BufferTooSmall {
            needed: 576,
            capacity: 575
        })
    );
}

#[test]
fn buffer_exactly_ciphertext_sized_valid() {
    assert!(build(Config::bench().buffer_capacity(576), BUILTIN_VECTOR).is_ok());
}

#[test]
fn oversized_buffer_valid() {
    assert!(build(Config::bench().buffer_capacity(4096), BUILTIN_VECTOR).is_ok());
}

#[test]
#[should_panic(expected = "buffer_capacity must be > 0")]
fn zero_capacity_panics_in_builder() {
    let _ = Config::new().buffer_capacity(0);
}

// =============================================================================
// ERROR DISPLAY
// =============================================================================

#[test]
fn errors_render_actionable_messages() {
    assert_eq!(
        HarnessError::BadKeyLength(16).to_string(),
        "key must be 32 bytes, got 16"
    );
    assert_eq!(
        HarnessError::BufferTooSmall {
            needed: 576,
            capacity: 64
        }
        .to_string(),
        "plaintext buffer holds 64 bytes but the ciphertext needs 576"
    );
}
