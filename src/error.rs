//! Error types for harness construction.
//!
//! Run-time failures are not represented here: a failed decryption is a
//! non-zero [`Status`](crate::Status) carried through the schedule, never an
//! `Err`. These errors cover the one-time validation of configuration and
//! test vector before any measurement starts.

use thiserror::Error;

/// Errors detected while validating a harness before a run.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HarnessError {
    /// The configured sample count is zero.
    #[error("sample count must be positive")]
    ZeroSamples,

    /// The vector's key is not sized for AES-256.
    #[error("key must be 32 bytes, got {0}")]
    BadKeyLength(usize),

    /// The vector's nonce does not match the AEAD nonce size.
    #[error("nonce must be 12 bytes, got {0}")]
    BadNonceLength(usize),

    /// The vector's authentication tag is not 16 bytes.
    #[error("tag must be 16 bytes, got {0}")]
    BadTagLength(usize),

    /// The vector carries no ciphertext to measure.
    #[error("ciphertext must not be empty")]
    EmptyCiphertext,

    /// The configured plaintext buffer cannot hold the decrypted output.
    #[error("plaintext buffer holds {capacity} bytes but the ciphertext needs {needed}")]
    BufferTooSmall {
        /// Bytes the vector's ciphertext decrypts into.
        needed: usize,
        /// Configured buffer capacity.
        capacity: usize,
    },
}
