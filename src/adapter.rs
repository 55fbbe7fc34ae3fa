//! The authenticated-decryption call the harness measures.
//!
//! The primitive itself is an external collaborator consumed through a
//! status-code contract; the harness never branches on intermediate
//! failures, it only carries the most recent status to the end of the run.

use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce, Tag};

use crate::vector::{TestVector, NONCE_LEN, TAG_LEN};

/// Status code returned by every decryption call.
///
/// `0` is success; anything non-zero is an authentication or format
/// failure, after which the output buffer's contents are unspecified.
pub type Status = i32;

/// The decryption verified the tag and wrote the plaintext.
pub const STATUS_OK: Status = 0;

/// Authentication or format failure; do not trust the buffer.
pub const STATUS_FAILED: Status = 1;

/// Authenticated decryption with a caller-supplied output buffer.
///
/// Implementations must be deterministic functions of the vector and must
/// execute in bounded time; their internal timing profile is exactly what
/// the harness exists to expose. Nothing inside `decrypt` may allocate,
/// log, or touch peripherals, because every instruction lands inside a
/// trigger bracket.
pub trait Decryptor {
    /// Attempt to decrypt `vector` into `plaintext`.
    ///
    /// `plaintext` must be at least `vector.ciphertext.len()` bytes; the
    /// plaintext is written to its prefix on success. Returns
    /// [`STATUS_OK`] when the tag verifies, [`STATUS_FAILED`] otherwise.
    fn decrypt(&self, vector: &TestVector, plaintext: &mut [u8]) -> Status;
}

/// AES-256-GCM decryption via the RustCrypto `aes-gcm` implementation.
///
/// The key schedule is rebuilt inside every call: the measured operation is
/// the full decrypt as a device would execute it from a raw key, key
/// expansion included. Decryption happens in place in the caller's buffer,
/// so the bracketed window performs no heap allocation.
#[derive(Debug, Default, Clone, Copy)]
pub struct GcmDecryptor;

impl Decryptor for GcmDecryptor {
    fn decrypt(&self, vector: &TestVector, plaintext: &mut [u8]) -> Status {
        let len = vector.ciphertext.len();
        if plaintext.len() < len
            || vector.nonce.len() != NONCE_LEN
            || vector.tag.len() != TAG_LEN
        {
            return STATUS_FAILED;
        }

        let cipher = match Aes256Gcm::new_from_slice(vector.key) {
            Ok(cipher) => cipher,
            Err(_) => return STATUS_FAILED,
        };

        let out = &mut plaintext[..len];
        out.copy_from_slice(vector.ciphertext);

        match cipher.decrypt_in_place_detached(
            Nonce::from_slice(vector.nonce),
            vector.associated_data,
            out,
            Tag::from_slice(vector.tag),
        ) {
            Ok(()) => STATUS_OK,
            Err(_) => STATUS_FAILED,
        }
    }
}
