//! The fixed test vector driven through every measured call.
//!
//! The vector is trusted, static configuration: generated offline, compiled
//! in, and never mutated. The harness validates its shape once at
//! construction; nothing re-checks it per call.

use crate::error::HarnessError;

/// Key length required by AES-256.
pub const KEY_LEN: usize = 32;

/// Nonce length required by GCM.
pub const NONCE_LEN: usize = 12;

/// Authentication tag length.
pub const TAG_LEN: usize = 16;

/// An immutable AES-256-GCM decryption input bundle.
///
/// All fields borrow `'static` data; a vector is configuration with process
/// lifetime, not a runtime value. The associated data is authenticated but
/// not encrypted, so the plaintext length equals the ciphertext length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestVector {
    /// AES-256 key (32 bytes).
    pub key: &'static [u8],
    /// GCM nonce (12 bytes).
    pub nonce: &'static [u8],
    /// Associated data, authenticated but not encrypted.
    pub associated_data: &'static [u8],
    /// Ciphertext to decrypt on every call.
    pub ciphertext: &'static [u8],
    /// Expected authentication tag (16 bytes).
    pub tag: &'static [u8],
}

impl TestVector {
    /// Check the vector against the adapter's expectations.
    ///
    /// Called once when a harness is built. Lengths here are the contract
    /// the decrypt adapter relies on; a vector that passes never causes a
    /// format failure at run time.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.key.len() != KEY_LEN {
            return Err(HarnessError::BadKeyLength(self.key.len()));
        }
        if self.nonce.len() != NONCE_LEN {
            return Err(HarnessError::BadNonceLength(self.nonce.len()));
        }
        if self.tag.len() != TAG_LEN {
            return Err(HarnessError::BadTagLength(self.tag.len()));
        }
        if self.ciphertext.is_empty() {
            return Err(HarnessError::EmptyCiphertext);
        }
        Ok(())
    }

    /// Length of the plaintext a successful decryption produces.
    pub fn plaintext_len(&self) -> usize {
        self.ciphertext.len()
    }
}

/// The compiled-in, known-good measurement vector.
///
/// 576 bytes of ciphertext under a fixed key/nonce with 12 bytes of
/// associated data. Decrypting it yields 576 identical bytes, which makes
/// bit-exact reproduction across runs trivial to check. Regenerate offline
/// if the key or payload ever needs to change; the harness treats the
/// values as opaque.
pub const BUILTIN_VECTOR: TestVector = TestVector {
    key: &KEY,
    nonce: &NONCE,
    associated_data: b"power-trace1",
    ciphertext: &CIPHERTEXT,
    tag: &TAG,
};

const KEY: [u8; KEY_LEN] = [
    0xb3, 0x37, 0x46, 0x04, 0x19, 0x74, 0x35, 0x1d, 0xcc, 0x14, 0x22, 0x4b,
    0x7a, 0x3a, 0xf7, 0xdb, 0x76, 0x9c, 0xc8, 0xd7, 0x69, 0xff, 0xa9, 0xd9,
    0x0e, 0x35, 0x0b, 0xc2, 0xa4, 0xcb, 0x3e, 0x17,
];

const NONCE: [u8; NONCE_LEN] = [
    0x54, 0xa1, 0x93, 0xfa, 0x25, 0xcd, 0x8f, 0x39, 0x94, 0xc9, 0x35, 0x4b,
];

const TAG: [u8; TAG_LEN] = [
    0xf3, 0xc5, 0x23, 0xfa, 0x7a, 0x8a, 0xb8, 0x4c, 0xf7, 0x2a, 0x5b, 0xff,
    0x14, 0xf1, 0x10, 0x89,
];

const CIPHERTEXT: [u8; 576] = [
    0xcb, 0x41, 0xd9, 0xfb, 0x79, 0xfd, 0xc9, 0x8f, 0x28, 0x4d, 0x14, 0x91, 0xad, 0x53, 0xba, 0xf7,
    0x84, 0x00, 0x79, 0x56, 0x07, 0x9d, 0x31, 0x16, 0xd5, 0x70, 0x8c, 0xfe, 0x61, 0x6f, 0x02, 0x41,
    0xee, 0x54, 0x8c, 0xb9, 0xee, 0x8d, 0xb5, 0x1b, 0xb1, 0x4e, 0x98, 0xd3, 0x40, 0x2f, 0x83, 0xba,
    0xc1, 0xdf, 0x52, 0xe9, 0x3f, 0x0b, 0x3e, 0x63, 0x2c, 0x88, 0xc3, 0xaf, 0xf9, 0xb3, 0x11, 0xa0,
    0x46, 0x85, 0x2a, 0x06, 0x45, 0x83, 0x4b, 0x3a, 0x29, 0xe1, 0xe8, 0x94, 0x82, 0x4a, 0x9c, 0x86,
    0x4b, 0x4f, 0xde, 0x2e, 0x52, 0x62, 0x00, 0x2b, 0xa8, 0x3d, 0xcf, 0xed, 0xd8, 0xe8, 0x57, 0x0f,
    0xc1, 0xb5, 0x8a, 0x94, 0x68, 0x8a, 0x94, 0x78, 0xc7, 0xc4, 0xd4, 0x46, 0x3e, 0x0a, 0x51, 0xa8,
    0x07, 0xac, 0x3c, 0x21, 0xbb, 0x95, 0xe0, 0xd4, 0xf1, 0x81, 0xdd, 0x38, 0x78, 0xba, 0xb8, 0x9e,
    0xc3, 0x77, 0xd5, 0x99, 0x27, 0xa4, 0xd2, 0x27, 0xdf, 0xd9, 0x7a, 0x9a, 0x1e, 0xac, 0x16, 0xdb,
    0xac, 0x5e, 0x0b, 0xfe, 0xb7, 0xe0, 0x68, 0x3f, 0x25, 0x09, 0xe0, 0x38, 0x73, 0x63, 0x5f, 0x7a,
    0xb0, 0x41, 0x3c, 0x77, 0x68, 0x51, 0x7f, 0xbc, 0xa4, 0x04, 0xc7, 0x70, 0x6b, 0x63, 0x4d, 0x37,
    0x70, 0x7f, 0x24, 0x0a, 0xd5, 0xc4, 0x2d, 0x84, 0x54, 0xf0, 0x8e, 0xab, 0x30, 0x8f, 0x26, 0x8d,
    0xdc, 0x2c, 0x26, 0x82, 0x03, 0x25, 0x54, 0x9e, 0x1e, 0x16, 0x0f, 0x1a, 0xa8, 0x8a, 0x27, 0xaa,
    0x58, 0x7b, 0x11, 0x70, 0xde, 0xb0, 0x33, 0xd9, 0x02, 0x82, 0x36, 0x82, 0x59, 0xc6, 0x8f, 0x93,
    0x64, 0xe7, 0x64, 0x6f, 0x70, 0xf6, 0xe6, 0x2d, 0xe2, 0x54, 0x61, 0x06, 0x88, 0xcd, 0xfe, 0xdc,
    0xf2, 0xbd, 0x75, 0xd4, 0x7b, 0x11, 0x83, 0x61, 0xf1, 0x4b, 0x89, 0xa3, 0xc5, 0x15, 0x53, 0x42,
    0xae, 0x5c, 0x84, 0x4d, 0xdf, 0xc0, 0x80, 0x6a, 0xc0, 0x07, 0xd7, 0x6f, 0x3f, 0x73, 0x6d, 0x4c,
    0xe9, 0x2e, 0xfe, 0xf4, 0x6e, 0xf8, 0x31, 0x70, 0x71, 0xac, 0xce, 0x77, 0x77, 0x23, 0x0e, 0x3f,
    0xc9, 0x27, 0x92, 0x66, 0x5f, 0x08, 0x4a, 0x0f, 0xad, 0x88, 0x6e, 0xc2, 0x95, 0x3d, 0x70, 0x96,
    0xf2, 0xdf, 0xfe, 0x72, 0xce, 0xf2, 0xc0, 0xc9, 0xa9, 0x1b, 0xfa, 0x9f, 0xad, 0x2c, 0x72, 0x5d,
    0x23, 0xb3, 0xf4, 0x7f, 0xec, 0x36, 0x6e, 0x53, 0x99, 0x0f, 0x6b, 0xa3, 0x39, 0x57, 0xf0, 0x1b,
    0x7e, 0x8b, 0x5f, 0x3f, 0x87, 0x7e, 0x16, 0x08, 0x6e, 0x87, 0x28, 0x97, 0x3c, 0xce, 0x26, 0x9a,
    0x22, 0x6b, 0x2d, 0x65, 0xa7, 0x7a, 0xab, 0x0c, 0x24, 0x65, 0xb7, 0xbd, 0xf7, 0x0e, 0xe6, 0xac,
    0x03, 0x04, 0x8c, 0x8f, 0x30, 0x82, 0xd8, 0x33, 0x32, 0x3e, 0x49, 0x99, 0xf4, 0x66, 0x6e, 0xdf,
    0xe5, 0xe2, 0xb6, 0x27, 0xb3, 0x19, 0xc0, 0x72, 0xca, 0x38, 0x55, 0xbe, 0x3e, 0xef, 0x63, 0xb6,
    0x39, 0x0d, 0x18, 0x7e, 0xb4, 0x85, 0x09, 0x2c, 0x5f, 0x26, 0x6c, 0x00, 0x77, 0x50, 0xfa, 0xca,
    0x23, 0x3d, 0xb8, 0x73, 0xdd, 0x21, 0x63, 0xdf, 0xf5, 0x72, 0xff, 0x98, 0x62, 0x86, 0x00, 0x2d,
    0x8f, 0x95, 0x68, 0xd4, 0x16, 0xb4, 0x5e, 0x65, 0xfa, 0xbc, 0xd9, 0xa4, 0x14, 0x4c, 0xcd, 0xb5,
    0xd3, 0x98, 0x6d, 0xdf, 0x34, 0x97, 0xe0, 0x37, 0xe2, 0x56, 0x1b, 0x48, 0x84, 0x4b, 0x59, 0xbc,
    0xe2, 0x86, 0x91, 0x6a, 0xb0, 0x28, 0x73, 0xa8, 0xa9, 0x6f, 0x73, 0x07, 0x57, 0x57, 0x8b, 0xb2,
    0x7d, 0x3c, 0xc9, 0xa2, 0xf3, 0xc5, 0x74, 0xfc, 0x58, 0x30, 0x88, 0xc0, 0xce, 0x0e, 0x6d, 0x80,
    0xf2, 0x6c, 0x50, 0x2d, 0x3f, 0x20, 0xfa, 0x8b, 0xa5, 0x66, 0x94, 0x0a, 0x9b, 0xfe, 0x69, 0x5b,
    0x66, 0xe7, 0x94, 0x0b, 0x85, 0x96, 0x9b, 0x60, 0x4b, 0x02, 0xf2, 0xb7, 0x43, 0xdd, 0x2d, 0xf5,
    0x0c, 0xb3, 0xb9, 0x88, 0x6e, 0xa0, 0x1f, 0xa0, 0x3a, 0xdf, 0x3e, 0x4c, 0x03, 0x25, 0xd7, 0x67,
    0x3b, 0xc8, 0x82, 0x0c, 0x07, 0x90, 0x41, 0xe1, 0x75, 0x91, 0x4c, 0xcd, 0x68, 0xda, 0x83, 0x50,
    0x99, 0x6b, 0x04, 0x9f, 0x9f, 0x9e, 0x3e, 0x26, 0x2c, 0x52, 0xae, 0x52, 0x82, 0xc4, 0xea, 0x50,
];
