//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, BenchError>`](BenchError).

use thiserror::Error;

/// The error type for all benchmark operations.
///
/// Covers padding codec errors, cipher errors, and random-source failures.
/// There are no retries anywhere in this crate: every operation is a one-shot
/// pure computation, and a failure aborts the benchmark run that hit it.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Block size passed to [`pkcs7_pad`](crate::padding::pkcs7_pad) is out of
    /// range.
    ///
    /// PKCS#7 stores the padding length in a single byte, so the block size
    /// must be in `1..=255`.
    #[error("invalid PKCS#7 block size: {0} (must be in 1..=255)")]
    InvalidBlockSize(usize),

    /// Malformed padding encountered during
    /// [`pkcs7_unpad`](crate::padding::pkcs7_unpad).
    ///
    /// Raised for an empty buffer, a zero padding length, a padding length
    /// larger than the buffer, or padding bytes that do not all equal the
    /// padding length.
    #[error("corrupt PKCS#7 padding: {0}")]
    CorruptPadding(&'static str),

    /// CBC ciphertext is not a positive multiple of the AES block size.
    ///
    /// The contained value is the offending length in bytes.
    #[error("ciphertext length {0} is not a positive multiple of 16 bytes")]
    InvalidCiphertextLength(usize),

    /// Cryptographic operation failed.
    ///
    /// Used for cipher construction failures (e.g. invalid key length) and
    /// for GCM seal/open failures. Construction errors are surfaced rather
    /// than discarded; treat them as fatal at initialization.
    #[error("crypto error: {0}")]
    Crypto(String),

    /// The system random source failed to fill a buffer.
    ///
    /// Rare (e.g. entropy exhaustion). Fatal at initialization — never
    /// substitute zero bytes for missing randomness.
    #[error("random source failure: {0}")]
    Rng(String),
}

impl From<&'static str> for BenchError {
    fn from(msg: &'static str) -> Self {
        BenchError::Crypto(msg.to_string())
    }
}
