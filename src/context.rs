//! Benchmark key material.
//!
//! The key and IV live in one explicit [`BenchContext`] value constructed
//! once and passed by reference into every operation. Nothing here is
//! process-global, so tests can pin their own material and parallel
//! benchmark workers share the context immutably.

use crate::aliases::{Aes256Key32, Iv16};
use crate::consts::{AES256_KEY_SIZE, AES_BLOCK_SIZE};
use crate::crypto::rng::SecureRandomExt;
use crate::error::BenchError;
use secure_gate::RevealSecret;

/// Fixed key material for one benchmark run: a 32-byte AES-256 key and a
/// 16-byte CBC IV.
///
/// Both values are read-only after construction and auto-zeroize on drop.
/// The IV is **reused across every CBC call** under the same key — that
/// amortizes setup cost for the benchmark loop but destroys CBC
/// confidentiality, so never lift this type into real encryption code.
pub struct BenchContext {
    key: Aes256Key32,
    iv: Iv16,
}

impl BenchContext {
    /// Generate a fresh random context from the secure random source.
    ///
    /// # Errors
    ///
    /// [`BenchError::Rng`] if the random source fails; callers should treat
    /// that as fatal rather than proceed with partial key material.
    pub fn generate() -> Result<Self, BenchError> {
        Ok(Self {
            key: Aes256Key32::random()?,
            iv: Iv16::random()?,
        })
    }

    /// Build a context from caller-chosen key and IV bytes.
    ///
    /// Intended for tests that need deterministic, reproducible material.
    pub fn from_parts(key: [u8; AES256_KEY_SIZE], iv: [u8; AES_BLOCK_SIZE]) -> Self {
        Self {
            key: Aes256Key32::new(key),
            iv: Iv16::new(iv),
        }
    }

    pub(crate) fn key_bytes(&self) -> &[u8] {
        self.key.expose_secret()
    }

    pub(crate) fn iv_bytes(&self) -> &[u8] {
        self.iv.expose_secret()
    }
}
