//! Secure randomness for keys, IVs, nonces and benchmark payloads.
//!
//! A thread-local [`OsRng`] backs everything: the first call pays the OS
//! setup cost, every subsequent call is cheap, and each thread owns its rng
//! so concurrent benchmark workers never contend.
//!
//! Unlike a plain `fill_bytes`, every entry point here is fallible: a failing
//! random source surfaces as [`BenchError::Rng`] instead of silently leaving
//! zero bytes in the buffer. Callers treat that as fatal.

use crate::error::BenchError;
use rand::rngs::OsRng;
use rand::TryRngCore;
use secure_gate::Fixed;
use std::cell::RefCell;

// Thread-local OsRng wrapped in RefCell so we can mutably borrow it
thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

/// Fill `dest` with cryptographically secure random bytes.
///
/// Used for key/IV/nonce generation and for the 1 MiB benchmark payloads.
pub fn fill_random(dest: &mut [u8]) -> Result<(), BenchError> {
    RNG.with(|rng_cell| {
        rng_cell
            .borrow_mut()
            .try_fill_bytes(dest)
            .map_err(|e| BenchError::Rng(e.to_string()))
    })
}

/// Extension trait — gives `.random()` to all fixed-size secret types.
pub trait SecureRandomExt: Sized {
    /// Generate a cryptographically secure random instance of this type.
    fn random() -> Result<Self, BenchError>;
}

/// Blanket impl — every `Fixed<[u8; N]>` alias in [`crate::aliases`]
/// (`Aes256Key32`, `Iv16`, `Nonce12`, …) gets `.random()`.
impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline]
    fn random() -> Result<Self, BenchError> {
        let mut bytes = [0u8; N];
        fill_random(&mut bytes)?;
        Ok(Fixed::new(bytes))
    }
}
