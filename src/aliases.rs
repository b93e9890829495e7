//! # Secure-Gate Type Aliases
//!
//! Type aliases for the fixed-size secret material used by the benchmarks,
//! built on [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! All of them zeroize on drop and require explicit `.expose_secret()` /
//! `.expose_secret_mut()` to reach the underlying bytes.
//!
//! - [`SpanBuffer<N>`] — generic secure stack buffer of size `N`
//! - [`Aes256Key32`] — 32-byte AES-256 key
//! - [`Iv16`] — 16-byte CBC initialization vector
//! - [`Nonce12`] — 12-byte GCM nonce
//!
//! Fresh random instances come from
//! [`SecureRandomExt::random`](crate::crypto::rng::SecureRandomExt::random).

/// Generic secure stack buffer (direct alias to `secure-gate`'s `Fixed`).
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

// Semantic sub-types — compile-time safe
pub type Aes256Key32 = SpanBuffer<32>; // benchmark key, shared by both modes
pub type Iv16 = SpanBuffer<16>; // CBC IV, deliberately reused across calls
pub type Nonce12 = SpanBuffer<12>; // GCM nonce, fresh per call
