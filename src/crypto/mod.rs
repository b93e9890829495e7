//! Low-level crypto support (secure randomness).
//!
//! Cipher primitives themselves live in the `aes`, `cbc` and `aes-gcm`
//! crates; this module only owns the random source.

pub mod rng;
