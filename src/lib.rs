// src/lib.rs

//! AES-256 CBC vs GCM throughput micro-benchmarks.
//!
//! This crate is a benchmark harness, not an encryption API. It contributes
//! a PKCS#7 padding codec, four timed operations (encrypt/decrypt under
//! AES-256-CBC and AES-256-GCM), and the key-material plumbing around them;
//! everything cryptographic is delegated to the RustCrypto `aes`, `cbc` and
//! `aes-gcm` crates.
//!
//! Two deliberate benchmark-only weakenings are baked in and documented at
//! their definition sites: the CBC IV is reused across calls
//! ([`context::BenchContext`]), and [`decrypt_gcm`] is a second seal pass
//! rather than authenticated decryption ([`modes::gcm`]). Neither is safe
//! outside a benchmark.

pub mod aliases;
pub mod consts;
pub mod context;
pub mod crypto;
pub mod error;
pub mod modes;
pub mod padding;

// High-level API — the four benchmark operations plus their inputs
pub use context::BenchContext;
pub use error::BenchError;
pub use modes::cbc::{decrypt_cbc, encrypt_cbc};
pub use modes::gcm::{decrypt_gcm, encrypt_gcm, open_gcm, seal_gcm};

// Codec — public at the root because the padding laws are independently
// useful to test and reuse
pub use padding::{pkcs7_pad, pkcs7_unpad};
