//! Global constants for the AES-256 mode benchmarks.
//!
//! Includes cipher geometry and the fixed benchmark buffer size.

/// AES block size in bytes. Also the CBC IV length.
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-256 key length (32 bytes = 256-bit key).
pub const AES256_KEY_SIZE: usize = 32;

/// Standard GCM nonce length (96 bits).
pub const GCM_NONCE_SIZE: usize = 12;

/// GCM authentication tag length appended to every sealed buffer.
pub const GCM_TAG_SIZE: usize = 16;

/// Largest block size PKCS#7 can express — the padding length must fit in
/// one byte.
pub const MAX_PKCS7_BLOCK_SIZE: usize = 255;

/// Fixed plaintext size used by the throughput benchmarks (1 MiB).
pub const BENCH_DATA_SIZE: usize = 1024 * 1024;
