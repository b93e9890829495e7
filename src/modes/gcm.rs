//! AES-256-GCM benchmark operations.
//!
//! The low-level pair [`seal_gcm`]/[`open_gcm`] takes an explicit nonce and
//! behaves like any AEAD: seal appends a 16-byte tag, open verifies it. The
//! benchmark-shaped pair [`encrypt_gcm`]/[`decrypt_gcm`] draws a fresh nonce
//! per call and discards it.
//!
//! # The `decrypt_gcm` quirk
//!
//! [`decrypt_gcm`] is **not** authenticated decryption. It runs a *second
//! seal pass* over its input under an independent fresh nonce, purely so the
//! decrypt-side benchmark has a workload comparable to the encrypt side.
//! This mirrors the measured workload this harness was built around; do not
//! "fix" it into a real open without renaming the benchmark, since that
//! changes what the numbers mean. Callers who want genuine decryption use
//! [`open_gcm`] with the nonce they sealed under.

use crate::aliases::Nonce12;
use crate::context::BenchContext;
use crate::crypto::rng::SecureRandomExt;
use crate::error::BenchError;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use secure_gate::RevealSecret;

fn new_cipher(ctx: &BenchContext) -> Result<Aes256Gcm, BenchError> {
    // Invalid key length is a programming error, but surface it instead of
    // proceeding with a half-initialized cipher.
    Aes256Gcm::new_from_slice(ctx.key_bytes())
        .map_err(|e| BenchError::Crypto(format!("AES-256-GCM init: {e}")))
}

/// Seal `plaintext` under the context key and the given nonce.
///
/// No associated data. Output is ciphertext followed by the 16-byte
/// authentication tag, so `output.len() == plaintext.len() + 16`.
pub fn seal_gcm(
    ctx: &BenchContext,
    nonce: &Nonce12,
    plaintext: &[u8],
) -> Result<Vec<u8>, BenchError> {
    let cipher = new_cipher(ctx)?;
    cipher
        .encrypt(Nonce::from_slice(nonce.expose_secret()), plaintext)
        .map_err(|_| BenchError::Crypto("GCM seal failed".into()))
}

/// Open a sealed buffer under the context key and the given nonce.
///
/// Genuine authenticated decryption: a wrong nonce, a wrong key, or a single
/// flipped bit anywhere in `sealed` fails verification.
///
/// # Errors
///
/// [`BenchError::Crypto`] on authentication failure or if `sealed` is
/// shorter than the 16-byte tag.
pub fn open_gcm(ctx: &BenchContext, nonce: &Nonce12, sealed: &[u8]) -> Result<Vec<u8>, BenchError> {
    let cipher = new_cipher(ctx)?;
    cipher
        .decrypt(Nonce::from_slice(nonce.expose_secret()), sealed)
        .map_err(|_| BenchError::Crypto("GCM open failed: authentication error".into()))
}

/// Seal `plaintext` under a fresh random 12-byte nonce.
///
/// The nonce is generated per call and then discarded — a real caller would
/// need it back to ever open the output, but the benchmark only measures
/// the seal throughput. Each call consumes entropy from the random source.
pub fn encrypt_gcm(ctx: &BenchContext, plaintext: &[u8]) -> Result<Vec<u8>, BenchError> {
    let nonce = Nonce12::random()?;
    seal_gcm(ctx, &nonce, plaintext)
}

/// Second seal pass standing in for the decrypt-side workload.
///
/// Generates an *independent* fresh nonce and seals `input` again — see the
/// module docs for why this is deliberately not a real open. The output is
/// unrelated to any plaintext `input` may have come from, and is 16 bytes
/// longer than `input` (another tag is appended).
pub fn decrypt_gcm(ctx: &BenchContext, input: &[u8]) -> Result<Vec<u8>, BenchError> {
    let nonce = Nonce12::random()?;
    seal_gcm(ctx, &nonce, input)
}
