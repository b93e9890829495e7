//! AES-256-CBC benchmark operations.
//!
//! PKCS#7 padding comes from [`crate::padding`]; the block cipher and CBC
//! chaining come from the `aes` and `cbc` crates.
//!
//! # Security
//!
//! Both operations reuse the context's single IV for every call. With a
//! fixed key that makes encryption fully deterministic — identical
//! plaintexts produce identical ciphertexts — which is exactly what a
//! throughput benchmark wants and exactly what real CBC usage must never
//! do. CBC confidentiality requires a fresh, unpredictable IV per message.

use crate::consts::AES_BLOCK_SIZE;
use crate::context::BenchContext;
use crate::error::BenchError;
use crate::padding::{pkcs7_pad, pkcs7_unpad};
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Pad `plaintext` to a block multiple and encrypt it in CBC mode.
///
/// Returns a ciphertext of the same length as the padded input — always a
/// positive multiple of 16 bytes, and always strictly longer than the
/// plaintext (an aligned input gains a full padding block).
///
/// The AES key schedule is rebuilt on every call; that cost is part of the
/// measured workload.
///
/// # Errors
///
/// [`BenchError::Crypto`] if the cipher rejects the key/IV lengths.
pub fn encrypt_cbc(ctx: &BenchContext, plaintext: &[u8]) -> Result<Vec<u8>, BenchError> {
    let mut buf = pkcs7_pad(plaintext, AES_BLOCK_SIZE)?;

    let mut encryptor = Aes256CbcEnc::new_from_slices(ctx.key_bytes(), ctx.iv_bytes())
        .map_err(|e| BenchError::Crypto(format!("CBC encryptor init: {e}")))?;
    for block in buf.chunks_mut(AES_BLOCK_SIZE) {
        encryptor.encrypt_block_mut(GenericArray::from_mut_slice(block));
    }

    Ok(buf)
}

/// Decrypt a CBC ciphertext and strip its PKCS#7 padding.
///
/// # Errors
///
/// - [`BenchError::InvalidCiphertextLength`] if `ciphertext` is empty or not
///   a multiple of 16 bytes.
/// - [`BenchError::CorruptPadding`] if the decrypted buffer does not end in
///   valid padding. Unreachable when the input came from [`encrypt_cbc`]
///   under the same context, but reachable on arbitrary input.
/// - [`BenchError::Crypto`] if the cipher rejects the key/IV lengths.
pub fn decrypt_cbc(ctx: &BenchContext, ciphertext: &[u8]) -> Result<Vec<u8>, BenchError> {
    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
        return Err(BenchError::InvalidCiphertextLength(ciphertext.len()));
    }

    let mut buf = ciphertext.to_vec();
    let mut decryptor = Aes256CbcDec::new_from_slices(ctx.key_bytes(), ctx.iv_bytes())
        .map_err(|e| BenchError::Crypto(format!("CBC decryptor init: {e}")))?;
    for block in buf.chunks_mut(AES_BLOCK_SIZE) {
        decryptor.decrypt_block_mut(GenericArray::from_mut_slice(block));
    }

    let unpadded_len = pkcs7_unpad(&buf)?.len();
    buf.truncate(unpadded_len);
    Ok(buf)
}
