//! PKCS#7 padding codec for the CBC benchmark path.
//!
//! Pure functions over their inputs; no secrets, no side effects.
//!
//! The padding length is always in `[1, block_size]` — an input whose length
//! is already a multiple of the block size gains a full extra block. That is
//! what makes the encoding unambiguous and the round-trip law
//! `pkcs7_unpad(&pkcs7_pad(d, b)?) == d` hold for every input.

use crate::consts::MAX_PKCS7_BLOCK_SIZE;
use crate::error::BenchError;

/// Pad `data` to the next multiple of `block_size`, PKCS#7 style.
///
/// Appends `pad_len` bytes each holding the value `pad_len`, where
/// `pad_len = block_size - data.len() % block_size` (never zero; a full
/// extra block when `data.len()` is already a multiple).
///
/// # Errors
///
/// [`BenchError::InvalidBlockSize`] if `block_size` is `0` or greater than
/// `255` — the padding value must fit in one byte.
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>, BenchError> {
    if block_size == 0 || block_size > MAX_PKCS7_BLOCK_SIZE {
        return Err(BenchError::InvalidBlockSize(block_size));
    }

    let pad_len = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    Ok(padded)
}

/// Strip PKCS#7 padding, returning the unpadded prefix of `data`.
///
/// Reads the final byte as the padding length and removes that many bytes.
/// This implementation is hardened: every padding byte must equal the
/// padding length, so a buffer ending in `03 02 02` is rejected rather than
/// silently truncated.
///
/// # Errors
///
/// [`BenchError::CorruptPadding`] if `data` is empty, the padding length is
/// zero, the padding length exceeds `data.len()`, or the padding bytes do
/// not all match the padding length.
///
/// Not constant-time. The benchmark only ever unpads buffers it produced
/// itself, so padding-oracle hardening is out of scope here.
pub fn pkcs7_unpad(data: &[u8]) -> Result<&[u8], BenchError> {
    let pad_len = *data
        .last()
        .ok_or(BenchError::CorruptPadding("empty buffer"))? as usize;

    if pad_len == 0 {
        return Err(BenchError::CorruptPadding("padding length is zero"));
    }
    if pad_len > data.len() {
        return Err(BenchError::CorruptPadding("padding length exceeds buffer"));
    }

    let (body, padding) = data.split_at(data.len() - pad_len);
    if !padding.iter().all(|&b| b as usize == pad_len) {
        return Err(BenchError::CorruptPadding(
            "padding bytes do not match padding length",
        ));
    }

    Ok(body)
}
