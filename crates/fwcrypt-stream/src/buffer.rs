//! Whole-buffer framing of the block cipher.

use fwcrypt_core::{
    encrypt_block, expand_key, pad_block, CipherKey, BLOCK_LEN, KEY_LEN, SCHEDULE_LEN,
};

use crate::error::EncryptError;

/// Parses a key string, accepting exactly 16 UTF-8 bytes.
pub fn parse_key(key: &str) -> Result<CipherKey, EncryptError> {
    let bytes = key.as_bytes();
    let raw: [u8; KEY_LEN] = bytes
        .try_into()
        .map_err(|_| EncryptError::InvalidKeyLength(bytes.len()))?;
    Ok(CipherKey::from(raw))
}

/// Encrypts an arbitrary-length buffer into raw concatenated ciphertext
/// blocks.
///
/// The buffer is split into 16-byte chunks with the final short chunk
/// zero-padded; chunk `n` is seeded by schedule entry `n % 11`. The output
/// is always a multiple of 16 bytes and carries no header or padding
/// metadata. An empty buffer yields an empty ciphertext.
pub fn encrypt_buffer(data: &[u8], key: &str) -> Result<Vec<u8>, EncryptError> {
    let schedule = expand_key(&parse_key(key)?);
    let mut ciphertext = Vec::with_capacity(data.len().div_ceil(BLOCK_LEN) * BLOCK_LEN);

    for (index, chunk) in data.chunks(BLOCK_LEN).enumerate() {
        let block = pad_block(chunk);
        ciphertext.extend_from_slice(&encrypt_block(&block, &schedule, index % SCHEDULE_LEN));
    }

    Ok(ciphertext)
}
