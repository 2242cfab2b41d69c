//! Windowed streaming encryption.

use std::io::{self, ErrorKind, Read, Write};

use fwcrypt_core::{encrypt_block, expand_key, pad_block, BLOCK_LEN, SCHEDULE_LEN};

use crate::buffer::parse_key;
use crate::error::EncryptError;

/// Bytes read from the source per window. A multiple of the block length,
/// so no block ever straddles a window boundary and only a final sub-16-byte
/// remainder is padded.
pub const WINDOW_LEN: usize = 2048;

/// Encrypts `source` into `sink` incrementally, returning the number of
/// ciphertext bytes written.
///
/// The block index keeps running across windows, so the output is
/// byte-identical to [`crate::encrypt_buffer`] over the same data. The sink
/// is flushed before returning; on error, whatever was already written must
/// be treated as invalid.
pub fn encrypt_stream<R: Read, W: Write>(
    mut source: R,
    mut sink: W,
    key: &str,
) -> Result<u64, EncryptError> {
    let schedule = expand_key(&parse_key(key)?);
    let mut window = [0u8; WINDOW_LEN];
    let mut block_index = 0usize;
    let mut written = 0u64;

    loop {
        let filled = fill_window(&mut source, &mut window)?;
        if filled == 0 {
            break;
        }
        for chunk in window[..filled].chunks(BLOCK_LEN) {
            let block = pad_block(chunk);
            let ciphertext = encrypt_block(&block, &schedule, block_index % SCHEDULE_LEN);
            sink.write_all(&ciphertext)?;
            written += BLOCK_LEN as u64;
            block_index += 1;
        }
        if filled < WINDOW_LEN {
            break;
        }
    }

    sink.flush()?;
    Ok(written)
}

/// Reads until the window is full or the source is exhausted. A short
/// result therefore always means end of input.
fn fill_window<R: Read>(source: &mut R, window: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < window.len() {
        match source.read(&mut window[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::encrypt_buffer;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const KEY: &str = "0123456789ABCDEF";

    fn seeded_data(len: usize) -> Vec<u8> {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        let mut data = vec![0u8; len];
        rng.fill_bytes(&mut data);
        data
    }

    #[test]
    fn matches_buffer_across_windows() {
        for len in [0, 1, 16, 2047, 2048, 2049, 5000] {
            let data = seeded_data(len);
            let mut sink = Vec::new();
            let written = encrypt_stream(&data[..], &mut sink, KEY).unwrap();
            let expected = encrypt_buffer(&data, KEY).unwrap();
            assert_eq!(sink, expected, "len {len}");
            assert_eq!(written as usize, expected.len());
        }
    }

    #[test]
    fn empty_source_writes_nothing() {
        let mut sink = Vec::new();
        assert_eq!(encrypt_stream(&[][..], &mut sink, KEY).unwrap(), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn rejects_bad_key_before_reading() {
        let mut sink = Vec::new();
        let result = encrypt_stream(&[0u8; 16][..], &mut sink, "short");
        assert!(matches!(result, Err(EncryptError::InvalidKeyLength(5))));
        assert!(sink.is_empty());
    }

    #[test]
    fn window_fills_through_fragmented_reads() {
        // A chained source hands back each fragment as a separate short read.
        let data = seeded_data(100);
        let (head, tail) = data.split_at(33);
        let mut sink = Vec::new();
        encrypt_stream(head.chain(tail), &mut sink, KEY).unwrap();
        assert_eq!(sink, encrypt_buffer(&data, KEY).unwrap());
    }
}
