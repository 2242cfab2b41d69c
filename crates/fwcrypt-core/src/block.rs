//! Block representation helpers.

/// Length in bytes of one cipher block.
pub const BLOCK_LEN: usize = 16;

/// Working block of 16 bytes, addressed as a 4x4 row-major matrix by the
/// shuffle pass.
pub type Block = [u8; BLOCK_LEN];

/// XORs `rhs` into `dst` byte-wise.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies a chunk of at most 16 bytes into a fresh block, zero-extending a
/// short final chunk. Padding carries no marker; the consumer is expected to
/// know the original image length.
#[inline]
pub fn pad_block(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_LEN];
    block[..chunk.len()].copy_from_slice(chunk);
    block
}
