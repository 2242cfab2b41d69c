//! Round transformations of the firmware cipher.
//!
//! The shuffle and diffusion passes deviate on purpose from their textbook
//! Rijndael counterparts: the shuffle skips column offset 0 and rotates each
//! remaining offset by its own distance, and diffusion mixes each 4-byte
//! group locally instead of spanning the whole block. The on-device decoder
//! reverses exactly these narrower operations.

use crate::block::{xor_in_place, Block};
use crate::sbox::substitute_byte;

/// Doubles a byte in the cipher's truncated 8-bit arithmetic, folding in the
/// reduction constant `0x1B` when the high bit falls off.
#[inline]
pub fn double(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

/// Substitutes every byte of the state through the fixed table.
#[inline]
pub fn substitute(state: &mut [u8]) {
    for byte in state.iter_mut() {
        *byte = substitute_byte(*byte);
    }
}

/// Rotates the four bytes at each non-zero column offset by that offset.
///
/// A pass whose reads would run past the end of the state writes nothing
/// back. Framed blocks are always 16 bytes, so the guard only matters for
/// malformed short states.
pub fn shuffle(state: &mut [u8]) {
    let mut tmp = [0u8; 4];
    for offset in 1..4 {
        let mut complete = true;
        for (j, slot) in tmp.iter_mut().enumerate() {
            let index = 4 * j + offset;
            if index < state.len() {
                *slot = state[index];
            } else {
                *slot = 0;
                complete = false;
            }
        }
        if !complete {
            continue;
        }
        for n in 0..4 {
            state[4 * n + offset] = tmp[(offset + n) % 4];
        }
    }
}

/// Mixes each complete 4-byte group of the state into itself.
///
/// Diffusion stays local to the group; a trailing partial group is left
/// untouched. The transform is forward-only.
pub fn diffuse(state: &mut [u8]) {
    for group in state.chunks_exact_mut(4) {
        let (a, b, c, d) = (group[0], group[1], group[2], group[3]);
        let k = a ^ b ^ c ^ d;
        group[0] = double(a ^ b) ^ a ^ k;
        group[1] = double(b ^ c) ^ b ^ k;
        group[2] = double(c ^ d) ^ c ^ k;
        group[3] = double(d ^ a) ^ d ^ k;
    }
}

/// XORs a round key into the state.
#[inline]
pub fn mix_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_fixed_points() {
        assert_eq!(double(0x80), 0x1b);
        assert_eq!(double(0x01), 0x02);
        assert_eq!(double(0xff), 0xe5);
        assert_eq!(double(0x00), 0x00);
    }

    #[test]
    fn substitute_maps_identity_prefix() {
        let mut state: Vec<u8> = (0..16).collect();
        substitute(&mut state);
        assert_eq!(
            state,
            [
                0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe,
                0xd7, 0xab, 0x76
            ]
        );
    }

    #[test]
    fn shuffle_rotates_each_offset_by_itself() {
        let mut state: Vec<u8> = (0..16).collect();
        shuffle(&mut state);
        assert_eq!(
            state,
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
    }

    #[test]
    fn shuffle_leaves_column_zero_alone() {
        let mut state: Vec<u8> = (0..16).collect();
        shuffle(&mut state);
        for row in 0..4 {
            assert_eq!(state[4 * row], (4 * row) as u8);
        }
    }

    #[test]
    fn shuffle_skips_incomplete_passes() {
        let mut state: Vec<u8> = (0..6).collect();
        shuffle(&mut state);
        assert_eq!(state, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn diffuse_fixed_vector() {
        let mut state = [0x00, 0x01, 0x02, 0x03];
        diffuse(&mut state);
        assert_eq!(state, [0x02, 0x07, 0x00, 0x05]);
    }

    #[test]
    fn diffuse_mixes_groups_independently() {
        let mut left = [0x00, 0x01, 0x02, 0x03, 0xaa, 0xbb, 0xcc, 0xdd];
        let mut right = [0xaa, 0xbb, 0xcc, 0xdd];
        diffuse(&mut left);
        diffuse(&mut right);
        assert_eq!(&left[..4], &[0x02, 0x07, 0x00, 0x05]);
        assert_eq!(&left[4..], &right);
    }

    #[test]
    fn diffuse_ignores_trailing_partial_group() {
        let mut state = [0x00, 0x01, 0x02, 0x03, 0x10, 0x20];
        diffuse(&mut state);
        assert_eq!(&state[4..], &[0x10, 0x20]);
    }
}
