//! Core transform of the fwcrypt firmware cipher.
//!
//! This crate implements the bespoke 128-bit-block substitution-permutation
//! network used to obscure firmware images before flashing:
//! - Key-schedule expansion of a 16-byte key into eleven round keys.
//! - Single-block encryption through ten rounds of substitution, partial
//!   row-shuffle, group-local diffusion, and round-key mixing.
//! - The stateless round primitives backing both.
//!
//! The scheme is intentionally non-interoperable and makes no
//! cryptographic-strength claim; the sole contract is bit-exact
//! reproducibility, because the consuming device reverses this exact
//! transform. Buffer splitting, padding, and file handling live in
//! `fwcrypt-stream`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod key;
mod round;
mod sbox;

pub use crate::block::{pad_block, xor_in_place, Block, BLOCK_LEN};
pub use crate::cipher::{encrypt_block, expand_key, ROUNDS};
pub use crate::key::{CipherKey, RoundKeySchedule, KEY_LEN, SCHEDULE_LEN};
pub use crate::round::{diffuse, double, mix_round_key, shuffle, substitute};
pub use crate::sbox::substitute_byte;
