//! Buffer, stream, and file framing for the fwcrypt firmware cipher.
//!
//! This crate owns everything between raw bytes and the block transform in
//! `fwcrypt-core`: key-string validation, splitting data into 16-byte blocks
//! (zero-padding the final short block), cycling the eleven round-key
//! schedule entries across consecutive blocks, and the whole-buffer,
//! streaming, and file-level entry points. Ciphertext is the bare
//! concatenation of block outputs with no header or padding metadata, so its
//! length is always the input length rounded up to a multiple of 16.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod buffer;
mod error;
mod file;
mod stream;

pub use crate::buffer::{encrypt_buffer, parse_key};
pub use crate::error::EncryptError;
pub use crate::file::{encrypt_file, encrypt_file_streaming};
pub use crate::stream::{encrypt_stream, WINDOW_LEN};
