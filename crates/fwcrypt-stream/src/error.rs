//! Error taxonomy for the framing layer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised by buffer, stream, and file encryption.
///
/// There is no retry or partial-success mode: on any error the operation has
/// failed as a whole and partially written output must be discarded.
#[derive(Error, Debug)]
pub enum EncryptError {
    /// The key's UTF-8 byte length is not exactly 16. Raised before any
    /// cryptographic work begins.
    #[error("key must be exactly 16 bytes, got {0}")]
    InvalidKeyLength(usize),
    /// The input file does not exist. Raised before the output is touched.
    #[error("source file `{}` not found", .0.display())]
    SourceNotFound(PathBuf),
    /// An underlying I/O operation failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
