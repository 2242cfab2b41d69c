//! File-level encryption entry points consumed by the build tooling.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::buffer::encrypt_buffer;
use crate::error::EncryptError;
use crate::stream::encrypt_stream;

/// Encrypts `input` into `output` and returns the raw ciphertext bytes.
///
/// The input must exist before the output is touched; a pre-existing file at
/// `output` is removed first. The written artifact is the bare concatenation
/// of ciphertext blocks, up to 15 zero-padding bytes longer than the input.
pub fn encrypt_file<P, Q>(input: P, output: Q, key: &str) -> Result<Vec<u8>, EncryptError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.exists() {
        return Err(EncryptError::SourceNotFound(input.to_path_buf()));
    }
    if output.exists() {
        fs::remove_file(output)?;
    }

    let data = fs::read(input)?;
    let ciphertext = encrypt_buffer(&data, key)?;
    fs::write(output, &ciphertext)?;
    Ok(ciphertext)
}

/// Streaming variant of [`encrypt_file`] for large images.
///
/// Encrypts through fixed read windows instead of buffering the whole file,
/// and returns the number of ciphertext bytes written. The artifact is
/// byte-identical to the one [`encrypt_file`] produces.
pub fn encrypt_file_streaming<P, Q>(input: P, output: Q, key: &str) -> Result<u64, EncryptError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.exists() {
        return Err(EncryptError::SourceNotFound(input.to_path_buf()));
    }

    let source = BufReader::new(File::open(input)?);
    let sink = BufWriter::new(File::create(output)?);
    encrypt_stream(source, sink, key)
}
