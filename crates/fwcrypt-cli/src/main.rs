//! Command-line interface for `fwcrypt`.

#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use fwcrypt_core::{encrypt_block, expand_key, BLOCK_LEN, SCHEDULE_LEN};
use fwcrypt_stream::{encrypt_file, encrypt_file_streaming, parse_key};

/// Firmware encryption CLI.
#[derive(Parser)]
#[command(
    name = "fwcrypt",
    version,
    author,
    about = "Encrypt firmware images for devices expecting the fwcrypt transform"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a firmware binary into a flashable artifact.
    Encrypt {
        /// Input firmware binary.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output path for the encrypted artifact.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Encryption key: a string of exactly 16 bytes.
        #[arg(long, value_name = "STRING")]
        key: String,
        /// Encrypt through fixed read windows instead of buffering the file.
        #[arg(long, default_value_t = false)]
        stream: bool,
    },
    /// Expand a key and print its round-key schedule.
    Schedule {
        /// Encryption key: a string of exactly 16 bytes.
        #[arg(long, value_name = "STRING")]
        key: String,
    },
    /// Encrypt a single 16-byte block given as hex, for comparing against a
    /// device decoder.
    Block {
        /// Encryption key: a string of exactly 16 bytes.
        #[arg(long, value_name = "STRING")]
        key: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        data: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt {
            input,
            output,
            key,
            stream,
        } => cmd_encrypt(&input, &output, &key, stream),
        Commands::Schedule { key } => cmd_schedule(&key),
        Commands::Block { key, data } => cmd_block(&key, &data),
    }
}

fn cmd_encrypt(input: &PathBuf, output: &PathBuf, key: &str, stream: bool) -> Result<()> {
    let written = if stream {
        encrypt_file_streaming(input, output, key)
            .with_context(|| format!("encrypt {}", input.display()))?
    } else {
        encrypt_file(input, output, key)
            .with_context(|| format!("encrypt {}", input.display()))?
            .len() as u64
    };
    println!(
        "encoded {} -> {} ({} ciphertext bytes)",
        input.display(),
        output.display(),
        written
    );
    Ok(())
}

fn cmd_schedule(key: &str) -> Result<()> {
    let schedule = expand_key(&parse_key(key).context("parse key")?);
    for index in 0..SCHEDULE_LEN {
        println!("round key {index:2}: {}", hex::encode(schedule.get(index)));
    }
    Ok(())
}

fn cmd_block(key: &str, data: &str) -> Result<()> {
    let bytes = hex::decode(data.trim()).context("decode block hex")?;
    if bytes.len() != BLOCK_LEN {
        bail!("block must be 16 bytes (32 hex characters)");
    }
    let mut block = [0u8; BLOCK_LEN];
    block.copy_from_slice(&bytes);

    let schedule = expand_key(&parse_key(key).context("parse key")?);
    println!("{}", hex::encode(encrypt_block(&block, &schedule, 0)));
    Ok(())
}
