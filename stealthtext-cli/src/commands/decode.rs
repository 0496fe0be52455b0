use crate::commands::text_source;
use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::fs;
use tracing::{info, warn};

/// Recover the payload hidden in `text` (or in `input_file`)
///
/// With `binary_write`, the recovered text is treated as base64 and the raw
/// bytes are written to `output_file`.
pub fn execute(
    text: Option<&str>,
    input_file: Option<&str>,
    output_file: Option<&str>,
    binary_write: bool,
) -> Result<()> {
    let source = text_source(text, input_file)?;

    info!("Decoding {} chars", source.chars().count());

    let decoded = stealthtext_core::decode(&source).with_context(|| "Failed to decode payload")?;

    if decoded.is_empty() {
        warn!("No hidden payload found in input");
    }

    match output_file {
        Some(path) if binary_write => {
            let bytes = BASE64
                .decode(decoded.trim())
                .with_context(|| "Hidden payload is not valid base64")?;
            fs::write(path, &bytes)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            info!("Wrote {} binary bytes to: {}", bytes.len(), path);
        }
        Some(path) => {
            fs::write(path, &decoded)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            info!("Decoded text written to: {}", path);
        }
        None => {
            if binary_write {
                warn!("--binary-write needs --output-file; printing text instead");
            }
            println!("{}", decoded);
        }
    }

    Ok(())
}
