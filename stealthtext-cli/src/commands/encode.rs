use crate::commands::read_payload_file;
use crate::PayloadKind;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Hide a payload inside `carrier`
///
/// The payload comes from `message`, else from `input_file`, else from one
/// line of stdin. The result goes to `output_file` or stdout.
pub fn execute(
    carrier: &str,
    message: Option<&str>,
    input_file: Option<&str>,
    output_file: Option<&str>,
    kind: PayloadKind,
) -> Result<()> {
    let payload = match (message, input_file) {
        (Some(message), _) => message.as_bytes().to_vec(),
        (None, Some(path)) => {
            info!("Reading payload from {}", path);
            read_payload_file(path, kind)?
        }
        (None, None) => read_payload_line()?,
    };

    info!(
        "Encoding {} payload bytes into {} carrier chars",
        payload.len(),
        carrier.chars().count()
    );

    let encoded = stealthtext_core::encode(carrier, &payload)
        .with_context(|| "Failed to encode payload")?;

    match output_file {
        Some(path) => {
            fs::write(path, &encoded)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            info!("Encoded text written to: {}", path);
        }
        None => println!("{}", encoded),
    }

    Ok(())
}

/// Prompt for a single line of payload text on stdin
fn read_payload_line() -> Result<Vec<u8>> {
    eprint!("Hidden string: ");
    io::stderr().flush().ok();

    read_payload_line_from(io::stdin().lock())
}

/// Read one line of payload text, without its line ending
pub fn read_payload_line_from<R: BufRead>(mut reader: R) -> Result<Vec<u8>> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read payload from stdin")?;

    Ok(line.trim_end_matches(&['\n', '\r'][..]).as_bytes().to_vec())
}
