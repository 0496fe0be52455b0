//! Subcommand implementations and the file helpers they share.

pub mod decode;
pub mod encode;
pub mod inspect;

use crate::PayloadKind;
use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Extensions treated as text when sniffing payload files
const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "text", "csv", "json", "xml", "html", "htm", "log", "yaml", "yml", "toml",
    "ini", "rs", "py", "js", "ts", "c", "h", "sh",
];

/// Check whether a path looks like a text file, by extension
pub fn is_text_file(path: &Path) -> bool {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    TEXT_EXTENSIONS.contains(&extension.as_str())
}

/// Resolve `Auto` against the file extension
pub fn resolve_kind(path: &Path, kind: PayloadKind) -> PayloadKind {
    match kind {
        PayloadKind::Auto if is_text_file(path) => PayloadKind::Text,
        PayloadKind::Auto => PayloadKind::Binary,
        other => other,
    }
}

/// Read the bytes to hide from a payload file
///
/// Text files are hidden verbatim. Binary files are hidden as their
/// standard base64 text so the result stays printable once decoded.
pub fn read_payload_file(path: &str, kind: PayloadKind) -> Result<Vec<u8>> {
    let kind = resolve_kind(Path::new(path), kind);
    debug!("Reading payload {} as {:?}", path, kind);

    match kind {
        PayloadKind::Binary => {
            let data =
                fs::read(path).with_context(|| format!("Failed to read input file: {}", path))?;
            Ok(BASE64.encode(data).into_bytes())
        }
        _ => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read text input file: {}", path))?;
            Ok(text.into_bytes())
        }
    }
}

/// Read all UTF-8 text from a reader
pub fn read_text_from<R: Read>(mut reader: R) -> Result<String> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}

/// Read UTF-8 text from a file, or from stdin when `path` is `-`
pub fn read_text_input(path: &str) -> Result<String> {
    if path == "-" {
        read_text_from(io::stdin().lock())
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path))
    }
}

/// Pick the text to work on: the input file wins over the positional argument
pub fn text_source(text: Option<&str>, input_file: Option<&str>) -> Result<String> {
    match (input_file, text) {
        (Some(path), _) => read_text_input(path),
        (None, Some(text)) => Ok(text.to_string()),
        (None, None) => bail!("No input: pass the text as an argument or use --input-file"),
    }
}
