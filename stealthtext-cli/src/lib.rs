//! Library entry for stealthtext-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;

/// How a payload file is turned into bytes before encoding
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PayloadKind {
    /// Decide from the file extension
    #[default]
    Auto,
    /// Read as UTF-8 text and hide it verbatim
    Text,
    /// Read raw bytes and hide their base64 text
    Binary,
}
