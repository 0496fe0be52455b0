//! # StealthText Core
//!
//! Hides an arbitrary byte payload inside ordinary carrier text by appending
//! invisible Unicode variation selectors after each visible character.
//!
//! ## Modules
//!
//! - `constants`: Selector code point ranges
//! - `selector`: Byte to variation selector mapping
//! - `types`: Group layout arithmetic
//! - `encoder`: Interleaving payload bytes into a carrier
//! - `decoder`: Extracting payload bytes from encoded text
//! - `scanner`: Non-failing inspection of encoded text
//! - `error`: Error type

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod scanner;
pub mod selector;
pub mod types;

// Re-export commonly used items
pub use decoder::{decode, decode_bytes, strip};
pub use encoder::{encode, encode_str, EncodeBuilder};
pub use error::StegoError;
pub use scanner::{scan_text, scan_text_with_stats, LocatedGroup, ScanStats};
pub use selector::{byte_to_selector, is_selector, selector_to_byte};
pub use types::GroupLayout;

/// Result type alias for StealthText operations
pub type Result<T> = core::result::Result<T, StegoError>;
