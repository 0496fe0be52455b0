//! Payload extraction

use crate::error::StegoError;
use crate::selector::{is_selector, selector_to_byte};
use alloc::string::String;
use bytes::{BufMut, Bytes, BytesMut};

#[cfg(feature = "logging")]
use tracing::{debug, trace};

/// Recover the raw payload bytes hidden in `text`
///
/// Every selector is mapped back to its byte in order of appearance. All
/// other characters, including the carrier, are skipped. Text without any
/// selectors yields an empty buffer.
pub fn decode_bytes(text: &str) -> Result<Bytes, StegoError> {
    if text.is_empty() {
        return Err(StegoError::EmptyInput);
    }

    // Each selector is at least 3 bytes of UTF-8
    let mut buf = BytesMut::with_capacity(text.len() / 3);
    for c in text.chars() {
        if let Some(b) = selector_to_byte(c) {
            buf.put_u8(b);
        }
    }

    #[cfg(feature = "logging")]
    debug!(
        "Recovered {} payload bytes from {} input bytes",
        buf.len(),
        text.len()
    );

    Ok(buf.freeze())
}

/// Recover the hidden payload from `text` as UTF-8
///
/// Fails with [`StegoError::InvalidUtf8`] when the recovered bytes are not
/// valid UTF-8, e.g. after a truncated or partially copied selector stream.
pub fn decode(text: &str) -> Result<String, StegoError> {
    let bytes = decode_bytes(text)?;
    let s = core::str::from_utf8(&bytes).map_err(|e| {
        #[cfg(feature = "logging")]
        trace!("Payload is not UTF-8: {}", e);
        StegoError::from(e)
    })?;
    Ok(String::from(s))
}

/// Remove every selector, leaving only the visible carrier text
pub fn strip(text: &str) -> String {
    text.chars().filter(|&c| !is_selector(c)).collect()
}
