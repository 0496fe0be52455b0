//! Payload encoding

use crate::error::StegoError;
use crate::selector::byte_to_selector;
use crate::types::GroupLayout;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::debug;

/// Hide `payload` inside `carrier`
///
/// The payload is split into one contiguous group per carrier character
/// (see [`GroupLayout`]) and each character is followed by the selectors of
/// its group:
///
/// ```text
/// carrier "AB", payload [1, 2, 3]
///   -> 'A' sel(1) sel(2) 'B' sel(3)
/// ```
///
/// Carrier length is counted in Unicode scalar values. The output holds
/// `carrier_len + payload.len()` scalar values.
pub fn encode(carrier: &str, payload: &[u8]) -> Result<String, StegoError> {
    let carrier_len = carrier.chars().count();
    let layout = GroupLayout::new(payload.len(), carrier_len)?;

    #[cfg(feature = "logging")]
    debug!(
        "Encoding {} bytes into {} carrier chars (quota {}, remainder {})",
        payload.len(),
        carrier_len,
        layout.quota(),
        layout.remainder()
    );

    // Selectors from the supplement block are 4 bytes in UTF-8
    let mut out = String::with_capacity(carrier.len() + payload.len() * 4);

    for (index, ch) in carrier.chars().enumerate() {
        out.push(ch);
        out.extend(payload[layout.group_range(index)].iter().map(|&b| byte_to_selector(b)));
    }

    Ok(out)
}

/// Hide the UTF-8 bytes of `text` inside `carrier`
pub fn encode_str(carrier: &str, text: &str) -> Result<String, StegoError> {
    encode(carrier, text.as_bytes())
}

/// Builder for encoding a payload assembled from several pieces
#[derive(Debug, Clone, Default)]
pub struct EncodeBuilder {
    carrier: String,
    payload: Vec<u8>,
}

impl EncodeBuilder {
    /// Create a new builder for the given carrier
    pub fn new(carrier: impl Into<String>) -> Self {
        Self {
            carrier: carrier.into(),
            payload: Vec::new(),
        }
    }

    /// Replace the payload
    pub fn payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Append raw bytes to the payload
    pub fn push_bytes(mut self, bytes: &[u8]) -> Self {
        self.payload.extend_from_slice(bytes);
        self
    }

    /// Append the UTF-8 bytes of `text` to the payload
    pub fn push_str(mut self, text: &str) -> Self {
        self.payload.extend_from_slice(text.as_bytes());
        self
    }

    /// Layout the encoder will use, validated
    pub fn layout(&self) -> Result<GroupLayout, StegoError> {
        GroupLayout::new(self.payload.len(), self.carrier.chars().count())
    }

    /// Build the encoded string
    pub fn build(self) -> Result<String, StegoError> {
        encode(&self.carrier, &self.payload)
    }
}
