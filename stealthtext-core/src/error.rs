//! Error types for StealthText operations

/// Errors that can occur while encoding or decoding hidden payloads
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// Carrier text has no characters to attach selectors to
    #[cfg_attr(feature = "std", error("Carrier string is empty"))]
    EmptyCarrier,

    /// Payload has fewer bytes than the carrier has characters
    #[cfg_attr(
        feature = "std",
        error("Payload too short: {payload_len} bytes for a carrier of {carrier_len} characters")
    )]
    PayloadTooShort {
        /// Number of payload bytes supplied.
        payload_len: usize,
        /// Number of characters in the carrier.
        carrier_len: usize,
    },

    /// Nothing to decode
    #[cfg_attr(feature = "std", error("Input string is empty"))]
    EmptyInput,

    /// Recovered bytes are not valid UTF-8
    #[cfg_attr(
        feature = "std",
        error("Recovered payload is not valid UTF-8 (valid up to byte {valid_up_to})")
    )]
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
}

impl From<core::str::Utf8Error> for StegoError {
    fn from(err: core::str::Utf8Error) -> Self {
        StegoError::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for StegoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}
