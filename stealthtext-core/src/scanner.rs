//! Inspection of encoded text
//!
//! Unlike [`crate::decoder`], scanning never fails: it walks the text once and
//! reports which carrier character holds which bytes, so damaged or foreign
//! input can still be examined.

use crate::selector::selector_to_byte;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// A carrier character together with the bytes hidden after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatedGroup {
    /// Position of the carrier character, in scalar values from the start of the text
    pub index: usize,

    /// The visible carrier character
    pub carrier: char,

    /// Bytes decoded from the selectors that follow it
    pub bytes: Vec<u8>,
}

/// Statistics gathered while scanning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Total scalar values examined
    pub chars_scanned: usize,

    /// Scalar values that were not selectors
    pub carrier_chars: usize,

    /// Scalar values that were selectors
    pub selectors_found: usize,

    /// Selectors seen before the first carrier character
    pub leading_selectors: usize,

    /// Total bytes recovered, leading selectors included
    pub payload_len: usize,

    /// Carrier characters with no selectors after them
    pub empty_groups: usize,
}

impl ScanStats {
    /// Average number of hidden bytes per carrier character
    pub fn payload_ratio(&self) -> f64 {
        if self.carrier_chars == 0 {
            0.0
        } else {
            self.selectors_found as f64 / self.carrier_chars as f64
        }
    }
}

/// Split `text` into carrier characters and their hidden bytes
pub fn scan_text(text: &str) -> Vec<LocatedGroup> {
    scan_text_with_stats(text).0
}

/// Scan `text` and also return statistics
pub fn scan_text_with_stats(text: &str) -> (Vec<LocatedGroup>, ScanStats) {
    let mut groups: Vec<LocatedGroup> = Vec::new();
    let mut stats = ScanStats::default();

    #[cfg(feature = "logging")]
    debug!("Starting scan of {} bytes", text.len());

    for (index, c) in text.chars().enumerate() {
        stats.chars_scanned += 1;

        match selector_to_byte(c) {
            Some(b) => {
                stats.selectors_found += 1;
                stats.payload_len += 1;
                match groups.last_mut() {
                    Some(group) => group.bytes.push(b),
                    None => stats.leading_selectors += 1,
                }
            }
            None => {
                stats.carrier_chars += 1;
                groups.push(LocatedGroup {
                    index,
                    carrier: c,
                    bytes: Vec::new(),
                });
            }
        }
    }

    stats.empty_groups = groups.iter().filter(|g| g.bytes.is_empty()).count();

    #[cfg(feature = "logging")]
    {
        if stats.leading_selectors > 0 {
            warn!(
                "{} selectors precede the first carrier character",
                stats.leading_selectors
            );
        }
        debug!(
            "Scan complete: {} carrier chars, {} payload bytes",
            stats.carrier_chars, stats.payload_len
        );
    }

    (groups, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::selector::byte_to_selector;
    use crate::types::GroupLayout;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn test_scan_encoded() {
        let payload: Vec<u8> = (0..23).collect();
        let encoded = encode("carrier", &payload).unwrap();
        let (groups, stats) = scan_text_with_stats(&encoded);

        let layout = GroupLayout::new(23, 7).unwrap();
        assert_eq!(groups.len(), 7);
        for (i, group) in groups.iter().enumerate() {
            assert_eq!(group.bytes, &payload[layout.group_range(i)]);
        }
        assert_eq!(stats.carrier_chars, 7);
        assert_eq!(stats.selectors_found, 23);
        assert_eq!(stats.chars_scanned, 30);
        assert_eq!(stats.empty_groups, 0);
    }

    #[test]
    fn test_scan_indices() {
        let encoded = encode("ab", &[9, 8, 7]).unwrap();
        let groups = scan_text(&encoded);
        assert_eq!(groups[0].index, 0);
        assert_eq!(groups[1].index, 3);
        assert_eq!(groups[1].carrier, 'b');
    }

    #[test]
    fn test_scan_leading_selectors() {
        let text: String = [byte_to_selector(1), byte_to_selector(2), 'z']
            .iter()
            .collect();
        let (groups, stats) = scan_text_with_stats(&text);
        assert_eq!(
            groups,
            vec![LocatedGroup {
                index: 2,
                carrier: 'z',
                bytes: vec![]
            }]
        );
        assert_eq!(stats.leading_selectors, 2);
        assert_eq!(stats.payload_len, 2);
        assert_eq!(stats.empty_groups, 1);
    }

    #[test]
    fn test_scan_empty() {
        let (groups, stats) = scan_text_with_stats("");
        assert!(groups.is_empty());
        assert_eq!(stats, ScanStats::default());
        assert_eq!(stats.payload_ratio(), 0.0);
    }

    #[test]
    fn test_payload_ratio() {
        let encoded = encode("ab", &[1, 2, 3, 4, 5]).unwrap();
        let (_, stats) = scan_text_with_stats(&encoded);
        assert_eq!(stats.payload_ratio(), 2.5);
    }
}
