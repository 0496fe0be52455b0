//! Group layout: how payload bytes are spread across carrier characters

use crate::error::StegoError;
use core::ops::Range;
use serde::{Deserialize, Serialize};

/// Split of `payload_len` bytes into `carrier_len` contiguous groups
///
/// With `q = payload_len / carrier_len` and `r = payload_len % carrier_len`,
/// group `i` holds `q + 1` bytes when `i < r` and `q` bytes otherwise. The
/// larger groups always come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupLayout {
    /// Number of payload bytes
    pub payload_len: usize,

    /// Number of carrier characters (one group each)
    pub carrier_len: usize,
}

impl GroupLayout {
    /// Create a validated layout
    pub fn new(payload_len: usize, carrier_len: usize) -> Result<Self, StegoError> {
        let layout = Self {
            payload_len,
            carrier_len,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Validate the layout
    ///
    /// Every carrier character must receive at least one byte.
    pub fn validate(&self) -> Result<(), StegoError> {
        if self.carrier_len == 0 {
            return Err(StegoError::EmptyCarrier);
        }

        if self.payload_len < self.carrier_len {
            return Err(StegoError::PayloadTooShort {
                payload_len: self.payload_len,
                carrier_len: self.carrier_len,
            });
        }

        Ok(())
    }

    /// Base number of bytes per group
    pub const fn quota(&self) -> usize {
        if self.carrier_len == 0 {
            0
        } else {
            self.payload_len / self.carrier_len
        }
    }

    /// Number of leading groups that carry one extra byte
    pub const fn remainder(&self) -> usize {
        if self.carrier_len == 0 {
            0
        } else {
            self.payload_len % self.carrier_len
        }
    }

    /// Size of group `index`; zero past the last group
    pub const fn group_size(&self, index: usize) -> usize {
        if index >= self.carrier_len {
            0
        } else if index < self.remainder() {
            self.quota() + 1
        } else {
            self.quota()
        }
    }

    /// Offset of the first byte of group `index` within the payload
    pub const fn group_start(&self, index: usize) -> usize {
        let index = if index > self.carrier_len {
            self.carrier_len
        } else {
            index
        };
        let extra = if index < self.remainder() {
            index
        } else {
            self.remainder()
        };
        index * self.quota() + extra
    }

    /// Byte range of group `index` within the payload
    pub fn group_range(&self, index: usize) -> Range<usize> {
        let start = self.group_start(index);
        start..start + self.group_size(index)
    }

    /// Iterate over all group sizes in carrier order
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.carrier_len).map(move |i| self.group_size(i))
    }
}
