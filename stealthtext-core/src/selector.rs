//! Byte to variation selector mapping
//!
//! Every byte value maps to exactly one selector:
//! - `0x00..=0x0F` to `U+FE00..=U+FE0F`
//! - `0x10..=0xFF` to `U+E0100..=U+E01EF`

use crate::constants::{
    SELECTOR_COUNT, VS_BASE, VS_BLOCK_LEN, VS_LAST, VS_SUPPLEMENT_BASE, VS_SUPPLEMENT_LAST,
};

/// Selector for every byte value, indexed by the byte
pub const SELECTOR_TABLE: [char; SELECTOR_COUNT] = build_table();

const fn build_table() -> [char; SELECTOR_COUNT] {
    let mut table = ['\0'; SELECTOR_COUNT];
    let mut i = 0;
    while i < SELECTOR_COUNT {
        let cp = if i < VS_BLOCK_LEN as usize {
            VS_BASE + i as u32
        } else {
            VS_SUPPLEMENT_BASE + (i - VS_BLOCK_LEN as usize) as u32
        };
        table[i] = match char::from_u32(cp) {
            Some(c) => c,
            None => panic!("selector code point is not a scalar value"),
        };
        i += 1;
    }
    table
}

/// Map a byte to its variation selector
#[inline]
pub fn byte_to_selector(byte: u8) -> char {
    SELECTOR_TABLE[byte as usize]
}

/// Map a variation selector back to its byte
///
/// Returns `None` for any code point outside the two selector ranges. During
/// decoding this is the common case for carrier characters, not an error.
#[inline]
pub fn selector_to_byte(c: char) -> Option<u8> {
    let cp = c as u32;
    match cp {
        VS_BASE..=VS_LAST => Some((cp - VS_BASE) as u8),
        VS_SUPPLEMENT_BASE..=VS_SUPPLEMENT_LAST => {
            Some((cp - VS_SUPPLEMENT_BASE) as u8 + VS_BLOCK_LEN)
        }
        _ => None,
    }
}

/// Check whether a character is one of the 256 selectors
#[inline]
pub fn is_selector(c: char) -> bool {
    selector_to_byte(c).is_some()
}
