//! Code point ranges used to carry payload bytes

/// First code point of the Variation Selectors block (VS1)
pub const VS_BASE: u32 = 0xFE00;

/// Last code point of the Variation Selectors block (VS16)
pub const VS_LAST: u32 = 0xFE0F;

/// First code point of the Variation Selectors Supplement block (VS17)
pub const VS_SUPPLEMENT_BASE: u32 = 0xE0100;

/// Last code point of the Variation Selectors Supplement block (VS256)
pub const VS_SUPPLEMENT_LAST: u32 = 0xE01EF;

/// Number of byte values carried by the Variation Selectors block.
/// Bytes at or above this value map into the supplement block.
pub const VS_BLOCK_LEN: u8 = 16;

/// Total number of distinct selectors, one per byte value
pub const SELECTOR_COUNT: usize = 256;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_cover_every_byte() {
        let low = (VS_LAST - VS_BASE + 1) as usize;
        let high = (VS_SUPPLEMENT_LAST - VS_SUPPLEMENT_BASE + 1) as usize;
        assert_eq!(low, VS_BLOCK_LEN as usize);
        assert_eq!(low + high, SELECTOR_COUNT);
    }
}
