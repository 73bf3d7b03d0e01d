//! Block sizing parameters.

/// Configuration for automatic block sizing.
///
/// A block is a square of `blocksize * blocksize` elements stored in one
/// buffer. The automatic block size is the largest whose buffer fits in
/// `budget_bytes`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockConfig {
    /// Upper bound on the bytes one block may occupy.
    ///
    /// Default: 65_536 (64KB).
    pub budget_bytes: usize,
}

impl BlockConfig {
    /// Default per-block budget: 64KB.
    pub const DEFAULT_BUDGET_BYTES: usize = 65_536;

    /// Create a config with the given per-block budget.
    pub fn new(budget_bytes: usize) -> Self {
        Self { budget_bytes }
    }

    /// Largest block side whose buffer fits the budget.
    ///
    /// Computed as `floor(sqrt(budget_bytes / element_size))`. Falls back
    /// to 1 when a single element already exceeds the budget (or
    /// `element_size` is zero).
    pub fn blocksize_for(&self, element_size: usize) -> u32 {
        if element_size == 0 || element_size > self.budget_bytes {
            return 1;
        }
        let side = (self.budget_bytes / element_size).isqrt();
        u32::try_from(side).unwrap_or(u32::MAX).max(1)
    }

    /// Bytes one block of side `blocksize` occupies, or `None` on overflow.
    pub fn block_bytes(blocksize: u32, element_size: usize) -> Option<usize> {
        let side = blocksize as usize;
        side.checked_mul(side)?.checked_mul(element_size)
    }
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BUDGET_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn four_byte_elements_get_128() {
        assert_eq!(BlockConfig::default().blocksize_for(4), 128);
    }

    #[test]
    fn single_bytes_get_256() {
        assert_eq!(BlockConfig::default().blocksize_for(1), 256);
    }

    #[test]
    fn oversized_element_falls_back_to_one() {
        assert_eq!(BlockConfig::default().blocksize_for(70_000), 1);
    }

    #[test]
    fn element_equal_to_budget_is_one() {
        assert_eq!(BlockConfig::default().blocksize_for(65_536), 1);
    }

    #[test]
    fn rgb_pixels_of_u16() {
        // 6-byte pixels: floor(sqrt(65536 / 6)) = floor(sqrt(10922)) = 104.
        assert_eq!(BlockConfig::default().blocksize_for(6), 104);
    }

    proptest! {
        #[test]
        fn auto_block_fits_budget_and_is_maximal(size in 1usize..=65_536) {
            let config = BlockConfig::default();
            let bs = config.blocksize_for(size);
            prop_assert!(bs >= 1);
            prop_assert!(BlockConfig::block_bytes(bs, size).unwrap() <= config.budget_bytes);
            prop_assert!(BlockConfig::block_bytes(bs + 1, size).unwrap() > config.budget_bytes);
        }
    }
}
