/// Default distance, in bp, within which two disjoint intervals count as adjacent.
pub const DEFAULT_ADJACENT: u32 = 20;

pub const DEFAULT_CHROM: &str = "";
pub const DEFAULT_START: i64 = 1;
pub const DEFAULT_END: i64 = 1;

// 0-based half-open defaults, i.e. the single base at 1-based position 1
pub const DEFAULT_ZERO_START: i64 = 0;
pub const DEFAULT_ZERO_END: i64 = 1;
