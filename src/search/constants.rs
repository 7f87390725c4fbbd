pub const DEFAULT_WORD_SIZE: usize = 12;
pub const DEFAULT_MATCH_SCORE: i32 = 5;
pub const DEFAULT_MISMATCH_SCORE: i32 = -4;

/// Ungapped drop-off: largest decline of the running score below its
/// running maximum before extension halts.
pub const DEFAULT_X_DROP: i32 = 20;
