//! Scoring and level rules.
//!
//! - Every filled cell of a placed piece is worth [`POINTS_PER_BLOCK`].
//! - Every cleared row or column is worth [`POINTS_PER_LINE`]. A cell shared
//!   by a cleared row and a cleared column counts towards both lines.
//! - The level is `score / level_threshold + 1`.

/// Points for each cell of a placed piece.
pub const POINTS_PER_BLOCK: u64 = 10;

/// Points for each cleared row or column.
pub const POINTS_PER_LINE: u64 = 100;

/// Points for placing a piece with `blocks` filled cells.
#[must_use]
pub const fn placement_points(blocks: usize) -> u64 {
    blocks as u64 * POINTS_PER_BLOCK
}

/// Bonus for clearing `lines` distinct rows and columns.
#[must_use]
pub const fn line_clear_points(lines: usize) -> u64 {
    lines as u64 * POINTS_PER_LINE
}

/// Level reached at `score`. Always at least 1.
///
/// A zero threshold is rejected by config validation; it maps to level 1 here.
#[must_use]
pub const fn level_for_score(score: u64, level_threshold: u64) -> u32 {
    if level_threshold == 0 {
        return 1;
    }
    (score / level_threshold) as u32 + 1
}
