//! Greedy forward packing: the minimum line count for every token prefix.

use crate::input::Token;

/// Result of the greedy pass over one paragraph.
pub struct GreedyPacking {
    /// `lines[i]` is the number of lines the first `i` tokens occupy under
    /// greedy packing; `lines[0] == 0` and the vector is non-decreasing.
    pub lines: Vec<usize>,
    /// Total characters across all packed lines: token widths plus the
    /// single spaces between tokens sharing a line.
    pub chars: i64,
}

/// Packs tokens left to right, starting a new line only when the next token
/// no longer fits.
///
/// Greedy packing is line-count optimal for this rule: deferring a token to
/// a later line can never reduce the total number of lines. The returned
/// count is therefore the floor that the variance optimization is
/// constrained to.
pub fn pack_lines(tokens: &[Token], width: i64) -> GreedyPacking {
    debug_assert!(tokens.iter().all(|t| t.width() <= width));

    let mut lines = Vec::with_capacity(tokens.len() + 1);
    lines.push(0);
    let mut chars = 0;
    let mut num = 0;
    let mut i = 0;
    while i < tokens.len() {
        // `sealed` is the width of the line through the last token known to
        // fit; `pending` tentatively includes the token after it.
        let mut sealed = 0;
        let mut pending = tokens[i].width();
        num += 1;
        while pending <= width && i + 1 < tokens.len() {
            i += 1;
            sealed = pending;
            pending += 1 + tokens[i].width();
            lines.push(num);
        }
        chars += sealed;
        if pending <= width {
            i += 1;
            chars += pending - sealed;
            lines.push(num);
        }
    }

    GreedyPacking { lines, chars }
}
