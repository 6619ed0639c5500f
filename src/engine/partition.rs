//! Minimum sum-of-squares partitioning, constrained to the greedy line
//! count.
//!
//! With the line count fixed per prefix, minimizing variance is the same as
//! minimizing the sum of squared line widths, which stays a plain integer.

use crate::input::Token;

/// Best partition of a token prefix: where its last line starts, and the
/// sum of squared line widths it achieves.
#[derive(Debug, Clone, Copy)]
pub struct DpEntry {
    pub predecessor: usize,
    pub sum_sq: i64,
}

/// Sentinel for a prefix no candidate has reached.
const UNREACHED: i64 = i64::MAX;

/// Builds, for every prefix length `i`, the partition of tokens `0..i` into
/// exactly `lines[i]` lines minimizing the sum of squared line widths.
///
/// Bottom-up over an explicit table rather than memoized recursion, so long
/// paragraphs cannot exhaust the stack. For each `i` the candidate line
/// starts `j` are scanned backward while the line `[j, i)` still fits;
/// requiring `lines[j] + 1 == lines[i]` keeps every partition on the greedy
/// line count. On equal sums the largest valid `j` wins.
pub fn min_square_partitions(tokens: &[Token], lines: &[usize], width: i64) -> Vec<DpEntry> {
    let mut dp = Vec::with_capacity(tokens.len() + 1);
    dp.push(DpEntry {
        predecessor: 0,
        sum_sq: 0,
    });
    for i in 1..=tokens.len() {
        let mut predecessor = 0;
        let mut best = UNREACHED;
        let mut x = 0;
        for j in (0..i).rev() {
            let v = x + (x != 0) as i64 + tokens[j].width();
            if v > width {
                break;
            }
            x = v;
            let candidate = dp[j].sum_sq.saturating_add(x * x);
            if candidate < best && lines[j] + 1 == lines[i] {
                predecessor = j;
                best = candidate;
            }
        }
        dp.push(DpEntry {
            predecessor,
            sum_sq: best,
        });
    }

    dp
}
