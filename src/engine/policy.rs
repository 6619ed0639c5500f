//! Chooses where the paragraph's last line should start.
//!
//! Forcing the final line into the variance target can look unnatural: a
//! short residual gets over-compressed, a near-full line gets puffed up.
//! For paragraphs of four lines or more, the optimization instead covers
//! only the lines before the last one, and the last line is whatever
//! remains after the chosen cut point.

use tracing::debug;

use crate::engine::fraction::Fraction;
use crate::engine::partition::DpEntry;
use crate::input::Token;

/// Picks the endpoint `k` of the optimized partition.
///
/// Returns `tokens.len()` for short paragraphs (three greedy lines or
/// fewer), which keeps the whole paragraph inside the optimization.
/// Otherwise candidate cut points are scanned backward while the remaining
/// tail still fits on one line; each candidate's variance over the lines
/// before the cut is tracked exactly, in two classes split by whether the
/// tail is at or below the running mean line width. A tail no longer than
/// the mean is preferred whenever one exists.
pub fn choose_endpoint(
    tokens: &[Token],
    lines: &[usize],
    chars: i64,
    dp: &[DpEntry],
    width: i64,
) -> usize {
    let n = tokens.len();
    let total = lines[n];
    if total <= 3 {
        return n;
    }

    let mut best_short = Fraction::INFINITE;
    let mut best_long = Fraction::INFINITE;
    let mut k_short = 0;
    let mut k_long = 0;
    let mut x = 0;
    for i in (0..n).rev() {
        x += (x != 0) as i64 + tokens[i].width();
        if x > width {
            break;
        }
        if lines[i] + 1 != total {
            continue;
        }
        let count = lines[i] as i64;
        // Var[X] = E[X^2] - E[X]^2, all kept as unnormalized fractions.
        let mean = Fraction::new(chars - x, count);
        let variance = Fraction::new(dp[i].sum_sq, count).sub(mean.mul(mean));
        if Fraction::new(x, 1).det(mean) <= 0 {
            if variance.lt(best_short) {
                best_short = variance;
                k_short = i;
            }
        } else if variance.lt(best_long) {
            best_long = variance;
            k_long = i;
        }
    }

    let k = if !best_short.is_infinite() {
        k_short
    } else if !best_long.is_infinite() {
        k_long
    } else {
        n
    };
    debug!(endpoint = k, tokens = n, "last line cut point chosen");
    k
}
