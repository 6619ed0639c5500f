//! Rebuilds the chosen partition into finished output lines.

use tracing::debug;

use crate::engine::greedy::pack_lines;
use crate::engine::partition::min_square_partitions;
use crate::engine::policy::choose_endpoint;
use crate::input::{Block, Token};

/// Renders one block into its output lines, prefix attached.
///
/// Runs the full pipeline over the block's tokens: greedy line counting,
/// the squared-sum partition table, the last-line cut, then a backward walk
/// over predecessors to recover the line boundaries in forward order. When
/// the cut excluded the tail, the remaining tokens become one final line
/// outside the optimized chain.
pub fn render_block(block: &Block) -> Vec<String> {
    let tokens = &block.tokens;
    if tokens.is_empty() {
        // Separator blocks reproduce their prefix verbatim.
        return vec![block.prefix.clone()];
    }

    let packing = pack_lines(tokens, block.width);
    let dp = min_square_partitions(tokens, &packing.lines, block.width);
    let k = choose_endpoint(tokens, &packing.lines, packing.chars, &dp, block.width);
    debug!(
        tokens = tokens.len(),
        lines = packing.lines[tokens.len()],
        endpoint = k,
        "rendering block"
    );

    let mut bounds = vec![k];
    while *bounds.last().unwrap() > 0 {
        bounds.push(dp[*bounds.last().unwrap()].predecessor);
    }

    let mut out = Vec::new();
    for pair in bounds.windows(2).rev() {
        out.push(join_line(&block.prefix, &tokens[pair[1]..pair[0]]));
    }
    if k < tokens.len() {
        out.push(join_line(&block.prefix, &tokens[k..]));
    }

    out
}

fn join_line(prefix: &str, tokens: &[Token]) -> String {
    let mut line = String::from(prefix);
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(token.text());
    }
    line
}
