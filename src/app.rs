//! Drives the reflow pipeline over an input stream.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::engine::render_block;
use crate::input::parse_prefixed;

/// Reads blocks from `input`, reflows each to `width` columns, and writes
/// the result to `output`.
///
/// A block is a maximal run of non-empty lines. Each block's output is
/// written before the next block is read, and every separating empty line
/// becomes exactly one empty output line.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, width: i64) -> anyhow::Result<()> {
    let mut pending: Vec<String> = Vec::new();
    for line in input.lines() {
        let line = line?;
        if line.is_empty() {
            flush_block(&mut pending, output, width)?;
            writeln!(output)?;
        } else {
            pending.push(line);
        }
    }
    flush_block(&mut pending, output, width)?;

    Ok(())
}

fn flush_block<W: Write>(
    pending: &mut Vec<String>,
    output: &mut W,
    width: i64,
) -> anyhow::Result<()> {
    if pending.is_empty() {
        return Ok(());
    }
    debug!(lines = pending.len(), "processing block");
    for block in parse_prefixed(pending, width)? {
        for line in render_block(&block) {
            writeln!(output, "{}", line)?;
        }
    }
    pending.clear();

    Ok(())
}
