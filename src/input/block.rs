use tracing::debug;

use super::prefix::detect_prefix;
use super::tokenize::{tokenize, Token};
use super::InputError;

/// One unit of output: a flat token sequence, the usable width left after
/// prefix removal, and the prefix to reattach to every emitted line.
///
/// A block with no tokens is a separator and renders as its bare prefix.
#[derive(Debug, Clone)]
pub struct Block {
    pub tokens: Vec<Token>,
    pub width: i64,
    pub prefix: String,
}

impl Block {
    fn separator(width: i64) -> Self {
        Block {
            tokens: Vec::new(),
            width,
            prefix: String::new(),
        }
    }
}

/// Splits a line sequence on empty lines and parses each non-empty run.
///
/// Every empty line yields one separator block of its own, so blank lines
/// survive reflowing one-to-one.
pub fn parse_runs(lines: &[String], width: i64) -> Result<Vec<Block>, InputError> {
    let mut blocks = Vec::new();
    let mut run: Vec<String> = Vec::new();
    for line in lines {
        if line.is_empty() {
            if !run.is_empty() {
                blocks.extend(parse_prefixed(&run, width)?);
                run.clear();
            }
            blocks.push(Block::separator(width));
        } else {
            run.push(line.clone());
        }
    }
    if !run.is_empty() {
        blocks.extend(parse_prefixed(&run, width)?);
    }

    Ok(blocks)
}

/// Parses one run of non-empty lines, recursing when a shared prefix is
/// present.
///
/// Stripping the prefix may expose empty lines (a quoted blank line is just
/// the prefix); the recursion through [`parse_runs`] turns those into
/// separators. Blocks coming back from the recursion get the outer prefix
/// prepended to whatever deeper prefix they already carry, so stripping and
/// reattaching round-trips the original leading characters exactly.
pub fn parse_prefixed(lines: &[String], width: i64) -> Result<Vec<Block>, InputError> {
    let prefix = detect_prefix(lines);
    if prefix.is_empty() {
        let tokens = tokenize(lines, width)?;
        return Ok(vec![Block {
            tokens,
            width,
            prefix,
        }]);
    }

    let usable = width - prefix.len() as i64;
    debug!(prefix = %prefix, usable, "stripping shared prefix");
    let stripped: Vec<String> = lines
        .iter()
        .map(|line| line[prefix.len()..].to_string())
        .collect();
    let inner = parse_runs(&stripped, usable)?;

    Ok(inner
        .into_iter()
        .map(|block| Block {
            prefix: format!("{}{}", prefix, block.prefix),
            ..block
        })
        .collect())
}
