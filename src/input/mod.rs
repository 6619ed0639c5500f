use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    /// The word cannot fit on any line at the usable width; no valid
    /// partition of the block exists.
    #[error("word too long: {0}")]
    WordTooLong(String),
}

pub mod block;
pub mod prefix;
pub mod tokenize;

pub use block::{parse_prefixed, parse_runs, Block};
pub use tokenize::{tokenize, Token};
