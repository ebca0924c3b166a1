//! Error types for input expansion and alignment.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A character outside `ACGT` reached the aligner.
    #[error("invalid symbol {symbol:?} at position {pos} of sequence {seq}: expected one of A, C, G, T")]
    InvalidSymbol {
        /// Which of the two sequences, `a` or `b`.
        seq: &'static str,
        pos: usize,
        symbol: char,
    },

    #[error("invalid cost model: {0}")]
    InvalidCostModel(String),

    /// Costs for sequences this long do not fit in a `Cost`.
    #[error("costs of aligning sequences of length {n} and {m} overflow")]
    CostOverflow { n: usize, m: usize },

    /// The DP table does not fit in memory.
    #[error("cannot allocate a {rows}x{cols} DP table")]
    TableAllocation { rows: usize, cols: usize },

    #[error("missing base string {which} in input description")]
    MissingBaseString { which: usize },

    #[error("line {line}: index {text:?} is not a valid non-negative integer")]
    InvalidIndex { line: usize, text: String },

    #[error("line {line}: unexpected {text:?} after the second sequence")]
    UnexpectedLine { line: usize, text: String },

    /// Step `step` of an expansion inserts after a position past the end.
    #[error("expansion step {step}: index {index} is out of bounds for a string of length {len}")]
    IndexOutOfBounds {
        step: usize,
        index: usize,
        len: usize,
    },

    #[error("expanded sequence would have length {len}, exceeding the maximum of {max_len}")]
    LengthCapExceeded { len: usize, max_len: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
