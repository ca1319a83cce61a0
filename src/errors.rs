use thiserror::Error;

use crate::utils::side::Side;

/// Errors reported by the diff engine and its text adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// One of the inputs has more tokens than the configured ceiling. The LCS
    /// table grows with the product of both lengths so oversized inputs are
    /// rejected before anything is allocated.
    #[error(
        "The {side} input has {tokens} tokens which exceeds the limit of {limit} tokens per side"
    )]
    InputTooLarge {
        /// The input that is over the limit
        side: Side,
        /// The number of tokens in that input
        tokens: usize,
        /// The maximum number of tokens allowed per side
        limit: usize,
    },

    /// The requested granularity isn't one of `char`, `word` or `line`.
    #[error("Unknown diff granularity '{0}', expected one of 'char', 'word' or 'line'")]
    UnknownGranularity(String),
}
