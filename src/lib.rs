//! Longest-common-subsequence diffing of token sequences.
//!
//! [`diff`] aligns any two slices of comparable tokens and returns maximal
//! runs of added, removed and unchanged tokens. [`diff_text`] wraps it for
//! strings, splitting them by character, word or line with a
//! [`BuiltinTokenizer`].
//!
//! ```
//! use sequence_diff::{BuiltinTokenizer, DiffOptions, SegmentKind, diff_text};
//!
//! let diff = diff_text("foo\nbar\n", "foo\nbaz\n", BuiltinTokenizer::Line, &DiffOptions::default())
//!     .unwrap();
//!
//! let kinds: Vec<SegmentKind> = diff.segments().iter().map(|s| s.kind()).collect();
//! assert_eq!(kinds, [SegmentKind::Unchanged, SegmentKind::Removed, SegmentKind::Added]);
//! assert_eq!(diff.after(), "foo\nbaz\n");
//! ```

mod diffs;
mod errors;
mod text_diff;
mod tokenizer;
mod utils;

pub use diffs::{
    DEFAULT_MAX_TOKENS, DiffOptions, diff, diff_with_options,
    lcs::longest_common_subsequence,
    segment::{DiffSegment, SegmentKind},
};
pub use errors::DiffError;
pub use text_diff::{TextDiff, diff_text, stats::DiffStats};
pub use tokenizer::{
    BuiltinTokenizer, Tokenizer, character_tokenizer::character_tokenizer,
    line_tokenizer::line_tokenizer, word_tokenizer::word_tokenizer,
};
pub use utils::side::Side;

#[cfg(feature = "wasm")]
pub mod wasm;
