use lcs::longest_common_subsequence;
use segment::{DiffSegment, SegmentKind, push_token, push_tokens};

use crate::{
    errors::DiffError,
    utils::{common_prefix_len::common_prefix_len, side::Side},
};

pub mod lcs;
pub mod segment;

/// The default ceiling on the number of tokens per side. The LCS table has
/// `(before + 1) × (after + 1)` cells of 4 bytes so this caps it at roughly
/// 64 MB.
pub const DEFAULT_MAX_TOKENS: usize = 4_000;

/// Tunables of the diff engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Maximum number of tokens accepted on either side.
    pub max_tokens: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl DiffOptions {
    #[must_use]
    pub fn with_max_tokens(max_tokens: usize) -> Self { DiffOptions { max_tokens } }

    fn check(&self, side: Side, tokens: usize) -> Result<(), DiffError> {
        if tokens > self.max_tokens {
            return Err(DiffError::InputTooLarge {
                side,
                tokens,
                limit: self.max_tokens,
            });
        }

        Ok(())
    }
}

/// Diffs two token sequences with the default [`DiffOptions`].
///
/// See [`diff_with_options`].
///
/// # Errors
///
/// Returns [`DiffError::InputTooLarge`] if either side has more than
/// [`DEFAULT_MAX_TOKENS`] tokens.
pub fn diff<T>(before: &[T], after: &[T]) -> Result<Vec<DiffSegment<T>>, DiffError>
where
    T: PartialEq + Clone,
{
    diff_with_options(before, after, &DiffOptions::default())
}

/// Aligns `before` and `after` along their longest common subsequence.
///
/// The result is a list of maximal segments in left-to-right order. Keeping
/// the `Removed` and `Unchanged` segments gives back `before`, keeping the
/// `Added` and `Unchanged` ones gives back `after`. Between two common tokens
/// the removed run always precedes the added run.
///
/// # Errors
///
/// Returns [`DiffError::InputTooLarge`] if either side has more than
/// `options.max_tokens` tokens.
pub fn diff_with_options<T>(
    before: &[T],
    after: &[T],
    options: &DiffOptions,
) -> Result<Vec<DiffSegment<T>>, DiffError>
where
    T: PartialEq + Clone,
{
    options.check(Side::Before, before.len())?;
    options.check(Side::After, after.len())?;

    // Only the prefix is skipped: a common token is paired with its first
    // occurrence, which a trimmed suffix would move to the last one.
    let prefix_len = common_prefix_len(before, after);

    let mut segments = Vec::new();
    push_tokens(&mut segments, SegmentKind::Unchanged, &before[..prefix_len]);
    align(&before[prefix_len..], &after[prefix_len..], &mut segments);

    Ok(segments)
}

/// Walks both sequences and their LCS with three cursors, emitting every
/// token that isn't the next common token as removed (from `before`) or added
/// (from `after`).
fn align<T>(before: &[T], after: &[T], segments: &mut Vec<DiffSegment<T>>)
where
    T: PartialEq + Clone,
{
    let common = longest_common_subsequence(before, after);

    let mut before_index = 0;
    let mut after_index = 0;

    for common_token in common {
        while before[before_index] != *common_token {
            push_token(segments, SegmentKind::Removed, before[before_index].clone());
            before_index += 1;
        }

        while after[after_index] != *common_token {
            push_token(segments, SegmentKind::Added, after[after_index].clone());
            after_index += 1;
        }

        push_token(segments, SegmentKind::Unchanged, before[before_index].clone());
        before_index += 1;
        after_index += 1;
    }

    push_tokens(segments, SegmentKind::Removed, &before[before_index..]);
    push_tokens(segments, SegmentKind::Added, &after[after_index..]);
}
