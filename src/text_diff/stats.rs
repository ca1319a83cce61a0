#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::TextDiff;
use crate::{diffs::segment::SegmentKind, tokenizer::BuiltinTokenizer};

/// Amount of added, removed and unchanged text in a diff.
///
/// Line diffs are counted in lines, character and word diffs in UTF-16 code
/// units, the unit JavaScript string lengths use.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl DiffStats {
    #[must_use]
    pub fn from_diff(diff: &TextDiff<'_>) -> Self {
        let mut stats = DiffStats::default();

        for segment in diff.segments() {
            let count = match diff.tokenizer() {
                BuiltinTokenizer::Line => segment.len(),
                BuiltinTokenizer::Character | BuiltinTokenizer::Word => {
                    segment.tokens().iter().map(|token| token.encode_utf16().count()).sum()
                }
            };

            match segment.kind() {
                SegmentKind::Added => stats.added += count,
                SegmentKind::Removed => stats.removed += count,
                SegmentKind::Unchanged => stats.unchanged += count,
            }
        }

        stats
    }

    /// Whether anything was added or removed.
    #[must_use]
    pub fn has_changes(&self) -> bool { self.added > 0 || self.removed > 0 }
}
