use std::borrow::Cow;

use patch::render_patch;
use stats::DiffStats;

use crate::{
    diffs::{
        DiffOptions, diff_with_options,
        segment::{DiffSegment, SegmentKind},
    },
    errors::DiffError,
    tokenizer::BuiltinTokenizer,
};

pub mod patch;
pub mod stats;

/// The diff of two texts at a given granularity.
///
/// Segments borrow their tokens from the input strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDiff<'a> {
    tokenizer: BuiltinTokenizer,
    segments: Vec<DiffSegment<&'a str>>,
}

/// Tokenizes both texts with `tokenizer` and diffs the resulting sequences.
///
/// # Errors
///
/// Returns [`DiffError::InputTooLarge`] if either text has more tokens than
/// `options.max_tokens`.
pub fn diff_text<'a>(
    before: &'a str,
    after: &'a str,
    tokenizer: BuiltinTokenizer,
    options: &DiffOptions,
) -> Result<TextDiff<'a>, DiffError> {
    let before_tokens = tokenizer.tokenize(before);
    let after_tokens = tokenizer.tokenize(after);

    Ok(TextDiff {
        tokenizer,
        segments: diff_with_options(&before_tokens, &after_tokens, options)?,
    })
}

impl<'a> TextDiff<'a> {
    #[must_use]
    pub fn tokenizer(&self) -> BuiltinTokenizer { self.tokenizer }

    #[must_use]
    pub fn segments(&self) -> &[DiffSegment<&'a str>] { &self.segments }

    #[must_use]
    pub fn into_segments(self) -> Vec<DiffSegment<&'a str>> { self.segments }

    /// The `before` text rebuilt from the removed and unchanged segments.
    #[must_use]
    pub fn before(&self) -> String { self.collect_text(SegmentKind::is_in_before) }

    /// The `after` text rebuilt from the added and unchanged segments.
    #[must_use]
    pub fn after(&self) -> String { self.collect_text(SegmentKind::is_in_after) }

    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| segment.kind() == SegmentKind::Unchanged)
    }

    #[must_use]
    pub fn stats(&self) -> DiffStats { DiffStats::from_diff(self) }

    /// Renders the diff as text with `+ `, `- ` and two-space prefixes.
    #[must_use]
    pub fn to_patch(&self) -> String { render_patch(self) }

    /// Each segment's kind with its concatenated text.
    pub fn text_segments(&self) -> impl Iterator<Item = (SegmentKind, Cow<'a, str>)> + '_ {
        self.segments.iter().map(|segment| {
            let text = match segment.tokens() {
                [single] => Cow::Borrowed(*single),
                _ => Cow::Owned(segment.text()),
            };
            (segment.kind(), text)
        })
    }

    fn collect_text(&self, keep: impl Fn(SegmentKind) -> bool) -> String {
        self.segments
            .iter()
            .filter(|segment| keep(segment.kind()))
            .flat_map(DiffSegment::tokens)
            .copied()
            .collect()
    }
}
