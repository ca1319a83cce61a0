use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a run of tokens in a diff.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Only present in the `after` sequence.
    Added,
    /// Only present in the `before` sequence.
    Removed,
    /// Part of the longest common subsequence.
    Unchanged,
}

impl SegmentKind {
    /// Whether tokens of this kind belong to the `before` sequence.
    #[must_use]
    pub fn is_in_before(self) -> bool { matches!(self, SegmentKind::Removed | SegmentKind::Unchanged) }

    /// Whether tokens of this kind belong to the `after` sequence.
    #[must_use]
    pub fn is_in_after(self) -> bool { matches!(self, SegmentKind::Added | SegmentKind::Unchanged) }
}

impl Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentKind::Added => write!(f, "added"),
            SegmentKind::Removed => write!(f, "removed"),
            SegmentKind::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// A maximal run of consecutive tokens sharing the same [`SegmentKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment<T> {
    kind: SegmentKind,
    tokens: Vec<T>,
}

impl<T> DiffSegment<T> {
    #[must_use]
    pub fn new(kind: SegmentKind, tokens: Vec<T>) -> Self { DiffSegment { kind, tokens } }

    #[must_use]
    pub fn added(tokens: Vec<T>) -> Self { Self::new(SegmentKind::Added, tokens) }

    #[must_use]
    pub fn removed(tokens: Vec<T>) -> Self { Self::new(SegmentKind::Removed, tokens) }

    #[must_use]
    pub fn unchanged(tokens: Vec<T>) -> Self { Self::new(SegmentKind::Unchanged, tokens) }

    #[must_use]
    pub fn kind(&self) -> SegmentKind { self.kind }

    #[must_use]
    pub fn tokens(&self) -> &[T] { &self.tokens }

    #[must_use]
    pub fn into_tokens(self) -> Vec<T> { self.tokens }

    /// Number of tokens in the segment.
    #[must_use]
    pub fn len(&self) -> usize { self.tokens.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.tokens.is_empty() }
}

impl<T> DiffSegment<T>
where
    T: AsRef<str>,
{
    /// The concatenated text of the segment's tokens.
    #[must_use]
    pub fn text(&self) -> String { self.tokens.iter().map(AsRef::as_ref).collect() }
}

/// Appends `token` to the last segment if it has the same kind, otherwise
/// starts a new segment.
pub(crate) fn push_token<T>(segments: &mut Vec<DiffSegment<T>>, kind: SegmentKind, token: T) {
    match segments.last_mut() {
        Some(last) if last.kind == kind => last.tokens.push(token),
        _ => segments.push(DiffSegment::new(kind, vec![token])),
    }
}

/// Like [`push_token`] for a whole run of tokens. Empty runs are skipped.
pub(crate) fn push_tokens<T>(segments: &mut Vec<DiffSegment<T>>, kind: SegmentKind, tokens: &[T])
where
    T: Clone,
{
    for token in tokens {
        push_token(segments, kind, token.clone());
    }
}
