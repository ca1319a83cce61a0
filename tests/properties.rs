use proptest::prelude::*;
use sequence_diff::{BuiltinTokenizer, DiffOptions, DiffSegment, SegmentKind, diff, diff_text};

/// LCS length with two rolling rows, independent of the engine's table.
fn lcs_len(before: &[u8], after: &[u8]) -> usize {
    let mut previous = vec![0; after.len() + 1];
    let mut current = vec![0; after.len() + 1];

    for old in before {
        for (j, new) in after.iter().enumerate() {
            current[j + 1] = if old == new {
                previous[j] + 1
            } else {
                previous[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[after.len()]
}

/// Full-table diff without any trimming: ties move up the table and the walk
/// pairs every common token with its first remaining occurrence.
fn reference_diff(before: &[u8], after: &[u8]) -> Vec<(SegmentKind, Vec<u8>)> {
    let mut table = vec![vec![0usize; after.len() + 1]; before.len() + 1];
    for i in 1..=before.len() {
        for j in 1..=after.len() {
            table[i][j] = if before[i - 1] == after[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }

    let mut common = Vec::new();
    let (mut i, mut j) = (before.len(), after.len());
    while i > 0 && j > 0 {
        if before[i - 1] == after[j - 1] {
            common.push(before[i - 1]);
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] >= table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    common.reverse();

    let mut tagged = Vec::new();
    let (mut old, mut new) = (before.iter().peekable(), after.iter().peekable());
    for token in common {
        while let Some(removed) = old.next_if(|candidate| **candidate != token) {
            tagged.push((SegmentKind::Removed, *removed));
        }
        while let Some(added) = new.next_if(|candidate| **candidate != token) {
            tagged.push((SegmentKind::Added, *added));
        }
        old.next();
        new.next();
        tagged.push((SegmentKind::Unchanged, token));
    }
    tagged.extend(old.map(|token| (SegmentKind::Removed, *token)));
    tagged.extend(new.map(|token| (SegmentKind::Added, *token)));

    let mut merged: Vec<(SegmentKind, Vec<u8>)> = Vec::new();
    for (kind, token) in tagged {
        match merged.last_mut() {
            Some((last, tokens)) if *last == kind => tokens.push(token),
            _ => merged.push((kind, vec![token])),
        }
    }
    merged
}

fn tokens_of(segments: &[DiffSegment<u8>], keep: impl Fn(SegmentKind) -> bool) -> Vec<u8> {
    segments
        .iter()
        .filter(|segment| keep(segment.kind()))
        .flat_map(|segment| segment.tokens().iter().copied())
        .collect()
}

fn count_of(segments: &[DiffSegment<u8>], kind: SegmentKind) -> usize {
    segments
        .iter()
        .filter(|segment| segment.kind() == kind)
        .map(DiffSegment::len)
        .sum()
}

fn sequence() -> impl Strategy<Value = Vec<u8>> { prop::collection::vec(0u8..4, 0..40) }

proptest! {
    #[test]
    fn reconstructs_both_inputs(before in sequence(), after in sequence()) {
        let segments = diff(&before, &after).unwrap();

        prop_assert_eq!(tokens_of(&segments, SegmentKind::is_in_before), before);
        prop_assert_eq!(tokens_of(&segments, SegmentKind::is_in_after), after);
    }

    #[test]
    fn identical_inputs_are_one_segment(tokens in sequence()) {
        let segments = diff(&tokens, &tokens).unwrap();

        if tokens.is_empty() {
            prop_assert!(segments.is_empty());
        } else {
            prop_assert_eq!(segments, vec![DiffSegment::unchanged(tokens.clone())]);
        }
    }

    #[test]
    fn counts_are_symmetric(a in sequence(), b in sequence()) {
        let forward = diff(&a, &b).unwrap();
        let backward = diff(&b, &a).unwrap();

        prop_assert_eq!(count_of(&forward, SegmentKind::Added), count_of(&backward, SegmentKind::Removed));
        prop_assert_eq!(count_of(&forward, SegmentKind::Removed), count_of(&backward, SegmentKind::Added));
    }

    #[test]
    fn unchanged_tokens_form_a_longest_common_subsequence(before in sequence(), after in sequence()) {
        let segments = diff(&before, &after).unwrap();

        prop_assert_eq!(count_of(&segments, SegmentKind::Unchanged), lcs_len(&before, &after));
    }

    #[test]
    fn matches_reference_diff(before in sequence(), after in sequence()) {
        let segments: Vec<(SegmentKind, Vec<u8>)> = diff(&before, &after)
            .unwrap()
            .into_iter()
            .map(|segment| (segment.kind(), segment.into_tokens()))
            .collect();

        prop_assert_eq!(segments, reference_diff(&before, &after));
    }

    #[test]
    fn segments_are_maximal(before in sequence(), after in sequence()) {
        let segments = diff(&before, &after).unwrap();

        prop_assert!(segments.iter().all(|segment| !segment.is_empty()));
        prop_assert!(segments.windows(2).all(|pair| pair[0].kind() != pair[1].kind()));
    }

    #[test]
    fn text_diffs_reconstruct_at_every_granularity(before in "[ab \t\n]{0,30}", after in "[ab \t\n]{0,30}") {
        for tokenizer in [BuiltinTokenizer::Character, BuiltinTokenizer::Word, BuiltinTokenizer::Line] {
            let diff = diff_text(&before, &after, tokenizer, &DiffOptions::default()).unwrap();

            prop_assert_eq!(diff.before(), before.clone());
            prop_assert_eq!(diff.after(), after.clone());
        }
    }
}
