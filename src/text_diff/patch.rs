use super::TextDiff;
use crate::{diffs::segment::SegmentKind, tokenizer::BuiltinTokenizer};

fn prefix(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Added => "+ ",
        SegmentKind::Removed => "- ",
        SegmentKind::Unchanged => "  ",
    }
}

/// Renders a diff as plain text.
///
/// Line diffs get one prefixed line per token, each terminated by a newline
/// even if the input's last line wasn't. Character and word diffs get one
/// prefix per segment.
pub fn render_patch(diff: &TextDiff<'_>) -> String {
    let mut result = String::new();

    for segment in diff.segments() {
        let prefix = prefix(segment.kind());

        if diff.tokenizer() == BuiltinTokenizer::Line {
            for line in segment.tokens() {
                result.push_str(prefix);
                result.push_str(line);
                if !line.ends_with('\n') {
                    result.push('\n');
                }
            }
        } else {
            result.push_str(prefix);
            result.push_str(&segment.text());
        }
    }

    result
}
