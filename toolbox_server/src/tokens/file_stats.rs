use schemars::JsonSchema;
use serde::Serialize;

/// Length of `text` as JavaScript sees it, in UTF-16 code units. Clients
/// enforce limits and compute averages in these units so the server does too.
pub fn utf16_len(text: &str) -> usize { text.chars().map(char::len_utf16).sum() }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileStats {
    pub char_count: usize,
    pub word_count: usize,
    pub line_count: usize,
}

impl FileStats {
    pub fn of(text: &str) -> Self {
        FileStats {
            char_count: utf16_len(text),
            word_count: text.split_whitespace().count(),
            line_count: text.split('\n').count(),
        }
    }
}
