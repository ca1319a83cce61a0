use schemars::JsonSchema;
use sequence_diff::{DiffStats, SegmentKind, TextDiff};
use serde::Serialize;

use crate::config::ui_config::Theme;

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    pub server_version: String,
}

#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Unchanged,
}

impl From<SegmentKind> for ChangeKind {
    fn from(kind: SegmentKind) -> Self {
        match kind {
            SegmentKind::Added => ChangeKind::Added,
            SegmentKind::Removed => ChangeKind::Removed,
            SegmentKind::Unchanged => ChangeKind::Unchanged,
        }
    }
}

#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiffSegmentResponse {
    pub value: String,
    pub kind: ChangeKind,
}

/// Line diffs count lines, character and word diffs count UTF-16 code units.
#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiffStatsResponse {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl From<DiffStats> for DiffStatsResponse {
    fn from(stats: DiffStats) -> Self {
        DiffStatsResponse {
            added: stats.added,
            removed: stats.removed,
            unchanged: stats.unchanged,
        }
    }
}

#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiffResponse {
    pub segments: Vec<DiffSegmentResponse>,
    pub stats: DiffStatsResponse,
    pub identical: bool,
    /// The diff rendered with `+ `, `- ` and two-space prefixes.
    pub patch: String,
}

impl DiffResponse {
    pub fn new(diff: &TextDiff<'_>) -> Self {
        DiffResponse {
            segments: diff
                .segments()
                .iter()
                .map(|segment| DiffSegmentResponse {
                    value: segment.text(),
                    kind: segment.kind().into(),
                })
                .collect(),
            stats: diff.stats().into(),
            identical: diff.is_identical(),
            patch: diff.to_patch(),
        }
    }
}

#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub theme: Theme,
}
