use api_keys::ApiKeys;
use counters::{TokenCounter, TokenStats};
use file_stats::FileStats;
use log::debug;
use schemars::JsonSchema;
use serde::Serialize;

pub mod api_keys;
pub mod counters;
pub mod file_stats;

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenizerResult {
    pub provider: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    pub stats: Option<TokenStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenAnalysis {
    pub file_stats: FileStats,
    pub results: Vec<TokenizerResult>,
}

/// Runs every counter over `text`. A failing counter only affects its own
/// result.
pub fn analyze_tokens(
    text: &str,
    keys: &ApiKeys,
    counters: &[Box<dyn TokenCounter>],
) -> TokenAnalysis {
    let results = counters
        .iter()
        .map(|counter| {
            let (stats, error) = match counter.count(text, keys) {
                Ok(stats) => (Some(stats), None),
                Err(error) => {
                    debug!(
                        "Token counter {} / {} failed: {error}",
                        counter.provider(),
                        counter.model()
                    );
                    (None, Some(error.to_string()))
                }
            };

            TokenizerResult {
                provider: counter.provider().to_owned(),
                model: counter.model().to_owned(),
                encoding: counter.encoding().map(str::to_owned),
                stats,
                error,
            }
        })
        .collect();

    TokenAnalysis {
        file_stats: FileStats::of(text),
        results,
    }
}
