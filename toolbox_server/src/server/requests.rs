use schemars::JsonSchema;
use sequence_diff::BuiltinTokenizer;
use serde::Deserialize;

use crate::config::ui_config::Theme;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenCountRequest {
    /// The text to analyse. Must be a non-empty string of at most 1,000,000
    /// UTF-16 code units.
    #[serde(default)]
    pub text: Option<serde_json::Value>,

    /// Used instead of the server's `ANTHROPIC_API_KEY`.
    #[serde(default)]
    pub anthropic_api_key: Option<String>,

    /// Used instead of the server's `GOOGLE_API_KEY`.
    #[serde(default)]
    pub google_api_key: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[serde(alias = "character")]
    Char,
    Word,
    #[default]
    Line,
}

impl From<Granularity> for BuiltinTokenizer {
    fn from(granularity: Granularity) -> Self {
        match granularity {
            Granularity::Char => BuiltinTokenizer::Character,
            Granularity::Word => BuiltinTokenizer::Word,
            Granularity::Line => BuiltinTokenizer::Line,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiffRequest {
    pub before: String,
    pub after: String,
    #[serde(default)]
    pub granularity: Granularity,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub theme: Theme,
}
