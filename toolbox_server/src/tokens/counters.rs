use std::{collections::HashSet, fmt::Debug};

use schemars::JsonSchema;
use sequence_diff::BuiltinTokenizer;
use serde::Serialize;
use thiserror::Error;

use super::{api_keys::ApiKeys, file_stats::utf16_len};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenStats {
    pub total_tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_tokens: Option<usize>,
    pub chars_per_token: f64,
}

impl TokenStats {
    pub fn new(text: &str, total_tokens: usize, unique_tokens: Option<usize>) -> Self {
        let chars_per_token = if total_tokens > 0 {
            utf16_len(text) as f64 / total_tokens as f64
        } else {
            0.0
        };

        TokenStats {
            total_tokens,
            unique_tokens,
            chars_per_token,
        }
    }
}

/// Reasons a single counter can't produce stats. These are reported next to
/// the other counters' results and never fail the whole request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CounterError {
    #[error("{0} not set")]
    MissingApiKey(&'static str),

    #[error("{0} token counting is not enabled on this server")]
    RemoteDisabled(&'static str),
}

pub trait TokenCounter: Send + Sync + Debug {
    fn provider(&self) -> &'static str;

    fn model(&self) -> &'static str;

    fn encoding(&self) -> Option<&'static str> { None }

    fn count(&self, text: &str, keys: &ApiKeys) -> Result<TokenStats, CounterError>;
}

/// Counts the tokens produced by one of the diff engine's tokenizers.
#[derive(Debug, Clone, Copy)]
pub struct LocalCounter {
    tokenizer: BuiltinTokenizer,
}

impl LocalCounter {
    pub fn new(tokenizer: BuiltinTokenizer) -> Self { LocalCounter { tokenizer } }
}

impl TokenCounter for LocalCounter {
    fn provider(&self) -> &'static str { "Local" }

    fn model(&self) -> &'static str {
        match self.tokenizer {
            BuiltinTokenizer::Word => "Words",
            BuiltinTokenizer::Character => "Characters",
            BuiltinTokenizer::Line => "Lines",
        }
    }

    fn encoding(&self) -> Option<&'static str> {
        Some(match self.tokenizer {
            BuiltinTokenizer::Word => "word",
            BuiltinTokenizer::Character => "character",
            BuiltinTokenizer::Line => "line",
        })
    }

    fn count(&self, text: &str, _keys: &ApiKeys) -> Result<TokenStats, CounterError> {
        let tokens = self.tokenizer.tokenize(text);
        let unique_tokens = tokens.iter().collect::<HashSet<_>>().len();

        Ok(TokenStats::new(text, tokens.len(), Some(unique_tokens)))
    }
}

/// Token counts that need a provider's API. The key is checked so clients
/// learn which variable is missing, but no request leaves the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteCounter {
    Anthropic,
    Google,
}

impl TokenCounter for RemoteCounter {
    fn provider(&self) -> &'static str {
        match self {
            RemoteCounter::Anthropic => "Anthropic",
            RemoteCounter::Google => "Google",
        }
    }

    fn model(&self) -> &'static str {
        match self {
            RemoteCounter::Anthropic => "Claude (claude-sonnet-4)",
            RemoteCounter::Google => "Gemini (gemini-1.5-flash)",
        }
    }

    fn count(&self, _text: &str, keys: &ApiKeys) -> Result<TokenStats, CounterError> {
        let (key, variable) = match self {
            RemoteCounter::Anthropic => (&keys.anthropic, "ANTHROPIC_API_KEY"),
            RemoteCounter::Google => (&keys.google, "GOOGLE_API_KEY"),
        };

        match key {
            None => Err(CounterError::MissingApiKey(variable)),
            Some(_) => Err(CounterError::RemoteDisabled(self.provider())),
        }
    }
}

/// The counters used by the `/api/tokens` endpoint, in response order.
pub fn default_counters() -> Vec<Box<dyn TokenCounter>> {
    vec![
        Box::new(LocalCounter::new(BuiltinTokenizer::Word)),
        Box::new(LocalCounter::new(BuiltinTokenizer::Character)),
        Box::new(LocalCounter::new(BuiltinTokenizer::Line)),
        Box::new(RemoteCounter::Anthropic),
        Box::new(RemoteCounter::Google),
    ]
}
