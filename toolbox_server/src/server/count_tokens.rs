use anyhow::{Context as _, anyhow};
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::info;
use serde_json::Value;

use super::requests::TokenCountRequest;
use crate::{
    app_state::AppState,
    consts::MAX_TOKEN_TEXT_LENGTH,
    errors::{ToolboxError, client_error, server_error},
    tokens::{TokenAnalysis, analyze_tokens, api_keys::ApiKeys, file_stats::utf16_len},
};

const ANALYSIS_FAILED: &str = "Failed to analyze tokens";

/// Count the tokens of a text with every configured tokenizer. Providers that
/// can't run, for example because their API key is missing, report an error
/// in their own result while the others still succeed.
#[axum::debug_handler]
pub async fn count_tokens(
    State(state): State<AppState>,
    request: Result<Json<TokenCountRequest>, JsonRejection>,
) -> Result<Json<TokenAnalysis>, ToolboxError> {
    let Json(request) =
        request.map_err(|rejection| server_error(anyhow!(rejection).context(ANALYSIS_FAILED)))?;

    let text = match request.text {
        Some(Value::String(text)) if !text.is_empty() => text,
        _ => return Err(client_error(anyhow!("Text is required"))),
    };

    let length = utf16_len(&text);
    if length > MAX_TOKEN_TEXT_LENGTH {
        return Err(client_error(anyhow!("Text too large. Maximum 1MB allowed.")));
    }

    let keys = ApiKeys::from_request_or_env(request.anthropic_api_key, request.google_api_key);
    let counters = state.counters.clone();

    info!("Counting tokens of a text with {length} characters");

    let analysis = tokio::task::spawn_blocking(move || analyze_tokens(&text, &keys, &counters))
        .await
        .context(ANALYSIS_FAILED)
        .map_err(server_error)?;

    Ok(Json(analysis))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::config::Config;

    fn state() -> AppState { AppState::new(Config::default(), "unused.yml".into()) }

    fn request(body: Value) -> Result<Json<TokenCountRequest>, JsonRejection> {
        Ok(Json(serde_json::from_value(body).unwrap()))
    }

    async fn error_of(body: Value) -> (StatusCode, String) {
        let error = count_tokens(State(state()), request(body)).await.unwrap_err();
        (error.status_code(), error.serialize().error)
    }

    #[tokio::test]
    async fn test_counts_tokens() {
        let Json(analysis) = count_tokens(State(state()), request(json!({ "text": "hello world" })))
            .await
            .unwrap();

        assert_eq!(analysis.file_stats.char_count, 11);
        assert_eq!(analysis.file_stats.word_count, 2);
        assert_eq!(analysis.results[0].model, "Words");
        assert_eq!(analysis.results[0].stats.unwrap().total_tokens, 3);
    }

    #[tokio::test]
    async fn test_text_is_required() {
        let expected = (StatusCode::BAD_REQUEST, "Text is required".to_owned());

        assert_eq!(error_of(json!({})).await, expected);
        assert_eq!(error_of(json!({ "text": "" })).await, expected);
        assert_eq!(error_of(json!({ "text": 42 })).await, expected);
        assert_eq!(error_of(json!({ "text": null })).await, expected);
    }

    #[tokio::test]
    async fn test_text_too_large() {
        let at_limit = "a".repeat(MAX_TOKEN_TEXT_LENGTH);
        assert!(
            count_tokens(State(state()), request(json!({ "text": at_limit })))
                .await
                .is_ok()
        );

        // each emoji is two UTF-16 code units
        let over_limit = "😀".repeat(MAX_TOKEN_TEXT_LENGTH / 2 + 1);
        assert_eq!(
            error_of(json!({ "text": over_limit })).await,
            (
                StatusCode::BAD_REQUEST,
                "Text too large. Maximum 1MB allowed.".to_owned()
            )
        );
    }
}
