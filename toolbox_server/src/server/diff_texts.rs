use anyhow::{Context as _, anyhow};
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::debug;
use sequence_diff::diff_text;

use super::{requests::DiffRequest, responses::DiffResponse};
use crate::{
    app_state::AppState,
    errors::{ToolboxError, client_error, server_error},
};

/// Diff two texts by character, word or line.
///
/// Inputs with more tokens per side than the configured `diff.max_tokens`
/// are rejected with a 400 response.
#[axum::debug_handler]
pub async fn diff_texts(
    State(state): State<AppState>,
    request: Result<Json<DiffRequest>, JsonRejection>,
) -> Result<Json<DiffResponse>, ToolboxError> {
    let Json(request) = request
        .map_err(|rejection| client_error(anyhow!(rejection).context("Invalid diff request")))?;

    let options = state.config.read().await.diff.options();

    debug!(
        "Diffing {} and {} bytes by {:?}",
        request.before.len(),
        request.after.len(),
        request.granularity
    );

    let response = tokio::task::spawn_blocking(move || {
        diff_text(
            &request.before,
            &request.after,
            request.granularity.into(),
            &options,
        )
        .map(|diff| DiffResponse::new(&diff))
    })
    .await
    .context("Failed to diff texts")
    .map_err(server_error)?
    .map_err(|error| client_error(anyhow!(error)))?;

    Ok(Json(response))
}
