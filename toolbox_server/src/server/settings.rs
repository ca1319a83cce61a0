use anyhow::{Context as _, anyhow};
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::info;

use super::{requests::UpdateSettingsRequest, responses::SettingsResponse};
use crate::{
    app_state::AppState,
    errors::{ToolboxError, client_error, server_error},
};

#[axum::debug_handler]
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, ToolboxError> {
    let config = state.config.read().await;

    Ok(Json(SettingsResponse {
        theme: config.ui.theme,
    }))
}

/// Change the interface settings. The configuration file is rewritten before
/// the new values are visible to other requests.
#[axum::debug_handler]
pub async fn update_settings(
    State(state): State<AppState>,
    request: Result<Json<UpdateSettingsRequest>, JsonRejection>,
) -> Result<Json<SettingsResponse>, ToolboxError> {
    let Json(request) =
        request.map_err(|rejection| client_error(anyhow!(rejection).context("Invalid settings")))?;

    let mut config = state.config.write().await;

    if config.ui.theme != request.theme {
        let mut updated = config.clone();
        updated.ui.theme = request.theme;

        updated
            .write(&state.config_path)
            .await
            .context("Failed to save settings")
            .map_err(server_error)?;

        info!("Theme changed from {} to {}", config.ui.theme, updated.ui.theme);
        *config = updated;
    }

    Ok(Json(SettingsResponse {
        theme: config.ui.theme,
    }))
}
