use aide::OperationOutput;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, info};
use schemars::JsonSchema;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolboxError {
    #[error("Initialisation error: {0}")]
    InitError(#[source] anyhow::Error),

    #[error("Client error: {0:?}")]
    ClientError(#[source] anyhow::Error),

    #[error("Server error: {0:?}")]
    ServerError(#[source] anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(#[source] anyhow::Error),
}

impl ToolboxError {
    pub fn serialize(&self) -> SerializedError {
        match self {
            Self::InitError(error)
            | Self::ClientError(error)
            | Self::ServerError(error)
            | Self::NotFound(error) => error.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InitError(_) | Self::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ClientError(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ToolboxError {
    fn into_response(self) -> Response { (self.status_code(), Json(self.serialize())).into_response() }
}

/// The body of every error response. Only the outermost message is exposed,
/// the causes end up in the logs.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct SerializedError {
    pub error: String,
}

impl From<&anyhow::Error> for SerializedError {
    fn from(error: &anyhow::Error) -> SerializedError {
        SerializedError {
            error: error.to_string(),
        }
    }
}

impl OperationOutput for ToolboxError {
    type Inner = Self;
}

pub const fn init_error(error: anyhow::Error) -> ToolboxError { ToolboxError::InitError(error) }

pub fn server_error(error: anyhow::Error) -> ToolboxError {
    error!("Server error: {error:?}");
    ToolboxError::ServerError(error)
}

pub fn client_error(error: anyhow::Error) -> ToolboxError {
    info!("Client error: {error:?}");
    ToolboxError::ClientError(error)
}

pub fn not_found_error(error: anyhow::Error) -> ToolboxError {
    info!("Not found error: {error:?}");
    ToolboxError::NotFound(error)
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_only_outermost_message_is_serialized() {
        let error = anyhow!("disk on fire").context("Failed to analyze tokens");

        assert_eq!(
            server_error(error).serialize(),
            SerializedError {
                error: "Failed to analyze tokens".to_owned()
            }
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            client_error(anyhow!("Text is required")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            server_error(anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            not_found_error(anyhow!("Page not found")).status_code(),
            StatusCode::NOT_FOUND
        );
    }
}
