use std::sync::Arc;

use aide::{
    axum::{
        ApiRouter,
        routing::{get, post},
    },
    openapi::{Info, OpenApi},
    scalar::Scalar,
    transform::TransformOpenApi,
};
use anyhow::{Context as _, Result, anyhow};
use axum::{
    Extension, Json, Router,
    extract::{DefaultBodyLimit, Request},
    http::{Method, header},
    response::IntoResponse,
};
use log::{error, info};
use tower_http::{
    LatencyUnit,
    cors::{Any, CorsLayer},
    trace::{DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, MakeSpan, TraceLayer},
};
use tracing::{Level, Span, info_span};

use crate::{
    app_state::AppState,
    errors::{SerializedError, not_found_error},
};

mod count_tokens;
mod diff_texts;
mod ping;
mod requests;
mod responses;
mod settings;

pub async fn create_server(app_state: AppState) -> Result<()> {
    let (address, max_body_size_mb) = {
        let config = app_state.config.read().await;
        (
            format!("{}:{}", config.server.host, config.server.port),
            config.server.max_body_size_mb,
        )
    };

    let app = router(app_state, max_body_size_mb * 1024 * 1024);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to address: {address}"))?;
    let local_address = listener
        .local_addr()
        .context("Failed to get local address")?;
    info!("Listening on http://{local_address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .tcp_nodelay(true)
        .await
        .context("Failed to start server")
}

/// Every documented endpoint. Handlers still need an [`AppState`].
fn api_routes() -> ApiRouter<AppState> {
    ApiRouter::new()
        .api_route("/ping", get(ping::ping))
        .api_route("/api/tokens", post(count_tokens::count_tokens))
        .api_route("/api/diff", post(diff_texts::diff_texts))
        .api_route(
            "/api/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
}

fn router(app_state: AppState, max_body_size: usize) -> Router {
    aide::r#gen::on_error(|err| error!("{err}"));
    aide::r#gen::extract_schemas(true);

    let mut api = OpenApi {
        info: Info {
            title: "Toolbox server".to_owned(),
            summary: Some("Token counting, text diffs and interface settings.".to_owned()),
            description: Some(include_str!("../README.md").to_owned()),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            ..Info::default()
        },
        ..OpenApi::default()
    };

    let trace = TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().level(Level::ERROR));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::PUT]);

    api_routes()
        .route("/", Scalar::new("/api.json").axum_route())
        .route("/api.json", axum::routing::get(serve_api))
        .layer(trace)
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(cors)
        .with_state(app_state)
        .finish_api_with(&mut api, api_docs)
        .layer(Extension(Arc::new(api)))
        .fallback(handler_404)
}

/// One `http_request` span per request, tagged with its method and URI.
#[derive(Debug, Clone, Copy)]
struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        info_span!("http_request", method = ?request.method(), uri = ?request.uri())
    }
}

async fn serve_api(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoResponse { Json(api) }

fn api_docs(api: TransformOpenApi<'_>) -> TransformOpenApi<'_> {
    api.default_response_with::<Json<SerializedError>, _>(|res| {
        res.example(SerializedError {
            error: "An error has occurred".to_owned(),
        })
    })
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM. A listener that can't be
/// installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C"),
            Err(err) => {
                error!("Cannot listen for Ctrl+C: {err}");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received SIGTERM");
            }
            Err(err) => {
                error!("Cannot listen for SIGTERM: {err}");
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutting down");
}

async fn handler_404() -> impl IntoResponse { not_found_error(anyhow!("Page not found")) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_routes() {
        let mut api = OpenApi::default();
        let _ = api_routes().finish_api(&mut api);

        let Some(paths) = api.paths else {
            panic!("No paths were documented");
        };
        for path in ["/ping", "/api/tokens", "/api/diff", "/api/settings"] {
            assert!(paths.paths.contains_key(path), "{path} is not documented");
        }
    }
}
