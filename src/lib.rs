pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

use crate::api::handlers;
use crate::api::middleware::request_id::{REQUEST_ID_HEADER, request_id_middleware};
use crate::config::ServerConfig;
use crate::services::storage::LocalStorageService;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Request, Response},
    middleware::from_fn,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::files::upload_files),
    components(
        schemas(
            handlers::files::UploadForm,
            models::UploadSuccess,
            models::UploadRejected,
        )
    ),
    tags(
        (name = "files", description = "File upload endpoints")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub storage: Arc<LocalStorageService>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let storage = Arc::new(LocalStorageService::new(config.uploads_dir.clone()));
        Self {
            config: Arc::new(config),
            storage,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_root);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(handlers::pages::index))
        // The page posts to `/upload`; keep both spellings on one handler
        .route("/upload", post(handlers::files::upload_files))
        .route("/upload/", post(handlers::files::upload_files))
        .nest_service("/static", static_files)
        .layer(DefaultBodyLimit::disable())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let request_id = request
                        .headers()
                        .get(&REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(|request: &Request<_>, _span: &tracing::Span| {
                    info!("📥 {} {}", request.method(), request.uri());
                })
                .on_response(
                    |response: &Response<_>, latency: Duration, _span: &tracing::Span| {
                        info!(
                            "📤 Finished in {:?} with status {}",
                            latency,
                            response.status()
                        );
                    },
                ),
        )
        // Outermost, so the trace span already sees the request id
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
