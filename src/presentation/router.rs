use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::InferenceBackend;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    generate_handler, health_handler, process_pdf_handler, root_handler, tags_handler,
};
use crate::presentation::state::AppState;

// multipart framing on top of the file itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn create_router<B>(state: AppState<B>) -> Router
where
    B: InferenceBackend + 'static,
{
    // Any origin with credentials: `*` is not allowed there, so mirror the request.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let pdf_body_limit =
        state.settings.extraction.pdf.max_file_size_bytes() + MULTIPART_OVERHEAD_BYTES;
    let request_body_limit = state.settings.server.max_request_body_bytes();

    Router::new()
        .route("/", get(root_handler))
        .route("/api/health", get(health_handler::<B>))
        .route("/api/tags", get(tags_handler::<B>))
        .route(
            "/api/generate",
            post(generate_handler::<B>).layer(DefaultBodyLimit::max(request_body_limit)),
        )
        .route(
            "/api/process-pdf",
            post(process_pdf_handler::<B>).layer(DefaultBodyLimit::max(pdf_body_limit)),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
