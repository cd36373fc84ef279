use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::InferenceBackend;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub features: Features,
}

#[derive(Serialize)]
pub struct Features {
    pub pdf_processing: bool,
    pub image_processing: bool,
}

pub async fn health_handler<B>(State(state): State<AppState<B>>) -> impl IntoResponse
where
    B: InferenceBackend + 'static,
{
    let extraction = &state.settings.extraction;

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            features: Features {
                pdf_processing: extraction.pdf.enabled,
                image_processing: extraction.images.enabled,
            },
        }),
    )
}
