use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::ports::{GenerateOutput, InferenceBackend};
use crate::domain::GenerationRequest;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::ApiError;

#[tracing::instrument(skip(state, payload))]
pub async fn generate_handler<B>(
    State(state): State<AppState<B>>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Response, ApiError>
where
    B: InferenceBackend + 'static,
{
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected generation request body");
        ApiError::new(rejection.status(), rejection.body_text())
    })?;

    tracing::info!(
        model = %request.model,
        stream = request.stream,
        rag_enabled = request.rag_enabled,
        files = request.files.as_ref().map_or(0, Vec::len),
        "Generation request received"
    );
    tracing::debug!(prompt = %sanitize_prompt(&request.prompt), "Client prompt");

    let output = state
        .generation_service
        .generate(request)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Generation failed");
            ApiError::from(e)
        })?;

    let response = match output {
        GenerateOutput::Complete(body) => (StatusCode::OK, Json(body)).into_response(),
        GenerateOutput::Streaming { content_type, body } => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type)],
            Body::from_stream(body),
        )
            .into_response(),
    };

    Ok(response)
}
