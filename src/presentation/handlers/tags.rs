use axum::Json;
use axum::extract::State;
use serde_json::Value;

use crate::application::ports::InferenceBackend;
use crate::presentation::state::AppState;

use super::error::ApiError;

#[tracing::instrument(skip(state))]
pub async fn tags_handler<B>(State(state): State<AppState<B>>) -> Result<Json<Value>, ApiError>
where
    B: InferenceBackend + 'static,
{
    let models = state.generation_service.list_models().await.map_err(|e| {
        tracing::error!(error = %e, "Listing backend models failed");
        ApiError::from(e)
    })?;

    Ok(Json(models))
}
