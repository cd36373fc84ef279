use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Enhanced Ollama Proxy is running!",
    })
}
