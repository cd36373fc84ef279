use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::attachment::Attachment;

/// Generation request as accepted from clients.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    #[serde(default)]
    pub stream: bool,
    #[serde(default)]
    pub options: Map<String, Value>,
    #[serde(default)]
    pub files: Option<Vec<Attachment>>,
    #[serde(default)]
    pub rag_enabled: bool,
}

/// Body of the backend's native `/api/generate` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackendGenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub options: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}
