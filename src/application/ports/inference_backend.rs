use std::fmt;
use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use serde_json::Value;

use crate::domain::BackendGenerateRequest;

pub type BackendByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, BackendError>> + Send>>;

/// What the backend produced for a generation call.
pub enum GenerateOutput {
    /// Single JSON document, relayed as-is.
    Complete(Value),
    /// Incremental body (NDJSON for Ollama), relayed chunk for chunk.
    Streaming {
        content_type: String,
        body: BackendByteStream,
    },
}

impl fmt::Debug for GenerateOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateOutput::Complete(value) => f.debug_tuple("Complete").field(value).finish(),
            GenerateOutput::Streaming { content_type, .. } => f
                .debug_struct("Streaming")
                .field("content_type", content_type)
                .finish_non_exhaustive(),
        }
    }
}

#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn generate(
        &self,
        request: &BackendGenerateRequest,
    ) -> Result<GenerateOutput, BackendError>;

    async fn list_models(&self) -> Result<Value, BackendError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("request timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
