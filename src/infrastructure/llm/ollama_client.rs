use std::time::Duration;

use async_trait::async_trait;
use futures::stream::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::application::ports::{BackendError, GenerateOutput, InferenceBackend};
use crate::domain::BackendGenerateRequest;

const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

/// Speaks Ollama's native HTTP API.
pub struct OllamaClient {
    client: Client,
    base_url: String,
    generate_timeout: Duration,
    tags_timeout: Duration,
}

impl OllamaClient {
    pub fn new(base_url: &str, generate_timeout: Duration, tags_timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            generate_timeout,
            tags_timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn ensure_success(response: Response) -> Result<Response, BackendError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(status, error = %e, "Failed to read backend error body");
                String::new()
            }
        };
        Err(BackendError::Status { status, body })
    }

    /// The request timeout also covers the body, so a stalled read is a
    /// timeout rather than a decode failure.
    async fn read_json(response: Response) -> Result<Value, BackendError> {
        let body = response.bytes().await.map_err(map_send_error)?;
        serde_json::from_slice(&body).map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}

fn map_send_error(error: reqwest::Error) -> BackendError {
    if error.is_timeout() {
        BackendError::Timeout
    } else {
        BackendError::Connection(error.to_string())
    }
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    #[tracing::instrument(skip(self, request), fields(model = %request.model, stream = request.stream))]
    async fn generate(
        &self,
        request: &BackendGenerateRequest,
    ) -> Result<GenerateOutput, BackendError> {
        let url = format!("{}/api/generate", self.base_url);

        if !request.stream {
            let response = self
                .client
                .post(&url)
                .json(request)
                .timeout(self.generate_timeout)
                .send()
                .await
                .map_err(map_send_error)?;
            let response = Self::ensure_success(response).await?;
            return Self::read_json(response).await.map(GenerateOutput::Complete);
        }

        // A streamed generation may run far longer than the timeout, so only
        // the wait for response headers is bounded.
        let response = tokio::time::timeout(
            self.generate_timeout,
            self.client.post(&url).json(request).send(),
        )
        .await
        .map_err(|_| BackendError::Timeout)?
        .map_err(map_send_error)?;
        let response = Self::ensure_success(response).await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(NDJSON_CONTENT_TYPE)
            .to_string();

        let body = Box::pin(response.bytes_stream().map(|chunk| chunk.map_err(map_send_error)));

        tracing::debug!(content_type = %content_type, "Relaying streamed generation");

        Ok(GenerateOutput::Streaming { content_type, body })
    }

    #[tracing::instrument(skip(self))]
    async fn list_models(&self) -> Result<Value, BackendError> {
        let response = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .timeout(self.tags_timeout)
            .send()
            .await
            .map_err(map_send_error)?;
        let response = Self::ensure_success(response).await?;
        Self::read_json(response).await
    }
}
