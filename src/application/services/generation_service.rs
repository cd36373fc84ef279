use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::{BackendError, GenerateOutput, InferenceBackend};
use crate::domain::GenerationRequest;

use super::prompt_augmenter::{AugmentError, PromptAugmenter};

pub struct GenerationService<B>
where
    B: InferenceBackend,
{
    backend: Arc<B>,
    augmenter: PromptAugmenter,
}

impl<B> GenerationService<B>
where
    B: InferenceBackend,
{
    pub fn new(backend: Arc<B>, augmenter: PromptAugmenter) -> Self {
        Self { backend, augmenter }
    }

    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerateOutput, GenerationError> {
        let backend_request = self.augmenter.augment(request)?;

        tracing::debug!(
            model = %backend_request.model,
            stream = backend_request.stream,
            images = backend_request.images.as_ref().map_or(0, Vec::len),
            prompt_chars = backend_request.prompt.chars().count(),
            "Forwarding generation request"
        );

        Ok(self.backend.generate(&backend_request).await?)
    }

    pub async fn list_models(&self) -> Result<Value, BackendError> {
        self.backend.list_models().await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error(transparent)]
    Attachment(#[from] AugmentError),
    #[error("backend: {0}")]
    Backend(#[from] BackendError),
}
