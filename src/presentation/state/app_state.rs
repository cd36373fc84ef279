use std::sync::Arc;

use crate::application::ports::{FileLoader, InferenceBackend};
use crate::application::services::GenerationService;
use crate::presentation::config::Settings;

pub struct AppState<B>
where
    B: InferenceBackend,
{
    pub generation_service: Arc<GenerationService<B>>,
    pub pdf_loader: Arc<dyn FileLoader>,
    pub settings: Settings,
}

impl<B> AppState<B>
where
    B: InferenceBackend,
{
    pub fn new(backend: Arc<B>, pdf_loader: Arc<dyn FileLoader>, settings: Settings) -> Self {
        let generation_service = Arc::new(GenerationService::new(
            backend,
            settings.prompt_augmenter(),
        ));

        Self {
            generation_service,
            pdf_loader,
            settings,
        }
    }
}

impl<B> Clone for AppState<B>
where
    B: InferenceBackend,
{
    fn clone(&self) -> Self {
        Self {
            generation_service: Arc::clone(&self.generation_service),
            pdf_loader: Arc::clone(&self.pdf_loader),
            settings: self.settings.clone(),
        }
    }
}
