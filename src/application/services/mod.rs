mod generation_service;
mod prompt_augmenter;

pub use generation_service::{GenerationError, GenerationService};
pub use prompt_augmenter::{
    AugmentError, DEFAULT_CONTEXT_SEPARATOR, DEFAULT_MAX_CONTEXT_CHARS, DEFAULT_PROMPT_TEMPLATE,
    PromptAugmenter, normalize_image_data, render_prompt, truncate_chars,
};
