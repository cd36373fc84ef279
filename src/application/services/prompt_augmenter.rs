use crate::domain::{AttachmentKind, BackendGenerateRequest, GenerationRequest};

pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 2000;
pub const DEFAULT_CONTEXT_SEPARATOR: &str = "\n\n";
pub const DEFAULT_PROMPT_TEMPLATE: &str = "Based on the following context, please answer the question:

Context:
{context}

Question: {question}

Please provide a comprehensive answer based on the context provided.";

const CONTEXT_PLACEHOLDER: &str = "{context}";
const QUESTION_PLACEHOLDER: &str = "{question}";
const DATA_URL_PREFIX: &str = "data:image";

/// Turns a client generation request into the backend's native request by
/// collecting inline images and splicing attached document text into the prompt.
#[derive(Debug, Clone)]
pub struct PromptAugmenter {
    max_context_chars: usize,
    context_separator: String,
    prompt_template: String,
    images_enabled: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum AugmentError {
    #[error("Error processing image: {0}")]
    MalformedImage(String),
}

impl Default for PromptAugmenter {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_CONTEXT_CHARS,
            DEFAULT_CONTEXT_SEPARATOR.to_string(),
            DEFAULT_PROMPT_TEMPLATE.to_string(),
            true,
        )
    }
}

impl PromptAugmenter {
    pub fn new(
        max_context_chars: usize,
        context_separator: String,
        prompt_template: String,
        images_enabled: bool,
    ) -> Self {
        Self {
            max_context_chars,
            context_separator,
            prompt_template,
            images_enabled,
        }
    }

    pub fn augment(
        &self,
        request: GenerationRequest,
    ) -> Result<BackendGenerateRequest, AugmentError> {
        let GenerationRequest {
            model,
            prompt,
            stream,
            options,
            files,
            rag_enabled,
        } = request;

        let mut prompt = prompt;
        let mut images = Vec::new();

        if let Some(files) = files.filter(|_| rag_enabled) {
            let mut context_docs = Vec::new();

            for file in &files {
                match file.kind() {
                    AttachmentKind::Image if self.images_enabled => {
                        let data = normalize_image_data(&file.content).ok_or_else(|| {
                            AugmentError::MalformedImage(format!(
                                "data URL without payload in {}",
                                file.name
                            ))
                        })?;
                        images.push(data.to_string());
                    }
                    kind if kind.is_textual() && !file.content.is_empty() => {
                        context_docs.push(truncate_chars(&file.content, self.max_context_chars));
                    }
                    kind => {
                        tracing::debug!(name = %file.name, kind = %kind, "Skipping attachment");
                    }
                }
            }

            tracing::debug!(
                attachments = files.len(),
                context_docs = context_docs.len(),
                images = images.len(),
                "Processed attachments"
            );

            if !context_docs.is_empty() {
                let context = context_docs.join(&self.context_separator);
                prompt = render_prompt(&self.prompt_template, &context, &prompt);
            }
        }

        Ok(BackendGenerateRequest {
            model,
            prompt,
            stream,
            options,
            images: (!images.is_empty()).then_some(images),
        })
    }
}

/// Strips a `data:image/...;base64,` prefix, leaving the raw base64 payload.
/// Returns `None` for a data URL with no payload segment.
pub fn normalize_image_data(data: &str) -> Option<&str> {
    if !data.starts_with(DATA_URL_PREFIX) {
        return Some(data);
    }

    data.split(',').nth(1)
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Substitutes `{context}` and `{question}` in a single pass so that
/// placeholder text inside either value is left alone.
pub fn render_prompt(template: &str, context: &str, question: &str) -> String {
    let mut out = String::with_capacity(template.len() + context.len() + question.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        if let Some(after) = tail.strip_prefix(CONTEXT_PLACEHOLDER) {
            out.push_str(context);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(QUESTION_PLACEHOLDER) {
            out.push_str(question);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
