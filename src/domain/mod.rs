mod attachment;
mod attachment_kind;
mod document;
mod generation_request;

pub use attachment::Attachment;
pub use attachment_kind::AttachmentKind;
pub use document::{ContentType, Document};
pub use generation_request::{BackendGenerateRequest, GenerationRequest};
