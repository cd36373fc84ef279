use serde::{Deserialize, Deserializer, Serialize};

use super::attachment_kind::AttachmentKind;

const DEFAULT_ATTACHMENT_NAME: &str = "unknown";

/// A file sent inline with a generation request.
///
/// Every field is optional on the wire, and an explicit `null` takes the
/// same default as an absent field. Textual attachments carry already
/// extracted text, image attachments carry base64 data (optionally wrapped
/// in a `data:image/...;base64,` URL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub file_type: String,
    #[serde(default = "default_name", deserialize_with = "null_as_default_name")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

fn default_name() -> String {
    DEFAULT_ATTACHMENT_NAME.to_string()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn null_as_default_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|name| name.unwrap_or_else(default_name))
}

impl Attachment {
    pub fn new(kind: AttachmentKind, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_type: kind.as_str().to_string(),
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn kind(&self) -> AttachmentKind {
        AttachmentKind::from(self.file_type.as_str())
    }
}
