use std::fmt;

/// Classification of a file attached to a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    Image,
    Pdf,
    Text,
    Document,
    Unknown,
}

impl AttachmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentKind::Image => "image",
            AttachmentKind::Pdf => "pdf",
            AttachmentKind::Text => "text",
            AttachmentKind::Document => "document",
            AttachmentKind::Unknown => "unknown",
        }
    }

    /// Whether the attachment carries text that may be spliced into the prompt.
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            AttachmentKind::Pdf | AttachmentKind::Text | AttachmentKind::Document
        )
    }
}

impl From<&str> for AttachmentKind {
    fn from(s: &str) -> Self {
        match s {
            "image" => AttachmentKind::Image,
            "pdf" => AttachmentKind::Pdf,
            "text" => AttachmentKind::Text,
            "document" => AttachmentKind::Document,
            _ => AttachmentKind::Unknown,
        }
    }
}

impl fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
