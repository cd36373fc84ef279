mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    BackendSettings, ExtractionSettings, ImageSettings, LoggingSettings, PdfExtractionSettings,
    RagSettings, ServerSettings, Settings,
};
