mod file_loader;
mod inference_backend;

pub use file_loader::{FileLoader, FileLoaderError};
pub use inference_backend::{BackendByteStream, BackendError, GenerateOutput, InferenceBackend};
