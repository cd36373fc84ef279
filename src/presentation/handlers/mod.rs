mod error;
mod generate;
mod health;
mod process_pdf;
mod root;
mod tags;

pub use error::{ApiError, ErrorResponse};
pub use generate::generate_handler;
pub use health::health_handler;
pub use process_pdf::process_pdf_handler;
pub use root::root_handler;
pub use tags::tags_handler;
