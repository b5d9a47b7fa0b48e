pub mod error;
pub mod file_handler;
pub mod logger;

pub use error::ExtractError;
pub use file_handler::{discover_documents, validate_input_path, validate_output_path};
pub use logger::init_logging;
