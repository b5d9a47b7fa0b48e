pub mod config;
pub mod models;
pub mod output;
pub mod processing;
pub mod roll_extractor;
pub mod utils;
pub mod validation;

pub use config::ExtractorConfig;
pub use roll_extractor::RollExtractor;
