// Extractor configuration, optionally loaded from a TOML file
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::utils::ExtractError;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Text lines shorter than this (in characters) are never voter rows.
    pub min_line_length: usize,
    /// Table rows with fewer cells are headers or decoration.
    pub min_table_cells: usize,
    /// Derive table rows from column-aligned page text.
    pub detect_tables: bool,
    pub max_column_width: usize,
    pub sheet_name: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            min_line_length: 20,
            min_table_cells: 10,
            detect_tables: true,
            max_column_width: 50,
            sheet_name: "Electoral_Data".to_string(),
        }
    }
}

impl ExtractorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ExtractError> {
        toml::from_str(content).map_err(|e| ExtractError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ExtractError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ExtractError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = ExtractorConfig::from_toml_str("min_line_length = 30\ndetect_tables = false\n").unwrap();
        assert_eq!(config.min_line_length, 30);
        assert!(!config.detect_tables);
        assert_eq!(config.min_table_cells, 10);
        assert_eq!(config.max_column_width, 50);
        assert_eq!(config.sheet_name, "Electoral_Data");
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(ExtractorConfig::from_toml_str("").unwrap(), ExtractorConfig::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let result = ExtractorConfig::from_toml_str("min_line_length = \"long\"");
        assert!(matches!(result, Err(ExtractError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = ExtractorConfig::load(Path::new("/no/such/voter_roll.toml"));
        assert!(matches!(result, Err(ExtractError::Config(_))));
    }
}
