// Document reader - pure Rust PDF text extraction via lopdf
use lopdf::Document;
use std::path::Path;

use crate::models::VoterField;
use crate::processing::patterns::CELL_SEPARATOR;
use crate::utils::ExtractError;

/// Page text and detected table rows of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDocument {
    pub pages: Vec<String>,
    pub table_rows: Vec<Vec<String>>,
}

impl RawDocument {
    /// Build from page texts, deriving table rows when `detect_tables` is set.
    pub fn from_pages(pages: Vec<String>, detect_tables: bool) -> Self {
        let table_rows = if detect_tables {
            pages.iter().flat_map(|page| detect_table_rows(page)).collect()
        } else {
            Vec::new()
        };
        RawDocument { pages, table_rows }
    }

    /// All page texts, each followed by a newline.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for page in &self.pages {
            text.push_str(page);
            text.push('\n');
        }
        text
    }

    pub fn is_blank(&self) -> bool {
        self.table_rows.is_empty() && self.pages.iter().all(|page| page.trim().is_empty())
    }
}

/// Source of document text and table rows.
pub trait DocumentReader {
    fn open(&self, path: &Path) -> Result<RawDocument, ExtractError>;
}

/// Reads PDF files with lopdf.
#[derive(Debug, Clone)]
pub struct PdfReader {
    detect_tables: bool,
}

impl PdfReader {
    pub fn new(detect_tables: bool) -> Self {
        PdfReader { detect_tables }
    }

    pub fn extract_pages(document: &Document, path: &Path) -> Vec<String> {
        document
            .get_pages()
            .keys()
            .map(|&page_number| match document.extract_text(&[page_number]) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!(
                        "Could not decode page {} of {}: {}",
                        page_number,
                        path.display(),
                        e
                    );
                    String::new()
                }
            })
            .collect()
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        PdfReader::new(true)
    }
}

impl DocumentReader for PdfReader {
    fn open(&self, path: &Path) -> Result<RawDocument, ExtractError> {
        let document = Document::load(path).map_err(|e| ExtractError::unreadable(path, e))?;
        if document.is_encrypted() {
            return Err(ExtractError::unreadable(path, "document is encrypted"));
        }

        let pages = Self::extract_pages(&document, path);
        log::debug!("Read {} pages from {}", pages.len(), path.display());
        Ok(RawDocument::from_pages(pages, self.detect_tables))
    }
}

/// Rows of column-aligned text: lines whose cells are separated by tabs or
/// runs of two or more spaces and that fill exactly the 17-column roll
/// layout. Any other aligned line stays with the text-line parser.
pub fn detect_table_rows(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            CELL_SEPARATOR
                .split(line)
                .map(|cell| cell.trim().to_string())
                .collect::<Vec<String>>()
        })
        .filter(|cells| cells.len() == VoterField::ALL.len())
        .collect()
}
