use std::path::Path;

use crate::config::ExtractorConfig;
use crate::models::*;
use crate::processing::*;
use crate::utils::{discover_documents, ExtractError};
use crate::validation::RecordValidator;

/// Runs the extraction pipeline over documents: header, then table rows,
/// then the text-line fallback, with validation on every candidate.
pub struct RollExtractor<R: DocumentReader = PdfReader> {
    reader: R,
    config: ExtractorConfig,
}

impl RollExtractor<PdfReader> {
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        RollExtractor {
            reader: PdfReader::new(config.detect_tables),
            config,
        }
    }
}

impl Default for RollExtractor<PdfReader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: DocumentReader> RollExtractor<R> {
    pub fn with_reader(reader: R, config: ExtractorConfig) -> Self {
        RollExtractor { reader, config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Full extraction result for one document.
    pub fn extract_document(&self, path: &Path) -> Result<DocumentExtraction, ExtractError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        log::info!("Processing: {}", name);

        // Step 1: Read page text and table rows
        let document = self.reader.open(path)?;
        let text = document.text();
        if document.is_blank() {
            log::warn!("No text extracted from {}", path.display());
        }

        // Step 2: Header context, shared by every record of the document
        let header = HeaderParser::parse(&text);
        log::debug!("Header info: {:?}", header);

        // Step 3: Records, table first
        let (strategy, records) = self.extract_records(&document, &text, &header);

        match strategy {
            Some(strategy) => log::info!(
                "Extracted {} voter records from {} ({:?})",
                records.len(),
                name,
                strategy
            ),
            None => log::warn!("{}", ExtractError::NoDataExtracted(path.to_path_buf())),
        }

        Ok(DocumentExtraction {
            path: path.to_path_buf(),
            page_count: document.pages.len(),
            table_row_count: document.table_rows.len(),
            header,
            strategy,
            records,
        })
    }

    fn extract_records(
        &self,
        document: &RawDocument,
        text: &str,
        header: &HeaderContext,
    ) -> (Option<ExtractionStrategy>, Vec<VoterRecord>) {
        let table_records: Vec<VoterRecord> =
            TableRowMapper::map_table_rows(&document.table_rows, header, self.config.min_table_cells)
                .into_iter()
                .filter(|record| RecordValidator::validate(record))
                .collect();
        if !table_records.is_empty() {
            return (Some(ExtractionStrategy::Table), table_records);
        }

        log::debug!(
            "No table records from {} detected rows, falling back to text lines",
            document.table_rows.len()
        );
        let line_records = TextLineParser::parse_lines(text, header, self.config.min_line_length);
        if !line_records.is_empty() {
            return (Some(ExtractionStrategy::TextLines), line_records);
        }

        (None, Vec::new())
    }

    pub fn process_document(&self, path: &Path) -> Result<Vec<VoterRecord>, ExtractError> {
        self.extract_document(path).map(|extraction| extraction.records)
    }

    /// Process documents strictly in the given order. Unreadable documents
    /// are recorded as failures and do not stop the batch.
    pub fn process_batch<P: AsRef<Path>>(&self, paths: &[P]) -> Batch {
        let mut batch = Batch::new();
        for path in paths {
            let path = path.as_ref();
            match self.extract_document(path) {
                Ok(extraction) => batch.push_document(extraction),
                Err(e) => {
                    log::error!("Error extracting text from {}: {}", path.display(), e);
                    batch.push_failure(path.to_path_buf(), e);
                }
            }
        }
        log::info!("Total records extracted: {}", batch.len());
        batch
    }

    /// Discover PDFs under a file or directory and process them as a batch.
    pub fn process_path(&self, input: &Path) -> Result<Batch, ExtractError> {
        let documents = discover_documents(input)?;
        log::info!("Found {} PDF files to process", documents.len());
        Ok(self.process_batch(&documents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory reader keyed by path.
    struct StaticReader {
        documents: HashMap<PathBuf, RawDocument>,
    }

    impl StaticReader {
        fn new(entries: Vec<(&str, RawDocument)>) -> Self {
            StaticReader {
                documents: entries
                    .into_iter()
                    .map(|(path, document)| (PathBuf::from(path), document))
                    .collect(),
            }
        }
    }

    impl DocumentReader for StaticReader {
        fn open(&self, path: &Path) -> Result<RawDocument, ExtractError> {
            self.documents
                .get(path)
                .cloned()
                .ok_or_else(|| ExtractError::unreadable(path, "not found"))
        }
    }

    const HEADER_TEXT: &str = "राज्य: S24\nविधान सभा: 123 - सरोजिनी नगर\nमतदान केंद्र: 456 - प्राथमिक विद्यालय\n";
    const BILINGUAL_LINE: &str =
        "1 1 Samsudin Ansari समसुद्दीन अंसारी F Israil Ansari इसरायल अंसारी ZIQ1306695 M 39";
    const LATIN_LINE: &str = "2 14 Rekha Devi H Suresh Kumar ABC1234567 F 34";

    fn table_row(serial: &str, epic: &str) -> Vec<String> {
        [
            "S24", "123", "456", serial, "3", "Ram", "Lal", "राम", "लाल", "F", "Mohan", "Lal", "मोहन",
            "लाल", epic, "M", "50",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect()
    }

    fn text_document() -> RawDocument {
        RawDocument {
            pages: vec![
                format!("{}{}", HEADER_TEXT, BILINGUAL_LINE),
                format!("Page 2\n{}\n", LATIN_LINE),
            ],
            table_rows: Vec::new(),
        }
    }

    fn table_document() -> RawDocument {
        RawDocument {
            pages: vec![format!("{}{}", HEADER_TEXT, LATIN_LINE)],
            table_rows: vec![
                vec!["SLNOINPART".to_string(), "EPIC_NO".to_string()],
                table_row("1", "ABC0000001"),
                table_row("2", "BAD"),
                table_row("3", "ABC0000003"),
            ],
        }
    }

    fn extractor(entries: Vec<(&str, RawDocument)>) -> RollExtractor<StaticReader> {
        RollExtractor::with_reader(StaticReader::new(entries), ExtractorConfig::default())
    }

    #[test]
    fn test_table_strategy_preferred() {
        let extractor = extractor(vec![("table.pdf", table_document())]);
        let extraction = extractor.extract_document(Path::new("table.pdf")).unwrap();

        assert_eq!(extraction.strategy, Some(ExtractionStrategy::Table));
        let serials: Vec<&str> = extraction.records.iter().map(|r| r.serial_number.as_str()).collect();
        assert_eq!(serials, vec!["1", "3"]);
        assert_eq!(extraction.records[0].state_code, "S24");
        assert_eq!(extraction.records[0].constituency_number, "123");
        assert_eq!(extraction.records[0].part_number, "456");
        assert_eq!(extraction.header.booth_name.as_deref(), Some("प्राथमिक विद्यालय"));
    }

    #[test]
    fn test_fallback_to_text_lines() {
        let document = text_document();
        let expected = TextLineParser::parse_lines(&document.text(), &HeaderParser::parse(&document.text()), 20);

        let extractor = extractor(vec![("text.pdf", document)]);
        let extraction = extractor.extract_document(Path::new("text.pdf")).unwrap();

        assert_eq!(extraction.strategy, Some(ExtractionStrategy::TextLines));
        assert_eq!(extraction.records.len(), 2);
        assert_eq!(extraction.records, expected);
        assert_eq!(extraction.records[0].first_name, "Samsudin");
        assert_eq!(extraction.records[1].serial_number, "14");
        assert_eq!(extraction.records[1].first_name, "Rekha");
        assert_eq!(extraction.records[1].last_name, "Devi H Suresh Kumar");
        assert_eq!(extraction.records[1].constituency_number, "123");
        assert_eq!(extraction.page_count, 2);
        assert_eq!(extraction.table_row_count, 0);
    }

    #[test]
    fn test_aligned_voter_line_goes_to_text_lines() {
        let line = "1  1  Samsudin  Ansari  समसुद्दीन  अंसारी  F  Israil  Ansari  इसरायल  अंसारी  ZIQ1306695  M  39";
        let document = RawDocument::from_pages(vec![line.to_string()], true);
        let extractor = extractor(vec![("aligned.pdf", document)]);
        let extraction = extractor.extract_document(Path::new("aligned.pdf")).unwrap();

        assert_eq!(extraction.strategy, Some(ExtractionStrategy::TextLines));
        assert_eq!(extraction.table_row_count, 0);
        assert_eq!(extraction.records.len(), 1);
        let record = &extraction.records[0];
        assert_eq!(record.serial_number, "1");
        assert_eq!(record.first_name, "Samsudin");
        assert_eq!(record.epic_id, "ZIQ1306695");
        assert_eq!(record.age, "39");
    }

    #[test]
    fn test_invalid_table_rows_fall_back_to_text() {
        let document = RawDocument {
            pages: vec![BILINGUAL_LINE.to_string()],
            table_rows: vec![table_row("", "ABC0000001")],
        };
        let extractor = extractor(vec![("mixed.pdf", document)]);
        let extraction = extractor.extract_document(Path::new("mixed.pdf")).unwrap();
        assert_eq!(extraction.strategy, Some(ExtractionStrategy::TextLines));
        assert_eq!(extraction.records.len(), 1);
    }

    #[test]
    fn test_empty_document_is_not_an_error() {
        let document = RawDocument {
            pages: vec!["ELECTORAL ROLL - nothing here but headings".to_string()],
            table_rows: Vec::new(),
        };
        let extractor = extractor(vec![("empty.pdf", document)]);
        let extraction = extractor.extract_document(Path::new("empty.pdf")).unwrap();
        assert_eq!(extraction.strategy, None);
        assert!(extraction.records.is_empty());
        assert_eq!(extraction.header, HeaderContext::default());
    }

    #[test]
    fn test_process_document_is_idempotent() {
        let extractor = extractor(vec![("text.pdf", text_document())]);
        let first = extractor.process_document(Path::new("text.pdf")).unwrap();
        let second = extractor.process_document(Path::new("text.pdf")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unreadable_document_does_not_abort_batch() {
        let extractor = extractor(vec![
            ("a.pdf", table_document()),
            ("c.pdf", text_document()),
            ("d.pdf", RawDocument::default()),
        ]);
        let batch = extractor.process_batch(&["a.pdf", "b.pdf", "c.pdf", "d.pdf"]);

        assert_eq!(batch.documents_processed, 4);
        assert_eq!(batch.failures.len(), 1);
        assert_eq!(batch.failures[0].path, PathBuf::from("b.pdf"));
        assert!(matches!(batch.failures[0].error, ExtractError::DocumentUnreadable { .. }));
        assert_eq!(batch.empty_documents, vec![PathBuf::from("d.pdf")]);

        // document order, then row order
        let names: Vec<&str> = batch.records.iter().map(|r| r.first_name.as_str()).collect();
        assert_eq!(names, vec!["Ram", "Ram", "Samsudin", "Rekha"]);
        assert_eq!(batch.lead_header.as_ref().map(|h| h.part_number.as_str()), Some("456"));
    }

    #[test]
    fn test_unreadable_single_document_is_error() {
        let extractor = extractor(vec![]);
        let result = extractor.process_document(Path::new("missing.pdf"));
        assert!(matches!(result, Err(ExtractError::DocumentUnreadable { .. })));
    }

    #[test]
    fn test_process_path_missing_input() {
        let extractor = RollExtractor::new();
        let result = extractor.process_path(Path::new("/no/such/rolls"));
        assert!(matches!(result, Err(ExtractError::InvalidInput(_))));
    }
}
