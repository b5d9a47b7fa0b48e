use lazy_static::lazy_static;
use regex::Regex;
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ExtractorConfig;
use crate::models::{Batch, VoterField, VoterRecord};
use crate::utils::file_handler::has_extension;
use crate::utils::ExtractError;

pub const DEFAULT_FILE_NAME: &str = "electoral_data.xlsx";

lazy_static! {
    static ref UNSAFE_FILE_CHARS: Regex = Regex::new(r"[^\w\s.-]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// File name `<part>_<booth>_<ac>_<state>.xlsx` derived from the first record.
pub fn default_file_name(records: &[VoterRecord], booth_name: Option<&str>) -> String {
    let first = match records.first() {
        Some(record) => record,
        None => return DEFAULT_FILE_NAME.to_string(),
    };

    let booth = match booth_name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("Part{}", first.part_number),
    };
    let raw = format!(
        "{}_{}_{}_{}.xlsx",
        first.part_number, booth, first.constituency_number, first.state_code
    );

    let cleaned = UNSAFE_FILE_CHARS.replace_all(&raw, "");
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, "_");
    let cleaned = cleaned.replace("__", "_");
    let cleaned = cleaned.trim_matches('_');

    if cleaned.ends_with(".xlsx") {
        cleaned.to_string()
    } else {
        format!("{}.xlsx", cleaned)
    }
}

/// Width per output column: longest cell (header included) plus padding,
/// capped at `max_width`.
pub fn column_widths(records: &[VoterRecord], max_width: usize) -> Vec<usize> {
    VoterField::ALL
        .iter()
        .map(|field| {
            let longest = records
                .iter()
                .map(|record| record.get(*field).chars().count())
                .chain(std::iter::once(field.column_header().chars().count()))
                .max()
                .unwrap_or(0);
            (longest + 2).min(max_width)
        })
        .collect()
}

/// Writes a batch as a single-sheet workbook in the fixed 17-column order.
pub struct SpreadsheetWriter {
    sheet_name: String,
    max_column_width: usize,
}

impl SpreadsheetWriter {
    pub fn new(config: &ExtractorConfig) -> Self {
        SpreadsheetWriter {
            sheet_name: config.sheet_name.clone(),
            max_column_width: config.max_column_width,
        }
    }

    /// Destination ending in `.xlsx` is used as is; anything else is a
    /// directory that receives the default file name.
    pub fn resolve_destination(&self, batch: &Batch, destination: &Path) -> PathBuf {
        if has_extension(destination, "xlsx") {
            destination.to_path_buf()
        } else {
            let booth = batch.lead_header.as_ref().and_then(|h| h.booth_name.as_deref());
            destination.join(default_file_name(&batch.records, booth))
        }
    }

    pub fn write(&self, batch: &Batch, destination: &Path) -> Result<PathBuf, ExtractError> {
        if batch.is_empty() {
            return Err(ExtractError::write_failure(destination, "no records to write"));
        }

        let path = self.resolve_destination(batch, destination);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ExtractError::write_failure(parent, e))?;
        }

        self.write_workbook(&batch.records, &path)
            .map_err(|e| ExtractError::write_failure(&path, e))?;

        log::info!("Data saved successfully to: {}", path.display());
        Ok(path)
    }

    fn write_workbook(
        &self,
        records: &[VoterRecord],
        path: &Path,
    ) -> Result<(), rust_xlsxwriter::XlsxError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(self.sheet_name.as_str())?;

            for (col, field) in VoterField::ALL.iter().enumerate() {
                worksheet.write_string_with_format(0, col as u16, field.column_header(), &header_format)?;
            }

            for (row, record) in records.iter().enumerate() {
                for (col, field) in VoterField::ALL.iter().enumerate() {
                    let value = record.get(*field);
                    if !value.is_empty() {
                        worksheet.write_string(row as u32 + 1, col as u16, value)?;
                    }
                }
            }

            for (col, width) in column_widths(records, self.max_column_width).into_iter().enumerate() {
                worksheet.set_column_width(col as u16, width as f64)?;
            }
        }

        workbook.save(path)
    }
}
