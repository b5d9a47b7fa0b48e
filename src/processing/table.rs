use crate::models::{HeaderContext, VoterRecord, TABLE_COLUMNS};

/// Maps detected table rows onto voter records by cell position.
pub struct TableRowMapper;

impl TableRowMapper {
    /// Map one row. Cells beyond the end of the row are read as "".
    pub fn map_row(row: &[String], header: &HeaderContext) -> VoterRecord {
        let mut record = VoterRecord::stamped(header);
        for rule in TABLE_COLUMNS.iter() {
            record.set(rule.field, rule.cell(row));
        }
        record
    }

    /// Map every data row; rows with fewer than `min_cells` cells are
    /// headers or page decoration and are skipped. Records are not validated.
    pub fn map_table_rows(
        rows: &[Vec<String>],
        header: &HeaderContext,
        min_cells: usize,
    ) -> Vec<VoterRecord> {
        rows.iter()
            .filter(|row| row.len() >= min_cells)
            .map(|row| Self::map_row(row, header))
            .collect()
    }
}
