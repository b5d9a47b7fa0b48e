use crate::models::VoterField;

/// Cell position in a detected table row and the field it fills.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRule {
    pub index: usize,
    pub field: VoterField,
}

/// Positional layout of electoral roll tables. Cells 0..=2 repeat the
/// state/constituency/part columns and are taken from the header instead.
pub const TABLE_COLUMNS: [ColumnRule; 14] = [
    ColumnRule { index: 3, field: VoterField::SerialNumber },
    ColumnRule { index: 4, field: VoterField::HouseNumber },
    ColumnRule { index: 5, field: VoterField::FirstName },
    ColumnRule { index: 6, field: VoterField::LastName },
    ColumnRule { index: 7, field: VoterField::FirstNameVernacular },
    ColumnRule { index: 8, field: VoterField::LastNameVernacular },
    ColumnRule { index: 9, field: VoterField::RelationType },
    ColumnRule { index: 10, field: VoterField::RelationName },
    ColumnRule { index: 11, field: VoterField::RelationLastName },
    ColumnRule { index: 12, field: VoterField::RelationNameVernacular },
    ColumnRule { index: 13, field: VoterField::RelationLastNameVernacular },
    ColumnRule { index: 14, field: VoterField::EpicId },
    ColumnRule { index: 15, field: VoterField::Gender },
    ColumnRule { index: 16, field: VoterField::Age },
];

impl ColumnRule {
    /// Trimmed cell for this rule, or "" when the row is too short.
    pub fn cell<'r>(&self, row: &'r [String]) -> &'r str {
        row.get(self.index).map(|cell| cell.trim()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_are_contiguous_and_unique() {
        for (offset, rule) in TABLE_COLUMNS.iter().enumerate() {
            assert_eq!(rule.index, offset + 3);
        }
        let mut fields: Vec<&str> = TABLE_COLUMNS.iter().map(|r| r.field.key()).collect();
        fields.sort();
        fields.dedup();
        assert_eq!(fields.len(), TABLE_COLUMNS.len());
    }

    #[test]
    fn test_cell_out_of_range_is_empty() {
        let row = vec!["a".to_string(), " b ".to_string()];
        let rule = ColumnRule { index: 1, field: VoterField::SerialNumber };
        assert_eq!(rule.cell(&row), "b");
        assert_eq!(TABLE_COLUMNS[13].cell(&row), "");
    }
}
