// Compiled pattern tables for header and voter-line extraction.
// Every list is evaluated in declaration order and the first match wins,
// so the order below is part of the extraction contract.
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::VoterField;

/// Patterns with at least this many capture groups use the full bilingual
/// mapping; every other pattern uses the simple five-field mapping.
pub const FULL_MAPPING_MIN_GROUPS: usize = 13;

/// Capture group order of the bilingual pattern.
pub const BILINGUAL_FIELDS: [VoterField; 14] = [
    VoterField::SerialNumber,
    VoterField::HouseNumber,
    VoterField::FirstName,
    VoterField::LastName,
    VoterField::FirstNameVernacular,
    VoterField::LastNameVernacular,
    VoterField::RelationType,
    VoterField::RelationName,
    VoterField::RelationLastName,
    VoterField::RelationNameVernacular,
    VoterField::RelationLastNameVernacular,
    VoterField::EpicId,
    VoterField::Gender,
    VoterField::Age,
];

lazy_static! {
    // Prose labels come before terse machine tags
    pub static ref STATE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?im)राज्य[:\s]*([^\n]+)").unwrap(),
        Regex::new(r"(?im)State[:\s]*([^\n]+)").unwrap(),
        Regex::new(r"(?im)State\s*Code[:\s]*(\w+)").unwrap(),
        Regex::new(r"(?im)ST_CODE[:\s]*(\w+)").unwrap(),
    ];

    pub static ref CONSTITUENCY_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?im)विधान\s*सभा[:\s]*(\d+)\s*-\s*([^\n]+)").unwrap(),
        Regex::new(r"(?im)Assembly\s*Constituency[:\s]*(\d+)\s*-\s*([^\n]+)").unwrap(),
        Regex::new(r"(?im)AC[:\s]*(\d+)\s*-\s*([^\n]+)").unwrap(),
        Regex::new(r"(?im)AC_NO[:\s]*(\d+)").unwrap(),
    ];

    pub static ref BOOTH_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?im)मतदान\s*केंद्र[:\s]*(\d+)\s*-\s*([^\n]+)").unwrap(),
        Regex::new(r"(?im)Polling\s*Station[:\s]*(\d+)\s*-\s*([^\n]+)").unwrap(),
        Regex::new(r"(?im)PS[:\s]*(\d+)\s*-\s*([^\n]+)").unwrap(),
        Regex::new(r"(?im)PART[:\s]*(\d+)").unwrap(),
    ];

    // Most specific first
    pub static ref LINE_PATTERNS: Vec<Regex> = vec![
        // 1 1 Samsudin Ansari समसुद्दीन अंसारी F Israil Ansari इसरायल अंसारी ZIQ1306695 M 39
        Regex::new(concat!(
            r"(\d+)\s+(\d+)\s+([A-Za-z]+)\s+([A-Za-z]+)\s+",
            r"([\x{0900}-\x{097F}]+)\s+([\x{0900}-\x{097F}]+)\s+",
            r"([FH])\s+([A-Za-z]+)\s+([A-Za-z]+)\s+",
            r"([\x{0900}-\x{097F}]+)\s+([\x{0900}-\x{097F}]+)\s+",
            r"([A-Z0-9]{10})\s+([MF])\s+(\d+)",
        ))
        .unwrap(),
        // 1 1 Samsudin Ansari F Israil Ansari ZIQ1306695 M 39
        Regex::new(concat!(
            r"(\d+)\s+(\d+)\s+([A-Za-z]+)\s+([A-Za-z]+)\s+",
            r"([FH])\s+([A-Za-z]+)\s+([A-Za-z]+)\s+",
            r"([A-Z0-9]{10})\s+([MF])\s+(\d+)",
        ))
        .unwrap(),
        Regex::new(r"(\d+)\s+([^\d]+?)\s+([A-Z0-9]{10})\s+([MF])\s+(\d+)").unwrap(),
    ];

    // Tabs or runs of two or more spaces separate cells in column-aligned text
    pub static ref CELL_SEPARATOR: Regex = Regex::new(r"\s*\t\s*|\s{2,}").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_pattern_group_counts() {
        let counts: Vec<usize> = LINE_PATTERNS
            .iter()
            .map(|p| p.captures_len() - 1)
            .collect();
        assert_eq!(counts, vec![14, 10, 5]);
        assert_eq!(BILINGUAL_FIELDS.len(), 14);
        // Only the first pattern qualifies for the full mapping
        assert!(counts[0] >= FULL_MAPPING_MIN_GROUPS);
        assert!(counts[1] < FULL_MAPPING_MIN_GROUPS);
    }

    #[test]
    fn test_header_patterns_compile() {
        assert_eq!(STATE_PATTERNS.len(), 4);
        assert_eq!(CONSTITUENCY_PATTERNS.len(), 4);
        assert_eq!(BOOTH_PATTERNS.len(), 4);
    }
}
