use regex::{Captures, Regex};

use crate::models::{HeaderContext, VoterField, VoterRecord};
use crate::processing::patterns::{BILINGUAL_FIELDS, FULL_MAPPING_MIN_GROUPS, LINE_PATTERNS};
use crate::validation::RecordValidator;

/// Outcome of trying one voter-line pattern against a line. The number of
/// capture groups in the pattern picks the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch<'t> {
    NoMatch,
    /// Serial, house, Latin and vernacular names, relation, EPIC, gender, age.
    Full([&'t str; 14]),
    /// Serial, name text, EPIC, gender, age taken from the first five groups.
    Simple([&'t str; 5]),
}

impl<'t> LineMatch<'t> {
    pub fn attempt(pattern: &Regex, line: &'t str) -> LineMatch<'t> {
        let captures = match pattern.captures(line) {
            Some(captures) => captures,
            None => return LineMatch::NoMatch,
        };
        if pattern.captures_len() - 1 >= FULL_MAPPING_MIN_GROUPS {
            LineMatch::Full(groups(&captures))
        } else {
            LineMatch::Simple(groups(&captures))
        }
    }

    /// Build the candidate record for this match, stamped with the header.
    /// A simple match whose name text holds no token yields nothing.
    pub fn into_record(self, header: &HeaderContext) -> Option<VoterRecord> {
        let mut record = VoterRecord::stamped(header);
        match self {
            LineMatch::NoMatch => return None,
            LineMatch::Full(values) => fill(&mut record, &BILINGUAL_FIELDS, &values),
            LineMatch::Simple([serial, names, epic, gender, age]) => {
                let mut tokens = names.split_whitespace();
                record.first_name = tokens.next()?.to_string();
                record.last_name = tokens.collect::<Vec<_>>().join(" ");
                record.serial_number = serial.to_string();
                // This layout carries no house column
                record.house_number = "1".to_string();
                record.epic_id = epic.to_string();
                record.gender = gender.to_string();
                record.age = age.to_string();
            }
        }
        Some(record)
    }
}

fn groups<'t, const N: usize>(captures: &Captures<'t>) -> [&'t str; N] {
    std::array::from_fn(|i| captures.get(i + 1).map_or("", |m| m.as_str()))
}

fn fill(record: &mut VoterRecord, fields: &[VoterField], values: &[&str]) {
    for (field, value) in fields.iter().zip(values) {
        record.set(*field, *value);
    }
}

/// Fallback extraction over raw page text, one candidate per line.
pub struct TextLineParser;

impl TextLineParser {
    /// Returns only records that passed validation. Lines that match no
    /// pattern are headers, footers or decoration and are skipped silently.
    pub fn parse_lines(text: &str, header: &HeaderContext, min_line_length: usize) -> Vec<VoterRecord> {
        text.lines()
            .map(str::trim)
            .filter(|line| line.chars().count() >= min_line_length)
            .filter_map(|line| Self::parse_line(line, header))
            .collect()
    }

    /// Try each pattern in priority order; the first one that yields a
    /// valid record wins.
    pub fn parse_line(line: &str, header: &HeaderContext) -> Option<VoterRecord> {
        LINE_PATTERNS.iter().find_map(|pattern| {
            LineMatch::attempt(pattern, line)
                .into_record(header)
                .filter(RecordValidator::validate)
        })
    }
}
