use regex::{Captures, Regex};

use crate::models::HeaderContext;
use crate::processing::patterns::{BOOTH_PATTERNS, CONSTITUENCY_PATTERNS, STATE_PATTERNS};

/// Extracts state, constituency and booth identifiers from document text.
pub struct HeaderParser;

impl HeaderParser {
    /// Never fails: any field whose patterns do not match keeps its default.
    pub fn parse(text: &str) -> HeaderContext {
        let mut header = HeaderContext::default();

        if let Some(captures) = first_match(&STATE_PATTERNS, text) {
            let value = group(&captures, 1);
            // Short values starting with "S" are codes (S04), the rest are
            // names. Short place names are misread as codes.
            if value.starts_with('S') && value.chars().count() <= 4 {
                header.state_code = value.to_string();
            } else if !value.is_empty() {
                header.state_name = Some(value.to_string());
            }
        }

        if let Some(captures) = first_match(&CONSTITUENCY_PATTERNS, text) {
            header.constituency_number = group(&captures, 1).to_string();
            header.constituency_name = optional_group(&captures, 2);
        }

        if let Some(captures) = first_match(&BOOTH_PATTERNS, text) {
            header.part_number = group(&captures, 1).to_string();
            header.booth_name = optional_group(&captures, 2);
        }

        header
    }
}

/// Captures of the first pattern in the list that matches anywhere in `text`.
fn first_match<'t>(patterns: &[Regex], text: &'t str) -> Option<Captures<'t>> {
    patterns.iter().find_map(|pattern| pattern.captures(text))
}

fn group<'t>(captures: &Captures<'t>, index: usize) -> &'t str {
    captures.get(index).map_or("", |m| m.as_str().trim())
}

fn optional_group(captures: &Captures, index: usize) -> Option<String> {
    let value = group(captures, index);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
