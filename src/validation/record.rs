use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::models::VoterRecord;
use crate::utils::ExtractError;

lazy_static! {
    // Three uppercase letters then seven digits, no case folding
    static ref EPIC_PATTERN: Regex = Regex::new(r"^[A-Z]{3}[0-9]{7}$").unwrap();
    // Unicode decimal digits, so vernacular numerals are accepted
    static ref AGE_PATTERN: Regex = Regex::new(r"^\d+$").unwrap();
}

/// Why a candidate record was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordIssue {
    MissingSerialNumber,
    MalformedEpic(String),
    NonNumericAge(String),
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordIssue::MissingSerialNumber => write!(f, "serial number is missing"),
            RecordIssue::MalformedEpic(epic) => write!(f, "malformed EPIC id '{}'", epic),
            RecordIssue::NonNumericAge(age) => write!(f, "non-numeric age '{}'", age),
        }
    }
}

pub struct RecordValidator;

impl RecordValidator {
    /// Check the record rules in order and report the first violation.
    pub fn check(record: &VoterRecord) -> Result<(), ExtractError> {
        if record.serial_number.is_empty() {
            return Err(ExtractError::InvalidRecord(RecordIssue::MissingSerialNumber));
        }

        if !record.epic_id.is_empty() && !Self::is_valid_epic(&record.epic_id) {
            return Err(ExtractError::InvalidRecord(RecordIssue::MalformedEpic(
                record.epic_id.clone(),
            )));
        }

        if !record.age.is_empty() && !AGE_PATTERN.is_match(&record.age) {
            return Err(ExtractError::InvalidRecord(RecordIssue::NonNumericAge(
                record.age.clone(),
            )));
        }

        Ok(())
    }

    pub fn validate(record: &VoterRecord) -> bool {
        match Self::check(record) {
            Ok(()) => true,
            Err(e) => {
                log::trace!("Dropping record {:?}: {}", record.serial_number, e);
                false
            }
        }
    }

    pub fn is_valid_epic(epic: &str) -> bool {
        EPIC_PATTERN.is_match(epic)
    }
}
