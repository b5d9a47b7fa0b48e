use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::ExtractError;

pub const DEFAULT_STATE_CODE: &str = "S04";
pub const DEFAULT_CONSTITUENCY_NUMBER: &str = "11";
pub const DEFAULT_PART_NUMBER: &str = "1";

/// Per-document metadata stamped onto every record extracted from that document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderContext {
    pub state_code: String,
    pub state_name: Option<String>,
    pub constituency_number: String,
    pub constituency_name: Option<String>,
    pub part_number: String,
    pub booth_name: Option<String>,
}

impl Default for HeaderContext {
    fn default() -> Self {
        HeaderContext {
            state_code: DEFAULT_STATE_CODE.to_string(),
            state_name: None,
            constituency_number: DEFAULT_CONSTITUENCY_NUMBER.to_string(),
            constituency_name: None,
            part_number: DEFAULT_PART_NUMBER.to_string(),
            booth_name: None,
        }
    }
}

/// The fixed 17-column voter schema, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoterField {
    StateCode,
    ConstituencyNumber,
    PartNumber,
    SerialNumber,
    HouseNumber,
    FirstName,
    LastName,
    FirstNameVernacular,
    LastNameVernacular,
    RelationType,
    RelationName,
    RelationLastName,
    RelationNameVernacular,
    RelationLastNameVernacular,
    EpicId,
    Gender,
    Age,
}

impl VoterField {
    pub const ALL: [VoterField; 17] = [
        VoterField::StateCode,
        VoterField::ConstituencyNumber,
        VoterField::PartNumber,
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

    pub fn key(&self) -> &'static str {
        match self {
            VoterField::StateCode => "state_code",
            VoterField::ConstituencyNumber => "constituency_number",
            VoterField::PartNumber => "part_number",
            VoterField::SerialNumber => "serial_number",
            VoterField::HouseNumber => "house_number",
            VoterField::FirstName => "first_name",
            VoterField::LastName => "last_name",
            VoterField::FirstNameVernacular => "first_name_vernacular",
            VoterField::LastNameVernacular => "last_name_vernacular",
            VoterField::RelationType => "relation_type",
            VoterField::RelationName => "relation_name",
            VoterField::RelationLastName => "relation_last_name",
            VoterField::RelationNameVernacular => "relation_name_vernacular",
            VoterField::RelationLastNameVernacular => "relation_last_name_vernacular",
            VoterField::EpicId => "epic_id",
            VoterField::Gender => "gender",
            VoterField::Age => "age",
        }
    }

    /// Column header used in spreadsheet output.
    pub fn column_header(&self) -> &'static str {
        match self {
            VoterField::StateCode => "ST_CODE",
            VoterField::ConstituencyNumber => "AC_NO",
            VoterField::PartNumber => "PART_NO",
            VoterField::SerialNumber => "SLNOINPART",
            VoterField::HouseNumber => "C_HOUSE_NO",
            VoterField::FirstName => "FM_NAME_EN",
            VoterField::LastName => "LASTNAME_EN",
            VoterField::FirstNameVernacular => "FM_NAME_V1",
            VoterField::LastNameVernacular => "LASTNAME_V1",
            VoterField::RelationType => "RLN_TYPE",
            VoterField::RelationName => "RLN_FM_NM_EN",
            VoterField::RelationLastName => "RLN_L_NM_EN",
            VoterField::RelationNameVernacular => "RLN_FM_NM_V1",
            VoterField::RelationLastNameVernacular => "RLN_L_NM_V1",
            VoterField::EpicId => "EPIC_NO",
            VoterField::Gender => "GENDER",
            VoterField::Age => "AGE",
        }
    }
}

/// Canonical voter row. Absent values are empty strings, never missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterRecord {
    pub state_code: String,
    pub constituency_number: String,
    pub part_number: String,
    pub serial_number: String,
    pub house_number: String,
    pub first_name: String,
    pub last_name: String,
    pub first_name_vernacular: String,
    pub last_name_vernacular: String,
    pub relation_type: String,
    pub relation_name: String,
    pub relation_last_name: String,
    pub relation_name_vernacular: String,
    pub relation_last_name_vernacular: String,
    pub epic_id: String,
    pub gender: String,
    pub age: String,
}

impl VoterRecord {
    /// Empty record carrying the document's header fields.
    pub fn stamped(header: &HeaderContext) -> Self {
        VoterRecord {
            state_code: header.state_code.clone(),
            constituency_number: header.constituency_number.clone(),
            part_number: header.part_number.clone(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: VoterField) -> &str {
        match field {
            VoterField::StateCode => &self.state_code,
            VoterField::ConstituencyNumber => &self.constituency_number,
            VoterField::PartNumber => &self.part_number,
            VoterField::SerialNumber => &self.serial_number,
            VoterField::HouseNumber => &self.house_number,
            VoterField::FirstName => &self.first_name,
            VoterField::LastName => &self.last_name,
            VoterField::FirstNameVernacular => &self.first_name_vernacular,
            VoterField::LastNameVernacular => &self.last_name_vernacular,
            VoterField::RelationType => &self.relation_type,
            VoterField::RelationName => &self.relation_name,
            VoterField::RelationLastName => &self.relation_last_name,
            VoterField::RelationNameVernacular => &self.relation_name_vernacular,
            VoterField::RelationLastNameVernacular => &self.relation_last_name_vernacular,
            VoterField::EpicId => &self.epic_id,
            VoterField::Gender => &self.gender,
            VoterField::Age => &self.age,
        }
    }

    pub(crate) fn set(&mut self, field: VoterField, value: impl Into<String>) {
        let slot = match field {
            VoterField::StateCode => &mut self.state_code,
            VoterField::ConstituencyNumber => &mut self.constituency_number,
            VoterField::PartNumber => &mut self.part_number,
            VoterField::SerialNumber => &mut self.serial_number,
            VoterField::HouseNumber => &mut self.house_number,
            VoterField::FirstName => &mut self.first_name,
            VoterField::LastName => &mut self.last_name,
            VoterField::FirstNameVernacular => &mut self.first_name_vernacular,
            VoterField::LastNameVernacular => &mut self.last_name_vernacular,
            VoterField::RelationType => &mut self.relation_type,
            VoterField::RelationName => &mut self.relation_name,
            VoterField::RelationLastName => &mut self.relation_last_name,
            VoterField::RelationNameVernacular => &mut self.relation_name_vernacular,
            VoterField::RelationLastNameVernacular => &mut self.relation_last_name_vernacular,
            VoterField::EpicId => &mut self.epic_id,
            VoterField::Gender => &mut self.gender,
            VoterField::Age => &mut self.age,
        };
        *slot = value.into();
    }
}

/// Which strategy produced a document's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionStrategy {
    Table,
    TextLines,
}

/// Result of running the pipeline over a single document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentExtraction {
    pub path: PathBuf,
    pub page_count: usize,
    pub table_row_count: usize,
    pub header: HeaderContext,
    pub strategy: Option<ExtractionStrategy>,
    pub records: Vec<VoterRecord>,
}

#[derive(Debug)]
pub struct DocumentFailure {
    pub path: PathBuf,
    pub error: ExtractError,
}

/// Accepted records of a run, in document order then row order.
#[derive(Debug, Default)]
pub struct Batch {
    pub records: Vec<VoterRecord>,
    pub failures: Vec<DocumentFailure>,
    pub empty_documents: Vec<PathBuf>,
    pub documents_processed: usize,
    /// Header of the first document that contributed records.
    pub lead_header: Option<HeaderContext>,
}

impl Batch {
    pub fn new() -> Self {
        Batch::default()
    }

    /// Appends one finished document. Records are only ever added per document.
    pub fn push_document(&mut self, extraction: DocumentExtraction) {
        self.documents_processed += 1;
        if extraction.records.is_empty() {
            self.empty_documents.push(extraction.path);
            return;
        }
        if self.lead_header.is_none() {
            self.lead_header = Some(extraction.header);
        }
        self.records.extend(extraction.records);
    }

    pub fn push_failure(&mut self, path: PathBuf, error: ExtractError) {
        self.documents_processed += 1;
        self.failures.push(DocumentFailure { path, error });
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn into_records(self) -> Vec<VoterRecord> {
        self.records
    }
}
