pub mod record;

pub use record::{RecordIssue, RecordValidator};
