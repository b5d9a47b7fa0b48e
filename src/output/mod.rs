pub mod spreadsheet;

pub use spreadsheet::{default_file_name, SpreadsheetWriter};
