pub mod header;
pub mod patterns;
pub mod reader;
pub mod table;
pub mod text;

pub use header::HeaderParser;
pub use reader::{detect_table_rows, DocumentReader, PdfReader, RawDocument};
pub use table::TableRowMapper;
pub use text::{LineMatch, TextLineParser};
