use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use voter_roll::models::{ExtractionStrategy, HeaderContext, VoterRecord};
use voter_roll::utils::{init_logging, ExtractError};
use voter_roll::{ExtractorConfig, RollExtractor};

/// Dump what the extractor sees in a single electoral roll PDF as JSON
#[derive(Parser, Debug)]
#[command(name = "roll_inspect", version)]
struct Args {
    /// PDF document to inspect
    document: PathBuf,

    /// Skip table detection and use only the text-line parser
    #[arg(long)]
    no_tables: bool,

    /// TOML file overriding extractor settings
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct InspectReport {
    path: PathBuf,
    pages: usize,
    table_rows: usize,
    header: HeaderContext,
    strategy: Option<ExtractionStrategy>,
    record_count: usize,
    records: Vec<VoterRecord>,
}

fn main() -> Result<(), ExtractError> {
    let args = Args::parse();
    init_logging(args.verbose, None)?;

    let mut config = match &args.config {
        Some(path) => ExtractorConfig::load(path)?,
        None => ExtractorConfig::default(),
    };
    if args.no_tables {
        config.detect_tables = false;
    }

    let extraction = RollExtractor::with_config(config).extract_document(&args.document)?;

    let report = InspectReport {
        path: extraction.path,
        pages: extraction.page_count,
        table_rows: extraction.table_row_count,
        header: extraction.header,
        strategy: extraction.strategy,
        record_count: extraction.records.len(),
        records: extraction.records,
    };

    let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
    println!("{}", json);
    Ok(())
}
