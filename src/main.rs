// Electoral roll extraction - command line entry point
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use voter_roll::output::SpreadsheetWriter;
use voter_roll::utils::{init_logging, validate_input_path, validate_output_path, ExtractError};
use voter_roll::{ExtractorConfig, RollExtractor};

/// Extract structured voter data from PDF electoral rolls
#[derive(Parser, Debug)]
#[command(name = "voter-roll", version, after_help = "Examples:\n  voter-roll --input rolls/ --output output/\n  voter-roll -i electoral_roll.pdf -o output/roll.xlsx")]
struct Cli {
    /// Input PDF file or directory containing PDF files
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory (or .xlsx file) for the spreadsheet
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Launch the desktop interface instead of the command line
    #[arg(long)]
    gui: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Also write log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// TOML file overriding extractor settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<PathBuf, ExtractError> {
    if cli.gui {
        return Err(ExtractError::InvalidInput(
            "GUI mode is not available in this build, use --input and --output".to_string(),
        ));
    }

    let (input, output) = match (&cli.input, &cli.output) {
        (Some(input), Some(output)) => (input, output),
        _ => {
            return Err(ExtractError::InvalidInput(
                "Both --input and --output are required for CLI mode".to_string(),
            ))
        }
    };

    if !validate_input_path(input) {
        return Err(ExtractError::InvalidInput(format!(
            "Invalid input path or no PDF files found: {}",
            input.display()
        )));
    }
    if !validate_output_path(output) {
        return Err(ExtractError::InvalidInput(format!(
            "Invalid output path or insufficient permissions: {}",
            output.display()
        )));
    }

    let config = match &cli.config {
        Some(path) => ExtractorConfig::load(path)?,
        None => ExtractorConfig::default(),
    };

    log::info!("Starting Electoral Roll Data Extraction");
    log::info!("Input path: {}", input.display());
    log::info!("Output path: {}", output.display());

    let extractor = RollExtractor::with_config(config.clone());
    let batch = extractor.process_path(input)?;

    if !batch.failures.is_empty() {
        log::warn!("{} document(s) could not be read", batch.failures.len());
    }
    if batch.is_empty() {
        return Err(ExtractError::NoDataExtracted(input.clone()));
    }
    log::info!("Successfully extracted {} voter records", batch.len());

    log::info!("Saving data to Excel file...");
    SpreadsheetWriter::new(&config).write(&batch, output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("{}", e);
    }

    match run(&cli) {
        Ok(path) => {
            log::info!("Extraction completed successfully: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
