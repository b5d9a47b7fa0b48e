use chrono::Local;
use log::LevelFilter;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::utils::ExtractError;

/// Writes every log line to stderr and to the log file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

/// Install the global logger. `RUST_LOG` still takes precedence over the
/// level chosen here.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<(), ExtractError> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.target(),
                record.level(),
                record.args()
            )
        });

    let mut file_error = None;
    if let Some(path) = log_file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(TeeWriter { file })));
            }
            Err(e) => file_error = Some(format!("Could not open log file {}: {}", path.display(), e)),
        }
    }

    builder
        .try_init()
        .map_err(|e| ExtractError::Config(format!("Logger already initialised: {}", e)))?;

    if let Some(message) = file_error {
        log::warn!("{}", message);
    }
    Ok(())
}
