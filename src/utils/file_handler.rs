use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::utils::ExtractError;

pub(crate) fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case(extension))
}

fn is_writable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}

/// List the PDF documents under `input`, sorted by path.
///
/// A file path yields itself only when it is a PDF; a directory is walked
/// recursively.
pub fn discover_documents(input: &Path) -> Result<Vec<PathBuf>, ExtractError> {
    if !input.exists() {
        return Err(ExtractError::InvalidInput(format!(
            "Input path does not exist: {}",
            input.display()
        )));
    }

    if input.is_file() {
        return Ok(if has_extension(input, "pdf") {
            vec![input.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(input) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && has_extension(entry.path(), "pdf") {
                    documents.push(entry.into_path());
                }
            }
            Err(e) => log::warn!("Skipping unreadable directory entry: {}", e),
        }
    }
    documents.sort();
    Ok(documents)
}

/// True when the path exists and is, or contains, at least one PDF.
pub fn validate_input_path(path: &Path) -> bool {
    match discover_documents(path) {
        Ok(documents) => !documents.is_empty(),
        Err(_) => false,
    }
}

/// True when a spreadsheet can be written at `path`: an existing file must
/// be writable, otherwise the target directory must exist and be writable.
pub fn validate_output_path(path: &Path) -> bool {
    if path.is_file() {
        return is_writable(path);
    }

    let directory = if has_extension(path, "xlsx") {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    } else {
        path
    };
    directory.is_dir() && is_writable(directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_single_pdf() {
        let dir = TempDir::new().unwrap();
        let pdf = dir.path().join("roll.PDF");
        fs::write(&pdf, b"dummy").unwrap();

        assert_eq!(discover_documents(&pdf).unwrap(), vec![pdf.clone()]);
        assert!(validate_input_path(&pdf));
    }

    #[test]
    fn test_discover_wrong_extension() {
        let dir = TempDir::new().unwrap();
        let txt = dir.path().join("roll.txt");
        fs::write(&txt, b"dummy").unwrap();

        assert!(discover_documents(&txt).unwrap().is_empty());
        assert!(!validate_input_path(&txt));
    }

    #[test]
    fn test_discover_directory_sorted_and_recursive() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("ward");
        fs::create_dir(&nested).unwrap();
        let b = dir.path().join("b.pdf");
        let a = dir.path().join("a.pdf");
        let c = nested.join("c.pdf");
        for path in [&b, &a, &c] {
            fs::write(path, b"dummy").unwrap();
        }
        fs::write(dir.path().join("notes.txt"), b"dummy").unwrap();

        let found = discover_documents(dir.path()).unwrap();
        let mut expected = vec![a, b, c];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_missing_input_is_error() {
        let result = discover_documents(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(ExtractError::InvalidInput(_))));
        assert!(!validate_input_path(Path::new("nonexistent.pdf")));
    }

    #[test]
    fn test_validate_output_path() {
        let dir = TempDir::new().unwrap();
        assert!(validate_output_path(dir.path()));
        assert!(validate_output_path(&dir.path().join("out.xlsx")));
        assert!(!validate_output_path(&dir.path().join("missing").join("out.xlsx")));
        assert!(!validate_output_path(&dir.path().join("missing")));
    }
}
