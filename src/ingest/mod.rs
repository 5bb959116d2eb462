//! Parsing user-uploaded spreadsheet files into an opaque dataset override.
//!
//! The analysis handlers never consume the uploaded rows directly; they
//! operate on the typed entity collections. The upload travels alongside
//! them as headers plus string rows.

pub mod csv;

use crate::data::UploadedData;
use std::error::Error;
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum IngestError {
    IoError(std::io::Error),
    ParsingError(String),
    EmptyFile(String),
    UnsupportedFileType(String),
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::IoError(err) => write!(f, "IO error: {}", err),
            IngestError::ParsingError(msg) => write!(f, "Parsing error: {}", msg),
            IngestError::EmptyFile(name) => write!(f, "File has no data rows: {}", name),
            IngestError::UnsupportedFileType(ext) => write!(f, "Unsupported file type: {}", ext),
        }
    }
}

impl Error for IngestError {}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::IoError(err)
    }
}

/// Loads an uploaded dataset from disk, dispatching on the file extension.
pub fn load_upload(path: &Path) -> Result<UploadedData, IngestError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| IngestError::UnsupportedFileType("No extension".to_string()))?;

    match extension.to_lowercase().as_str() {
        "csv" => csv::ingest_file(path),
        _ => Err(IngestError::UnsupportedFileType(extension.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extensions_are_rejected() {
        let err = load_upload(Path::new("report.xlsx")).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFileType(ext) if ext == "xlsx"));

        let err = load_upload(Path::new("report")).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFileType(_)));
    }
}
