use crate::data::UploadedData;
use crate::ingest::IngestError;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Reads a CSV file into headers plus string rows.
pub fn ingest_file(path: &Path) -> Result<UploadedData, IngestError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.csv")
        .to_string();

    let file = File::open(path)?;
    let data = parse(file, file_name)?;
    info!(
        "Ingested '{}': {} columns, {} rows",
        data.file_name,
        data.headers.len(),
        data.rows.len()
    );
    Ok(data)
}

fn parse<R: Read>(reader: R, file_name: String) -> Result<UploadedData, IngestError> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| IngestError::ParsingError(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(IngestError::EmptyFile(file_name));
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| IngestError::ParsingError(e.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    if rows.is_empty() {
        return Err(IngestError::EmptyFile(file_name));
    }

    Ok(UploadedData {
        file_name,
        headers,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_headers_and_rows() {
        let input = "name,amount\nAlpha,10\nBeta,20\n";
        let data = parse(Cursor::new(input), "sample.csv".to_string()).unwrap();
        assert_eq!(data.headers, vec!["name", "amount"]);
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0], vec!["Alpha", "10"]);
    }

    #[test]
    fn header_only_files_are_rejected() {
        let input = "name,amount\n";
        let err = parse(Cursor::new(input), "empty.csv".to_string()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyFile(name) if name == "empty.csv"));
    }

    #[test]
    fn ragged_rows_are_a_parse_error() {
        let input = "name,amount\nAlpha,10,extra\n";
        let err = parse(Cursor::new(input), "bad.csv".to_string()).unwrap_err();
        assert!(matches!(err, IngestError::ParsingError(_)));
    }
}
