//! CSV files, one line of text per row

use crate::error::ExtractError;
use docsift_domain::{InputReference, TextExtractor};

/// Renders each CSV row as its fields joined by `", "`
///
/// No header row is assumed and rows may have differing field counts.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExtractor;

impl TextExtractor for CsvExtractor {
    type Error = ExtractError;

    fn extract(&self, source: &InputReference) -> Result<String, Self::Error> {
        let path = source.as_path();
        let csv_error = |e: ::csv::Error| ExtractError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(csv_error)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            rows.push(record.iter().collect::<Vec<_>>().join(", "));
        }

        Ok(rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn csv_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_rows_joined() {
        let file = csv_file("name,age\nAlice,30\n\"Smith, Bob\",41\n");
        let reference = InputReference::new(file.path().to_string_lossy());

        let text = CsvExtractor.extract(&reference).unwrap();
        assert_eq!(text, "name, age\nAlice, 30\nSmith, Bob, 41");
    }

    #[test]
    fn test_ragged_rows_allowed() {
        let file = csv_file("a,b,c\nd\n");
        let reference = InputReference::new(file.path().to_string_lossy());

        let text = CsvExtractor.extract(&reference).unwrap();
        assert_eq!(text, "a, b, c\nd");
    }

    #[test]
    fn test_invalid_utf8_is_error() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(&[b'a', b',', 0xFF, b'\n']).unwrap();
        let reference = InputReference::new(file.path().to_string_lossy());

        let err = CsvExtractor.extract(&reference).unwrap_err();
        assert!(matches!(err, ExtractError::Csv { .. }));
    }
}
