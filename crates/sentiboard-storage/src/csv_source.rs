//! CSV reader producing raw review rows.
//!
//! Rows are read as bytes. Only the four required cells are decoded, lossily,
//! so stray non-UTF-8 bytes in other columns never fail the load, and a bad
//! byte in a required cell surfaces later as a per-row data-quality issue.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder, Trim};
use sentiboard_core::errors::LoadError;
use sentiboard_core::types::RawReview;

use super::schema::{ColumnIndex, ColumnSpec};

/// A CSV file of labeled reviews.
#[derive(Debug, Clone)]
pub struct CsvReviewSource {
    path: PathBuf,
    columns: ColumnSpec,
    delimiter: u8,
}

impl CsvReviewSource {
    pub fn new(path: impl Into<PathBuf>, columns: ColumnSpec) -> Self {
        Self {
            path: path.into(),
            columns,
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every data row of the file.
    pub fn load(&self) -> Result<Vec<RawReview>, LoadError> {
        let file = File::open(&self.path).map_err(|e| LoadError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        let rows = read_with_delimiter(file, &self.columns, self.delimiter)?;
        tracing::info!(path = %self.path.display(), rows = rows.len(), "loaded review file");
        Ok(rows)
    }
}

/// Read comma-separated rows from any reader.
pub fn read_reviews<R: Read>(reader: R, columns: &ColumnSpec) -> Result<Vec<RawReview>, LoadError> {
    read_with_delimiter(reader, columns, b',')
}

fn read_with_delimiter<R: Read>(
    reader: R,
    columns: &ColumnSpec,
    delimiter: u8,
) -> Result<Vec<RawReview>, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(csv_error)?.clone();
    let index = ColumnIndex::resolve(&headers, columns)?;

    let mut rows = Vec::new();
    let mut record = ByteRecord::new();
    let mut row = 0usize;
    while csv_reader.read_byte_record(&mut record).map_err(csv_error)? {
        row += 1;
        rows.push(RawReview {
            row,
            review_time: cell(&record, index.date),
            overall: cell(&record, index.rating),
            sentiment: cell(&record, index.sentiment),
            topic: cell(&record, index.topic),
        });
    }
    Ok(rows)
}

fn cell(record: &ByteRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
}

fn csv_error(err: csv::Error) -> LoadError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    LoadError::Csv {
        line,
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
reviewerID,reviewTime,overall,reviewText,sentiment,deberta_topics
A1,2023-01-05,5,\"Works great, fast\",positive,Product functionality
A2,2023-01-20,1,Too expensive,negative,Price
A3,2023-02-01,4,Solid build,positive,Quality
A4,2023-02-02,,No rating given,neutral,Delivery Service
";

    #[test]
    fn test_read_sample_csv() {
        let rows = read_reviews(SAMPLE_CSV.as_bytes(), &ColumnSpec::default()).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].row, 1);
        assert_eq!(rows[0].review_time.as_deref(), Some("2023-01-05"));
        assert_eq!(rows[0].topic.as_deref(), Some("Product functionality"));
        assert_eq!(rows[1].overall.as_deref(), Some("1"));
        assert_eq!(rows[3].overall.as_deref(), Some(""));
        assert_eq!(rows[3].row, 4);
    }

    #[test]
    fn test_missing_required_column_is_fatal() {
        let csv = "reviewTime,overall,sentiment\n2023-01-05,5,positive\n";
        let err = read_reviews(csv.as_bytes(), &ColumnSpec::default()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { ref column, .. } if column == "deberta_topics"));
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let err = read_reviews("".as_bytes(), &ColumnSpec::default()).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn test_header_only_yields_no_rows() {
        let csv = "reviewTime,overall,sentiment,deberta_topics\n";
        let rows = read_reviews(csv.as_bytes(), &ColumnSpec::default()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_ragged_row_reports_line() {
        let csv = "reviewTime,overall,sentiment,deberta_topics\n2023-01-05,5,positive,Price\n2023-01-06,4\n";
        let err = read_reviews(csv.as_bytes(), &ColumnSpec::default()).unwrap_err();
        match err {
            LoadError::Csv { line, .. } => assert!(line >= 2, "line {line}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_utf8_in_unused_column_keeps_every_row() {
        let mut csv = b"reviewTime,overall,reviewText,sentiment,deberta_topics\n".to_vec();
        csv.extend_from_slice(b"2023-01-05,5,fine,positive,Price\n");
        csv.extend_from_slice(b"2023-01-06,4,caf\xe9 quality,positive,Quality\n");
        csv.extend_from_slice(b"2023-01-07,2,slow,negative,Delivery Service\n");

        let rows = read_reviews(csv.as_slice(), &ColumnSpec::default()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].sentiment.as_deref(), Some("positive"));
        assert_eq!(rows[1].topic.as_deref(), Some("Quality"));
    }

    #[test]
    fn test_invalid_utf8_in_required_cell_is_decoded_lossily() {
        let mut csv = b"reviewTime,overall,sentiment,deberta_topics\n".to_vec();
        csv.extend_from_slice(b"2023-01-05,5,positiv\xe9,Price\n");
        csv.extend_from_slice(b"2023-01-06,4,neutral,Price\n");

        let rows = read_reviews(csv.as_slice(), &ColumnSpec::default()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sentiment.as_deref(), Some("positiv\u{FFFD}"));
        assert_eq!(rows[1].sentiment.as_deref(), Some("neutral"));
    }

    #[test]
    fn test_load_from_file_with_custom_columns_and_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.tsv");
        std::fs::write(&path, "date\tstars\tlabel\ttopic\n2023-03-01\t3\tneutral\tPrice\n").unwrap();

        let columns = ColumnSpec {
            date: "date".to_string(),
            rating: "stars".to_string(),
            sentiment: "label".to_string(),
            topic: "topic".to_string(),
        };
        let rows = CsvReviewSource::new(&path, columns)
            .with_delimiter(b'\t')
            .load()
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sentiment.as_deref(), Some("neutral"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvReviewSource::new(dir.path().join("absent.csv"), ColumnSpec::default());
        assert!(matches!(source.load(), Err(LoadError::Io { .. })));
    }
}
