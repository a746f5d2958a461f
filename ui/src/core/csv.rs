//! CSV serialization of the reading log.
//!
//! Fields are written verbatim. A value containing a comma would shift the
//! columns; timestamps are formatted without commas so the stock log never
//! hits that.

use thiserror::Error;

use super::readings::Reading;

pub const CSV_HEADER: &str = "Type,Weight,Size,Quality Index,Time";
pub const CSV_FILENAME: &str = "quality_log.csv";
pub const CSV_MIME: &str = "text/csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data to export")]
    EmptyLog,
    #[error("Export failed: {0}")]
    Delivery(String),
    #[error("Export failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A ready-to-deliver export artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub body: String,
}

impl CsvExport {
    pub fn mime(&self) -> &'static str {
        CSV_MIME
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body.into_bytes()
    }
}

pub fn build_csv(readings: &[Reading]) -> Result<String, ExportError> {
    if readings.is_empty() {
        return Err(ExportError::EmptyLog);
    }

    let mut csv = String::with_capacity(CSV_HEADER.len() + 1 + readings.len() * 48);
    csv.push_str(CSV_HEADER);
    csv.push('\n');
    for reading in readings {
        csv.push_str(&csv_row(reading));
        csv.push('\n');
    }
    Ok(csv)
}

fn csv_row(reading: &Reading) -> String {
    format!(
        "{},{},{},{},{}",
        reading.source, reading.weight, reading.size, reading.quality_index, reading.timestamp
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::readings::ReadingSource;

    fn manual(weight: f64, size: f64, index: f64, ts: &str) -> Reading {
        Reading {
            source: ReadingSource::Manual,
            weight,
            size,
            quality_index: index,
            timestamp: ts.into(),
        }
    }

    #[test]
    fn empty_log_is_rejected() {
        let err = build_csv(&[]).unwrap_err();
        assert!(matches!(err, ExportError::EmptyLog));
        assert_eq!(err.to_string(), "No data to export");
    }

    #[test]
    fn single_reading_yields_header_plus_one_row() {
        let csv = build_csv(&[manual(2.5, 7.0, 100.0, "10/19/2026 14:03:09")]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Type,Weight,Size,Quality Index,Time",
                "Manual,2.5,7,100,10/19/2026 14:03:09"
            ]
        );
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn rows_follow_insertion_order() {
        let mut second = manual(3.12, 5.5, 72.6, "b");
        second.source = ReadingSource::Simulated;
        let csv = build_csv(&[manual(2.0, 8.0, 80.0, "a"), second]).unwrap();
        let rows: Vec<&str> = csv.lines().skip(1).collect();
        assert_eq!(rows, vec!["Manual,2,8,80,a", "Simulated,3.12,5.5,72.6,b"]);
    }

    #[test]
    fn simulated_values_drop_trailing_zeros() {
        let mut reading = manual(3.1, 8.0, 78.0, "t");
        reading.source = ReadingSource::Simulated;
        let csv = build_csv(&[reading]).unwrap();
        assert_eq!(csv.lines().nth(1), Some("Simulated,3.1,8,78,t"));
    }

    #[test]
    fn fields_are_not_quoted() {
        let csv = build_csv(&[manual(2.5, 7.0, 100.0, "Oct 19, 2026")]).unwrap();
        assert!(csv.contains("Manual,2.5,7,100,Oct 19, 2026\n"));
    }
}
