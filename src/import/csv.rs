//! CSV ledger loading
//!
//! The boundary between raw bank CSV exports and the core: column mapping
//! with header auto-detection, multi-format date parsing, and decimal-comma
//! amount handling. Rows whose amount cannot be parsed never reach the core;
//! they are skipped and reported. Rows whose date cannot be parsed are kept
//! as undated records for the filter stage to quarantine.

use chrono::NaiveDate;
use csv::{Reader, ReaderBuilder, StringRecord};
use std::path::Path;

use crate::error::{SaldoError, SaldoResult};
use crate::models::{Money, RawRecord};

/// Date formats tried for every date cell, in order
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%d.%m.%Y", "%d.%m.%y", "%m/%d/%Y", "%m/%d/%y", "%d/%m/%Y", "%Y/%m/%d",
];

/// Column mapping configuration for CSV loading
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Index of the date column
    pub date_column: usize,
    /// Index of the description column
    pub description_column: usize,
    /// Index of the amount column
    pub amount_column: usize,
    /// Preferred date format, tried before the common fallbacks
    pub date_format: String,
    /// Whether the first row is a header
    pub has_header: bool,
    /// Delimiter character
    pub delimiter: char,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date_column: 0,
            description_column: 1,
            amount_column: 2,
            date_format: "%Y-%m-%d".to_string(),
            has_header: true,
            delimiter: ',',
        }
    }
}

impl ColumnMapping {
    /// Create a new column mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping for Sparkasse account statement exports
    /// (Datum; Erläuterung; Betrag EUR — semicolon-delimited, German dates)
    pub fn sparkasse() -> Self {
        Self {
            date_column: 0,
            description_column: 1,
            amount_column: 2,
            date_format: "%d.%m.%Y".to_string(),
            has_header: true,
            delimiter: ';',
        }
    }

    /// Set the preferred date format
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Set whether the first row is a header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Detect a column mapping from a header record
    ///
    /// Recognizes both the German source column names (Datum, Erläuterung,
    /// Betrag) and common English ones. Unrecognized headers leave the
    /// default positions in place.
    pub fn detect_from_headers(headers: &StringRecord) -> Self {
        let mut mapping = Self::new();

        for (idx, header) in headers.iter().enumerate() {
            let h = header.to_lowercase();
            let h = h.trim();

            if h.contains("datum") || h.contains("date") {
                mapping.date_column = idx;
            } else if h.contains("erläuterung")
                || h.contains("erlaeuterung")
                || h.contains("description")
                || h.contains("payee")
                || h.contains("verwendungszweck")
            {
                mapping.description_column = idx;
            } else if h.contains("betrag") || h.contains("amount") {
                mapping.amount_column = idx;
            }
        }

        mapping
    }
}

/// Outcome of loading one CSV source
///
/// `records` is everything that reached the core; `skipped` reports the rows
/// dropped for malformed amounts, per the skip+report recovery policy.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Rows handed to the core
    pub records: Vec<RawRecord>,
    /// One [`SaldoError::MalformedRow`] per skipped row
    pub skipped: Vec<SaldoError>,
}

impl LoadReport {
    /// Number of rows skipped for malformed amounts
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Load raw records from a CSV file path
///
/// When `mapping` is None the first row is read as a header and the mapping
/// is auto-detected from it.
pub fn load_path(path: &Path, mapping: Option<&ColumnMapping>) -> SaldoResult<LoadReport> {
    let file = std::fs::File::open(path)
        .map_err(|e| SaldoError::Import(format!("cannot open {}: {}", path.display(), e)))?;
    load_reader(file, mapping)
}

/// Detect a column mapping from a CSV file's header row
///
/// Reads only the header; callers can layer settings (such as a preferred
/// date format) onto the result before loading.
pub fn detect_mapping(path: &Path) -> SaldoResult<ColumnMapping> {
    let file = std::fs::File::open(path)
        .map_err(|e| SaldoError::Import(format!("cannot open {}: {}", path.display(), e)))?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    let headers = reader.headers()?.clone();
    Ok(ColumnMapping::detect_from_headers(&headers))
}

/// Load raw records from any reader
pub fn load_reader<R: std::io::Read>(
    reader: R,
    mapping: Option<&ColumnMapping>,
) -> SaldoResult<LoadReport> {
    match mapping {
        Some(m) => {
            let mut csv_reader = ReaderBuilder::new()
                .has_headers(m.has_header)
                .delimiter(m.delimiter as u8)
                .flexible(true)
                .from_reader(reader);
            read_records(&mut csv_reader, m)
        }
        None => {
            let mut csv_reader = ReaderBuilder::new()
                .has_headers(true)
                .flexible(true)
                .from_reader(reader);
            let headers = csv_reader.headers()?.clone();
            let detected = ColumnMapping::detect_from_headers(&headers);
            read_records(&mut csv_reader, &detected)
        }
    }
}

fn read_records<R: std::io::Read>(
    reader: &mut Reader<R>,
    mapping: &ColumnMapping,
) -> SaldoResult<LoadReport> {
    let mut report = LoadReport::default();

    for (idx, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                report.skipped.push(SaldoError::MalformedRow {
                    row: idx,
                    message: format!("unreadable CSV record: {}", e),
                });
                continue;
            }
        };

        match parse_record(&record, mapping) {
            Ok(raw) => report.records.push(raw),
            Err(message) => {
                report.skipped.push(SaldoError::MalformedRow { row: idx, message });
            }
        }
    }

    Ok(report)
}

/// Parse one CSV record into a raw ledger row
fn parse_record(record: &StringRecord, mapping: &ColumnMapping) -> Result<RawRecord, String> {
    let amount_str = record
        .get(mapping.amount_column)
        .map(str::trim)
        .unwrap_or("");
    let amount = Money::parse(amount_str).map_err(|e| e.to_string())?;

    let description = record
        .get(mapping.description_column)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let date_raw = record
        .get(mapping.date_column)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    // An unparseable date is not an error here: the row is kept as undated
    // and quarantined later by the filter stage.
    let date = parse_date(&date_raw, &mapping.date_format);

    Ok(RawRecord {
        date,
        date_raw,
        description,
        amount,
    })
}

/// Parse a date string, trying the preferred format first and then the
/// common fallbacks
fn parse_date(s: &str, preferred: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, preferred) {
        return Some(date);
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}
