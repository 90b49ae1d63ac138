use super::error::ReportError;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// A report file read back into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ReportTable {
    /// Parses reporter output: a `#`-prefixed quoted header line followed by
    /// rows delimited by `separator`.
    pub fn from_reader(reader: impl Read, separator: char) -> Result<Self, ReportError> {
        if !separator.is_ascii() {
            return Err(ReportError::Config(format!(
                "separator {separator:?} is not a single ASCII character"
            )));
        }
        let delimiter = separator as u8;

        let mut reader = BufReader::new(reader);
        let mut header_line = String::new();
        reader.read_line(&mut header_line)?;
        let header_body = header_line
            .strip_prefix('#')
            .ok_or_else(|| ReportError::Table {
                line: 1,
                message: "expected a '#'-prefixed header line".to_string(),
            })?;

        let headers: Vec<String> = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_reader(header_body.as_bytes())
            .records()
            .next()
            .transpose()?
            .map(|record| record.iter().map(str::to_string).collect())
            .unwrap_or_default();

        let mut rows = Vec::new();
        let mut records = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        for (index, record) in records.records().enumerate() {
            let record = record?;
            if record.len() != headers.len() {
                return Err(ReportError::Table {
                    line: index + 2,
                    message: format!(
                        "expected {} fields, found {}",
                        headers.len(),
                        record.len()
                    ),
                });
            }
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn from_path(path: &Path, separator: char) -> Result<Self, ReportError> {
        Self::from_reader(File::open(path)?, separator)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Numeric values of the column named `name`. A trailing `%` is ignored.
    pub fn column(&self, name: &str) -> Result<Vec<f64>, ReportError> {
        let index = self
            .column_index(name)
            .ok_or_else(|| ReportError::UnknownColumn(name.to_string()))?;

        self.rows
            .iter()
            .enumerate()
            .map(|(row, fields)| {
                let raw = fields[index].as_str();
                raw.trim_end_matches('%')
                    .parse::<f64>()
                    .map_err(|e| ReportError::Table {
                        line: row + 2,
                        message: format!("'{raw}' in column '{name}' is not numeric: {e}"),
                    })
            })
            .collect()
    }
}
