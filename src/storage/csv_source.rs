//! CSV input
//!
//! Reads a Jira CSV export (comma separated, `"` quoted, UTF-8, header
//! first) into issues. The whole file is loaded before parsing, and every
//! header and cell is trimmed here so the row parser sees clean values.
//! The first bad row aborts the import.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use crate::domain::{Issue, ParseError, RecordLayout};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read CSV file: {path}")]
    FileAccess { path: PathBuf, source: io::Error },

    #[error("Malformed CSV")]
    Csv(#[from] csv::Error),

    #[error("Invalid CSV header")]
    Header(#[source] ParseError),

    /// Rows are numbered from 1 with the header as row 1
    #[error("Invalid row {row}")]
    Row { row: usize, source: ParseError },
}

/// A CSV export on disk
pub struct IssueSource {
    path: PathBuf,
}

impl IssueSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the CSV file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses every row, in file order
    pub fn read_all(&self) -> Result<Vec<Issue>, ImportError> {
        let content = fs::read_to_string(&self.path).map_err(|source| ImportError::FileAccess {
            path: self.path.clone(),
            source,
        })?;

        parse_csv(&content)
    }
}

/// Parses CSV text into issues
pub fn parse_csv(content: &str) -> Result<Vec<Issue>, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .quote(b'"')
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let header = reader.headers()?.clone();
    let layout = RecordLayout::from_header(&fields(&header)).map_err(ImportError::Header)?;

    let mut issues = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let row = row_idx + 2; // +2 for 1-indexed and header row
        let record = result?;
        let issue = layout
            .parse_row(&fields(&record))
            .map_err(|source| ImportError::Row { row, source })?;
        issues.push(issue);
    }

    Ok(issues)
}

fn fields(record: &StringRecord) -> Vec<&str> {
    record.iter().collect()
}
