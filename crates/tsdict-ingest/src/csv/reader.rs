//! CSV file reading.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ErrorKind, ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Position of the spreadsheet export artifact column, dropped on load.
pub const ARTIFACT_COLUMN: usize = 1;

/// One data row with the file line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub line: u64,
    pub cells: Vec<String>,
}

/// Trimmed string cells keyed by header, artifact column already removed.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub path: PathBuf,
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    /// Index of the first column whose header equals `header`.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|candidate| candidate == header)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

/// Reads a comma-separated file with one header row.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_table_from_reader(file, path)
}

/// Reads CSV text from any reader; `path` is only used for error messages.
pub fn read_table_from_reader<R: Read>(reader: R, path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);
    let header_record = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .clone();
    let mut headers = normalize_headers(&header_record);
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    let drop_artifact = headers.len() > ARTIFACT_COLUMN;
    if drop_artifact {
        let dropped = headers.remove(ARTIFACT_COLUMN);
        debug!(column = %dropped, "dropping export artifact column");
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let line = record.position().map_or(0, csv::Position::line);
        let mut cells: Vec<String> = record.iter().map(|v| v.trim().to_string()).collect();
        if drop_artifact {
            cells.remove(ARTIFACT_COLUMN);
        }
        rows.push(RawRow { line, cells });
    }

    debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = headers.len(),
        "loaded CSV table"
    );
    Ok(RawTable {
        path: path.to_path_buf(),
        headers,
        rows,
    })
}

fn normalize_headers(record: &StringRecord) -> Vec<String> {
    record
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect()
}

fn csv_error(path: &Path, error: csv::Error) -> IngestError {
    if !error.is_io_error() {
        return IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        };
    }
    match error.into_kind() {
        ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        kind => IngestError::CsvParse {
            path: path.to_path_buf(),
            message: format!("{kind:?}"),
        },
    }
}
