//! Nutrition table ingestion.
//!
//! Loads the spreadsheet export into a [`RawTable`] (dropping the positional
//! export artifact column) and maps it onto typed [`SourceRow`]s.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tsdict_ingest::{MissingValues, map_rows, read_table};
//! use tsdict_model::ColumnMapping;
//!
//! let table = read_table(Path::new("data/dbtagged.csv"))?;
//! let rows = map_rows(&table, &ColumnMapping::default(), &MissingValues::default())?;
//! ```
//!
//! [`SourceRow`]: tsdict_model::SourceRow

mod csv;
mod error;
mod mapping;
mod numeric;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{ARTIFACT_COLUMN, RawRow, RawTable, read_table, read_table_from_reader};

// === Mapping ===
pub use mapping::map_rows;
pub use numeric::{MissingValues, parse_cell};
