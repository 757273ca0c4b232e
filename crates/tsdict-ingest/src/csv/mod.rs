//! CSV reading utilities.

mod reader;

pub use reader::{ARTIFACT_COLUMN, RawRow, RawTable, read_table, read_table_from_reader};
