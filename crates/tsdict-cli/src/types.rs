use std::path::PathBuf;

use tsdict_model::Band;

#[derive(Debug)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub entries: usize,
    /// Numeric cells that were missing and render as `NaN`.
    pub missing_values: usize,
    pub categories: Vec<CategorySummary>,
    /// False for dry runs.
    pub written: bool,
}

#[derive(Debug)]
pub struct CategorySummary {
    pub label: String,
    pub value: String,
    pub band: Band,
    pub rows: usize,
}
