//! Numeric cell parsing.

use std::collections::BTreeSet;

/// Tokens read as "no value", matching the defaults of the dataframe tooling
/// the spreadsheet exports are usually checked with.
const DEFAULT_MISSING_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Set of textual missing-value markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingValues {
    tokens: BTreeSet<String>,
}

impl Default for MissingValues {
    fn default() -> Self {
        Self::from_tokens(DEFAULT_MISSING_VALUES)
    }
}

impl MissingValues {
    /// Builds a marker set; tokens are trimmed.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|token| token.as_ref().trim().to_string())
                .collect(),
        }
    }

    pub fn is_missing(&self, value: &str) -> bool {
        self.tokens.contains(value.trim())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Parses a numeric cell.
///
/// Missing-value markers yield `NaN`; anything else must parse as `f64`.
/// Returns `None` for malformed input.
pub fn parse_cell(value: &str, missing: &MissingValues) -> Option<f64> {
    let trimmed = value.trim();
    if missing.is_missing(trimmed) {
        return Some(f64::NAN);
    }
    trimmed.parse::<f64>().ok()
}
