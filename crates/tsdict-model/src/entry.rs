//! Row types flowing through the pipeline.

use crate::error::{ModelError, Result};
use crate::field::{Field, NUMERIC_FIELD_COUNT};

/// Numeric values of one entry, one slot per [`Field::NUMERIC`] field.
///
/// A missing value is stored as `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutrients {
    values: [f64; NUMERIC_FIELD_COUNT],
}

impl Default for Nutrients {
    fn default() -> Self {
        Self {
            values: [f64::NAN; NUMERIC_FIELD_COUNT],
        }
    }
}

impl Nutrients {
    /// Returns the value for a numeric field, `None` for [`Field::Name`].
    pub fn get(&self, field: Field) -> Option<f64> {
        field.numeric_index().map(|idx| self.values[idx])
    }

    pub fn set(&mut self, field: Field, value: f64) -> Result<()> {
        let idx = field
            .numeric_index()
            .ok_or(ModelError::NotNumeric(field))?;
        self.values[idx] = value;
        Ok(())
    }

    /// Builder-style [`Nutrients::set`] for fixtures.
    pub fn with(mut self, field: Field, value: f64) -> Result<Self> {
        self.set(field, value)?;
        Ok(self)
    }

    /// Iterates `(field, value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::NUMERIC.iter().copied().zip(self.values.iter().copied())
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_nan()).count()
    }
}

/// A row as read from the source table, before identifier assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    /// Human-readable product name, e.g. `Breast Milk (Donor)`.
    pub display_name: String,
    pub nutrients: Nutrients,
}

impl SourceRow {
    pub fn new(display_name: impl Into<String>, nutrients: Nutrients) -> Self {
        Self {
            display_name: display_name.into(),
            nutrients,
        }
    }
}

/// A fully prepared entry with its unique identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaEntry {
    pub display_name: String,
    /// Snake-case key, unique across all entries of a run.
    pub identifier: String,
    pub nutrients: Nutrients,
}
