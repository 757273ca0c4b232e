//! Header-to-field column mapping.

use std::collections::BTreeMap;

use crate::error::{ModelError, Result};
use crate::field::Field;

const DEFAULT_COLUMNS: [(&str, Field); 13] = [
    ("Names (per mL)", Field::Name),
    ("Calories", Field::CalPerUnit),
    ("Protein", Field::ProteinPerUnit),
    ("Calcium", Field::CalciumPerUnit),
    ("Phos", Field::PhosPerUnit),
    ("K+", Field::KaliumPerUnit),
    ("Na+", Field::NatriumPerUnit),
    ("Mg", Field::MagnesiumPerUnit),
    ("Retinol (IU)", Field::RetinolPerUnit),
    ("Vit D (IU)", Field::VitDPerUnit),
    ("Carb", Field::CarbPerUnit),
    ("Fat", Field::FatPerUnit),
    ("d/p", Field::Displacement),
];

/// Maps spreadsheet headers onto programmatic fields.
///
/// Each target field is claimed by at most one header and the `name` field is
/// always present. Headers not listed here are ignored by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    columns: Vec<(String, Field)>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS
                .iter()
                .map(|(header, field)| ((*header).to_string(), *field))
                .collect(),
        }
    }
}

impl ColumnMapping {
    /// Builds a mapping from `(header, field)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Field)>,
        S: Into<String>,
    {
        let mut columns: Vec<(String, Field)> = Vec::new();
        let mut claimed: BTreeMap<Field, String> = BTreeMap::new();
        for (header, field) in pairs {
            let header = header.into().trim().to_string();
            if columns.iter().any(|(existing, _)| *existing == header) {
                return Err(ModelError::DuplicateHeader(header));
            }
            if let Some(first) = claimed.get(&field) {
                return Err(ModelError::DuplicateTarget {
                    field,
                    first: first.clone(),
                    second: header,
                });
            }
            claimed.insert(field, header.clone());
            columns.push((header, field));
        }
        if !claimed.contains_key(&Field::Name) {
            return Err(ModelError::MissingNameColumn);
        }
        Ok(Self { columns })
    }

    pub fn field_for(&self, header: &str) -> Option<Field> {
        let header = header.trim();
        self.columns
            .iter()
            .find(|(candidate, _)| candidate == header)
            .map(|(_, field)| *field)
    }

    pub fn header_for(&self, field: Field) -> Option<&str> {
        self.columns
            .iter()
            .find(|(_, candidate)| *candidate == field)
            .map(|(header, _)| header.as_str())
    }

    /// Iterates `(header, field)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Field)> {
        self.columns
            .iter()
            .map(|(header, field)| (header.as_str(), *field))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
