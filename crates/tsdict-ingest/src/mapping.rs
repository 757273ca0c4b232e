//! Header-to-field mapping of loaded rows.

use tracing::{debug, trace};

use tsdict_model::{ColumnMapping, Field, Nutrients, SourceRow};

use crate::csv::RawTable;
use crate::error::{IngestError, Result};
use crate::numeric::{MissingValues, parse_cell};

/// A mapped field resolved to its column position.
#[derive(Debug, Clone, Copy)]
struct ResolvedColumn<'a> {
    header: &'a str,
    field: Field,
    index: usize,
}

/// Converts the loaded table into typed rows.
///
/// Every header named by `mapping` must be present. Columns the mapping does
/// not name are never read.
pub fn map_rows(
    table: &RawTable,
    mapping: &ColumnMapping,
    missing: &MissingValues,
) -> Result<Vec<SourceRow>> {
    let columns = resolve_columns(table, mapping)?;
    for header in &table.headers {
        if mapping.field_for(header).is_none() {
            debug!(column = %header, "ignoring unmapped column");
        }
    }
    let name_index = columns
        .iter()
        .find(|column| column.field == Field::Name)
        .map(|column| column.index)
        .ok_or_else(|| IngestError::MissingColumn {
            column: Field::Name.ident().to_string(),
            path: table.path.clone(),
        })?;

    let mut rows = Vec::with_capacity(table.height());
    for raw in &table.rows {
        let display_name = raw.cells[name_index].trim();
        if display_name.is_empty() {
            return Err(IngestError::EmptyName {
                path: table.path.clone(),
                line: raw.line,
            });
        }
        let mut nutrients = Nutrients::default();
        for column in columns.iter().filter(|column| column.field.is_numeric()) {
            let cell = &raw.cells[column.index];
            let value = parse_cell(cell, missing).ok_or_else(|| IngestError::InvalidNumber {
                path: table.path.clone(),
                line: raw.line,
                column: column.header.to_string(),
                value: cell.clone(),
            })?;
            nutrients.set(column.field, value)?;
        }
        trace!(
            name = %display_name,
            missing = nutrients.missing_count(),
            "mapped row"
        );
        rows.push(SourceRow::new(display_name, nutrients));
    }
    Ok(rows)
}

fn resolve_columns<'a>(
    table: &RawTable,
    mapping: &'a ColumnMapping,
) -> Result<Vec<ResolvedColumn<'a>>> {
    mapping
        .iter()
        .map(|(header, field)| {
            let index = table
                .column_index(header)
                .ok_or_else(|| IngestError::MissingColumn {
                    column: header.to_string(),
                    path: table.path.clone(),
                })?;
            debug!(column = %header, field = %field, index, "mapped column");
            Ok(ResolvedColumn {
                header,
                field,
                index,
            })
        })
        .collect()
}
