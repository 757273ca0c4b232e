//! Identifier assignment with the global uniqueness check.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use tsdict_model::{FormulaEntry, SourceRow};

use crate::error::{Collision, Result, TransformError};
use crate::normalization::to_identifier;

/// Normalizes every row's display name and checks that the resulting
/// identifiers are pairwise distinct.
///
/// Any collision fails the whole batch; the error lists every colliding
/// identifier, ordered by first occurrence.
pub fn assign_identifiers(rows: Vec<SourceRow>) -> Result<Vec<FormulaEntry>> {
    let mut entries = Vec::with_capacity(rows.len());
    for (idx, row) in rows.into_iter().enumerate() {
        let identifier = to_identifier(&row.display_name);
        if identifier.is_empty() {
            return Err(TransformError::EmptyIdentifier {
                name: row.display_name,
                row: idx + 1,
            });
        }
        debug!(name = %row.display_name, identifier = %identifier, "normalized name");
        entries.push(FormulaEntry {
            display_name: row.display_name,
            identifier,
            nutrients: row.nutrients,
        });
    }

    let collisions = find_collisions(&entries);
    if !collisions.is_empty() {
        for collision in &collisions {
            warn!(
                identifier = %collision.identifier,
                count = collision.names.len(),
                "identifier collision"
            );
        }
        return Err(TransformError::DuplicateIdentifiers(collisions));
    }
    info!(entries = entries.len(), "assigned unique identifiers");
    Ok(entries)
}

/// Groups entries sharing an identifier.
pub fn find_collisions(entries: &[FormulaEntry]) -> Vec<Collision> {
    let mut first_seen: BTreeMap<&str, usize> = BTreeMap::new();
    let mut groups: Vec<Collision> = Vec::new();
    for entry in entries {
        match first_seen.get(entry.identifier.as_str()) {
            Some(&group) => groups[group].names.push(entry.display_name.clone()),
            None => {
                first_seen.insert(&entry.identifier, groups.len());
                groups.push(Collision {
                    identifier: entry.identifier.clone(),
                    names: vec![entry.display_name.clone()],
                });
            }
        }
    }
    groups.retain(|group| group.names.len() > 1);
    groups
}
