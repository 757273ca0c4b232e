//! Error types for the transform stage.

use std::fmt::Write as _;

use thiserror::Error;

/// Display names that normalize to the same identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub identifier: String,
    /// Colliding display names, in input order.
    pub names: Vec<String>,
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("identifiers are not unique: {}", describe_collisions(.0))]
    DuplicateIdentifiers(Vec<Collision>),

    #[error("product name '{name}' (row {row}) normalizes to an empty identifier")]
    EmptyIdentifier { name: String, row: usize },
}

pub type Result<T> = std::result::Result<T, TransformError>;

fn describe_collisions(collisions: &[Collision]) -> String {
    let mut out = String::new();
    for (idx, collision) in collisions.iter().enumerate() {
        if idx > 0 {
            out.push_str("; ");
        }
        let names: Vec<String> = collision
            .names
            .iter()
            .map(|name| format!("'{name}'"))
            .collect();
        let _ = write!(out, "'{}' <- {}", collision.identifier, names.join(", "));
    }
    out
}
