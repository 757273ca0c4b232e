//! Data model for the nutrition table generator.
//!
//! Everything downstream of the CSV loader works on these types: the closed
//! [`Field`] set, rows with typed [`Nutrients`], the header [`ColumnMapping`]
//! and the positional [`CategoryLayout`].

pub mod entry;
pub mod error;
pub mod field;
pub mod layout;
pub mod mapping;

pub use entry::{FormulaEntry, Nutrients, SourceRow};
pub use error::{ModelError, Result};
pub use field::{Field, NUMERIC_FIELD_COUNT};
pub use layout::{Band, Category, CategoryLayout};
pub use mapping::ColumnMapping;
