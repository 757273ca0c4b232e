//! Transform stage: display names to unique snake-case identifiers.

pub mod error;
pub mod identifiers;
pub mod normalization;

pub use error::{Collision, Result, TransformError};
pub use identifiers::{assign_identifiers, find_collisions};
pub use normalization::{segment_words, to_identifier};
