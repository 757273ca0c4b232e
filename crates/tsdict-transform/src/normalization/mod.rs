//! Name normalization.

pub mod identifier;

pub use identifier::{segment_words, to_identifier};
