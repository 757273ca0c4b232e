use thiserror::Error;

use crate::field::Field;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("field '{0}' is not numeric")]
    NotNumeric(Field),

    #[error("column mapping lists header '{0}' more than once")]
    DuplicateHeader(String),

    #[error("field '{field}' is claimed by both '{first}' and '{second}'")]
    DuplicateTarget {
        field: Field,
        first: String,
        second: String,
    },

    #[error("column mapping has no header for the 'name' field")]
    MissingNameColumn,

    #[error("category layout is empty")]
    EmptyLayout,

    #[error("band of category '{category}' starts at row {found}, expected {expected}")]
    BandGap {
        category: String,
        expected: usize,
        found: usize,
    },

    #[error("band of category '{category}' ends at row {end} before its start {start}")]
    BandReversed {
        category: String,
        start: usize,
        end: usize,
    },

    #[error("only the last category may have an open-ended band, '{category}' does too")]
    UnboundedBandNotLast { category: String },

    #[error("last category '{category}' must have an open-ended band")]
    LastBandBounded { category: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
