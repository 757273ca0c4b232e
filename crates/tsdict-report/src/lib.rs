//! TypeScript module generation.
//!
//! Renders the nutrition entries into the `utils.ts` module consumed by the
//! front end. Rendering is pure; [`write_module`] is the only side effect.

mod error;
mod literal;
mod module;

pub use error::{ReportError, Result};
pub use literal::{number_literal, string_literal};
pub use module::{
    record_block, render_module, render_prelude, render_records, render_subtypes,
    subtype_option, write_module,
};
