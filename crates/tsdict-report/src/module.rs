//! TypeScript module rendering.
//!
//! The module has three parts, concatenated in this order:
//!
//! 1. a fixed prelude with the `FormSelections` and `IDBEntry` interfaces,
//!    the `DEFAULT_FORM_SELECTIONS` constant and the `formulaTypes` options;
//! 2. `formulaSubtypes`: the full option list followed by one list per
//!    category band (the front end indexes it by category number, falling
//!    back to index 0 while no category is selected);
//! 3. `db_at_home`: identifier -> nutrient record.

use std::fmt::Write as _;
use std::path::Path;

use tracing::{debug, info};

use tsdict_model::{CategoryLayout, Field, FormulaEntry};

use crate::error::{ReportError, Result};
use crate::literal::{number_literal, string_literal};

const FORM_SELECTIONS_INTERFACE: &str = "\
export interface FormSelections {
    type: string;
    subtype: string;
    mL: number;
    g: number;
}
";

const DEFAULT_FORM_SELECTIONS: &str = "\
export const DEFAULT_FORM_SELECTIONS = {
    type: '',
    subtype: '',
    mL: 0,
    g: 0,
};
";

const CHOOSE_PLACEHOLDER: &str = "    { label: 'Choose...', value: '', disabled: true },";

const RECORD_INDENT: &str = "        ";

/// Renders the interfaces, defaults and category options.
pub fn render_prelude(out: &mut String, layout: &CategoryLayout) -> Result<()> {
    out.push('\n');
    out.push_str(FORM_SELECTIONS_INTERFACE);
    out.push('\n');

    writeln!(out, "export interface IDBEntry {{")?;
    for field in Field::NUMERIC {
        writeln!(out, "    {}: number;", field.ident())?;
    }
    writeln!(out, "}}")?;
    out.push('\n');

    out.push_str(DEFAULT_FORM_SELECTIONS);
    out.push('\n');

    writeln!(out, "export const formulaTypes = [")?;
    writeln!(out, "{CHOOSE_PLACEHOLDER}")?;
    for category in layout.categories() {
        writeln!(
            out,
            "    {{ label: {}, value: {} }},",
            string_literal(&category.label),
            string_literal(&category.value)
        )?;
    }
    writeln!(out, "];")?;
    out.push('\n');
    Ok(())
}

/// One `{ label, value }` option line for the subtype selector.
pub fn subtype_option(entry: &FormulaEntry) -> String {
    format!(
        "{{ label: {}, value: {} }},",
        string_literal(&entry.display_name),
        string_literal(&entry.identifier)
    )
}

/// Renders `formulaSubtypes`: the full list, then one list per band.
pub fn render_subtypes(
    out: &mut String,
    entries: &[FormulaEntry],
    layout: &CategoryLayout,
) -> Result<()> {
    let options: Vec<String> = entries.iter().map(subtype_option).collect();
    out.push('\n');
    writeln!(out, "export const formulaSubtypes = [")?;
    write_option_group(out, &options)?;
    for (category, band) in layout.categories().iter().zip(layout.partition(&options)) {
        debug!(
            category = %category.label,
            band = %category.band(),
            options = band.len(),
            "rendering category band"
        );
        write_option_group(out, band)?;
    }
    writeln!(out, "];")?;
    Ok(())
}

fn write_option_group(out: &mut String, options: &[String]) -> Result<()> {
    writeln!(out, "[")?;
    writeln!(out, "{}", options.join("\n"))?;
    writeln!(out, "],")?;
    Ok(())
}

/// One `'<identifier>': { ... },` record block.
pub fn record_block(entry: &FormulaEntry) -> String {
    let mut block = format!("{}: {{\n", string_literal(&entry.identifier));
    for (field, value) in entry.nutrients.iter() {
        block.push_str(RECORD_INDENT);
        block.push_str(field.ident());
        block.push_str(": ");
        block.push_str(&number_literal(value));
        block.push_str(",\n");
    }
    block.push_str("},");
    block
}

/// Renders the `db_at_home` record.
pub fn render_records(out: &mut String, entries: &[FormulaEntry]) -> Result<()> {
    writeln!(
        out,
        "export const db_at_home: {{ [key: string]: IDBEntry }} = {{"
    )?;
    for entry in entries {
        out.push('\n');
        out.push_str(&record_block(entry));
    }
    write!(out, "\n}};")?;
    Ok(())
}

/// Renders the complete module text.
pub fn render_module(entries: &[FormulaEntry], layout: &CategoryLayout) -> Result<String> {
    let mut out = String::new();
    render_prelude(&mut out, layout)?;
    render_subtypes(&mut out, entries, layout)?;
    out.push('\n');
    render_records(&mut out, entries)?;
    out.push('\n');
    debug!(bytes = out.len(), entries = entries.len(), "rendered module");
    Ok(out)
}

/// Writes `contents` to `path`, replacing any previous file.
pub fn write_module(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "wrote module");
    Ok(())
}
