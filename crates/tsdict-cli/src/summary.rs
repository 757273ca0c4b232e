use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tsdict_cli::types::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    if summary.written {
        println!(
            "Successfully wrote updated db to {}",
            summary.output.display()
        );
    } else {
        println!("Dry run: {} was not written", summary.output.display());
    }
    println!("{}", summary_table(summary));
}

pub fn summary_table(summary: &RunSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Value"),
        header_cell("Band"),
        header_cell("Entries"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for category in &summary.categories {
        table.add_row(vec![
            Cell::new(&category.label)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&category.value),
            dim_cell(category.band),
            count_cell(category.rows),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell(format!("{} missing values", summary.missing_values)),
        Cell::new(summary.entries).add_attribute(Attribute::Bold),
    ]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        // An empty band usually means the input rows were reordered.
        Cell::new(count).fg(Color::Yellow)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tsdict_model::Band;

    use super::*;
    use tsdict_cli::types::CategorySummary;

    #[test]
    fn table_lists_categories_and_total() {
        let summary = RunSummary {
            input: PathBuf::from("data/dbtagged.csv"),
            output: PathBuf::from("src/utils.ts"),
            entries: 9,
            missing_values: 4,
            categories: vec![
                CategorySummary {
                    label: "Milk".to_string(),
                    value: "f1".to_string(),
                    band: Band::new(0, Some(7)),
                    rows: 7,
                },
                CategorySummary {
                    label: "Liquid Pediatric".to_string(),
                    value: "f2".to_string(),
                    band: Band::new(7, None),
                    rows: 2,
                },
            ],
            written: true,
        };
        let mut table = summary_table(&summary);
        table.force_no_tty();
        let rendered = table.to_string();

        assert!(rendered.contains("Milk"));
        assert!(rendered.contains("0..7"));
        assert!(rendered.contains("7.."));
        assert!(rendered.contains("4 missing values"));
        assert!(rendered.contains("TOTAL"));
    }
}
