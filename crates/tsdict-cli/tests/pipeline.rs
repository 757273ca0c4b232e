//! End-to-end runs of the generator pipeline against temporary files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tsdict_cli::config::{ConfigFile, GeneratorConfig};
use tsdict_cli::pipeline::run;

const HEADER: &str = "Names (per mL),Unnamed: 1,Calories,Protein,Calcium,Phos,K+,Na+,Mg,\
                      Retinol (IU),Vit D (IU),Carb,Fat,d/p,Notes";

fn write_csv(dir: &TempDir, rows: &[&str]) -> PathBuf {
    let path = dir.path().join("dbtagged.csv");
    let mut text = String::from(HEADER);
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    fs::write(&path, text).unwrap();
    path
}

fn config_for(input: &Path, output: &Path) -> GeneratorConfig {
    GeneratorConfig::resolve(
        ConfigFile::default(),
        Some(input.to_path_buf()),
        Some(output.to_path_buf()),
    )
    .unwrap()
}

#[test]
fn writes_module_for_valid_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(
        &dir,
        &[
            "Whole Milk (3.5%),0,65,3.2,120,95,150,45,11,150,40,4.8,3.5,1.03,SECRET",
            "Donor Milk,1,0.67,,,,,,,,,,,,",
        ],
    );
    let output = dir.path().join("src").join("utils.ts");

    let summary = run(&config_for(&input, &output), false).unwrap();

    assert!(summary.written);
    assert_eq!(summary.entries, 2);
    assert_eq!(summary.missing_values, 11);
    let module = fs::read_to_string(&output).unwrap();
    assert!(module.contains("'whole_milk_3_5': {\n        cal_per_unit: 65,\n"));
    assert!(module.contains("{ label: 'Donor Milk', value: 'donor_milk' },"));
    assert!(module.contains("        displacement: NaN,\n"));
    assert!(!module.contains("SECRET"));
}

#[test]
fn summary_counts_rows_per_category() {
    let dir = tempfile::tempdir().unwrap();
    let rows: Vec<String> = (0..9)
        .map(|idx| format!("Product {idx},x,1,1,1,1,1,1,1,1,1,1,1,1,"))
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let input = write_csv(&dir, &rows);
    let output = dir.path().join("utils.ts");

    let summary = run(&config_for(&input, &output), false).unwrap();

    let counts: Vec<usize> = summary.categories.iter().map(|c| c.rows).collect();
    assert_eq!(counts, vec![7, 2, 0, 0]);
}

#[test]
fn duplicate_identifiers_leave_existing_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(
        &dir,
        &[
            "Similac,0,1,1,1,1,1,1,1,1,1,1,1,1,",
            "SIMILAC,0,2,2,2,2,2,2,2,2,2,2,2,2,",
        ],
    );
    let output = dir.path().join("utils.ts");
    fs::write(&output, "previous module").unwrap();

    let err = run(&config_for(&input, &output), false).unwrap_err();

    insta::assert_snapshot!(
        format!("{err:#}"),
        @"normalize product names: identifiers are not unique: 'similac' <- 'Similac', 'SIMILAC'"
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous module");
}

#[test]
fn duplicate_identifiers_create_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(
        &dir,
        &[
            "Neo Sure,0,1,1,1,1,1,1,1,1,1,1,1,1,",
            "Neo-Sure,0,1,1,1,1,1,1,1,1,1,1,1,1,",
        ],
    );
    let output = dir.path().join("utils.ts");

    assert!(run(&config_for(&input, &output), false).is_err());
    assert!(!output.exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(&dir, &["Donor Milk,1,0.67,,,,,,,,,,,,"]);
    let output = dir.path().join("utils.ts");

    let summary = run(&config_for(&input, &output), true).unwrap();

    assert!(!summary.written);
    assert_eq!(summary.entries, 1);
    assert!(!output.exists());
}

#[test]
fn missing_mapped_column_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("dbtagged.csv");
    fs::write(&input, "Names (per mL),Unnamed: 1,Calories\nDonor Milk,1,0.67\n").unwrap();
    let output = dir.path().join("utils.ts");

    let err = run(&config_for(&input, &output), false).unwrap_err();

    assert!(format!("{err:#}").contains("required column 'Protein' not found"));
    assert!(!output.exists());
}

#[test]
fn missing_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.csv");
    let output = dir.path().join("utils.ts");

    let err = run(&config_for(&input, &output), false).unwrap_err();

    assert!(format!("{err:#}").contains("CSV file not found"));
}

#[test]
fn config_file_narrows_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.csv");
    fs::write(&input, "Product,Tag,kcal\nBreast Milk,x,0.67\n").unwrap();
    let output = dir.path().join("utils.ts");
    let file = ConfigFile::parse(
        "[columns]\n\"Product\" = \"name\"\n\"kcal\" = \"cal_per_unit\"\n\n\
         [[categories]]\nlabel = \"Milk\"\nvalue = \"f1\"\nstart = 0\n",
    )
    .unwrap();
    let config = GeneratorConfig::resolve(file, Some(input), Some(output.clone())).unwrap();

    run(&config, false).unwrap();

    let module = fs::read_to_string(&output).unwrap();
    assert!(module.contains("{ label: 'Milk', value: 'f1' },"));
    assert!(!module.contains("'f2'"));
    assert!(module.contains("'breast_milk': {\n        cal_per_unit: 0.67,\n        protein_per_unit: NaN,"));
}
