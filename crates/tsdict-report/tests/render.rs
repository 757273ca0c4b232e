//! Golden test for the complete rendered module.

use tsdict_model::{CategoryLayout, Field, FormulaEntry, Nutrients};
use tsdict_report::{render_module, write_module};

const EXPECTED: &str = r"
export interface FormSelections {
    type: string;
    subtype: string;
    mL: number;
    g: number;
}

export interface IDBEntry {
    cal_per_unit: number;
    protein_per_unit: number;
    calcium_per_unit: number;
    phos_per_unit: number;
    kalium_per_unit: number;
    natrium_per_unit: number;
    magnesium_per_unit: number;
    retinol_per_unit: number;
    vit_d_per_unit: number;
    carb_per_unit: number;
    fat_per_unit: number;
    displacement: number;
}

export const DEFAULT_FORM_SELECTIONS = {
    type: '',
    subtype: '',
    mL: 0,
    g: 0,
};

export const formulaTypes = [
    { label: 'Choose...', value: '', disabled: true },
    { label: 'Milk', value: 'f1' },
    { label: 'Liquid Pediatric', value: 'f2' },
    { label: 'Powder', value: 'f3' },
    { label: 'Additives (post-decant)', value: 'f4' },
];


export const formulaSubtypes = [
[
{ label: 'Whole Milk (3.5%)', value: 'whole_milk_3_5' },
{ label: 'Donor Milk', value: 'donor_milk' },
],
[
{ label: 'Whole Milk (3.5%)', value: 'whole_milk_3_5' },
{ label: 'Donor Milk', value: 'donor_milk' },
],
[

],
[

],
[

],
];

export const db_at_home: { [key: string]: IDBEntry } = {

'whole_milk_3_5': {
        cal_per_unit: 65,
        protein_per_unit: 3.2,
        calcium_per_unit: 120,
        phos_per_unit: 95,
        kalium_per_unit: 150,
        natrium_per_unit: 45,
        magnesium_per_unit: 11,
        retinol_per_unit: 150,
        vit_d_per_unit: 40,
        carb_per_unit: 4.8,
        fat_per_unit: 3.5,
        displacement: 1.03,
},
'donor_milk': {
        cal_per_unit: 0.67,
        protein_per_unit: NaN,
        calcium_per_unit: NaN,
        phos_per_unit: NaN,
        kalium_per_unit: NaN,
        natrium_per_unit: NaN,
        magnesium_per_unit: NaN,
        retinol_per_unit: NaN,
        vit_d_per_unit: NaN,
        carb_per_unit: NaN,
        fat_per_unit: NaN,
        displacement: NaN,
},
};
";

fn whole_milk() -> FormulaEntry {
    let mut nutrients = Nutrients::default();
    let values = [
        65.0, 3.2, 120.0, 95.0, 150.0, 45.0, 11.0, 150.0, 40.0, 4.8, 3.5, 1.03,
    ];
    for (field, value) in Field::NUMERIC.into_iter().zip(values) {
        nutrients.set(field, value).unwrap();
    }
    FormulaEntry {
        display_name: "Whole Milk (3.5%)".to_string(),
        identifier: "whole_milk_3_5".to_string(),
        nutrients,
    }
}

fn donor_milk() -> FormulaEntry {
    FormulaEntry {
        display_name: "Donor Milk".to_string(),
        identifier: "donor_milk".to_string(),
        nutrients: Nutrients::default().with(Field::CalPerUnit, 0.67).unwrap(),
    }
}

#[test]
fn renders_full_module() {
    let rendered = render_module(&[whole_milk(), donor_milk()], &CategoryLayout::default()).unwrap();
    assert_eq!(rendered, EXPECTED);
}

#[test]
fn renders_without_entries() {
    let rendered = render_module(&[], &CategoryLayout::default()).unwrap();
    assert!(rendered.contains("export const formulaSubtypes = [\n[\n\n],\n"));
    assert!(rendered.ends_with("export const db_at_home: { [key: string]: IDBEntry } = {\n\n};\n"));
}

#[test]
fn apostrophes_in_names_stay_valid() {
    let mut entry = donor_milk();
    entry.display_name = "Mom's Milk".to_string();
    entry.identifier = "mom_s_milk".to_string();
    let rendered = render_module(&[entry], &CategoryLayout::default()).unwrap();
    assert!(rendered.contains(r"{ label: 'Mom\'s Milk', value: 'mom_s_milk' },"));
}

#[test]
fn written_file_matches_rendered_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("utils.ts");
    std::fs::write(&path, "stale contents that are much longer than nothing").unwrap();

    let rendered = render_module(&[whole_milk()], &CategoryLayout::default()).unwrap();
    write_module(&path, &rendered).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), rendered);
}
