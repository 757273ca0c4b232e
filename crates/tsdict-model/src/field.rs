//! Recognized target fields.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ModelError;

/// Number of numeric fields carried by every entry.
pub const NUMERIC_FIELD_COUNT: usize = 12;

/// A programmatic field a source column can be mapped onto.
///
/// `Name` carries the display name; every other variant is a numeric
/// nutrient-per-unit value (or the displacement factor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    CalPerUnit,
    ProteinPerUnit,
    CalciumPerUnit,
    PhosPerUnit,
    KaliumPerUnit,
    NatriumPerUnit,
    MagnesiumPerUnit,
    RetinolPerUnit,
    VitDPerUnit,
    CarbPerUnit,
    FatPerUnit,
    Displacement,
}

impl Field {
    /// Numeric fields in emission order.
    pub const NUMERIC: [Field; NUMERIC_FIELD_COUNT] = [
        Field::CalPerUnit,
        Field::ProteinPerUnit,
        Field::CalciumPerUnit,
        Field::PhosPerUnit,
        Field::KaliumPerUnit,
        Field::NatriumPerUnit,
        Field::MagnesiumPerUnit,
        Field::RetinolPerUnit,
        Field::VitDPerUnit,
        Field::CarbPerUnit,
        Field::FatPerUnit,
        Field::Displacement,
    ];

    /// Identifier used for this field in generated code.
    pub fn ident(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::CalPerUnit => "cal_per_unit",
            Field::ProteinPerUnit => "protein_per_unit",
            Field::CalciumPerUnit => "calcium_per_unit",
            Field::PhosPerUnit => "phos_per_unit",
            Field::KaliumPerUnit => "kalium_per_unit",
            Field::NatriumPerUnit => "natrium_per_unit",
            Field::MagnesiumPerUnit => "magnesium_per_unit",
            Field::RetinolPerUnit => "retinol_per_unit",
            Field::VitDPerUnit => "vit_d_per_unit",
            Field::CarbPerUnit => "carb_per_unit",
            Field::FatPerUnit => "fat_per_unit",
            Field::Displacement => "displacement",
        }
    }

    pub fn is_numeric(self) -> bool {
        self != Field::Name
    }

    /// Position of this field inside [`Field::NUMERIC`].
    pub fn numeric_index(self) -> Option<usize> {
        Field::NUMERIC.iter().position(|field| *field == self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

impl FromStr for Field {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed == Field::Name.ident() {
            return Ok(Field::Name);
        }
        Field::NUMERIC
            .iter()
            .copied()
            .find(|field| field.ident() == trimmed)
            .ok_or_else(|| ModelError::UnknownField(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_exclude_name() {
        assert!(!Field::NUMERIC.contains(&Field::Name));
        assert_eq!(Field::Name.numeric_index(), None);
        assert_eq!(Field::CalPerUnit.numeric_index(), Some(0));
        assert_eq!(Field::Displacement.numeric_index(), Some(11));
    }

    #[test]
    fn ident_round_trips_through_from_str() {
        for field in Field::NUMERIC.iter().copied().chain([Field::Name]) {
            assert_eq!(field.ident().parse::<Field>().unwrap(), field);
        }
        assert!(matches!(
            "sugar_per_unit".parse::<Field>(),
            Err(ModelError::UnknownField(name)) if name == "sugar_per_unit"
        ));
    }

    #[derive(Deserialize)]
    struct Wrapper {
        field: Field,
    }

    #[test]
    fn serde_names_match_idents() {
        for field in Field::NUMERIC {
            let parsed: Wrapper = toml::from_str(&format!("field = \"{}\"", field.ident())).unwrap();
            assert_eq!(parsed.field, field);
        }
        let parsed: Wrapper = toml::from_str("field = \"name\"").unwrap();
        assert_eq!(parsed.field, Field::Name);
        assert!(toml::from_str::<Wrapper>("field = \"sugar_per_unit\"").is_err());
    }
}
