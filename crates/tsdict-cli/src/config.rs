//! Generator configuration.
//!
//! Settings come from three layers, highest precedence first: command-line
//! flags, an optional TOML file, built-in defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use tsdict_ingest::MissingValues;
use tsdict_model::{Category, CategoryLayout, ColumnMapping, Field};

/// Spreadsheet export read when no input is given.
pub const DEFAULT_INPUT: &str = "data/dbtagged.csv";

/// Module written when no output is given.
pub const DEFAULT_OUTPUT: &str = "src/utils.ts";

/// Contents of a `--config` TOML file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub missing_values: Option<Vec<String>>,
    /// Replaces the default header mapping entirely.
    pub columns: Option<BTreeMap<String, Field>>,
    /// Replaces the default category layout entirely.
    pub categories: Option<Vec<Category>>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parse config: {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mapping: ColumnMapping,
    pub layout: CategoryLayout,
    pub missing: MissingValues,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            mapping: ColumnMapping::default(),
            layout: CategoryLayout::default(),
            missing: MissingValues::default(),
        }
    }
}

impl GeneratorConfig {
    /// Layers `file` and the command-line overrides over the defaults.
    pub fn resolve(
        file: ConfigFile,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Result<Self> {
        let defaults = Self::default();
        let mapping = match file.columns {
            Some(columns) => ColumnMapping::from_pairs(columns).context("invalid [columns] table")?,
            None => defaults.mapping,
        };
        let layout = match file.categories {
            Some(categories) => {
                CategoryLayout::new(categories).context("invalid [[categories]] layout")?
            }
            None => defaults.layout,
        };
        let missing = file
            .missing_values
            .map_or(defaults.missing, MissingValues::from_tokens);
        Ok(Self {
            input: input.or(file.input).unwrap_or(defaults.input),
            output: output.or(file.output).unwrap_or(defaults.output),
            mapping,
            layout,
            missing,
        })
    }
}
