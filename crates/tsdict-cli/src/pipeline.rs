//! The generator pipeline: load, map, normalize, render, write.
//!
//! Every stage runs to completion before the output file is touched, so a
//! failure anywhere leaves the previous module in place.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tsdict_ingest::{map_rows, read_table};
use tsdict_model::FormulaEntry;
use tsdict_report::{render_module, write_module};
use tsdict_transform::assign_identifiers;

use crate::config::GeneratorConfig;
use crate::types::{CategorySummary, RunSummary};

/// Runs the whole pipeline. With `dry_run` the module is rendered but not
/// written.
pub fn run(config: &GeneratorConfig, dry_run: bool) -> Result<RunSummary> {
    let start = Instant::now();

    // =========================================================================
    // Stage 1: Ingest - load the table and map headers onto fields
    // =========================================================================
    let ingest_span = info_span!("ingest", input = %config.input.display());
    let rows = ingest_span.in_scope(|| -> Result<_> {
        let table = read_table(&config.input)
            .with_context(|| format!("load {}", config.input.display()))?;
        let rows = map_rows(&table, &config.mapping, &config.missing)
            .with_context(|| format!("map columns of {}", config.input.display()))?;
        info!(rows = rows.len(), columns = table.width(), "ingested table");
        Ok(rows)
    })?;

    // =========================================================================
    // Stage 2: Normalize - derive unique identifiers
    // =========================================================================
    let entries = info_span!("normalize")
        .in_scope(|| assign_identifiers(rows))
        .context("normalize product names")?;

    // =========================================================================
    // Stage 3: Emit - render the module, then replace the output file
    // =========================================================================
    let emit_span = info_span!("emit", output = %config.output.display());
    emit_span.in_scope(|| -> Result<()> {
        let module = render_module(&entries, &config.layout).context("render module")?;
        if dry_run {
            info!(bytes = module.len(), "dry run, skipping write");
            return Ok(());
        }
        write_module(&config.output, &module)?;
        Ok(())
    })?;

    info!(
        entries = entries.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "pipeline finished"
    );
    Ok(summarize(config, &entries, !dry_run))
}

fn summarize(config: &GeneratorConfig, entries: &[FormulaEntry], written: bool) -> RunSummary {
    let categories = config
        .layout
        .categories()
        .iter()
        .zip(config.layout.partition(entries))
        .map(|(category, band)| CategorySummary {
            label: category.label.clone(),
            value: category.value.clone(),
            band: category.band(),
            rows: band.len(),
        })
        .collect();
    RunSummary {
        input: config.input.clone(),
        output: config.output.clone(),
        entries: entries.len(),
        missing_values: entries
            .iter()
            .map(|entry| entry.nutrients.missing_count())
            .sum(),
        categories,
        written,
    }
}
