//! `janpad reconcile` / `validate` / `match` — config-driven reconciliation
//! runs and one-off triage lookups.

use std::path::{Path, PathBuf};

use janpad_recon::engine::{RunInput, RunOutcome};
use janpad_recon::matcher::DEFAULT_THRESHOLD;
use janpad_recon::report::{match_type_counts_table, state_unmatched_table, top_unmatched_table};
use janpad_recon::table::{load_registry_csv, Table};
use janpad_recon::{AliasTable, MatchEngine, RegistryIndex, RunConfig};

use crate::exit_codes::{recon_exit_code, EXIT_ERROR, EXIT_RUNTIME, EXIT_USAGE};
use crate::CliError;

fn runtime_err(msg: impl Into<String>) -> CliError {
    CliError::new(EXIT_RUNTIME, msg)
}

fn recon_err(e: &janpad_recon::ReconError) -> CliError {
    CliError::new(recon_exit_code(e), e.to_string())
}

/// Load the config, registry, and every dataset relative to the config
/// file's directory.
fn load_run(config_path: &Path) -> Result<(RunConfig, PathBuf, RunInput), CliError> {
    let config_str = std::fs::read_to_string(config_path)
        .map_err(|e| runtime_err(format!("cannot read config: {e}")))?;
    let config = RunConfig::from_toml(&config_str).map_err(|e| recon_err(&e))?;

    // Resolve file paths relative to config file's directory
    let base_dir = config_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let registry =
        load_registry_csv(&base_dir.join(&config.registry)).map_err(|e| recon_err(&e))?;

    let mut datasets = Vec::with_capacity(config.datasets.len());
    for (name, path) in &config.datasets {
        let table = Table::from_csv_path(&base_dir.join(path)).map_err(|e| {
            runtime_err(format!("dataset '{name}': {e}"))
        })?;
        datasets.push((name.clone(), table));
    }

    Ok((config, base_dir, RunInput { registry, datasets }))
}

pub fn cmd_reconcile(
    config_path: PathBuf,
    json_output: bool,
    output_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let (config, base_dir, input) = load_run(&config_path)?;

    let outcome = janpad_recon::run(&config, input).map_err(|e| recon_err(&e))?;

    write_artifacts(&base_dir.join(&config.output_dir), &outcome)?;

    let json_str = serde_json::to_string_pretty(&outcome.result)
        .map_err(|e| CliError::new(EXIT_ERROR, format!("JSON serialization error: {e}")))?;

    if let Some(ref path) = output_file {
        std::fs::write(path, &json_str)
            .map_err(|e| runtime_err(format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if json_output {
        println!("{json_str}");
    }

    // Human summary to stderr
    for report in &outcome.result.reports {
        eprintln!(
            "{}: {} rows — {} exact, {} renamed, {} fuzzy, {} unmatched, {} garbage dropped ({:.1}% resolved)",
            report.dataset,
            report.total,
            report.exact,
            report.renamed,
            report.fuzzy,
            report.unmatched,
            report.garbage_dropped,
            report.success_rate * 100.0,
        );
    }
    for failure in &outcome.failures {
        eprintln!("{}: failed — {}", failure.dataset, failure.error);
    }

    if let Some(failure) = outcome.failures.first() {
        return Err(CliError::new(
            recon_exit_code(&failure.error),
            format!("{} dataset(s) failed", outcome.failures.len()),
        ));
    }
    Ok(())
}

/// Per-dataset artifacts: the annotated table plus the three audit CSVs.
fn write_artifacts(output_dir: &Path, outcome: &RunOutcome) -> Result<(), CliError> {
    for (name, table) in &outcome.outputs {
        table
            .write_csv_path(&output_dir.join(format!("{name}.csv")))
            .map_err(|e| recon_err(&e))?;
    }
    for report in &outcome.result.reports {
        let name = &report.dataset;
        for (suffix, table) in [
            ("match_types", match_type_counts_table(report)),
            ("top_unmatched", top_unmatched_table(report)),
            ("state_unmatched", state_unmatched_table(report)),
        ] {
            table
                .write_csv_path(&output_dir.join(format!("{name}_{suffix}.csv")))
                .map_err(|e| recon_err(&e))?;
        }
    }
    Ok(())
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let (config, _, input) = load_run(&config_path)?;

    // The registry must also be usable, not just named.
    let index = RegistryIndex::build(input.registry).map_err(|e| recon_err(&e))?;

    eprintln!(
        "valid: {} dataset(s), registry has {} pairs across {} states, threshold {}",
        config.datasets.len(),
        index.pair_count(),
        index.state_count(),
        config.threshold,
    );
    Ok(())
}

pub fn cmd_match(
    state: &str,
    district: &str,
    registry_path: PathBuf,
    threshold: Option<u8>,
    json_output: bool,
) -> Result<(), CliError> {
    let threshold = threshold.unwrap_or(DEFAULT_THRESHOLD);
    if threshold > 100 {
        return Err(CliError::new(EXIT_USAGE, format!("threshold must be in 0..=100, got {threshold}"))
            .with_hint("scores are on a 0-100 scale"));
    }

    let registry = load_registry_csv(&registry_path).map_err(|e| recon_err(&e))?;
    let index = RegistryIndex::build(registry).map_err(|e| recon_err(&e))?;
    let aliases = AliasTable::builtin();
    let engine = MatchEngine::new(&index, &aliases, threshold);

    let resolution = engine.resolve(state, district);

    if json_output {
        let json_str = serde_json::to_string_pretty(&resolution)
            .map_err(|e| CliError::new(EXIT_ERROR, format!("JSON serialization error: {e}")))?;
        println!("{json_str}");
        return Ok(());
    }

    match resolution.match_score {
        Some(score) => println!(
            "{} / {} -> {} [{}, score {}]",
            resolution.state_norm, district, resolution.district_final, resolution.match_type, score,
        ),
        None => println!(
            "{} / {} -> {} [{}]",
            resolution.state_norm, district, resolution.district_final, resolution.match_type,
        ),
    }
    Ok(())
}
