//! `janpad pipeline` — standardize → aggregate → merge → risk → dashboard
//! over reconciled stream tables.

use std::path::{Path, PathBuf};

use serde::Serialize;

use janpad_pipeline::merge::merged_table;
use janpad_pipeline::risk::risk_table;
use janpad_pipeline::{PipelineConfig, PipelineInput, PipelineOutcome};
use janpad_recon::model::DataQualityIssue;
use janpad_recon::table::{load_registry_csv, Table};

use crate::exit_codes::{pipeline_exit_code, EXIT_ERROR, EXIT_RUNTIME};
use crate::CliError;

fn runtime_err(msg: impl Into<String>) -> CliError {
    CliError::new(EXIT_RUNTIME, msg)
}

fn pipeline_err(e: &janpad_pipeline::PipelineError) -> CliError {
    CliError::new(pipeline_exit_code(e), e.to_string())
}

/// Machine summary for `--json`. Row-level data goes to the CSV artifacts;
/// stdout carries the counts and the issue ledger.
#[derive(Serialize)]
struct PipelineSummary {
    merged_rows: usize,
    flagged: usize,
    dashboard_districts: usize,
    issues: Vec<DataQualityIssue>,
}

pub fn cmd_pipeline(config_path: PathBuf, json_output: bool) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| runtime_err(format!("cannot read config: {e}")))?;
    let config = PipelineConfig::from_toml(&config_str).map_err(|e| pipeline_err(&e))?;

    // Resolve file paths relative to config file's directory
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    let registry = load_registry_csv(&base_dir.join(&config.registry))
        .map_err(|e| pipeline_err(&e.into()))?;
    let load = |stream: &str, path: &str| -> Result<Table, CliError> {
        Table::from_csv_path(&base_dir.join(path))
            .map_err(|e| runtime_err(format!("stream '{stream}': {e}")))
    };

    let input = PipelineInput {
        registry,
        enrolment: load("enrolment", &config.streams.enrolment)?,
        demographic: load("demographic", &config.streams.demographic)?,
        biometric: load("biometric", &config.streams.biometric)?,
    };

    let outcome = janpad_pipeline::run(input).map_err(|e| pipeline_err(&e))?;

    let output_dir = base_dir.join(&config.output_dir);
    write_artifacts(&output_dir, &outcome)?;

    let flagged = outcome.risk.iter().filter(|r| r.risk_flag).count();

    if json_output {
        let summary = PipelineSummary {
            merged_rows: outcome.merged.len(),
            flagged,
            dashboard_districts: outcome.dashboard.rows.len(),
            issues: outcome.issues.clone(),
        };
        let json_str = serde_json::to_string_pretty(&summary)
            .map_err(|e| CliError::new(EXIT_ERROR, format!("JSON serialization error: {e}")))?;
        println!("{json_str}");
    }

    // Human summary to stderr
    eprintln!(
        "pipeline: {} merged rows, {} flagged, {} dashboard districts, {} data-quality issue(s)",
        outcome.merged.len(),
        flagged,
        outcome.dashboard.rows.len(),
        outcome.issues.len(),
    );
    for issue in &outcome.issues {
        eprintln!("  {}: {} row(s) with {}", issue.file, issue.rows, issue.kind);
    }

    Ok(())
}

fn write_artifacts(output_dir: &Path, outcome: &PipelineOutcome) -> Result<(), CliError> {
    for (name, table) in [
        ("merged.csv", merged_table(&outcome.merged)),
        ("risk.csv", risk_table(&outcome.risk)),
    ] {
        table
            .write_csv_path(&output_dir.join(name))
            .map_err(|e| runtime_err(e.to_string()))?;
    }
    outcome
        .dashboard
        .write_csv_path(&output_dir.join("dashboard.csv"))
        .map_err(|e| runtime_err(e.to_string()))?;
    Ok(())
}
