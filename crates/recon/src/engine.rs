//! Run orchestration: build the registry index once, match every dataset
//! row, garbage-filter, and assemble annotated tables plus audit reports.

use crate::config::RunConfig;
use crate::error::ReconError;
use crate::matcher::MatchEngine;
use crate::model::{
    DataQualityIssue, DatasetReport, IssueKind, MatchType, Resolution, RunMeta, RunResult,
};
use crate::normalize::normalize;
use crate::registry::RegistryIndex;
use crate::report::summarize;
use crate::table::{Table, DISTRICT_COLUMNS, STATE_COLUMNS};
use crate::GarbagePolicy;

/// Pre-loaded run input. All file reads happen before matching starts.
pub struct RunInput {
    /// Raw (state, district) registry pairs.
    pub registry: Vec<(String, String)>,
    /// Dataset name -> loaded input table.
    pub datasets: Vec<(String, Table)>,
}

/// A dataset that could not be processed at all (schema error). Other
/// datasets are unaffected.
#[derive(Debug)]
pub struct DatasetFailure {
    pub dataset: String,
    pub error: ReconError,
}

/// Whole-run output: serializable reports, annotated tables keyed by
/// dataset name, and per-dataset fatal failures.
#[derive(Debug)]
pub struct RunOutcome {
    pub result: RunResult,
    pub outputs: Vec<(String, Table)>,
    pub failures: Vec<DatasetFailure>,
}

/// Run reconciliation for every dataset. Fails fast only on an unusable
/// registry or config; dataset-level schema errors are isolated into
/// `failures`.
pub fn run(config: &RunConfig, input: RunInput) -> Result<RunOutcome, ReconError> {
    let index = RegistryIndex::build(input.registry)?;
    let aliases = config.alias_table();
    let policy = config.garbage_policy()?;
    let engine = MatchEngine::new(&index, &aliases, config.threshold);

    let mut reports = Vec::new();
    let mut outputs = Vec::new();
    let mut failures = Vec::new();

    for (name, table) in input.datasets {
        match annotate_dataset(&name, &table, &engine, &policy, config.top_unmatched) {
            Ok((annotated, report)) => {
                reports.push(report);
                outputs.push((name, annotated));
            }
            Err(error) => failures.push(DatasetFailure { dataset: name, error }),
        }
    }

    Ok(RunOutcome {
        result: RunResult {
            meta: RunMeta {
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                run_at: chrono::Utc::now().to_rfc3339(),
                threshold: config.threshold,
                registry_pairs: index.pair_count(),
                registry_states: index.state_count(),
            },
            reports,
        },
        outputs,
        failures,
    })
}

/// Match and filter one dataset. Returns the annotated table (original
/// columns plus `state_norm`, `district_final`, `district_final_norm`,
/// `match_type`, `match_score`) and its report. The output may have fewer
/// rows than the input: garbage records are dropped, not relabeled.
pub fn annotate_dataset(
    name: &str,
    table: &Table,
    engine: &MatchEngine<'_>,
    policy: &GarbagePolicy,
    top_unmatched: usize,
) -> Result<(Table, DatasetReport), ReconError> {
    let state_idx = table.require_column(name, "state", STATE_COLUMNS)?;
    let district_idx = table.require_column(name, "district", DISTRICT_COLUMNS)?;

    let mut headers = table.headers.clone();
    headers.extend(
        ["state_norm", "district_final", "district_final_norm", "match_type", "match_score"]
            .map(String::from),
    );

    let mut rows = Vec::with_capacity(table.rows.len());
    let mut resolutions: Vec<Resolution> = Vec::with_capacity(table.rows.len());
    let mut garbage_dropped = 0;

    for row in &table.rows {
        let resolution = engine.resolve(&row[state_idx], &row[district_idx]);

        if policy.is_garbage(&resolution.district_final) {
            garbage_dropped += 1;
            continue;
        }

        let mut out = row.clone();
        out.push(resolution.state_norm.clone());
        out.push(resolution.district_final.clone());
        out.push(normalize(&resolution.district_final));
        out.push(resolution.match_type.to_string());
        out.push(resolution.match_score.map(|s| s.to_string()).unwrap_or_default());
        rows.push(out);

        resolutions.push(resolution);
    }

    let mut issues = Vec::new();
    let unmatched = resolutions
        .iter()
        .filter(|r| r.match_type == MatchType::Unmatched)
        .count();
    if unmatched > 0 {
        issues.push(DataQualityIssue {
            file: name.to_string(),
            kind: IssueKind::UnmatchedDistrict,
            rows: unmatched,
        });
    }
    if garbage_dropped > 0 {
        issues.push(DataQualityIssue {
            file: name.to_string(),
            kind: IssueKind::GarbageDistrict,
            rows: garbage_dropped,
        });
    }

    let report = summarize(name, &resolutions, garbage_dropped, issues, top_unmatched);
    Ok((Table { headers, rows }, report))
}
