//! Per-dataset reconciliation summaries for data-quality auditing.

use std::collections::HashMap;

use crate::model::{
    DataQualityIssue, DatasetReport, MatchType, Resolution, StateUnmatched, UnmatchedEntry,
};
use crate::table::Table;

/// Aggregate match outcomes into an audit report. Pure; `resolutions` are
/// the records that survived the garbage filter.
pub fn summarize(
    dataset: &str,
    resolutions: &[Resolution],
    garbage_dropped: usize,
    issues: Vec<DataQualityIssue>,
    top_n: usize,
) -> DatasetReport {
    let mut exact = 0;
    let mut renamed = 0;
    let mut fuzzy = 0;
    let mut unmatched = 0;

    let mut unmatched_names: HashMap<&str, usize> = HashMap::new();
    let mut unmatched_states: HashMap<&str, usize> = HashMap::new();

    for r in resolutions {
        match r.match_type {
            MatchType::Exact => exact += 1,
            MatchType::Renamed => renamed += 1,
            MatchType::Fuzzy => fuzzy += 1,
            MatchType::Unmatched => {
                unmatched += 1;
                *unmatched_names.entry(r.district_final.as_str()).or_insert(0) += 1;
                *unmatched_states.entry(r.state_norm.as_str()).or_insert(0) += 1;
            }
        }
    }

    let total = resolutions.len();
    let success_rate = if total == 0 {
        1.0
    } else {
        (total - unmatched) as f64 / total as f64
    };

    let mut top_unmatched: Vec<UnmatchedEntry> = unmatched_names
        .into_iter()
        .map(|(district, count)| UnmatchedEntry { district: district.to_string(), count })
        .collect();
    top_unmatched.sort_by(|a, b| b.count.cmp(&a.count).then(a.district.cmp(&b.district)));
    top_unmatched.truncate(top_n);

    let mut state_unmatched: Vec<StateUnmatched> = unmatched_states
        .into_iter()
        .map(|(state, count)| StateUnmatched { state: state.to_string(), count })
        .collect();
    state_unmatched.sort_by(|a, b| b.count.cmp(&a.count).then(a.state.cmp(&b.state)));

    DatasetReport {
        dataset: dataset.to_string(),
        total,
        exact,
        renamed,
        fuzzy,
        unmatched,
        garbage_dropped,
        success_rate,
        top_unmatched,
        state_unmatched,
        issues,
    }
}

/// Match-type counts as a two-column CSV artifact.
pub fn match_type_counts_table(report: &DatasetReport) -> Table {
    Table {
        headers: vec!["match_type".into(), "count".into()],
        rows: vec![
            vec!["exact".into(), report.exact.to_string()],
            vec!["renamed".into(), report.renamed.to_string()],
            vec!["fuzzy".into(), report.fuzzy.to_string()],
            vec!["unmatched".into(), report.unmatched.to_string()],
        ],
    }
}

/// Top unmatched district strings as a CSV artifact for manual triage.
pub fn top_unmatched_table(report: &DatasetReport) -> Table {
    Table {
        headers: vec!["district".into(), "count".into()],
        rows: report
            .top_unmatched
            .iter()
            .map(|e| vec![e.district.clone(), e.count.to_string()])
            .collect(),
    }
}

/// Per-state unmatched counts as a CSV artifact.
pub fn state_unmatched_table(report: &DatasetReport) -> Table {
    Table {
        headers: vec!["state".into(), "unmatched".into()],
        rows: report
            .state_unmatched
            .iter()
            .map(|e| vec![e.state.clone(), e.count.to_string()])
            .collect(),
    }
}
