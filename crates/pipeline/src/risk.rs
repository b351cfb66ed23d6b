//! Update-pressure risk derivation.

use janpad_recon::model::{DataQualityIssue, IssueKind};
use janpad_recon::table::Table;

use crate::merge::format_metric;
use crate::model::{MergedRow, RiskRow};

/// Pressure above this ratio flags a district-month for review.
pub const PRESSURE_THRESHOLD: f64 = 0.5;

/// Derive `update_pressure = (demo + bio) / enrol_total` and the risk
/// flag. Rows with zero enrolment get pressure 0 and are counted as a
/// data-quality issue rather than dividing by zero.
pub fn compute_risk(file: &str, merged: &[MergedRow]) -> (Vec<RiskRow>, Vec<DataQualityIssue>) {
    let mut rows = Vec::with_capacity(merged.len());
    let mut zero_enrolment = 0;

    for m in merged {
        let updates = m.demo_updates + m.bio_updates;
        let update_pressure = if m.enrol_total > 0.0 {
            updates / m.enrol_total
        } else {
            if updates > 0.0 {
                zero_enrolment += 1;
            }
            0.0
        };

        rows.push(RiskRow {
            state: m.state.clone(),
            district: m.district.clone(),
            month: m.month.clone(),
            enrol_total: m.enrol_total,
            demo_updates: m.demo_updates,
            bio_updates: m.bio_updates,
            update_pressure,
            risk_flag: update_pressure > PRESSURE_THRESHOLD,
        });
    }

    let mut issues = Vec::new();
    if zero_enrolment > 0 {
        issues.push(DataQualityIssue {
            file: file.to_string(),
            kind: IssueKind::ZeroEnrolment,
            rows: zero_enrolment,
        });
    }

    (rows, issues)
}

/// Risk rows as a CSV artifact.
pub fn risk_table(rows: &[RiskRow]) -> Table {
    Table {
        headers: vec![
            "state".into(),
            "district".into(),
            "month".into(),
            "enrol_total".into(),
            "demo_updates".into(),
            "bio_updates".into(),
            "update_pressure".into(),
            "risk_flag".into(),
        ],
        rows: rows
            .iter()
            .map(|r| {
                vec![
                    r.state.clone(),
                    r.district.clone(),
                    r.month.clone(),
                    format_metric(r.enrol_total),
                    format_metric(r.demo_updates),
                    format_metric(r.bio_updates),
                    format!("{:.4}", r.update_pressure),
                    r.risk_flag.to_string(),
                ]
            })
            .collect(),
    }
}
