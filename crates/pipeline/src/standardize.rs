//! Metric-column standardization for the three extract streams.
//!
//! Source files disagree on age-band header names; each logical band has a
//! fixed priority list of accepted aliases, resolved once per file. A band
//! with no matching column contributes zero, not an error.

use janpad_recon::model::{DataQualityIssue, IssueKind};
use janpad_recon::table::{Table, DISTRICT_COLUMNS, STATE_COLUMNS};

use crate::error::PipelineError;
use crate::model::{Stream, StreamRecord};

/// Accepted 0-5 band headers, in priority order.
const AGE_0_5_COLUMNS: &[&str] = &["age_0_5", "age_0_4"];

/// Accepted 5-17 band headers, in priority order.
const AGE_5_17_COLUMNS: &[&str] = &[
    "age_5_17",
    "age_5_17_years",
    "age_5_17_update",
    "age_5_17_bio",
];

/// Accepted 18+ band headers, in priority order.
const AGE_18_COLUMNS: &[&str] = &[
    "age_18_greater",
    "age_18_plus",
    "age_18_update",
    "age_18_bio",
];

/// District headers for reconciled tables: prefer the resolved name, fall
/// back to the raw-extract aliases.
const FINAL_DISTRICT_COLUMNS: &[&str] = &[
    "district_final",
    "district",
    "District",
    "DISTRICT",
    "district_name",
    "District Name",
];

/// Extract standardized records from a reconciled table.
///
/// State and district columns are required schema; month comes from a
/// `month` column when present, else the first 7 chars of `date`
/// (`YYYY-MM`). Rows with no usable month are skipped and counted as
/// data-quality issues, as are non-numeric metric cells (which read as
/// zero).
pub fn extract_records(
    stream: Stream,
    file: &str,
    table: &Table,
) -> Result<(Vec<StreamRecord>, Vec<DataQualityIssue>), PipelineError> {
    let state_idx = table.require_column(file, "state", STATE_COLUMNS)?;
    let district_idx = table.require_column(file, "district", FINAL_DISTRICT_COLUMNS)?;

    let month_idx = table.find_column(&["month"]);
    let date_idx = table.find_column(&["date", "Date", "DATE"]);

    let age_0_5_idx = match stream {
        Stream::Enrolment => table.find_column(AGE_0_5_COLUMNS),
        // Update streams have no 0-5 band.
        Stream::Demographic | Stream::Biometric => None,
    };
    let age_5_17_idx = table.find_column(AGE_5_17_COLUMNS);
    let age_18_idx = table.find_column(AGE_18_COLUMNS);

    let mut records = Vec::with_capacity(table.rows.len());
    let mut bad_dates = 0;
    let mut bad_metrics = 0;

    for row in &table.rows {
        let Some(month) = month_for(row, month_idx, date_idx) else {
            bad_dates += 1;
            continue;
        };

        let mut cell = |idx: Option<usize>| -> f64 {
            match idx {
                Some(i) => match parse_metric(&row[i]) {
                    Ok(v) => v,
                    Err(()) => {
                        bad_metrics += 1;
                        0.0
                    }
                },
                None => 0.0,
            }
        };

        let child_0_5 = cell(age_0_5_idx);
        let child_5_17 = cell(age_5_17_idx);
        let adult_18_plus = cell(age_18_idx);

        records.push(StreamRecord {
            state: row[state_idx].clone(),
            district: row[district_idx].clone(),
            month,
            child_0_5,
            child_5_17,
            adult_18_plus,
        });
    }

    let mut issues = Vec::new();
    if bad_dates > 0 {
        issues.push(DataQualityIssue {
            file: file.to_string(),
            kind: IssueKind::UnparsableDate,
            rows: bad_dates,
        });
    }
    if bad_metrics > 0 {
        issues.push(DataQualityIssue {
            file: file.to_string(),
            kind: IssueKind::NonNumericMetric,
            rows: bad_metrics,
        });
    }

    Ok((records, issues))
}

/// Month key for a row: explicit `month` column wins, else `date[..7]`.
fn month_for(row: &[String], month_idx: Option<usize>, date_idx: Option<usize>) -> Option<String> {
    if let Some(i) = month_idx {
        let m = row[i].trim();
        if !m.is_empty() {
            return Some(m.to_string());
        }
    }
    let date = row[date_idx?].trim();
    if date.len() >= 7 && date.is_char_boundary(7) {
        let month = &date[..7];
        // YYYY-MM shape check, nothing stricter.
        if month.as_bytes()[4] == b'-' && month[..4].bytes().all(|b| b.is_ascii_digit()) {
            return Some(month.to_string());
        }
    }
    None
}

/// Empty cells read as zero (absent band); anything else must be numeric.
fn parse_metric(cell: &str) -> Result<f64, ()> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(0.0);
    }
    cell.parse::<f64>().map_err(|_| ())
}
