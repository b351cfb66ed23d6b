//! Pipeline orchestration: standardize the three streams, aggregate
//! monthly, merge, derive risk, and build the dashboard table.

use janpad_recon::model::DataQualityIssue;
use janpad_recon::table::Table;
use janpad_recon::RegistryIndex;

use crate::aggregate::aggregate_monthly;
use crate::dashboard::build_dashboard;
use crate::error::PipelineError;
use crate::merge::merge_streams;
use crate::model::{MergedRow, RiskRow, Stream};
use crate::risk::compute_risk;
use crate::standardize::extract_records;

/// Pre-loaded pipeline input. All file reads happen before processing.
pub struct PipelineInput {
    /// Raw (state, district) registry pairs.
    pub registry: Vec<(String, String)>,
    pub enrolment: Table,
    pub demographic: Table,
    pub biometric: Table,
}

/// Whole-pipeline output: merged monthly rows, risk rows, the wide
/// dashboard table, and every data-quality issue seen along the way.
pub struct PipelineOutcome {
    pub merged: Vec<MergedRow>,
    pub risk: Vec<RiskRow>,
    pub dashboard: Table,
    pub issues: Vec<DataQualityIssue>,
}

pub fn run(input: PipelineInput) -> Result<PipelineOutcome, PipelineError> {
    let index = RegistryIndex::build(input.registry)?;

    let (enrol, mut issues) =
        extract_records(Stream::Enrolment, "enrolment", &input.enrolment)?;
    let (demo, demo_issues) =
        extract_records(Stream::Demographic, "demographic", &input.demographic)?;
    let (bio, bio_issues) =
        extract_records(Stream::Biometric, "biometric", &input.biometric)?;
    issues.extend(demo_issues);
    issues.extend(bio_issues);

    let merged = merge_streams(
        &aggregate_monthly(&enrol),
        &aggregate_monthly(&demo),
        &aggregate_monthly(&bio),
    );
    let (risk, risk_issues) = compute_risk("merged", &merged);
    issues.extend(risk_issues);

    let dashboard = build_dashboard(&index, &enrol, &demo, &bio);

    Ok(PipelineOutcome { merged, risk, dashboard, issues })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(csv: &str) -> Table {
        Table::from_csv_str(csv).unwrap()
    }

    fn registry() -> Vec<(String, String)> {
        vec![("Gujarat".to_string(), "Surat".to_string())]
    }

    #[test]
    fn end_to_end_merge_risk_dashboard() {
        let input = PipelineInput {
            registry: registry(),
            enrolment: table(
                "date,state,district_final,age_0_5,age_5_17,age_18_greater\n\
                 2025-01-05,GUJARAT,SURAT,10,20,70\n",
            ),
            demographic: table(
                "date,state,district_final,age_5_17_update,age_18_update\n\
                 2025-01-09,GUJARAT,SURAT,30,25\n",
            ),
            biometric: table(
                "date,state,district_final,age_5_17_bio,age_18_bio\n\
                 2025-01-12,GUJARAT,SURAT,4,1\n",
            ),
        };
        let outcome = run(input).unwrap();

        assert_eq!(outcome.merged.len(), 1);
        let m = &outcome.merged[0];
        assert_eq!((m.enrol_total, m.demo_updates, m.bio_updates), (100.0, 55.0, 5.0));

        let r = &outcome.risk[0];
        assert!((r.update_pressure - 0.6).abs() < 1e-9);
        assert!(r.risk_flag);

        assert_eq!(outcome.dashboard.rows.len(), 1);
        assert_eq!(outcome.dashboard.rows[0][0], "GUJARAT");
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn missing_schema_fails_the_run() {
        let input = PipelineInput {
            registry: registry(),
            enrolment: table("state,age_0_5\nGUJARAT,1\n"),
            demographic: table("date,state,district_final\n2025-01-01,GUJARAT,SURAT\n"),
            biometric: table("date,state,district_final\n2025-01-01,GUJARAT,SURAT\n"),
        };
        assert!(run(input).is_err());
    }

    #[test]
    fn issues_accumulate_across_streams() {
        let input = PipelineInput {
            registry: registry(),
            enrolment: table(
                "date,state,district_final,age_0_5\n\
                 bogus,GUJARAT,SURAT,1\n\
                 2025-01-05,GUJARAT,SURAT,ten\n",
            ),
            demographic: table(
                "date,state,district_final,age_5_17_update\n2025-01-05,GUJARAT,SURAT,5\n",
            ),
            biometric: table(
                "date,state,district_final,age_5_17_bio\n2025-02-01,GUJARAT,SURAT,\n",
            ),
        };
        let outcome = run(input).unwrap();
        // One unparsable date, one non-numeric metric, and the resulting
        // zero-enrolment month with updates against it. The empty bio cell
        // is a legitimate zero, not an issue.
        assert_eq!(outcome.issues.len(), 3);
    }
}
