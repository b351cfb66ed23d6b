//! Outer merge of the three monthly stream tables.

use std::collections::BTreeMap;

use janpad_recon::table::Table;

use crate::model::{MergedRow, MonthlyAggregate, Stream};

/// Full outer join on (state, district, month). A key present in any
/// stream yields a row; absent streams contribute zero.
pub fn merge_streams(
    enrolment: &[MonthlyAggregate],
    demographic: &[MonthlyAggregate],
    biometric: &[MonthlyAggregate],
) -> Vec<MergedRow> {
    let mut merged: BTreeMap<(String, String, String), MergedRow> = BTreeMap::new();

    let mut fold = |aggs: &[MonthlyAggregate], stream: Stream| {
        for agg in aggs {
            let key = (agg.state.clone(), agg.district.clone(), agg.month.clone());
            let row = merged.entry(key).or_insert_with(|| MergedRow {
                state: agg.state.clone(),
                district: agg.district.clone(),
                month: agg.month.clone(),
                enrol_total: 0.0,
                demo_updates: 0.0,
                bio_updates: 0.0,
            });
            let total = agg.stream_total(stream);
            match stream {
                Stream::Enrolment => row.enrol_total += total,
                Stream::Demographic => row.demo_updates += total,
                Stream::Biometric => row.bio_updates += total,
            }
        }
    };

    fold(enrolment, Stream::Enrolment);
    fold(demographic, Stream::Demographic);
    fold(biometric, Stream::Biometric);

    merged.into_values().collect()
}

/// Merged rows as a CSV artifact.
pub fn merged_table(rows: &[MergedRow]) -> Table {
    Table {
        headers: vec![
            "state".into(),
            "district".into(),
            "month".into(),
            "enrol_total".into(),
            "demo_updates".into(),
            "bio_updates".into(),
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
                ]
            })
            .collect(),
    }
}

/// Whole-valued metrics print without a trailing `.0`.
pub(crate) fn format_metric(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agg(state: &str, district: &str, month: &str, bands: (f64, f64, f64)) -> MonthlyAggregate {
        MonthlyAggregate {
            state: state.into(),
            district: district.into(),
            month: month.into(),
            child_0_5: bands.0,
            child_5_17: bands.1,
            adult_18_plus: bands.2,
        }
    }

    #[test]
    fn outer_join_zero_fills() {
        let enrol = vec![agg("GUJARAT", "SURAT", "2025-01", (10.0, 20.0, 30.0))];
        let demo = vec![agg("GUJARAT", "RAJKOT", "2025-01", (0.0, 5.0, 5.0))];
        let bio = vec![agg("GUJARAT", "SURAT", "2025-01", (0.0, 2.0, 3.0))];

        let merged = merge_streams(&enrol, &demo, &bio);
        assert_eq!(merged.len(), 2);

        let rajkot = &merged[0];
        assert_eq!(rajkot.district, "RAJKOT");
        assert_eq!(rajkot.enrol_total, 0.0);
        assert_eq!(rajkot.demo_updates, 10.0);
        assert_eq!(rajkot.bio_updates, 0.0);

        let surat = &merged[1];
        assert_eq!(surat.enrol_total, 60.0);
        assert_eq!(surat.demo_updates, 0.0);
        assert_eq!(surat.bio_updates, 5.0);
    }

    #[test]
    fn csv_artifact_shape() {
        let merged = vec![MergedRow {
            state: "GUJARAT".into(),
            district: "SURAT".into(),
            month: "2025-01".into(),
            enrol_total: 60.0,
            demo_updates: 0.0,
            bio_updates: 5.5,
        }];
        let table = merged_table(&merged);
        assert_eq!(table.rows[0], vec!["GUJARAT", "SURAT", "2025-01", "60", "0", "5.5"]);
    }
}
