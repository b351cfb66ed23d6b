//! Monthly aggregation at the (state, district, month) grain.

use std::collections::BTreeMap;

use crate::model::{MonthlyAggregate, StreamRecord};

/// Sum band counts per (state, district, month). Keys are taken verbatim:
/// callers feed reconciled tables, where state and district are already
/// canonical.
pub fn aggregate_monthly(records: &[StreamRecord]) -> Vec<MonthlyAggregate> {
    let mut groups: BTreeMap<(String, String, String), (f64, f64, f64)> = BTreeMap::new();

    for r in records {
        let key = (r.state.clone(), r.district.clone(), r.month.clone());
        let entry = groups.entry(key).or_insert((0.0, 0.0, 0.0));
        entry.0 += r.child_0_5;
        entry.1 += r.child_5_17;
        entry.2 += r.adult_18_plus;
    }

    groups
        .into_iter()
        .map(|((state, district, month), (child_0_5, child_5_17, adult_18_plus))| {
            MonthlyAggregate { state, district, month, child_0_5, child_5_17, adult_18_plus }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stream;

    fn rec(state: &str, district: &str, month: &str, bands: (f64, f64, f64)) -> StreamRecord {
        StreamRecord {
            state: state.into(),
            district: district.into(),
            month: month.into(),
            child_0_5: bands.0,
            child_5_17: bands.1,
            adult_18_plus: bands.2,
        }
    }

    #[test]
    fn sums_within_group() {
        let records = vec![
            rec("GUJARAT", "SURAT", "2025-01", (1.0, 2.0, 3.0)),
            rec("GUJARAT", "SURAT", "2025-01", (10.0, 20.0, 30.0)),
            rec("GUJARAT", "SURAT", "2025-02", (5.0, 5.0, 5.0)),
        ];
        let aggs = aggregate_monthly(&records);
        assert_eq!(aggs.len(), 2);
        assert_eq!(aggs[0].month, "2025-01");
        assert_eq!(aggs[0].child_0_5, 11.0);
        assert_eq!(aggs[0].child_5_17, 22.0);
        assert_eq!(aggs[0].adult_18_plus, 33.0);
        assert_eq!(aggs[1].month, "2025-02");
    }

    #[test]
    fn grain_separates_state_district_month() {
        let records = vec![
            rec("GUJARAT", "SURAT", "2025-01", (1.0, 0.0, 0.0)),
            rec("GUJARAT", "RAJKOT", "2025-01", (1.0, 0.0, 0.0)),
            rec("KERALA", "SURAT", "2025-01", (1.0, 0.0, 0.0)),
        ];
        let aggs = aggregate_monthly(&records);
        assert_eq!(aggs.len(), 3);
    }

    #[test]
    fn ordering_is_deterministic() {
        let records = vec![
            rec("KERALA", "KOLLAM", "2025-01", (0.0, 1.0, 1.0)),
            rec("GUJARAT", "SURAT", "2025-01", (0.0, 1.0, 1.0)),
        ];
        let aggs = aggregate_monthly(&records);
        assert_eq!(aggs[0].state, "GUJARAT");
        assert_eq!(aggs[1].state, "KERALA");
    }

    #[test]
    fn stream_totals() {
        let agg = MonthlyAggregate {
            state: "X".into(),
            district: "Y".into(),
            month: "2025-01".into(),
            child_0_5: 1.0,
            child_5_17: 2.0,
            adult_18_plus: 4.0,
        };
        assert_eq!(agg.stream_total(Stream::Enrolment), 7.0);
        assert_eq!(agg.stream_total(Stream::Demographic), 6.0);
        assert_eq!(agg.stream_total(Stream::Biometric), 6.0);
    }
}
