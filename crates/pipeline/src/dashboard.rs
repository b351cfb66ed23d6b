//! Dashboard data build: official districts only, one wide table.

use std::collections::BTreeMap;

use janpad_recon::normalize::normalize;
use janpad_recon::table::Table;
use janpad_recon::RegistryIndex;

use crate::merge::format_metric;
use crate::model::StreamRecord;

#[derive(Debug, Default, Clone)]
struct Bands {
    enrol_0_5: f64,
    enrol_5_17: f64,
    enrol_18_plus: f64,
    bio_5_17: f64,
    bio_18_plus: f64,
    demo_5_17: f64,
    demo_18_plus: f64,
}

/// Build the wide per-district dashboard table: keep only rows whose
/// (state, district) key is an official registry pair, sum each stream's
/// bands per district across months, outer-merge the streams, zero-fill,
/// and sort by state then district.
pub fn build_dashboard(
    index: &RegistryIndex,
    enrolment: &[StreamRecord],
    demographic: &[StreamRecord],
    biometric: &[StreamRecord],
) -> Table {
    let mut districts: BTreeMap<(String, String), Bands> = BTreeMap::new();

    let mut fold = |records: &[StreamRecord], apply: fn(&mut Bands, &StreamRecord)| {
        for r in records {
            let state = normalize(&r.state);
            let district = normalize(&r.district);
            if !index.contains_pair(&state, &district) {
                continue;
            }
            let bands = districts.entry((state, district)).or_default();
            apply(bands, r);
        }
    };

    fold(enrolment, |b, r| {
        b.enrol_0_5 += r.child_0_5;
        b.enrol_5_17 += r.child_5_17;
        b.enrol_18_plus += r.adult_18_plus;
    });
    fold(demographic, |b, r| {
        b.demo_5_17 += r.child_5_17;
        b.demo_18_plus += r.adult_18_plus;
    });
    fold(biometric, |b, r| {
        b.bio_5_17 += r.child_5_17;
        b.bio_18_plus += r.adult_18_plus;
    });

    Table {
        headers: vec![
            "state".into(),
            "district".into(),
            "enrol_0_5".into(),
            "enrol_5_17".into(),
            "enrol_18_plus".into(),
            "bio_5_17".into(),
            "bio_18_plus".into(),
            "demo_5_17".into(),
            "demo_18_plus".into(),
        ],
        rows: districts
            .into_iter()
            .map(|((state, district), b)| {
                vec![
                    state,
                    district,
                    format_metric(b.enrol_0_5),
                    format_metric(b.enrol_5_17),
                    format_metric(b.enrol_18_plus),
                    format_metric(b.bio_5_17),
                    format_metric(b.bio_18_plus),
                    format_metric(b.demo_5_17),
                    format_metric(b.demo_18_plus),
                ]
            })
            .collect(),
    }
}
