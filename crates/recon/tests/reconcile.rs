use std::path::PathBuf;

use janpad_recon::engine::{run, RunInput};
use janpad_recon::model::MatchType;
use janpad_recon::table::{load_registry_csv, Table};
use janpad_recon::RunConfig;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_outcome() -> janpad_recon::engine::RunOutcome {
    let dir = fixtures_dir();
    let config_toml = std::fs::read_to_string(dir.join("run.toml")).unwrap();
    let config = RunConfig::from_toml(&config_toml).unwrap();

    let registry = load_registry_csv(&dir.join(&config.registry)).unwrap();

    let mut datasets = Vec::new();
    for (name, file) in &config.datasets {
        let table = Table::from_csv_path(&dir.join(file)).unwrap();
        datasets.push((name.clone(), table));
    }

    run(&config, RunInput { registry, datasets }).unwrap()
}

#[test]
fn full_run_reports() {
    let outcome = load_outcome();
    assert!(outcome.failures.is_empty());
    assert_eq!(outcome.result.meta.registry_pairs, 13);
    assert_eq!(outcome.result.meta.registry_states, 6);

    // Datasets are keyed in config order (BTreeMap: biometric, enrolment).
    let bio = &outcome.result.reports[0];
    assert_eq!(bio.dataset, "biometric");
    assert_eq!(bio.total, 3);
    assert_eq!(bio.exact, 2);
    assert_eq!(bio.fuzzy, 1);
    assert_eq!(bio.unmatched, 0);
    assert_eq!(bio.garbage_dropped, 1);
    assert!((bio.success_rate - 1.0).abs() < 1e-9);

    let enrol = &outcome.result.reports[1];
    assert_eq!(enrol.dataset, "enrolment");
    assert_eq!(enrol.total, 10);
    assert_eq!(enrol.exact, 4);
    assert_eq!(enrol.renamed, 4);
    assert_eq!(enrol.fuzzy, 1);
    assert_eq!(enrol.unmatched, 1);
    assert_eq!(enrol.garbage_dropped, 2);
    assert!((enrol.success_rate - 0.9).abs() < 1e-9);
}

#[test]
fn annotated_output_contract() {
    let outcome = load_outcome();
    let (_, enrol) = outcome
        .outputs
        .iter()
        .find(|(name, _)| name == "enrolment")
        .unwrap();

    // Original columns first, then the five annotation columns.
    assert_eq!(
        &enrol.headers[6..],
        &[
            "state_norm".to_string(),
            "district_final".to_string(),
            "district_final_norm".to_string(),
            "match_type".to_string(),
            "match_score".to_string(),
        ]
    );

    let csv = enrol.to_csv_string().unwrap();
    // Garbage rows are gone from the output stream entirely.
    assert!(!csv.contains("100000"));
    assert_eq!(enrol.rows.len(), 10);

    // Historical renames resolve to canonical names under the right state.
    let allahabad = enrol.rows.iter().find(|r| r[2] == "Allahabad").unwrap();
    assert_eq!(allahabad[7], "PRAYAGRAJ");
    assert_eq!(allahabad[9], "renamed");
    assert_eq!(allahabad[10], "100");

    // State alias remap happened before district lookup.
    let cuttack = enrol.rows.iter().find(|r| r[1] == "ORISSA").unwrap();
    assert_eq!(cuttack[6], "ODISHA");
    assert_eq!(cuttack[9], "exact");
}

#[test]
fn unmatched_rows_stay_diagnosable() {
    let outcome = load_outcome();
    let (_, enrol) = outcome
        .outputs
        .iter()
        .find(|(name, _)| name == "enrolment")
        .unwrap();

    let gangtok = enrol.rows.iter().find(|r| r[2] == "Gangtok").unwrap();
    assert_eq!(gangtok[9], "unmatched");
    assert_eq!(gangtok[10], ""); // no candidates for the state, no score

    let report = outcome
        .result
        .reports
        .iter()
        .find(|r| r.dataset == "enrolment")
        .unwrap();
    assert_eq!(report.top_unmatched.len(), 1);
    assert_eq!(report.top_unmatched[0].district, "GANGTOK");
    assert_eq!(report.state_unmatched[0].state, "SIKKIM");
}

#[test]
fn registry_matches_itself_exactly() {
    let dir = fixtures_dir();
    let registry = load_registry_csv(&dir.join("districts.csv")).unwrap();
    let index = janpad_recon::RegistryIndex::build(registry.clone()).unwrap();
    let aliases = janpad_recon::AliasTable::builtin();
    let engine = janpad_recon::MatchEngine::new(&index, &aliases, 90);

    for (state, district) in &registry {
        let r = engine.resolve(state, district);
        assert_eq!(
            r.match_type,
            MatchType::Exact,
            "registry entry ({state}, {district}) must match itself"
        );
    }
}
