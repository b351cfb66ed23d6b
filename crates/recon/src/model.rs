use serde::Serialize;

// ---------------------------------------------------------------------------
// Match outcome
// ---------------------------------------------------------------------------

/// Provenance tag explaining how a record's district was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Renamed,
    Fuzzy,
    Unmatched,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Renamed => write!(f, "renamed"),
            Self::Fuzzy => write!(f, "fuzzy"),
            Self::Unmatched => write!(f, "unmatched"),
        }
    }
}

/// Outcome of resolving one (state, district) pair.
///
/// `district_final` carries official registry casing when resolved, and the
/// best-effort cleaned input when unmatched. `match_score` is absent for
/// exact matches and for unmatched records whose state had no candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub state_norm: String,
    pub district_final: String,
    pub match_type: MatchType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
}

// ---------------------------------------------------------------------------
// Data quality issues
// ---------------------------------------------------------------------------

/// Non-fatal quality findings: recorded, never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    UnmatchedDistrict,
    GarbageDistrict,
    NonNumericMetric,
    UnparsableDate,
    ZeroEnrolment,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedDistrict => write!(f, "unmatched_district"),
            Self::GarbageDistrict => write!(f, "garbage_district"),
            Self::NonNumericMetric => write!(f, "non_numeric_metric"),
            Self::UnparsableDate => write!(f, "unparsable_date"),
            Self::ZeroEnrolment => write!(f, "zero_enrolment"),
        }
    }
}

/// One structured audit finding: which file, what kind, how many rows.
#[derive(Debug, Clone, Serialize)]
pub struct DataQualityIssue {
    pub file: String,
    pub kind: IssueKind,
    pub rows: usize,
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct UnmatchedEntry {
    pub district: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StateUnmatched {
    pub state: String,
    pub count: usize,
}

/// Per-dataset reconciliation summary for data-quality auditing.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub dataset: String,
    pub total: usize,
    pub exact: usize,
    pub renamed: usize,
    pub fuzzy: usize,
    pub unmatched: usize,
    pub garbage_dropped: usize,
    /// (total - unmatched) / total, over records that survived the garbage
    /// filter. 1.0 for an empty dataset.
    pub success_rate: f64,
    pub top_unmatched: Vec<UnmatchedEntry>,
    pub state_unmatched: Vec<StateUnmatched>,
    pub issues: Vec<DataQualityIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunMeta {
    pub engine_version: String,
    pub run_at: String,
    pub threshold: u8,
    pub registry_pairs: usize,
    pub registry_states: usize,
}

/// Whole-run output: one report per dataset plus run metadata.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub meta: RunMeta,
    pub reports: Vec<DatasetReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_type_display_matches_serde() {
        for (mt, s) in [
            (MatchType::Exact, "exact"),
            (MatchType::Renamed, "renamed"),
            (MatchType::Fuzzy, "fuzzy"),
            (MatchType::Unmatched, "unmatched"),
        ] {
            assert_eq!(mt.to_string(), s);
            assert_eq!(serde_json::to_string(&mt).unwrap(), format!("\"{s}\""));
        }
    }

    #[test]
    fn score_omitted_when_absent() {
        let r = Resolution {
            state_norm: "GUJARAT".into(),
            district_final: "AHMEDABAD".into(),
            match_type: MatchType::Exact,
            match_score: None,
        };
        let json = serde_json::to_string(&r).unwrap();
        assert!(!json.contains("match_score"));
    }
}
