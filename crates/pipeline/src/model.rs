use serde::Serialize;

/// The three UIDAI extract streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stream {
    Enrolment,
    Demographic,
    Biometric,
}

impl Stream {
    /// Column name for this stream's total in merged outputs.
    pub fn total_column(&self) -> &'static str {
        match self {
            Self::Enrolment => "enrol_total",
            Self::Demographic => "demo_updates",
            Self::Biometric => "bio_updates",
        }
    }
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enrolment => write!(f, "enrolment"),
            Self::Demographic => write!(f, "demographic"),
            Self::Biometric => write!(f, "biometric"),
        }
    }
}

/// One standardized row: unified age bands regardless of the source file's
/// header variants. Enrolment populates all three bands; update streams
/// have no 0-5 band and leave it zero.
#[derive(Debug, Clone, Serialize)]
pub struct StreamRecord {
    pub state: String,
    pub district: String,
    pub month: String,
    pub child_0_5: f64,
    pub child_5_17: f64,
    pub adult_18_plus: f64,
}

/// Band sums at the (state, district, month) grain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyAggregate {
    pub state: String,
    pub district: String,
    pub month: String,
    pub child_0_5: f64,
    pub child_5_17: f64,
    pub adult_18_plus: f64,
}

impl MonthlyAggregate {
    /// Stream total for this row: enrolment counts every band, update
    /// streams only 5-17 and 18+.
    pub fn stream_total(&self, stream: Stream) -> f64 {
        match stream {
            Stream::Enrolment => self.child_0_5 + self.child_5_17 + self.adult_18_plus,
            Stream::Demographic | Stream::Biometric => self.child_5_17 + self.adult_18_plus,
        }
    }
}

/// Outer join of the three streams on (state, district, month),
/// zero-filled where a stream has no data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRow {
    pub state: String,
    pub district: String,
    pub month: String,
    pub enrol_total: f64,
    pub demo_updates: f64,
    pub bio_updates: f64,
}

/// A merged row plus its risk derivation.
#[derive(Debug, Clone, Serialize)]
pub struct RiskRow {
    pub state: String,
    pub district: String,
    pub month: String,
    pub enrol_total: f64,
    pub demo_updates: f64,
    pub bio_updates: f64,
    pub update_pressure: f64,
    pub risk_flag: bool,
}
