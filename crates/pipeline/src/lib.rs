//! `janpad-pipeline` — Downstream collaborators of the reconciliation
//! engine: per-stream metric standardization, monthly aggregation, stream
//! merging, update-pressure risk flagging, and the dashboard data build.
//!
//! Everything here consumes reconciled tables (with `district_final`
//! columns) and does simple arithmetic; the hard matching work already
//! happened in `janpad-recon`.

pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod merge;
pub mod model;
pub mod risk;
pub mod run;
pub mod standardize;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use model::{MergedRow, MonthlyAggregate, RiskRow, Stream, StreamRecord};
pub use run::{run, PipelineInput, PipelineOutcome};
