//! `janpad-recon` — State-scoped district name reconciliation engine.
//!
//! Maps noisy, inconsistently spelled, or historically renamed district
//! names onto an official registry, one state at a time. Pure engine crate
//! plus the narrow CSV/TOML boundary it feeds from.

pub mod aliases;
pub mod config;
pub mod engine;
pub mod error;
pub mod garbage;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod registry;
pub mod report;
pub mod table;

pub use aliases::AliasTable;
pub use config::RunConfig;
pub use engine::run;
pub use error::ReconError;
pub use garbage::GarbagePolicy;
pub use matcher::MatchEngine;
pub use model::{MatchType, Resolution, RunResult};
pub use registry::RegistryIndex;
