use std::collections::BTreeMap;

use serde::Deserialize;

use crate::aliases::AliasTable;
use crate::error::ReconError;
use crate::garbage::GarbagePolicy;
use crate::matcher::DEFAULT_THRESHOLD;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// One reconciliation run: a registry, one or more input datasets, and the
/// knobs for matching, garbage filtering, and reporting.
#[derive(Debug, Deserialize)]
pub struct RunConfig {
    /// Official registry CSV (`state`,`district`).
    pub registry: String,
    /// Dataset name -> input CSV path. Names key the output files.
    pub datasets: BTreeMap<String, String>,
    /// Directory for annotated outputs and report artifacts.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Fuzzy acceptance threshold on the 0..=100 scale.
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    /// How many unmatched names the triage table keeps.
    #[serde(default = "default_top_unmatched")]
    pub top_unmatched: usize,
    #[serde(default)]
    pub aliases: AliasConfig,
    #[serde(default)]
    pub garbage: GarbageConfig,
}

fn default_output_dir() -> String {
    "outputs".into()
}

fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}

fn default_top_unmatched() -> usize {
    10
}

// ---------------------------------------------------------------------------
// Aliases + garbage sections
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct AliasConfig {
    /// Start from the built-in Indian rename knowledge base.
    #[serde(default = "default_true")]
    pub builtin: bool,
    /// Extra state aliases, historical -> canonical.
    #[serde(default)]
    pub states: BTreeMap<String, String>,
    /// Extra district aliases, historical -> canonical.
    #[serde(default)]
    pub districts: BTreeMap<String, String>,
}

fn default_true() -> bool {
    true
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            states: BTreeMap::new(),
            districts: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GarbageConfig {
    #[serde(default)]
    pub extra_literals: Vec<String>,
    #[serde(default)]
    pub extra_patterns: Vec<String>,
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl RunConfig {
    pub fn from_toml(input: &str) -> Result<Self, ReconError> {
        let config: RunConfig =
            toml::from_str(input).map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReconError> {
        if self.registry.trim().is_empty() {
            return Err(ReconError::ConfigValidation("registry path is empty".into()));
        }
        if self.datasets.is_empty() {
            return Err(ReconError::ConfigValidation(
                "at least one dataset is required".into(),
            ));
        }
        for (name, path) in &self.datasets {
            if path.trim().is_empty() {
                return Err(ReconError::ConfigValidation(format!(
                    "dataset '{name}' has an empty path"
                )));
            }
        }
        if self.threshold > 100 {
            return Err(ReconError::ConfigValidation(format!(
                "threshold must be in 0..=100, got {}",
                self.threshold
            )));
        }
        if self.top_unmatched == 0 {
            return Err(ReconError::ConfigValidation(
                "top_unmatched must be at least 1".into(),
            ));
        }
        // Surface bad regexes at validation time, not mid-run.
        self.garbage_policy()?;
        Ok(())
    }

    /// Alias table for this run: built-in base (unless disabled) plus the
    /// config's extra entries, which win on conflict.
    pub fn alias_table(&self) -> AliasTable {
        let mut table = if self.aliases.builtin {
            AliasTable::builtin()
        } else {
            AliasTable::empty()
        };
        table.extend_states(self.aliases.states.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        table.extend_districts(
            self.aliases.districts.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        );
        table
    }

    pub fn garbage_policy(&self) -> Result<GarbagePolicy, ReconError> {
        let mut policy = GarbagePolicy::default();
        policy.extend_literals(self.garbage.extra_literals.iter().map(String::as_str));
        policy.extend_patterns(self.garbage.extra_patterns.iter().map(String::as_str))?;
        Ok(policy)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
