use serde::Deserialize;

use janpad_recon::ReconError;

use crate::error::PipelineError;

/// One pipeline run: the official registry plus the three reconciled
/// stream tables, and where the artifacts go.
#[derive(Debug, Deserialize)]
pub struct PipelineConfig {
    /// Official registry CSV (`state`,`district`).
    pub registry: String,
    pub streams: StreamsConfig,
    /// Directory for merged/risk/dashboard artifacts.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

/// Reconciled per-stream CSV paths. All three streams are required; the
/// merge is an outer join, so a stream with no overlap still contributes
/// its own rows.
#[derive(Debug, Deserialize)]
pub struct StreamsConfig {
    pub enrolment: String,
    pub demographic: String,
    pub biometric: String,
}

fn default_output_dir() -> String {
    "outputs".into()
}

impl PipelineConfig {
    pub fn from_toml(input: &str) -> Result<Self, PipelineError> {
        let config: PipelineConfig = toml::from_str(input)
            .map_err(|e| ReconError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.registry.trim().is_empty() {
            return Err(ReconError::ConfigValidation("registry path is empty".into()).into());
        }
        for (stream, path) in [
            ("enrolment", &self.streams.enrolment),
            ("demographic", &self.streams.demographic),
            ("biometric", &self.streams.biometric),
        ] {
            if path.trim().is_empty() {
                return Err(ReconError::ConfigValidation(format!(
                    "stream '{stream}' has an empty path"
                ))
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_with_defaults() {
        let config = PipelineConfig::from_toml(
            r#"
registry = "districts.csv"
[streams]
enrolment = "outputs/enrolment.csv"
demographic = "outputs/demographic.csv"
biometric = "outputs/biometric.csv"
"#,
        )
        .unwrap();
        assert_eq!(config.output_dir, "outputs");
        assert_eq!(config.streams.biometric, "outputs/biometric.csv");
    }

    #[test]
    fn reject_missing_stream() {
        let err = PipelineConfig::from_toml(
            r#"
registry = "districts.csv"
[streams]
enrolment = "e.csv"
demographic = "d.csv"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("biometric"));
    }

    #[test]
    fn reject_empty_stream_path() {
        let err = PipelineConfig::from_toml(
            r#"
registry = "districts.csv"
[streams]
enrolment = "e.csv"
demographic = " "
biometric = "b.csv"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("demographic"));
    }
}
