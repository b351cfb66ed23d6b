use std::fmt;

use janpad_recon::ReconError;

#[derive(Debug)]
pub enum PipelineError {
    /// Table/schema error surfaced by the recon boundary.
    Recon(ReconError),
    /// IO error (file read/write).
    Io(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recon(e) => write!(f, "{e}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<ReconError> for PipelineError {
    fn from(e: ReconError) -> Self {
        Self::Recon(e)
    }
}
