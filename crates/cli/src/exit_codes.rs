//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Codes
//!
//! | Code | Domain    | Description                                  |
//! |------|-----------|----------------------------------------------|
//! | 0    | Universal | Success                                      |
//! | 1    | Universal | General error (unspecified)                  |
//! | 2    | Universal | CLI usage error (bad args, bad option value) |
//! | 3    | Config    | Config failed to parse or validate           |
//! | 4    | Schema    | Required column missing from an input file   |
//! | 5    | Runtime   | File I/O or data failure during the run      |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant and document what triggers it
//! 2. Update the table above
//! 3. Wire it into the relevant command's error handling

use janpad_pipeline::PipelineError;
use janpad_recon::ReconError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, out-of-range option values.
pub const EXIT_USAGE: u8 = 2;

/// Config file failed to parse or validate.
pub const EXIT_INVALID_CONFIG: u8 = 3;

/// Input file is missing a required column.
pub const EXIT_SCHEMA: u8 = 4;

/// Runtime failure: unreadable file, unusable registry, write error.
pub const EXIT_RUNTIME: u8 = 5;

/// Map a ReconError to its exit code.
pub fn recon_exit_code(err: &ReconError) -> u8 {
    match err {
        ReconError::ConfigParse(_) | ReconError::ConfigValidation(_) => EXIT_INVALID_CONFIG,
        ReconError::MissingColumn { .. } => EXIT_SCHEMA,
        ReconError::EmptyRegistry | ReconError::Io(_) => EXIT_RUNTIME,
    }
}

/// Map a PipelineError to its exit code.
pub fn pipeline_exit_code(err: &PipelineError) -> u8 {
    match err {
        PipelineError::Recon(e) => recon_exit_code(e),
        PipelineError::Io(_) => EXIT_RUNTIME,
    }
}
