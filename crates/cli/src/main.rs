// janpad CLI - district-name reconciliation over UIDAI flat-file extracts

mod exit_codes;
mod pipeline;
mod reconcile;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::EXIT_SUCCESS;

#[derive(Parser)]
#[command(name = "janpad")]
#[command(about = "District-name reconciliation for UIDAI enrolment and update extracts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run reconciliation from a TOML config file
    #[command(after_help = "\
Examples:
  janpad reconcile run.toml
  janpad reconcile run.toml --json
  janpad reconcile run.toml --output report.json")]
    Reconcile {
        /// Path to the run config file
        config: PathBuf,

        /// Output the report set as JSON to stdout instead of human summary
        #[arg(long)]
        json: bool,

        /// Write the JSON report set to file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate a run config and its registry without matching
    #[command(after_help = "\
Examples:
  janpad validate run.toml")]
    Validate {
        /// Path to the run config file
        config: PathBuf,
    },

    /// Resolve a single (state, district) pair against a registry
    #[command(after_help = "\
Examples:
  janpad match MAHARASHTRA PUNE --registry districts.csv
  janpad match GUJARAT AHMDABAD --registry districts.csv --json
  janpad match 'UTTAR PRADESH' ALLAHABAD --registry districts.csv --threshold 85")]
    Match {
        /// State as it appears in the data
        state: String,

        /// District as it appears in the data
        district: String,

        /// Official registry CSV (state,district)
        #[arg(long)]
        registry: PathBuf,

        /// Fuzzy acceptance threshold (0-100, default 90)
        #[arg(long)]
        threshold: Option<u8>,

        /// Output the resolution as JSON to stdout
        #[arg(long)]
        json: bool,
    },

    /// Standardize, aggregate, merge, risk-flag, and build dashboard data
    #[command(after_help = "\
Examples:
  janpad pipeline pipeline.toml
  janpad pipeline pipeline.toml --json")]
    Pipeline {
        /// Path to the pipeline config file
        config: PathBuf,

        /// Output the pipeline summary as JSON to stdout
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Reconcile { config, json, output } => {
            reconcile::cmd_reconcile(config, json, output)
        }
        Commands::Validate { config } => reconcile::cmd_validate(config),
        Commands::Match { state, district, registry, threshold, json } => {
            reconcile::cmd_match(&state, &district, registry, threshold, json)
        }
        Commands::Pipeline { config, json } => pipeline::cmd_pipeline(config, json),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
