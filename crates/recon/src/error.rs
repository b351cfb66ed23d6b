use std::fmt;

#[derive(Debug)]
pub enum ReconError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (missing dataset, bad regex, etc.).
    ConfigValidation(String),
    /// Registry file had zero usable rows. No matching is possible.
    EmptyRegistry,
    /// Neither column alias for a required field was found in a file's header.
    MissingColumn {
        file: String,
        field: String,
        tried: Vec<String>,
    },
    /// IO error (file read, CSV decode, etc.).
    Io(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::EmptyRegistry => write!(f, "district registry is empty"),
            Self::MissingColumn { file, field, tried } => {
                write!(
                    f,
                    "file '{file}': no {field} column (tried: {})",
                    tried.join(", ")
                )
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {}

impl From<std::io::Error> for ReconError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<csv::Error> for ReconError {
    fn from(e: csv::Error) -> Self {
        Self::Io(e.to_string())
    }
}
