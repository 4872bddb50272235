// Error handling for the command-line layer
//
// Loading and parsing failures live here; computation failures come from the
// engine and are wrapped so main.rs has a single type to report.

use std::fmt;
use std::path::PathBuf;

use engine::EngineError;
use parser::error::ParseError;

/// CLI error types
#[derive(Debug, Clone)]
pub enum CliError {
    /// The CSV file does not exist
    FileNotFound { path: PathBuf },

    /// The CSV file exists but could not be read
    Io { path: PathBuf, details: String },

    /// The CSV file has no header row
    NoColumns,

    /// `--column` names a column the file does not have
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    /// Several columns and no `--column` to pick one
    AmbiguousColumn { available: Vec<String> },

    /// A cell in the selected column is not a finite number
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    /// Malformed CSV (e.g. rows of different lengths)
    Csv { details: String },

    /// The matrix literal could not be parsed
    Parse {
        label: String,
        source: String,
        errors: Vec<ParseError>,
    },

    /// The computation itself failed
    Engine(EngineError),

    /// The logger could not be installed
    Logger(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound { path } => {
                write!(f, "File does not exist: {}", path.display())
            }
            CliError::Io { path, details } => {
                write!(f, "Could not read {}: {}", path.display(), details)
            }
            CliError::NoColumns => write!(f, "File has no columns"),
            CliError::ColumnNotFound { column, available } => {
                write!(
                    f,
                    "Column '{}' not found. Available: {}",
                    column,
                    available.join(", ")
                )
            }
            CliError::AmbiguousColumn { available } => {
                write!(
                    f,
                    "File has multiple columns. Please specify which one to use with --column ({})",
                    available.join(", ")
                )
            }
            CliError::InvalidNumber { row, column, value } => {
                write!(
                    f,
                    "Row {} of column '{}' is not a number: '{}'",
                    row, column, value
                )
            }
            CliError::Csv { details } => write!(f, "Invalid CSV: {}", details),
            CliError::Parse { label, errors, .. } => {
                write!(
                    f,
                    "Could not parse {} ({} error{})",
                    label,
                    errors.len(),
                    if errors.len() == 1 { "" } else { "s" }
                )
            }
            CliError::Engine(err) => write!(f, "{}", err),
            CliError::Logger(details) => write!(f, "Could not start logger: {}", details),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Engine(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EngineError> for CliError {
    fn from(err: EngineError) -> Self {
        CliError::Engine(err)
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        CliError::Csv {
            details: err.to_string(),
        }
    }
}

impl CliError {
    /// Get the exit code for this error type
    /// Engine errors keep their own codes
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::FileNotFound { .. } => 20,
            CliError::Io { .. } => 21,
            CliError::NoColumns => 22,
            CliError::ColumnNotFound { .. } => 23,
            CliError::AmbiguousColumn { .. } => 24,
            CliError::InvalidNumber { .. } => 25,
            CliError::Csv { .. } => 26,
            CliError::Parse { .. } => 30,
            CliError::Engine(err) => err.exit_code(),
            CliError::Logger(_) => 40,
        }
    }
}

/// Convenient Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
