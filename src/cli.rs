use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

/// Statistics, normalization and matrix operations from the command line.
#[derive(Parser, Debug, Clone)]
#[command(name = "statcalc", version, long_about = None)]
pub struct Cli {
    #[clap(flatten)]
    pub global_opts: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Debug, Args, Copy)]
pub struct GlobalOpts {
    /// Enable debug logging. Overrides `--log-level` when it is quieter.
    #[arg(global = true, long, default_value_t = false)]
    pub debug: bool,

    /// Minimum level of log messages written to stderr.
    #[arg(global = true, long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,

    /// Disable colored output.
    #[arg(global = true, long, default_value_t = false)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Descriptive statistics of one CSV column.
    Stats(StatsArgs),

    /// Rescale one CSV column.
    Normalize(NormalizeArgs),

    /// Matrix operations on literals like "[[1, 2], [3, 4]]".
    #[command(subcommand)]
    Matrix(MatrixCommand),
}

/// Where the numbers come from
#[derive(Args, Debug, Clone)]
pub struct ColumnArgs {
    /// CSV file with a header row.
    pub file: PathBuf,

    /// Column to use. Required when the file has more than one column.
    #[arg(short, long)]
    pub column: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[arg(value_enum)]
    pub statistic: Statistic,

    #[command(flatten)]
    pub input: ColumnArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Mean,
    Median,
    Mode,
    Variance,
    StdDev,
    /// All of the above, plus count, min and max
    Describe,
}

#[derive(Args, Debug, Clone)]
pub struct NormalizeArgs {
    #[arg(value_enum)]
    pub method: Method,

    #[command(flatten)]
    pub input: ColumnArgs,

    /// How many normalized values to print.
    #[arg(long, default_value_t = 5)]
    pub preview: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Rescale into [0, 1]
    MinMax,
    /// Rescale to mean 0, standard deviation 1
    ZScore,
}

#[derive(Subcommand, Debug, Clone)]
pub enum MatrixCommand {
    /// Transpose a matrix (rows become columns).
    Transpose {
        /// Example: "[[1, 2], [3, 4]]"
        matrix: String,
    },

    /// Matrix product A x B. Columns of A must match rows of B.
    Dot {
        /// First matrix, e.g. "[[1, 2]]"
        matrix_a: String,
        /// Second matrix, e.g. "[[1], [2]]"
        matrix_b: String,
    },
}
