// Command dispatch
//
// Each command loads or parses its input, calls the engine, and returns the
// text to print. Nothing here writes to stdout.

use engine::matrix::{self, Matrix};
use engine::stats;

use crate::cli::{Commands, MatrixCommand, Method, NormalizeArgs, Statistic, StatsArgs};
use crate::error::{CliError, CliResult};
use crate::{loader, output};

/// Run one command and return its output
pub fn execute(command: &Commands) -> CliResult<String> {
    match command {
        Commands::Stats(args) => run_stats(args),
        Commands::Normalize(args) => run_normalize(args),
        Commands::Matrix(cmd) => run_matrix(cmd),
    }
}

fn run_stats(args: &StatsArgs) -> CliResult<String> {
    let data = loader::load_column(&args.input.file, args.input.column.as_deref())?;
    log::debug!("Computing {:?} over {} values", args.statistic, data.len());

    let text = match args.statistic {
        Statistic::Mean => output::scalar("Mean", stats::mean(&data)?),
        Statistic::Median => output::scalar("Median", stats::median(&data)?),
        Statistic::Mode => format!("Mode: {}", output::values(&stats::mode(&data)?)),
        Statistic::Variance => output::scalar("Variance", stats::variance(&data)?),
        Statistic::StdDev => output::scalar("Std Dev", stats::std_dev(&data)?),
        Statistic::Describe => output::summary(&stats::summarize(&data)?),
    };

    Ok(text)
}

fn run_normalize(args: &NormalizeArgs) -> CliResult<String> {
    let data = loader::load_column(&args.input.file, args.input.column.as_deref())?;

    let (name, normalized) = match args.method {
        Method::MinMax => ("min-max", stats::normalize_min_max(&data)?),
        Method::ZScore => ("z-score", stats::normalize_z_score(&data)?),
    };
    log::debug!("Normalized {} values ({})", normalized.len(), name);

    Ok(format!(
        "Normalized ({}), {} values:\n{}",
        name,
        normalized.len(),
        output::preview(&normalized, args.preview)
    ))
}

fn run_matrix(command: &MatrixCommand) -> CliResult<String> {
    match command {
        MatrixCommand::Transpose { matrix: source } => {
            let m = parse_matrix_arg("matrix", source)?;
            let result = matrix::transpose(&m)?;
            Ok(output::matrix("🔄 Transposed Matrix:", &result))
        }
        MatrixCommand::Dot { matrix_a, matrix_b } => {
            let a = parse_matrix_arg("matrix A", matrix_a)?;
            let b = parse_matrix_arg("matrix B", matrix_b)?;
            let result = matrix::matrix_product(&a, &b)?;
            Ok(output::matrix("❌ Dot Product Result:", &result))
        }
    }
}

/// Parse a matrix literal given on the command line
fn parse_matrix_arg(label: &str, source: &str) -> CliResult<Matrix> {
    let m = parser::parse_matrix(source).map_err(|errors| CliError::Parse {
        label: label.to_string(),
        source: source.to_string(),
        errors,
    })?;

    log::debug!("Parsed {} with shape {}", label, matrix::shape(&m));
    Ok(m)
}
