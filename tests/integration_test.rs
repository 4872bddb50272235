// Integration tests for the statcalc binary
// Runs the built executable against the CSV files in tests/fixtures and
// checks stdout, stderr and the exit code.

use std::process::Command;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Run statcalc and return (stdout, stderr, exit_code)
fn run_statcalc(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_statcalc"))
        .arg("--no-color")
        .args(args)
        .output()
        .expect("Failed to execute statcalc");

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Test helper: assert successful execution with exact output
fn assert_success(args: &[&str], expected_stdout: &str) {
    let (stdout, stderr, exit_code) = run_statcalc(args);

    assert_eq!(
        exit_code, 0,
        "\n❌ Expected success but got exit code {}\nStdout: {}\nStderr: {}",
        exit_code, stdout, stderr
    );

    assert_eq!(
        stdout, expected_stdout,
        "\n❌ Output mismatch for {:?}\nExpected:\n{}\nGot:\n{}",
        args, expected_stdout, stdout
    );
}

/// Test helper: assert failure with a given exit code and a message on stderr
fn assert_failure(args: &[&str], expected_exit_code: i32, expected_stderr: &str) {
    let (stdout, stderr, exit_code) = run_statcalc(args);

    assert_eq!(
        exit_code, expected_exit_code,
        "\n❌ Exit code mismatch for {:?}\nExpected: {}\nGot: {}\nStdout: {}\nStderr: {}",
        args, expected_exit_code, exit_code, stdout, stderr
    );

    assert!(
        stderr.contains(expected_stderr),
        "\n❌ Stderr mismatch for {:?}\nExpected to contain: {}\nStderr: {}",
        args, expected_stderr, stderr
    );

    assert!(stdout.is_empty(), "Failed command printed a result: {}", stdout);
}

// ==========================================
// STATISTICS
// ==========================================

#[test]
fn test_mean() {
    assert_success(&["stats", "mean", &fixture("single_column.csv")], "Mean: 3.0000");
}

#[test]
fn test_median_even_count() {
    assert_success(
        &["stats", "median", &fixture("people.csv"), "--column", "age"],
        "Median: 27.5000",
    );
}

#[test]
fn test_mode() {
    assert_success(
        &["stats", "mode", &fixture("people.csv"), "-c", "age"],
        "Mode: [25.0000]",
    );
}

#[test]
fn test_variance_and_std_dev() {
    assert_success(
        &["stats", "variance", &fixture("people.csv"), "-c", "age"],
        "Variance: 42.6875",
    );
    assert_success(
        &["stats", "std-dev", &fixture("people.csv"), "-c", "age"],
        "Std Dev: 6.5336",
    );
}

#[test]
fn test_describe() {
    assert_success(
        &["stats", "describe", &fixture("single_column.csv")],
        "Count: 5\n\
         Mean: 3.0000\n\
         Median: 3.0000\n\
         Mode: [1.0000, 2.0000, 3.0000, 4.0000, 5.0000]\n\
         Variance: 2.0000\n\
         Std Dev: 1.4142\n\
         Min: 1.0000\n\
         Max: 5.0000",
    );
}

// ==========================================
// NORMALIZATION
// ==========================================

#[test]
fn test_normalize_min_max_preview() {
    assert_success(
        &["normalize", "min-max", &fixture("range.csv")],
        "Normalized (min-max), 11 values:\n\
         [0.0000, 0.1000, 0.2000, 0.3000, 0.4000] ... (6 more)",
    );
}

#[test]
fn test_normalize_custom_preview() {
    assert_success(
        &["normalize", "min-max", &fixture("range.csv"), "--preview", "2"],
        "Normalized (min-max), 11 values:\n[0.0000, 0.1000] ... (9 more)",
    );
}

#[test]
fn test_normalize_z_score_constant_column() {
    assert_success(
        &["normalize", "z-score", &fixture("constant.csv")],
        "Normalized (z-score), 3 values:\n[0.0000, 0.0000, 0.0000]",
    );
}

// ==========================================
// MATRICES
// ==========================================

#[test]
fn test_transpose() {
    assert_success(
        &["matrix", "transpose", "[[1, 2, 3], [4, 5, 6]]"],
        "🔄 Transposed Matrix:\n[1.0, 4.0]\n[2.0, 5.0]\n[3.0, 6.0]",
    );
}

#[test]
fn test_dot_with_identity() {
    assert_success(
        &["matrix", "dot", "[[1, 2], [3, 4]]", "[[1, 0], [0, 1]]"],
        "❌ Dot Product Result:\n[1.0, 2.0]\n[3.0, 4.0]",
    );
}

#[test]
fn test_dot_decimals_and_negatives() {
    assert_success(
        &["matrix", "dot", "[[0.5, -1]]", "[[2], [3]]"],
        "❌ Dot Product Result:\n[-2.0]",
    );
}

// ==========================================
// ERROR CASES - Non-zero exit codes
// ==========================================

#[test]
fn test_missing_file() {
    assert_failure(
        &["stats", "mean", &fixture("does_not_exist.csv")],
        20,
        "File does not exist",
    );
}

#[test]
fn test_ambiguous_column() {
    assert_failure(
        &["stats", "mean", &fixture("people.csv")],
        24,
        "File has multiple columns",
    );
}

#[test]
fn test_column_not_found() {
    assert_failure(
        &["stats", "mean", &fixture("people.csv"), "-c", "height"],
        23,
        "Column 'height' not found. Available: name, age, score",
    );
}

#[test]
fn test_non_numeric_column() {
    assert_failure(
        &["stats", "mean", &fixture("people.csv"), "-c", "name"],
        25,
        "is not a number: 'ana'",
    );
    assert_failure(
        &["stats", "mean", &fixture("not_numeric.csv")],
        25,
        "Row 2 of column 'value'",
    );
}

#[test]
fn test_empty_column() {
    assert_failure(
        &["stats", "mean", &fixture("header_only.csv")],
        10,
        "Cannot calculate mean of empty list",
    );
}

#[test]
fn test_shape_mismatch() {
    assert_failure(
        &["matrix", "dot", "[[1, 2], [3, 4]]", "[[1, 2], [3, 4], [5, 6]]"],
        12,
        "Shape mismatch for dot product: (2, 2) vs (3, 2)",
    );
}

#[test]
fn test_empty_matrix() {
    assert_failure(
        &["matrix", "transpose", "[]"],
        11,
        "Cannot transpose an empty matrix",
    );
}

#[test]
fn test_ragged_matrix() {
    assert_failure(
        &["matrix", "transpose", "[[1, 2], [3]]"],
        13,
        "Row 2 of matrix has 1 element, expected 2",
    );
}

#[test]
fn test_malformed_matrix_literal() {
    assert_failure(&["matrix", "transpose", "[[1, 2], [3, x]]"], 30, "E001");
    assert_failure(&["matrix", "transpose", "[[1, 2]"], 30, "Invalid matrix literal");
}

#[test]
fn test_unknown_statistic_is_a_usage_error() {
    let (_, stderr, exit_code) = run_statcalc(&["stats", "average", &fixture("range.csv")]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("invalid value"), "{}", stderr);
}
