// Result formatting
//
// Everything returns a String so commands can be tested without a terminal.

use ariadne::{Color, Fmt};
use engine::stats::Summary;

/// Decimal places for scalar statistics
pub const PRECISION: usize = 4;

/// `Mean: 3.0000`
pub fn scalar(label: &str, value: f64) -> String {
    format!("{}: {:.*}", label, PRECISION, value)
}

/// `[1.0000, 2.0000]`
pub fn values(values: &[f64]) -> String {
    let items: Vec<String> = values
        .iter()
        .map(|v| format!("{:.*}", PRECISION, v))
        .collect();
    format!("[{}]", items.join(", "))
}

/// The first `limit` values, followed by how many were left out
pub fn preview(data: &[f64], limit: usize) -> String {
    if data.len() <= limit {
        return values(data);
    }
    format!(
        "{} ... ({} more)",
        values(&data[..limit]),
        data.len() - limit
    )
}

/// One matrix row, printed like a list literal: `[1.0, 4.0]`
pub fn row(row: &[f64]) -> String {
    let items: Vec<String> = row.iter().map(|v| format!("{:?}", v)).collect();
    format!("[{}]", items.join(", "))
}

/// Title line followed by one line per row
pub fn matrix(title: &str, matrix: &[Vec<f64>]) -> String {
    let mut lines = vec![title.to_string()];
    lines.extend(matrix.iter().map(|r| row(r)));
    lines.join("\n")
}

/// Every statistic of a summary, one per line
pub fn summary(summary: &Summary) -> String {
    [
        format!("Count: {}", summary.count),
        scalar("Mean", summary.mean),
        scalar("Median", summary.median),
        format!("Mode: {}", values(&summary.mode)),
        scalar("Variance", summary.variance),
        scalar("Std Dev", summary.std_dev),
        scalar("Min", summary.min),
        scalar("Max", summary.max),
    ]
    .join("\n")
}

/// Error message for the terminal, red unless colors are off
pub fn error(message: &str, color: bool) -> String {
    let text = format!("Error: {}", message);
    if color {
        text.fg(Color::Red).to_string()
    } else {
        text
    }
}
