// Conversion from a parsed literal to a matrix
//
// Only the structure is checked here (a list of lists of numbers).
// Rectangularity is left to the engine, which owns that error.

use crate::ast::{Node, NodeKind};
use crate::error::ParseError;
use crate::parser::parse_literal;
use chumsky::error::Simple;

/// Parse text like `[[1, 2], [3, 4]]` into rows of numbers
pub fn parse_matrix(source: &str) -> Result<Vec<Vec<f64>>, Vec<ParseError>> {
    let node = parse_literal(source)?;
    to_matrix(&node)
}

/// Convert a literal tree into rows, collecting one error per bad node
pub fn to_matrix(node: &Node) -> Result<Vec<Vec<f64>>, Vec<ParseError>> {
    let rows = match &node.kind {
        NodeKind::List(rows) => rows,
        NodeKind::Number(_) => {
            return Err(vec![Simple::custom(
                node.span.clone(),
                "expected a matrix like [[1, 2], [3, 4]], found a number",
            )]);
        }
    };

    let mut matrix = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    for row in rows {
        match &row.kind {
            NodeKind::List(cells) => {
                let mut values = Vec::with_capacity(cells.len());
                for cell in cells {
                    match cell.kind {
                        NodeKind::Number(n) => values.push(n),
                        NodeKind::List(_) => errors.push(Simple::custom(
                            cell.span.clone(),
                            format!("expected a number, found {}", cell.describe()),
                        )),
                    }
                }
                matrix.push(values);
            }
            NodeKind::Number(_) => errors.push(Simple::custom(
                row.span.clone(),
                format!("expected a row (list of numbers), found {}", row.describe()),
            )),
        }
    }

    if errors.is_empty() {
        Ok(matrix)
    } else {
        Err(errors)
    }
}
