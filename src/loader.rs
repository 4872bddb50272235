// CSV loading
//
// Reads one numeric column out of a CSV file with a header row.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{CliError, CliResult};

/// Load the values of one column from the CSV file at `path`.
///
/// A file with a single column is used as is. Otherwise `column` must name
/// one of the header fields.
pub fn load_column(path: &Path, column: Option<&str>) -> CliResult<Vec<f64>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CliError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => CliError::Io {
            path: path.to_path_buf(),
            details: e.to_string(),
        },
    })?;

    let data = read_column(file, column)?;

    log::info!("Loaded {} values from {}", data.len(), path.display());
    Ok(data)
}

/// Same as [`load_column`] over any reader
pub fn read_column<R: Read>(input: R, column: Option<&str>) -> CliResult<Vec<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    let index = select_column(&headers, column)?;
    let name = headers[index].clone();
    log::debug!("Using column '{}' (index {})", name, index);

    let mut data = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let cell = record.get(index).unwrap_or_default();

        let value = cell
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CliError::InvalidNumber {
                row: i + 1,
                column: name.clone(),
                value: cell.to_string(),
            })?;

        data.push(value);
    }

    Ok(data)
}

fn select_column(headers: &[String], column: Option<&str>) -> CliResult<usize> {
    match (headers.len(), column) {
        (0, _) => Err(CliError::NoColumns),
        // An empty file may still yield one empty header field
        (1, _) if headers[0].is_empty() => Err(CliError::NoColumns),
        (1, Some(name)) if name != headers[0] => {
            log::warn!(
                "Ignoring --column '{}': the file only has column '{}'",
                name,
                headers[0]
            );
            Ok(0)
        }
        (1, _) => Ok(0),
        (_, Some(name)) => headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| CliError::ColumnNotFound {
                column: name.to_string(),
                available: headers.to_vec(),
            }),
        (_, None) => Err(CliError::AmbiguousColumn {
            available: headers.to_vec(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(csv: &str, column: Option<&str>) -> CliResult<Vec<f64>> {
        read_column(csv.as_bytes(), column)
    }

    #[test]
    fn test_single_column_used_by_default() {
        assert_eq!(read("value\n1\n2\n3\n", None).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_single_column_ignores_other_name() {
        assert_eq!(read("value\n4\n", Some("other")).unwrap(), vec![4.0]);
    }

    #[test]
    fn test_named_column() {
        let csv = "name,age,score\nana,30,8.5\nbob,25,9\n";
        assert_eq!(read(csv, Some("score")).unwrap(), vec![8.5, 9.0]);
        assert_eq!(read(csv, Some("age")).unwrap(), vec![30.0, 25.0]);
    }

    #[test]
    fn test_missing_column_lists_available() {
        let err = read("a,b\n1,2\n", Some("c")).unwrap_err();
        match err {
            CliError::ColumnNotFound { column, available } => {
                assert_eq!(column, "c");
                assert_eq!(available, vec!["a".to_string(), "b".to_string()]);
            }
            other => panic!("Expected ColumnNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_ambiguous_without_column() {
        assert!(matches!(
            read("a,b\n1,2\n", None),
            Err(CliError::AmbiguousColumn { .. })
        ));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(read(" x \n 1.5 \n-2\n", Some("x")).unwrap(), vec![1.5, -2.0]);
    }

    #[test]
    fn test_header_only_gives_empty_data() {
        assert_eq!(read("value\n", None).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_empty_input_has_no_columns() {
        assert!(matches!(read("", None), Err(CliError::NoColumns)));
    }

    #[test]
    fn test_non_numeric_cell() {
        let err = read("value\n1\nabc\n", None).unwrap_err();
        match err {
            CliError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "value");
                assert_eq!(value, "abc");
            }
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_cell_rejected() {
        assert!(matches!(
            read("a,b\n1,\n", Some("b")),
            Err(CliError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            read("value\nNaN\n", None),
            Err(CliError::InvalidNumber { .. })
        ));
        assert!(matches!(
            read("value\ninf\n", None),
            Err(CliError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_uneven_rows_are_csv_errors() {
        assert!(matches!(
            read("a,b\n1,2\n3\n", Some("a")),
            Err(CliError::Csv { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_column(Path::new("no/such/file.csv"), None).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound { .. }));
        assert_eq!(err.exit_code(), 20);
    }
}
