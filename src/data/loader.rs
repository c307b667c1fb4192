//! Fitness log reader.

use super::FitnessMatrix;
use crate::error::{EvoplotError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// File name the external GA run writes its fitness log to.
pub const DEFAULT_INPUT: &str = "pop10_gen500.txt";

/// Number of generations loaded when no explicit limit is given.
pub const DEFAULT_MAX_ROWS: usize = 25;

/// Read a fitness log into a matrix.
///
/// One generation per line, values split on ASCII whitespace. Blank lines
/// and `#` comments are skipped and do not count toward `max_rows`; lines
/// past the limit are never parsed. Every data row must have the same
/// number of columns.
pub fn load_matrix(path: &Path, max_rows: usize) -> Result<FitnessMatrix> {
    let file = File::open(path).map_err(|e| EvoplotError::file_open(path.to_path_buf(), e))?;
    let reader = BufReader::new(file);

    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(max_rows.min(1024));
    let mut columns: Option<usize> = None;

    for (index, line) in reader.lines().enumerate() {
        if rows.len() >= max_rows {
            break;
        }
        let line = line?;
        let data = match line.find('#') {
            Some(pos) => line[..pos].trim(),
            None => line.trim(),
        };
        if data.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for token in data.split_whitespace() {
            let value: f64 = token
                .parse()
                .map_err(|_| EvoplotError::parse(path.to_path_buf(), index + 1, token))?;
            row.push(value);
        }

        match columns {
            None => columns = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(EvoplotError::ColumnMismatch {
                    path: path.to_path_buf(),
                    line: index + 1,
                    expected,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }

        rows.push(row);
    }

    tracing::debug!(
        generations = rows.len(),
        individuals = columns.unwrap_or(0),
        "fitness log loaded"
    );

    FitnessMatrix::from_rows(path.to_path_buf(), rows)
}
